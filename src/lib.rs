pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::aggregator::LiteratureFetcher;
pub use core::crossref::CrossrefClient;
pub use core::openalex::OpenAlexClient;
pub use domain::model::{
    CitationStub, Citations, ReferenceStub, RegistryFailure, WorkMetadata, WorkRecord,
};
pub use utils::error::{FetchError, Result};
