pub mod aggregator;
pub mod crossref;
pub mod openalex;

pub use crate::domain::model::{
    CitationStub, Citations, ReferenceStub, RegistryFailure, WorkMetadata, WorkRecord,
};
pub use crate::domain::ports::{CitationRegistry, ConfigProvider, WorkRegistry};
pub use crate::utils::error::Result;
