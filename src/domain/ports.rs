use crate::domain::model::{CitationStub, RegistryFailure, WorkMetadata};
use async_trait::async_trait;
use std::time::Duration;

/// Registry A: resolves a DOI to bibliographic metadata plus the
/// reference list. Any failure comes back as the single-field record.
#[async_trait]
pub trait WorkRegistry: Send + Sync {
    async fn lookup_work(&self, doi: &str) -> Result<WorkMetadata, RegistryFailure>;
}

/// Registry B: lists the works citing a DOI.
#[async_trait]
pub trait CitationRegistry: Send + Sync {
    async fn citing_works(&self, doi: &str) -> Result<Vec<CitationStub>, RegistryFailure>;
}

pub trait ConfigProvider: Send + Sync {
    fn crossref_endpoint(&self) -> &str;
    fn openalex_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn courtesy_delay(&self) -> Duration;
}
