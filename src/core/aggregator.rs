use crate::domain::model::{Citations, RegistryFailure, WorkRecord};
use crate::domain::ports::{CitationRegistry, WorkRegistry};
use std::time::Duration;

/// Drives the two lookups in a fixed order: pause, Crossref, then
/// OpenAlex. A Crossref failure short-circuits the whole operation; an
/// OpenAlex failure is embedded into the otherwise-complete record.
pub struct LiteratureFetcher<W: WorkRegistry, C: CitationRegistry> {
    works: W,
    citations: C,
    courtesy_delay: Duration,
}

impl<W: WorkRegistry, C: CitationRegistry> LiteratureFetcher<W, C> {
    pub fn new(works: W, citations: C, courtesy_delay: Duration) -> Self {
        Self {
            works,
            citations,
            courtesy_delay,
        }
    }

    pub async fn fetch(&self, doi: &str) -> Result<WorkRecord, RegistryFailure> {
        // 避免請求速率過快
        if !self.courtesy_delay.is_zero() {
            tracing::debug!("Courtesy delay: {:?}", self.courtesy_delay);
            tokio::time::sleep(self.courtesy_delay).await;
        }

        tracing::info!("Looking up work metadata for {}", doi);
        let metadata = self.works.lookup_work(doi).await?;
        tracing::info!(
            "Resolved \"{}\" with {} references",
            metadata.title,
            metadata.references.len()
        );

        tracing::info!("Looking up citing works for {}", doi);
        let citations = match self.citations.citing_works(doi).await {
            Ok(list) => {
                tracing::info!("Found {} citing works", list.len());
                Citations::Resolved(list)
            }
            Err(failure) => {
                tracing::warn!("Citation lookup unavailable: {}", failure.error);
                Citations::Unavailable(failure)
            }
        };

        Ok(metadata.with_citations(citations))
    }
}
