use crate::core::crossref::USER_AGENT;
use crate::domain::model::{CitationStub, RegistryFailure, UNKNOWN_TITLE};
use crate::domain::ports::{CitationRegistry, ConfigProvider};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DOI_URL_PREFIX: &str = "https://doi.org/";

/// Client for the OpenAlex works endpoint, queried with a
/// `filter=cites:{doi}` parameter.
pub struct OpenAlexClient {
    client: Client,
    endpoint: String,
}

impl OpenAlexClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.openalex_endpoint().to_string(),
        })
    }

    async fn fetch(&self, doi: &str) -> Result<Vec<CitationStub>> {
        tracing::debug!("Making OpenAlex request for cites:{}", doi);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("filter", format!("cites:{}", doi))])
            .send()
            .await?;

        tracing::debug!("OpenAlex response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let payload: OpenAlexResponse = response.json().await?;
        Ok(payload.results.into_iter().map(entry_to_stub).collect())
    }
}

#[async_trait]
impl CitationRegistry for OpenAlexClient {
    async fn citing_works(
        &self,
        doi: &str,
    ) -> std::result::Result<Vec<CitationStub>, RegistryFailure> {
        match self.fetch(doi).await {
            Ok(citations) => Ok(citations),
            Err(e) => {
                tracing::warn!("OpenAlex lookup failed for {}: {}", doi, e);
                Err(RegistryFailure::openalex(e))
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OpenAlexResponse {
    #[serde(default)]
    results: Vec<OpenAlexEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAlexEntry {
    doi: Option<String>,
    title: Option<String>,
}

fn entry_to_stub(entry: OpenAlexEntry) -> CitationStub {
    CitationStub {
        title: entry.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        doi: strip_doi_url(entry.doi),
    }
}

// OpenAlex 回傳完整的 doi.org URL；缺值或空字串視為沒有 DOI。
fn strip_doi_url(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.strip_prefix(DOI_URL_PREFIX).unwrap_or(trimmed).to_string())
}
