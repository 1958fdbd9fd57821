use crate::domain::model::{
    ReferenceStub, RegistryFailure, WorkMetadata, UNKNOWN_JOURNAL, UNKNOWN_TITLE,
};
use crate::domain::ports::{ConfigProvider, WorkRegistry};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// Crossref 禮貌池：帶 mailto 的 User-Agent
pub(crate) const USER_AGENT: &str = "litfetch/0.1 (mailto:litfetch@example.com)";

/// Client for the Crossref works endpoint (`/works/{doi}`).
pub struct CrossrefClient {
    client: Client,
    endpoint: String,
}

impl CrossrefClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.crossref_endpoint().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, doi: &str) -> Result<WorkMetadata> {
        let url = format!("{}/{}", self.endpoint, doi);
        tracing::debug!("Making Crossref request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Crossref response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let payload: CrossrefResponse = response.json().await?;
        Ok(work_to_metadata(doi, payload.message))
    }
}

#[async_trait]
impl WorkRegistry for CrossrefClient {
    async fn lookup_work(&self, doi: &str) -> std::result::Result<WorkMetadata, RegistryFailure> {
        match self.fetch(doi).await {
            Ok(metadata) => Ok(metadata),
            Err(e) => {
                tracing::warn!("Crossref lookup failed for {}: {}", doi, e);
                Err(RegistryFailure::crossref(e))
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefResponse {
    #[serde(default)]
    message: CrossrefWork,
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefWork {
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    author: Vec<CrossrefAuthor>,
    published: Option<CrossrefDate>,
    #[serde(default, rename = "container-title")]
    container_title: Vec<String>,
    #[serde(default)]
    reference: Vec<CrossrefReference>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefAuthor {
    given: Option<String>,
    family: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrossrefDate {
    #[serde(default, rename = "date-parts")]
    date_parts: Vec<Vec<Option<i32>>>,
}

#[derive(Debug, Deserialize)]
struct CrossrefReference {
    #[serde(rename = "article-title")]
    article_title: Option<String>,
    #[serde(rename = "DOI")]
    doi: Option<String>,
}

// 逐欄位映射：缺值一律以固定預設補齊，不視為錯誤。
fn work_to_metadata(doi: &str, work: CrossrefWork) -> WorkMetadata {
    let title = work
        .title
        .into_iter()
        .next()
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let authors = work
        .author
        .iter()
        .map(|author| {
            format!(
                "{} {}",
                author.given.as_deref().unwrap_or(""),
                author.family.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        })
        .collect();

    let year = work
        .published
        .and_then(|published| published.date_parts.into_iter().next())
        .and_then(|parts| parts.into_iter().next())
        .flatten();

    let journal = work
        .container_title
        .into_iter()
        .next()
        .unwrap_or_else(|| UNKNOWN_JOURNAL.to_string());

    let references = work
        .reference
        .into_iter()
        .map(|reference| ReferenceStub {
            title: reference
                .article_title
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            doi: reference.doi,
        })
        .collect();

    WorkMetadata {
        title,
        doi: doi.to_string(),
        authors,
        year,
        journal,
        references,
    }
}
