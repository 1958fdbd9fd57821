use serde::{Deserialize, Serialize};

/// Placeholder used whenever an upstream record omits a title.
pub const UNKNOWN_TITLE: &str = "[Unknown Title]";

/// Placeholder used whenever Crossref omits the container title.
pub const UNKNOWN_JOURNAL: &str = "[Unknown Journal]";

/// 合併後的文獻記錄：Crossref 的基本資料加上 OpenAlex 的被引列表。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkRecord {
    pub title: String,
    pub doi: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub journal: String,
    pub references: Vec<ReferenceStub>,
    pub citations: Citations,
}

/// The Crossref half of the record, before the citation list is attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkMetadata {
    pub title: String,
    pub doi: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub journal: String,
    pub references: Vec<ReferenceStub>,
}

impl WorkMetadata {
    pub fn with_citations(self, citations: Citations) -> WorkRecord {
        WorkRecord {
            title: self.title,
            doi: self.doi,
            authors: self.authors,
            year: self.year,
            journal: self.journal,
            references: self.references,
            citations,
        }
    }
}

/// One entry of the work's reference list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceStub {
    pub title: String,
    pub doi: Option<String>,
}

/// One citing work. The DOI is null when OpenAlex carries no resolvable
/// identifier for the entry; that is a valid terminal state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitationStub {
    pub title: String,
    pub doi: Option<String>,
}

/// Citation lookup outcome embedded in the merged record: either the list
/// of citing works, or the registry failure that prevented fetching them.
/// Untagged so the JSON field holds a plain array or an `{"error": ...}`
/// object, never a wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Citations {
    Resolved(Vec<CitationStub>),
    Unavailable(RegistryFailure),
}

impl Citations {
    pub fn as_resolved(&self) -> Option<&[CitationStub]> {
        match self {
            Citations::Resolved(list) => Some(list),
            Citations::Unavailable(_) => None,
        }
    }
}

/// The single-field error record both registries produce. No error codes,
/// just a description; failure travels as data, never as a raised fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryFailure {
    pub error: String,
}

impl RegistryFailure {
    pub fn crossref(detail: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Crossref API error: {}", detail),
        }
    }

    pub fn openalex(detail: impl std::fmt::Display) -> Self {
        Self {
            error: format!("OpenAlex API error: {}", detail),
        }
    }
}
