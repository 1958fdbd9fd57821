use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CROSSREF_ENDPOINT: &str = "https://api.crossref.org/works";
pub const DEFAULT_OPENALEX_ENDPOINT: &str = "https://api.openalex.org/works";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "litfetch")]
#[command(about = "Fetch literature metadata, references and citations for a DOI")]
pub struct CliConfig {
    /// DOI of the work to look up, e.g. 10.1038/nature12373
    pub doi: String,

    #[arg(long, default_value = DEFAULT_CROSSREF_ENDPOINT)]
    pub crossref_endpoint: String,

    #[arg(long, default_value = DEFAULT_OPENALEX_ENDPOINT)]
    pub openalex_endpoint: String,

    /// Per-request timeout for both registries, in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Pause before the first registry call, to stay under rate limits
    #[arg(long, default_value = "1000")]
    pub courtesy_delay_ms: u64,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn crossref_endpoint(&self) -> &str {
        &self.crossref_endpoint
    }

    fn openalex_endpoint(&self) -> &str {
        &self.openalex_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("doi", &self.doi)?;
        validate_url("crossref_endpoint", &self.crossref_endpoint)?;
        validate_url("openalex_endpoint", &self.openalex_endpoint)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            doi: "10.1038/nature12373".to_string(),
            crossref_endpoint: DEFAULT_CROSSREF_ENDPOINT.to_string(),
            openalex_endpoint: DEFAULT_OPENALEX_ENDPOINT.to_string(),
            timeout_secs: 10,
            courtesy_delay_ms: 1000,
            pretty: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_doi_rejected() {
        let mut config = base_config();
        config.doi = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = base_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        // 測試時需要關閉延遲
        let mut config = base_config();
        config.courtesy_delay_ms = 0;
        assert!(config.validate().is_ok());
    }
}
