//! Startup configuration for the data source adapter
//!
//! Three values are consumed verbatim from the host application: the API
//! key, the API base URL, and the default result-count limit. The core
//! only checks them for non-emptiness.

use anyhow::{Context, Result};

/// Default YouTube Data API v3 base URL
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Default region code for chart queries (ISO 3166-1 alpha-2)
pub const DEFAULT_REGION: &str = "US";

/// Default result-count bound for list queries
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Configuration consumed by [`crate::model::YouTubeClient`] and
/// [`crate::model::MusicStore`]
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_base: String,
    pub max_results: u32,
    pub region: String,
}

impl ApiConfig {
    /// Build a config with the given API key and default values for
    /// everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `YTMUSIC_API_KEY` is required; `YTMUSIC_API_BASE`,
    /// `YTMUSIC_MAX_RESULTS` and `YTMUSIC_REGION` override the defaults
    /// when present.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("YTMUSIC_API_KEY")
            .context("YTMUSIC_API_KEY is not set")?;

        let mut config = Self::new(api_key);

        if let Ok(base) = std::env::var("YTMUSIC_API_BASE") {
            config.api_base = base;
        }
        if let Ok(raw) = std::env::var("YTMUSIC_MAX_RESULTS") {
            config.max_results = raw
                .parse()
                .context("YTMUSIC_MAX_RESULTS is not a positive integer")?;
        }
        if let Ok(region) = std::env::var("YTMUSIC_REGION") {
            config.region = region;
        }

        Ok(config)
    }

    /// Check the non-emptiness constraints. Returns the first violation.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }
        if self.api_base.trim().is_empty() {
            return Err("api_base must not be empty".to_string());
        }
        if self.max_results == 0 {
            return Err("max_results must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ApiConfig::new("test-key");
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.region, "US");
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let config = ApiConfig::new("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_results_is_rejected() {
        let mut config = ApiConfig::new("test-key");
        config.max_results = 0;
        assert!(config.validate().is_err());
    }
}
