//! HTTP client for the YouTube Data API
//!
//! Thin wrapper over `reqwest` that knows the endpoint shapes the core
//! uses, unwraps the `items`/`error` envelope and hands every item
//! through normalization ([`super::raw`]).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

use super::raw::{self, Envelope};
use super::source::VideoSource;
use super::types::VideoRecord;

/// Default timeout for API requests
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Category id the source assigns to music videos
const MUSIC_CATEGORY_ID: &str = "10";

/// YouTube Data API client
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl YouTubeClient {
    /// Build a client from configuration. Fails when the key or base URL
    /// is empty.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate().map_err(ApiError::InvalidRequest)?;
        Self::builder()
            .api_key(&config.api_key)
            .api_base(&config.api_base)
            .build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> YouTubeClientBuilder {
        YouTubeClientBuilder::default()
    }

    /// Issue one GET against an endpoint and unwrap the response envelope.
    ///
    /// A source-reported `error` object takes precedence over the HTTP
    /// status, since the source reports its errors as JSON bodies on
    /// non-success statuses.
    async fn get_items(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<VideoRecord>> {
        let raw_items = self.get_raw_items(endpoint, params).await?;
        Ok(raw::normalize(raw_items))
    }

    async fn get_raw_items(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<super::raw::RawVideo>> {
        let url = format!("{}/{}", self.api_base, endpoint);
        tracing::debug!(endpoint, "API request started");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                tracing::error!(endpoint, status = status.as_u16(), "API request failed");
                return Err(ApiError::Status(status.as_u16()));
            }
            Err(e) => return Err(ApiError::Json(e)),
        };

        if let Some(error) = envelope.error {
            tracing::error!(endpoint, message = %error.message, "source reported an error");
            return Err(ApiError::Source(error.message));
        }
        if !status.is_success() {
            tracing::error!(endpoint, status = status.as_u16(), "API request failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(envelope.items.unwrap_or_default())
    }

    fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(ApiError::InvalidRequest("query must not be empty".into()));
        }
        Ok(())
    }

    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ApiError::InvalidRequest("video id is required".into()));
        }
        Ok(())
    }

    fn validate_region(region: &str) -> Result<()> {
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ApiError::InvalidRequest(format!(
                "region must be a 2-letter code, got {region:?}"
            )));
        }
        Ok(())
    }

    fn validate_limit(limit: u32) -> Result<()> {
        if limit == 0 {
            return Err(ApiError::InvalidRequest("limit must be positive".into()));
        }
        Ok(())
    }

    /// Fallible inner half of [`VideoSource::fetch_related`]
    async fn related_videos(&self, id: &str, limit: u32) -> Result<Vec<VideoRecord>> {
        Self::validate_id(id)?;
        Self::validate_limit(limit)?;
        self.get_items(
            "search",
            &[
                ("part", "snippet"),
                ("relatedToVideoId", id),
                ("type", "video"),
                ("maxResults", &limit.to_string()),
            ],
        )
        .await
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<VideoRecord>> {
        Self::validate_query(query)?;
        Self::validate_limit(limit)?;
        let results = self
            .get_items(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("maxResults", &limit.to_string()),
                    ("type", "video"),
                ],
            )
            .await?;
        tracing::info!(query, results = results.len(), "search completed");
        Ok(results)
    }

    async fn fetch_trending(&self, region: &str, limit: u32) -> Result<Vec<VideoRecord>> {
        Self::validate_region(region)?;
        Self::validate_limit(limit)?;
        self.get_items(
            "videos",
            &[
                ("part", "snippet,statistics"),
                ("chart", "mostPopular"),
                ("regionCode", region),
                ("maxResults", &limit.to_string()),
            ],
        )
        .await
    }

    async fn fetch_popular_music(&self, region: &str, limit: u32) -> Result<Vec<VideoRecord>> {
        Self::validate_region(region)?;
        Self::validate_limit(limit)?;
        self.get_items(
            "videos",
            &[
                ("part", "snippet,statistics"),
                ("chart", "mostPopular"),
                ("regionCode", region),
                ("videoCategoryId", MUSIC_CATEGORY_ID),
                ("maxResults", &limit.to_string()),
            ],
        )
        .await
    }

    async fn fetch_detail(&self, id: &str) -> Result<VideoRecord> {
        Self::validate_id(id)?;
        tracing::debug!(id, "fetching video detail");
        let mut records = self
            .get_items(
                "videos",
                &[("part", "snippet,contentDetails,statistics"), ("id", id)],
            )
            .await?;
        if records.is_empty() {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(records.swap_remove(0))
    }

    async fn fetch_related(&self, id: &str, limit: u32) -> Vec<VideoRecord> {
        match self.related_videos(id, limit).await {
            Ok(videos) => videos,
            Err(e) => {
                tracing::warn!(id, error = %e, "related fetch failed, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn fetch_channel_videos(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<VideoRecord>> {
        if channel_id.is_empty() {
            return Err(ApiError::InvalidRequest("channel id is required".into()));
        }
        Self::validate_limit(limit)?;
        self.get_items(
            "search",
            &[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("order", "date"),
                ("maxResults", &limit.to_string()),
                ("type", "video"),
            ],
        )
        .await
    }
}

/// Builder for configuring a [`YouTubeClient`]
#[derive(Debug, Default)]
pub struct YouTubeClientBuilder {
    api_key: String,
    api_base: String,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl YouTubeClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a pre-built `reqwest::Client`, e.g. to share a connection pool
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<YouTubeClient> {
        if self.api_key.is_empty() {
            return Err(ApiError::InvalidRequest("api key must not be empty".into()));
        }
        if self.api_base.is_empty() {
            return Err(ApiError::InvalidRequest(
                "api base URL must not be empty".into(),
            ));
        }

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(
                    self.timeout
                        .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
                )
                .build()?,
        };

        Ok(YouTubeClient {
            client,
            api_key: self.api_key,
            // Trailing slash would double up when endpoints are appended
            api_base: self.api_base.trim_end_matches('/').to_string(),
        })
    }
}
