//! The seam between the shared store and the concrete data source.
//!
//! The store only ever talks to a `dyn VideoSource`, so tests can inject a
//! scripted fake and the production wiring injects
//! [`YouTubeClient`](super::YouTubeClient).

use async_trait::async_trait;

use crate::error::Result;

use super::types::VideoRecord;

/// Async operations a video data source must provide
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Search for videos matching a non-empty query
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<VideoRecord>>;

    /// Videos currently trending in a region
    async fn fetch_trending(&self, region: &str, limit: u32) -> Result<Vec<VideoRecord>>;

    /// Trending constrained to the music category
    async fn fetch_popular_music(&self, region: &str, limit: u32) -> Result<Vec<VideoRecord>>;

    /// Full detail for one video. Fails with
    /// [`ApiError::NotFound`](crate::error::ApiError::NotFound) when the
    /// source has no item for the id.
    async fn fetch_detail(&self, id: &str) -> Result<VideoRecord>;

    /// Videos related to the given one. Related content is supplementary:
    /// implementations swallow every failure and return an empty sequence
    /// instead of propagating.
    async fn fetch_related(&self, id: &str, limit: u32) -> Vec<VideoRecord>;

    /// Latest uploads of one channel
    async fn fetch_channel_videos(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<VideoRecord>>;
}
