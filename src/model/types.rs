//! Core type definitions for the client core

use chrono::{DateTime, Utc};

/// Fallback thumbnail used when a record carries no usable thumbnail at all
pub const PLACEHOLDER_THUMBNAIL_URL: &str =
    "https://via.placeholder.com/480x360.png?text=No+Thumbnail";

/// Fallback title for records missing one
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Fallback channel name for records missing one
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Zero-length ISO-8601 duration sentinel
pub const ZERO_DURATION: &str = "PT0S";

/// Normalized representation of one remote video/track item.
///
/// Every field is populated during normalization; missing source data is
/// substituted with the fixed fallbacks above. The one hard requirement is
/// a non-empty `id`: raw items that cannot yield one are dropped before a
/// `VideoRecord` is ever built.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    /// ISO-8601 duration as reported by the source (`"PT0S"` when absent)
    pub duration: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Where the playback coordinator currently is in its selection lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Nothing selected
    #[default]
    Idle,
    /// A `select_item` call is in flight
    Loading,
    /// Detail (and related, possibly empty) committed
    Ready,
    /// The detail fetch failed; the previous selection, if any, is kept
    Failed,
}

/// Explore screen category filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExploreCategory {
    #[default]
    ForYou,
    Charts,
    New,
    Genres,
    Moods,
}

impl ExploreCategory {
    /// All categories in display order
    pub const ALL: [ExploreCategory; 5] = [
        ExploreCategory::ForYou,
        ExploreCategory::Charts,
        ExploreCategory::New,
        ExploreCategory::Genres,
        ExploreCategory::Moods,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExploreCategory::ForYou => "For You",
            ExploreCategory::Charts => "Charts",
            ExploreCategory::New => "New",
            ExploreCategory::Genres => "Genres",
            ExploreCategory::Moods => "Moods",
        }
    }
}
