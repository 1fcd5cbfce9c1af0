//! Raw wire types for the video data source and their normalization into
//! [`VideoRecord`]s.
//!
//! The source wraps every response in an envelope that carries either an
//! `items` array or an `error` object. Items are heavily optional: the id
//! comes in two shapes (a plain string for `/videos`, an object with a
//! `videoId` for `/search`), thumbnails may be partially or entirely
//! absent, and statistics arrive as decimal strings. All of that is
//! resolved here with fixed fallback values so that malformed input can
//! never crash a caller.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{
    PLACEHOLDER_THUMBNAIL_URL, UNKNOWN_CHANNEL, UNKNOWN_TITLE, VideoRecord, ZERO_DURATION,
};

/// Response wrapper: either `items` or `error`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub items: Option<Vec<RawVideo>>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// Source-reported error descriptor
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

/// One raw item from the `items` array
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVideo {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub snippet: Option<RawSnippet>,
    #[serde(default)]
    pub statistics: Option<RawStatistics>,
    #[serde(default)]
    pub content_details: Option<RawContentDetails>,
}

/// The id field: `/videos` returns a plain string, `/search` an object
/// keyed by result kind
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Plain(String),
    Compound {
        #[serde(default, rename = "videoId")]
        video_id: Option<String>,
    },
}

impl RawId {
    fn video_id(&self) -> Option<&str> {
        let id = match self {
            RawId::Plain(id) => id.as_str(),
            RawId::Compound { video_id } => video_id.as_deref()?,
        };
        if id.is_empty() { None } else { Some(id) }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<RawThumbnails>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawThumbnails {
    #[serde(default)]
    pub high: Option<RawThumbnail>,
    #[serde(default)]
    pub medium: Option<RawThumbnail>,
    #[serde(default, rename = "default")]
    pub fallback: Option<RawThumbnail>,
}

impl RawThumbnails {
    /// Resolution preference: high, then medium, then default
    fn best_url(self) -> Option<String> {
        [self.high, self.medium, self.fallback]
            .into_iter()
            .flatten()
            .find_map(|thumb| thumb.url.filter(|url| !url.is_empty()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawThumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStatistics {
    #[serde(default)]
    pub view_count: Option<Count>,
    #[serde(default)]
    pub like_count: Option<Count>,
    #[serde(default)]
    pub comment_count: Option<Count>,
}

/// Statistics come back as decimal strings; tolerate plain numbers too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Count {
    Number(u64),
    Text(String),
}

impl Count {
    fn value(&self) -> u64 {
        match self {
            Count::Number(n) => *n,
            Count::Text(s) => s.parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

impl RawVideo {
    /// Normalize one raw item.
    ///
    /// Returns `None` when no usable id is present; the item is skipped
    /// and the rest of the sequence is unaffected.
    pub(crate) fn into_record(self) -> Option<VideoRecord> {
        let id = match self.id.as_ref().and_then(RawId::video_id) {
            Some(id) => id.to_string(),
            None => {
                tracing::debug!("skipping item without a video id");
                return None;
            }
        };

        let snippet = self.snippet.unwrap_or_default();
        let statistics = self.statistics.unwrap_or_default();

        let thumbnail_url = snippet
            .thumbnails
            .and_then(RawThumbnails::best_url)
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL_URL.to_string());

        let published_at = snippet
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Some(VideoRecord {
            id,
            title: snippet.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            description: snippet.description.unwrap_or_default(),
            thumbnail_url,
            channel_title: snippet
                .channel_title
                .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string()),
            published_at,
            duration: self
                .content_details
                .and_then(|details| details.duration)
                .unwrap_or_else(|| ZERO_DURATION.to_string()),
            view_count: statistics.view_count.map(|c| c.value()).unwrap_or(0),
            like_count: statistics.like_count.map(|c| c.value()).unwrap_or(0),
            comment_count: statistics.comment_count.map(|c| c.value()).unwrap_or(0),
        })
    }
}

/// Normalize a whole `items` array, dropping id-less entries
pub(crate) fn normalize(items: Vec<RawVideo>) -> Vec<VideoRecord> {
    items.into_iter().filter_map(RawVideo::into_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_items(value: serde_json::Value) -> Vec<RawVideo> {
        let envelope: Envelope = serde_json::from_value(value).unwrap();
        envelope.items.unwrap()
    }

    #[test]
    fn missing_thumbnails_yield_placeholder() {
        let items = parse_items(json!({
            "items": [{
                "id": "abc123",
                "snippet": { "title": "A Song" }
            }]
        }));
        let records = normalize(items);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].thumbnail_url, PLACEHOLDER_THUMBNAIL_URL);
    }

    #[test]
    fn thumbnail_resolution_preference() {
        let items = parse_items(json!({
            "items": [{
                "id": "a",
                "snippet": { "thumbnails": {
                    "default": { "url": "http://img/default.jpg" },
                    "medium": { "url": "http://img/medium.jpg" },
                    "high": { "url": "http://img/high.jpg" }
                }}
            }, {
                "id": "b",
                "snippet": { "thumbnails": {
                    "default": { "url": "http://img/default.jpg" },
                    "medium": { "url": "http://img/medium.jpg" }
                }}
            }, {
                "id": "c",
                "snippet": { "thumbnails": {
                    "default": { "url": "http://img/default.jpg" }
                }}
            }]
        }));
        let records = normalize(items);
        assert_eq!(records[0].thumbnail_url, "http://img/high.jpg");
        assert_eq!(records[1].thumbnail_url, "http://img/medium.jpg");
        assert_eq!(records[2].thumbnail_url, "http://img/default.jpg");
    }

    #[test]
    fn idless_records_are_dropped() {
        let items = parse_items(json!({
            "items": [
                { "id": "keep-1", "snippet": { "title": "one" } },
                { "id": { "kind": "youtube#channel", "channelId": "UC123" } },
                { "id": "", "snippet": { "title": "empty id" } },
                { "id": { "videoId": "keep-2" } },
                { "snippet": { "title": "no id at all" } }
            ]
        }));
        let raw_len = items.len();
        let records = normalize(items);
        assert_eq!(records.len(), raw_len - 3);
        assert_eq!(records[0].id, "keep-1");
        assert_eq!(records[1].id, "keep-2");
    }

    #[test]
    fn missing_fields_use_fixed_fallbacks() {
        let items = parse_items(json!({ "items": [{ "id": "bare" }] }));
        let record = &normalize(items)[0];
        assert_eq!(record.title, UNKNOWN_TITLE);
        assert_eq!(record.channel_title, UNKNOWN_CHANNEL);
        assert_eq!(record.description, "");
        assert_eq!(record.duration, ZERO_DURATION);
        assert_eq!(record.view_count, 0);
        assert_eq!(record.like_count, 0);
        assert_eq!(record.comment_count, 0);
    }

    #[test]
    fn counts_are_coerced_from_strings_and_numbers() {
        let items = parse_items(json!({
            "items": [{
                "id": "stats",
                "statistics": {
                    "viewCount": "1234567",
                    "likeCount": 89,
                    "commentCount": "not-a-number"
                }
            }]
        }));
        let record = &normalize(items)[0];
        assert_eq!(record.view_count, 1_234_567);
        assert_eq!(record.like_count, 89);
        assert_eq!(record.comment_count, 0);
    }

    #[test]
    fn published_at_is_parsed_when_present() {
        let items = parse_items(json!({
            "items": [{
                "id": "dated",
                "snippet": { "publishedAt": "2023-06-01T12:30:00Z" }
            }]
        }));
        let record = &normalize(items)[0];
        assert_eq!(record.published_at.to_rfc3339(), "2023-06-01T12:30:00+00:00");
    }

    #[test]
    fn two_item_payload_with_one_missing_thumbnail_block() {
        // A search for "lofi" where the second item has no thumbnails at all
        let items = parse_items(json!({
            "items": [{
                "id": { "videoId": "lofi-1" },
                "snippet": {
                    "title": "lofi hip hop radio",
                    "channelTitle": "Lofi Girl",
                    "thumbnails": { "high": { "url": "http://img/lofi1.jpg" } }
                }
            }, {
                "id": { "videoId": "lofi-2" },
                "snippet": {
                    "title": "lofi beats to study to",
                    "channelTitle": "Chillhop"
                }
            }]
        }));
        let records = normalize(items);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].thumbnail_url, "http://img/lofi1.jpg");
        assert_eq!(records[1].thumbnail_url, PLACEHOLDER_THUMBNAIL_URL);
    }
}
