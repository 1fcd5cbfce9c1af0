//! Per-screen projections: pure, synchronous derivations over a
//! [`StoreSnapshot`].
//!
//! Nothing in here mutates the store or touches the adapter; a screen
//! takes a snapshot, derives its view and renders it.

use std::collections::HashSet;

use super::playback;
use super::store::StoreSnapshot;
use super::types::{ExploreCategory, VideoRecord};

/// Cover images used by the "made for you" cards when the popular-music
/// collection cannot supply them yet
const FALLBACK_COVER_URLS: [&str; 2] = [
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4",
    "https://images.unsplash.com/photo-1459749411175-04bf5292ceea",
];

/// A small tile: one video rendered as an album-style card
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
}

impl Tile {
    fn from_record(video: &VideoRecord) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            artist: video.channel_title.clone(),
            cover_url: video.thumbnail_url.clone(),
        }
    }
}

/// A large featured card on the home screen
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub secondary_description: Option<String>,
    pub cover_url: String,
}

/// The home screen view
#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub recently_played: Vec<Tile>,
    pub made_for_you: Vec<FeaturedCard>,
    pub trending_now: Vec<Tile>,
}

/// Derive the home screen: popular music doubles as "recently played",
/// the first two popular-music covers feed the "made for you" cards, and
/// trending fills "trending now"
pub fn home(snapshot: &StoreSnapshot) -> HomeView {
    let cover = |index: usize| {
        snapshot
            .popular_music
            .get(index)
            .map(|video| video.thumbnail_url.clone())
            .unwrap_or_else(|| FALLBACK_COVER_URLS[index.min(1)].to_string())
    };

    HomeView {
        recently_played: snapshot.popular_music.iter().map(Tile::from_record).collect(),
        made_for_you: vec![
            FeaturedCard {
                id: "1".to_string(),
                title: "TRENDING".to_string(),
                subtitle: "Top Music".to_string(),
                description: "Popular on YouTube Music".to_string(),
                secondary_description: None,
                cover_url: cover(0),
            },
            FeaturedCard {
                id: "2".to_string(),
                title: "DISCOVERY".to_string(),
                subtitle: "New Releases".to_string(),
                description: "Fresh music for you".to_string(),
                secondary_description: Some("Based on trending videos".to_string()),
                cover_url: cover(1),
            },
        ],
        trending_now: snapshot.trending.iter().map(Tile::from_record).collect(),
    }
}

/// One row on the explore screen.
///
/// `key` is unique within the rendered list; `original_id` always holds
/// the raw video id for follow-up fetch-by-id actions, even when the key
/// had to be disambiguated.
#[derive(Clone, Debug, PartialEq)]
pub struct ExploreItem {
    pub key: String,
    pub original_id: String,
    pub title: String,
    pub subtitle: String,
    pub thumbnail_url: String,
}

/// Derive the explore screen list.
///
/// A non-empty search query with results takes over the whole list and
/// the category selection is ignored; otherwise the category picks the
/// source collection. "For You" (and the not-yet-wired Genres/Moods) is a
/// blend of the first three trending and first three popular-music items.
pub fn explore(
    snapshot: &StoreSnapshot,
    category: ExploreCategory,
    search_query: &str,
) -> Vec<ExploreItem> {
    let searching = !search_query.trim().is_empty() && !snapshot.search_results.is_empty();

    let videos: Vec<&VideoRecord> = if searching {
        snapshot.search_results.iter().collect()
    } else {
        match category {
            ExploreCategory::Charts => snapshot.trending.iter().collect(),
            ExploreCategory::New => snapshot.popular_music.iter().collect(),
            _ => snapshot
                .trending
                .iter()
                .take(3)
                .chain(snapshot.popular_music.iter().take(3))
                .collect(),
        }
    };

    with_unique_keys(&videos)
}

/// Assign list keys, suffixing every duplicate id with its position so
/// the rendered list never repeats a key
fn with_unique_keys(videos: &[&VideoRecord]) -> Vec<ExploreItem> {
    let mut seen = HashSet::new();
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            let key = if seen.insert(video.id.clone()) {
                video.id.clone()
            } else {
                format!("{}_{}", video.id, index)
            };
            let subtitle = if video.channel_title.is_empty() {
                format!("{} views", video.view_count)
            } else {
                video.channel_title.clone()
            };
            ExploreItem {
                key,
                original_id: video.id.clone(),
                title: video.title.clone(),
                subtitle,
                thumbnail_url: video.thumbnail_url.clone(),
            }
        })
        .collect()
}

/// A synthetic playlist on the library screen
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryPlaylist {
    pub id: String,
    pub title: String,
    pub songs: usize,
    pub cover_url: Option<String>,
    pub is_liked: bool,
    pub is_downloaded: bool,
    /// Member ids in collection order; empty for the placeholder playlists
    pub video_ids: Vec<String>,
}

/// Derive the library screen: trending grouped by channel into one
/// "{channel} Mix" playlist per distinct channel, in first-seen order.
/// Falls back to two placeholder playlists while trending is empty.
pub fn library(snapshot: &StoreSnapshot) -> Vec<LibraryPlaylist> {
    if snapshot.trending.is_empty() {
        return placeholder_playlists();
    }

    let mut groups: Vec<(&str, Vec<&VideoRecord>)> = Vec::new();
    for video in &snapshot.trending {
        match groups
            .iter_mut()
            .find(|(channel, _)| *channel == video.channel_title)
        {
            Some((_, members)) => members.push(video),
            None => groups.push((video.channel_title.as_str(), vec![video])),
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, (channel, members))| LibraryPlaylist {
            id: format!("trending-{index}"),
            title: format!("{channel} Mix"),
            songs: members.len(),
            cover_url: Some(members[0].thumbnail_url.clone()),
            is_liked: index % 2 == 0,
            is_downloaded: index % 3 == 0,
            video_ids: members.iter().map(|video| video.id.clone()).collect(),
        })
        .collect()
}

fn placeholder_playlists() -> Vec<LibraryPlaylist> {
    vec![
        LibraryPlaylist {
            id: "1".to_string(),
            title: "Summer Vibes 2023".to_string(),
            songs: 45,
            cover_url: None,
            is_liked: true,
            is_downloaded: false,
            video_ids: Vec::new(),
        },
        LibraryPlaylist {
            id: "2".to_string(),
            title: "Workout Motivation".to_string(),
            songs: 32,
            cover_url: None,
            is_liked: false,
            is_downloaded: true,
            video_ids: Vec::new(),
        },
    ]
}

/// Case-insensitive title filter for the library search box
pub fn filter_playlists(playlists: Vec<LibraryPlaylist>, query: &str) -> Vec<LibraryPlaylist> {
    if query.is_empty() {
        return playlists;
    }
    let needle = query.to_lowercase();
    playlists
        .into_iter()
        .filter(|playlist| playlist.title.to_lowercase().contains(&needle))
        .collect()
}

/// The now-playing screen view: the selected video with display-ready
/// fields plus its related list
#[derive(Clone, Debug, PartialEq)]
pub struct NowPlayingView {
    pub video: VideoRecord,
    pub duration_display: String,
    pub views_display: String,
    pub watch_url: String,
    pub embed_url: String,
    pub related: Vec<Tile>,
}

/// Derive the now-playing view; `None` while nothing is selected
pub fn now_playing(snapshot: &StoreSnapshot) -> Option<NowPlayingView> {
    let video = snapshot.current_item.clone()?;
    Some(NowPlayingView {
        duration_display: playback::format_duration(&video.duration),
        views_display: playback::format_view_count(video.view_count),
        watch_url: playback::watch_url(&video.id),
        embed_url: playback::embed_url(&video.id),
        related: snapshot.related.iter().map(Tile::from_record).collect(),
        video,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, channel: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: format!("title-{id}"),
            description: String::new(),
            thumbnail_url: format!("http://img/{id}.jpg"),
            channel_title: channel.to_string(),
            published_at: Utc::now(),
            duration: "PT3M".to_string(),
            view_count: 42,
            like_count: 0,
            comment_count: 0,
        }
    }

    fn snapshot_with(trending: Vec<VideoRecord>, popular: Vec<VideoRecord>) -> StoreSnapshot {
        StoreSnapshot {
            trending,
            popular_music: popular,
            ..Default::default()
        }
    }

    #[test]
    fn library_groups_by_channel_in_first_seen_order() {
        let snapshot = snapshot_with(
            vec![record("v1", "A"), record("v2", "A"), record("v3", "B")],
            vec![],
        );
        let playlists = library(&snapshot);
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].title, "A Mix");
        assert_eq!(playlists[0].songs, 2);
        assert_eq!(playlists[0].cover_url.as_deref(), Some("http://img/v1.jpg"));
        assert_eq!(playlists[1].title, "B Mix");
        assert_eq!(playlists[1].songs, 1);
    }

    #[test]
    fn library_falls_back_to_placeholders() {
        let playlists = library(&StoreSnapshot::default());
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].title, "Summer Vibes 2023");
        assert_eq!(playlists[0].songs, 45);
        assert_eq!(playlists[1].title, "Workout Motivation");
        assert_eq!(playlists[1].songs, 32);
    }

    #[test]
    fn library_filter_matches_case_insensitively() {
        let snapshot = snapshot_with(
            vec![record("v1", "Lofi Girl"), record("v2", "Chillhop")],
            vec![],
        );
        let filtered = filter_playlists(library(&snapshot), "lofi");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Lofi Girl Mix");
    }

    #[test]
    fn explore_deduplicates_list_keys() {
        let mut snapshot = StoreSnapshot::default();
        snapshot.search_results =
            vec![record("v1", "A"), record("v1", "A"), record("v2", "B")];
        let items = explore(&snapshot, ExploreCategory::ForYou, "query");
        let keys: Vec<&str> = items.iter().map(|item| item.key.as_str()).collect();
        assert_eq!(keys, vec!["v1", "v1_1", "v2"]);
        assert_eq!(items[1].original_id, "v1");
    }

    #[test]
    fn explore_search_overrides_category() {
        let mut snapshot = snapshot_with(vec![record("t1", "A")], vec![record("p1", "B")]);
        snapshot.search_results = vec![record("s1", "C")];
        let items = explore(&snapshot, ExploreCategory::Charts, "beats");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].original_id, "s1");
    }

    #[test]
    fn explore_blank_query_uses_category() {
        let snapshot = snapshot_with(
            vec![
                record("t1", "A"),
                record("t2", "A"),
                record("t3", "A"),
                record("t4", "A"),
            ],
            vec![record("p1", "B"), record("p2", "B")],
        );

        let charts = explore(&snapshot, ExploreCategory::Charts, "");
        assert_eq!(charts.len(), 4);

        let new = explore(&snapshot, ExploreCategory::New, "");
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].original_id, "p1");

        // For You blends the first three of each
        let for_you = explore(&snapshot, ExploreCategory::ForYou, "  ");
        let ids: Vec<&str> = for_you.iter().map(|item| item.original_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "p1", "p2"]);
    }

    #[test]
    fn explore_subtitle_falls_back_to_view_count() {
        let mut snapshot = StoreSnapshot::default();
        let mut video = record("v1", "");
        video.view_count = 1000;
        snapshot.search_results = vec![video];
        let items = explore(&snapshot, ExploreCategory::ForYou, "x");
        assert_eq!(items[0].subtitle, "1000 views");
    }

    #[test]
    fn home_cards_use_popular_covers_with_fallback() {
        let snapshot = snapshot_with(vec![record("t1", "A")], vec![record("p1", "B")]);
        let view = home(&snapshot);
        assert_eq!(view.made_for_you.len(), 2);
        assert_eq!(view.made_for_you[0].cover_url, "http://img/p1.jpg");
        // Only one popular item, so the second card uses the fixed image
        assert_eq!(view.made_for_you[1].cover_url, FALLBACK_COVER_URLS[1]);
        assert_eq!(view.recently_played.len(), 1);
        assert_eq!(view.trending_now.len(), 1);
        assert_eq!(view.trending_now[0].artist, "A");
    }

    #[test]
    fn now_playing_requires_a_selection() {
        assert!(now_playing(&StoreSnapshot::default()).is_none());

        let mut snapshot = StoreSnapshot::default();
        let mut video = record("v1", "A");
        video.duration = "PT4M13S".to_string();
        video.view_count = 1_200_000;
        snapshot.current_item = Some(video);
        snapshot.related = vec![record("r1", "B")];

        let view = now_playing(&snapshot).unwrap();
        assert_eq!(view.duration_display, "4:13");
        assert_eq!(view.views_display, "1.2M views");
        assert_eq!(view.watch_url, "https://www.youtube.com/watch?v=v1");
        assert_eq!(view.related.len(), 1);
    }
}
