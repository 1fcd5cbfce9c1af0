//! Data orchestration core for a YouTube-backed music-browsing client
//!
//! The crate fetches, normalizes and caches remote video data and exposes
//! it to multiple screens through one shared store with consistent
//! loading/error/empty semantics:
//!
//! - [`model::YouTubeClient`]: the data source adapter (search, trending,
//!   popular music, detail, related)
//! - [`model::MusicStore`]: the shared client state every screen renders
//!   from, constructed with an injected [`model::VideoSource`]
//! - [`model::projections`]: pure per-screen derivations over store
//!   snapshots
//! - [`model::playback`]: the playback widget boundary
//!
//! The presentation layer and the embedded player are external
//! collaborators: screens consume snapshots and projections, the player
//! receives a video id and reports [`model::PlayerState`] callbacks.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use model::{
    ExploreCategory, MusicStore, PlayerState, SelectionPhase, StoreSnapshot, VideoRecord,
    VideoSource, YouTubeClient, playback, projections,
};
