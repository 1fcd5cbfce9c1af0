//! Model module - shared state, data source access and derived views
//!
//! This module contains all the data structures and state management for
//! the client core. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (the normalized record, phases, enums)
//! - `raw`: Wire types for the data source and normalization rules
//! - `source`: The `VideoSource` trait the store is built against
//! - `youtube_client`: YouTube Data API implementation of `VideoSource`
//! - `store`: The shared client state container and its operations
//! - `projections`: Pure per-screen derivations over store snapshots
//! - `playback`: Player widget boundary and display formatting

mod raw;
mod source;
mod store;
mod types;
mod youtube_client;

pub mod playback;
pub mod projections;

// Re-export all public types for convenient access
pub use types::{
    ExploreCategory, PLACEHOLDER_THUMBNAIL_URL, SelectionPhase, UNKNOWN_CHANNEL, UNKNOWN_TITLE,
    VideoRecord, ZERO_DURATION,
};

pub use playback::PlayerState;

pub use source::VideoSource;

pub use store::{MusicStore, StoreSnapshot};

pub use youtube_client::{YouTubeClient, YouTubeClientBuilder};
