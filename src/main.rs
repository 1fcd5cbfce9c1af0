use std::sync::Arc;

use anyhow::Result;

use ytmusic_rs::model::projections;
use ytmusic_rs::{ApiConfig, MusicStore, YouTubeClient, logging};

/// Small demo driver: load the home feed, optionally run a search from
/// argv, then show what the now-playing screen would present.
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== ytmusic-rs starting ===");

    let config = ApiConfig::from_env()?;
    let client = YouTubeClient::new(&config)?;
    let store = MusicStore::new(Arc::new(client), &config);

    store.initialize().await;

    let snapshot = store.snapshot();
    if let Some(error) = &snapshot.last_error {
        tracing::warn!(error = %error, "initial load reported an error");
    }
    tracing::info!(
        trending = snapshot.trending.len(),
        popular_music = snapshot.popular_music.len(),
        "home feed loaded"
    );

    for playlist in projections::library(&snapshot) {
        println!("{}  ({} songs)", playlist.title, playlist.songs);
    }

    if let Some(query) = std::env::args().nth(1) {
        let results = store.search(&query).await;
        tracing::info!(query = %query, results = results.len(), "search complete");
        for item in projections::explore(&store.snapshot(), Default::default(), &query) {
            println!("{}  {} ({})", item.key, item.title, item.subtitle);
        }
    }

    store.select_default_item().await;
    if let Some(view) = projections::now_playing(&store.snapshot()) {
        println!(
            "Now playing: {} [{}] {}",
            view.video.title, view.duration_display, view.views_display
        );
        println!("Fallback: {}", view.watch_url);
    }

    tracing::info!("ytmusic-rs shutting down");
    Ok(())
}
