//! Shared client state: the one store every screen renders from
//!
//! `MusicStore` owns the fetched collections, the current selection and
//! the loading/error flags. Screens never fetch on their own; they take a
//! [`StoreSnapshot`] and derive a projection from it. Every operation
//! follows the same lifecycle: mark loading and clear the previous error,
//! call the adapter, commit the result or record the failure, and release
//! the loading flag on every exit path.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::ApiConfig;

use super::source::VideoSource;
use super::types::{SelectionPhase, VideoRecord};

/// Everything the store owns, behind one lock so that a selection commit
/// (current item + related list) is atomic with respect to readers
#[derive(Debug, Default)]
struct StoreInner {
    trending: Vec<VideoRecord>,
    popular_music: Vec<VideoRecord>,
    search_results: Vec<VideoRecord>,
    related: Vec<VideoRecord>,
    current_item: Option<VideoRecord>,
    is_loading: bool,
    last_error: Option<String>,
    selection: SelectionPhase,
}

/// A cloned, point-in-time view of the store for projections to render
/// from
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub trending: Vec<VideoRecord>,
    pub popular_music: Vec<VideoRecord>,
    pub search_results: Vec<VideoRecord>,
    pub related: Vec<VideoRecord>,
    pub current_item: Option<VideoRecord>,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub selection: SelectionPhase,
}

/// Marks the store as loading and clears the previous error for the
/// duration of one operation. Dropping the guard releases the flag, so
/// the failure path cannot leave it stuck.
struct LoadingGuard {
    inner: Arc<Mutex<StoreInner>>,
}

impl LoadingGuard {
    fn acquire(inner: &Arc<Mutex<StoreInner>>) -> Self {
        {
            let mut state = inner.lock();
            state.is_loading = true;
            state.last_error = None;
        }
        Self {
            inner: Arc::clone(inner),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.inner.lock().is_loading = false;
    }
}

/// Shared client state container.
///
/// Constructed with an injected [`VideoSource`] so tests can substitute a
/// fake adapter. All mutation goes through the async operations below;
/// the lock is only ever held for short, non-awaiting critical sections.
pub struct MusicStore {
    source: Arc<dyn VideoSource>,
    region: String,
    limit: u32,
    inner: Arc<Mutex<StoreInner>>,
    /// Issue counter for `select_item`: a completion only commits when its
    /// sequence number is still the latest issued, so a stale selection
    /// can never overwrite a newer one
    select_seq: AtomicU64,
}

impl MusicStore {
    pub fn new(source: Arc<dyn VideoSource>, config: &ApiConfig) -> Self {
        Self {
            source,
            region: config.region.clone(),
            limit: config.max_results,
            inner: Arc::new(Mutex::new(StoreInner::default())),
            select_seq: AtomicU64::new(0),
        }
    }

    /// Populate the home-feed collections. Safe to call again at any time.
    pub async fn initialize(&self) {
        futures::join!(self.load_trending(), self.load_popular_music());
    }

    /// Replace the trending collection. On failure the previous contents
    /// are kept and `last_error` records the message.
    pub async fn load_trending(&self) {
        let _guard = LoadingGuard::acquire(&self.inner);
        match self.source.fetch_trending(&self.region, self.limit).await {
            Ok(videos) => {
                tracing::info!(count = videos.len(), "trending loaded");
                self.inner.lock().trending = videos;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load trending");
                self.inner.lock().last_error = Some(e.to_string());
            }
        }
    }

    /// Replace the popular-music collection, same contract as
    /// [`load_trending`](Self::load_trending)
    pub async fn load_popular_music(&self) {
        let _guard = LoadingGuard::acquire(&self.inner);
        match self
            .source
            .fetch_popular_music(&self.region, self.limit)
            .await
        {
            Ok(videos) => {
                tracing::info!(count = videos.len(), "popular music loaded");
                self.inner.lock().popular_music = videos;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load popular music");
                self.inner.lock().last_error = Some(e.to_string());
            }
        }
    }

    /// Search and replace `search_results`. The fetched sequence is also
    /// returned so callers can use it immediately; on failure the previous
    /// results are kept and an empty vec is returned.
    pub async fn search(&self, query: &str) -> Vec<VideoRecord> {
        let _guard = LoadingGuard::acquire(&self.inner);
        match self.source.search(query, self.limit).await {
            Ok(videos) => {
                self.inner.lock().search_results = videos.clone();
                videos
            }
            Err(e) => {
                tracing::error!(query, error = %e, "search failed");
                self.inner.lock().last_error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    /// Select a video: fetch its detail and related videos concurrently
    /// and commit both together once the pair resolves.
    ///
    /// If the detail fetch fails (not found or transport), `last_error` is
    /// set and the previous `current_item` is left untouched. If another
    /// `select_item` call was issued while this one was in flight, the
    /// stale completion is discarded without committing anything.
    pub async fn select_item(&self, id: &str) {
        if id.is_empty() {
            self.inner.lock().last_error = Some("no video id provided".to_string());
            return;
        }

        let seq = self.select_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = LoadingGuard::acquire(&self.inner);
        self.inner.lock().selection = SelectionPhase::Loading;
        tracing::debug!(id, seq, "selecting item");

        let (detail, related) = futures::join!(
            self.source.fetch_detail(id),
            self.source.fetch_related(id, self.limit),
        );

        if self.select_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(id, seq, "selection superseded, discarding result");
            return;
        }

        let mut state = self.inner.lock();
        match detail {
            Ok(video) => {
                tracing::info!(
                    id = %video.id,
                    title = %video.title,
                    related = related.len(),
                    "selection ready"
                );
                state.current_item = Some(video);
                state.related = related;
                state.selection = SelectionPhase::Ready;
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to load selected item");
                state.last_error = Some(e.to_string());
                state.selection = SelectionPhase::Failed;
            }
        }
    }

    /// When nothing is selected yet, select the first popular-music item
    /// so the now-playing screen has something to show
    pub async fn select_default_item(&self) {
        let first = {
            let state = self.inner.lock();
            if state.current_item.is_some() {
                return;
            }
            state.popular_music.first().map(|video| video.id.clone())
        };
        if let Some(id) = first {
            self.select_item(&id).await;
        }
    }

    /// Drop the current selection and its related list. Synchronous; does
    /// not touch the loading flag.
    pub fn clear_selection(&self) {
        let mut state = self.inner.lock();
        state.current_item = None;
        state.related.clear();
        state.selection = SelectionPhase::Idle;
    }

    /// Cloned view of the whole store for projections
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.inner.lock();
        StoreSnapshot {
            trending: state.trending.clone(),
            popular_music: state.popular_music.clone(),
            search_results: state.search_results.clone(),
            related: state.related.clone(),
            current_item: state.current_item.clone(),
            is_loading: state.is_loading,
            last_error: state.last_error.clone(),
            selection: state.selection,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().last_error.clone()
    }

    pub fn current_item(&self) -> Option<VideoRecord> {
        self.inner.lock().current_item.clone()
    }

    pub fn selection_phase(&self) -> SelectionPhase {
        self.inner.lock().selection
    }
}
