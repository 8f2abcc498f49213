//! Session-wide genre map with a one-fetch load lifecycle
//!
//! `Uninitialized -> Loading -> Ready | Failed`. The fetch runs in its own
//! task, so a caller that gives up on `load()` does not cancel it: the result
//! is still published for everyone else. Calls made while a fetch is in
//! flight wait for it and share its result. A failed load publishes an empty
//! map; only a later, separate `load()` call retries.

use super::{GenreMap, GenreMapSource};
use crate::api::ApiError;
use crate::registry::OTHER;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Upper bound on a single genre map fetch
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Lifecycle of the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
struct Published {
    state: LoadState,
    map: Arc<GenreMap>,
}

/// Owns the genre map for the session. Construct once and share via `Arc`.
pub struct GenreMapResolver {
    source: Arc<dyn GenreMapSource>,
    timeout: Duration,
    published: Arc<watch::Sender<Published>>,
}

impl GenreMapResolver {
    /// Create a resolver; nothing is fetched until the first `load()`
    pub fn new(source: impl GenreMapSource + 'static) -> Self {
        let (published, _) = watch::channel(Published {
            state: LoadState::Uninitialized,
            map: Arc::new(GenreMap::new()),
        });

        Self {
            source: Arc::new(source),
            timeout: DEFAULT_LOAD_TIMEOUT,
            published: Arc::new(published),
        }
    }

    /// Set the per-fetch timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the map, fetching at most once per call wave.
    ///
    /// Never fails: on fetch error or timeout the resolver moves to
    /// [`LoadState::Failed`] and the empty map is returned. Dropping the
    /// returned future does not cancel an in-flight fetch.
    pub async fn load(&self) -> Arc<GenreMap> {
        let mut start_fetch = false;
        self.published.send_if_modified(|published| match published.state {
            LoadState::Ready | LoadState::Loading => false,
            LoadState::Uninitialized | LoadState::Failed => {
                published.state = LoadState::Loading;
                start_fetch = true;
                true
            }
        });

        if start_fetch {
            self.spawn_fetch();
        }

        let mut updates = self.published.subscribe();
        let map = match updates.wait_for(|published| published.state != LoadState::Loading).await {
            Ok(published) => Arc::clone(&published.map),
            // The sender lives as long as `self`
            Err(_) => self.get(),
        };
        map
    }

    fn spawn_fetch(&self) {
        let source = Arc::clone(&self.source);
        let published = Arc::clone(&self.published);
        let timeout = self.timeout;

        log::info!("Loading genre map");
        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, source.fetch_raw()).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout(timeout)),
            };

            let (state, map) = match result {
                Ok(raw) => {
                    let map = GenreMap::from_raw(&raw);
                    log::info!("Genre map loaded: {} entries", map.len());
                    (LoadState::Ready, map)
                }
                Err(e) => {
                    log::warn!("Failed to load genre map, continuing with an empty map: {}", e);
                    (LoadState::Failed, GenreMap::new())
                }
            };

            published.send_modify(|published| {
                published.state = state;
                published.map = Arc::new(map);
            });
        });
    }

    /// Currently published map (empty until a load succeeds)
    pub fn get(&self) -> Arc<GenreMap> {
        Arc::clone(&self.published.borrow().map)
    }

    /// Parent meta-genre of `sub_genre`, or `"other"` when unknown or not loaded
    pub fn lookup(&self, sub_genre: &str) -> String {
        self.published
            .borrow()
            .map
            .parent_of(sub_genre)
            .unwrap_or(OTHER)
            .to_string()
    }

    pub fn state(&self) -> LoadState {
        self.published.borrow().state
    }

    pub fn is_ready(&self) -> bool {
        self.state() == LoadState::Ready
    }
}

impl std::fmt::Debug for GenreMapResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let published = self.published.borrow();
        f.debug_struct("GenreMapResolver")
            .field("state", &published.state)
            .field("entries", &published.map.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}
