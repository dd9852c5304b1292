use std::sync::Arc;

use super::cache::{QueryCache, QueryKey};
use super::data::{Photo, SearchResult};
use crate::api::{FetchError, SearchClient};

/// Cache key of the wallpaper search
pub const WALLPAPERS_KEY: QueryKey = QueryKey("wallpapers");

/// Loads the wallpaper search through an injected cache
#[derive(Debug, Clone)]
pub struct WallpaperFetcher {
    client: SearchClient,
    cache: QueryCache<SearchResult>,
}

impl WallpaperFetcher {
    pub fn new(client: SearchClient, cache: QueryCache<SearchResult>) -> Self {
        Self { client, cache }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Resolve the search, hitting the network only on a cache miss
    pub async fn fetch(self) -> Result<Arc<SearchResult>, FetchError> {
        let client = self.client;
        self.cache
            .get_or_load(WALLPAPERS_KEY, || async move { client.search().await })
            .await
    }
}

/// What the screen knows about the search
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    /// Request in flight
    #[default]
    Loading,
    /// Snapshot shared by the carousel and the backdrop
    Ready(Arc<SearchResult>),
    /// Request rejected. Observably identical to `Loading`.
    Failed(FetchError),
}

impl FetchState {
    /// Apply the outcome of a fetch
    pub fn resolve(result: Result<Arc<SearchResult>, FetchError>) -> Self {
        match result {
            Ok(snapshot) => FetchState::Ready(snapshot),
            Err(err) => FetchState::Failed(err),
        }
    }

    /// True until a snapshot is available, including after a failure
    pub fn is_loading(&self) -> bool {
        !matches!(self, FetchState::Ready(_))
    }

    pub fn snapshot(&self) -> Option<&Arc<SearchResult>> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        self.snapshot()
            .map(|snapshot| snapshot.photos.as_slice())
            .unwrap_or(&[])
    }

    /// What the screen shows for this state
    pub fn screen(&self) -> Screen<'_> {
        match self {
            FetchState::Ready(snapshot) => Screen::Carousel {
                photos: snapshot.photos.as_slice(),
            },
            FetchState::Loading | FetchState::Failed(_) => Screen::Spinner,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Top-level screen content
///
/// The carousel and the backdrop are both built from `photos`, so they
/// always show the same list in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// Spinner only: no carousel, no backdrop
    Spinner,
    Carousel { photos: &'a [Photo] },
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn snapshot(count: u64) -> Arc<SearchResult> {
        let photos: Vec<Photo> = (0..count)
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "src": { "large": format!("https://example.com/{id}.jpeg") }
                }))
                .unwrap()
            })
            .collect();

        Arc::new(SearchResult {
            total_results: count,
            page: 1,
            per_page: count as u32,
            photos,
            next_page: None,
        })
    }

    #[test]
    fn test_starts_loading() {
        let state = FetchState::default();
        assert!(state.is_loading());
        assert!(state.photos().is_empty());
    }

    #[test]
    fn test_ready_exposes_snapshot() {
        let state = FetchState::resolve(Ok(snapshot(2)));
        assert!(!state.is_loading());
        assert_eq!(state.photos().len(), 2);
        assert_eq!(state.photos()[1].id, 1);
    }

    #[test]
    fn test_failure_stays_loading() {
        let state = FetchState::resolve(Err(FetchError::Status {
            status: StatusCode::BAD_GATEWAY,
        }));
        assert!(state.is_loading());
        assert!(state.snapshot().is_none());
        assert_eq!(state.error().map(FetchError::kind), Some("status"));
    }

    #[test]
    fn test_screen_while_loading_or_failed_is_spinner() {
        assert_eq!(FetchState::Loading.screen(), Screen::Spinner);

        let failed = FetchState::resolve(Err(FetchError::Unauthorized {
            status: StatusCode::UNAUTHORIZED,
        }));
        assert_eq!(failed.screen(), Screen::Spinner);
    }

    #[test]
    fn test_ready_screen_uses_snapshot_photos() {
        let shared = snapshot(3);
        let state = FetchState::resolve(Ok(Arc::clone(&shared)));

        let Screen::Carousel { photos } = state.screen() else {
            panic!("ready state must show the carousel");
        };

        // Same allocation as the snapshot, not a copy
        assert!(std::ptr::eq(photos, shared.photos.as_slice()));
        let ids: Vec<_> = photos.iter().map(|photo| photo.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
