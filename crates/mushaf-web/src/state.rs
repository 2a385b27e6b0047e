//! Application state shared across all request handlers.

use std::sync::Arc;

use mushaf_api::Chapter;
use tokio::sync::OnceCell;

use crate::bookmarks::BookmarkStore;
use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the quran.com API.
    pub api: mushaf_api::Client,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Chapter list, fetched from upstream once per process lifetime.
    /// Concurrent first requests coalesce into a single fetch; a failed
    /// fetch leaves the cell empty so the next request retries.
    chapters: Arc<OnceCell<Vec<Chapter>>>,

    /// Per-address verse bookmarks.
    pub bookmarks: BookmarkStore,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let api = mushaf_api::Client::new(
            &config.api_base_url,
            &config.language,
            config.translation_id,
        );

        Self {
            api,
            config: Arc::new(config),
            chapters: Arc::new(OnceCell::new()),
            bookmarks: BookmarkStore::default(),
        }
    }

    /// The chapter list, fetched from upstream on first use.
    pub async fn chapters(&self) -> mushaf_api::Result<&[Chapter]> {
        let chapters = self
            .chapters
            .get_or_try_init(|| async {
                let chapters = self.api.chapters().await?;
                tracing::info!(count = chapters.len(), "chapter list cached");
                Ok::<_, mushaf_api::Error>(chapters)
            })
            .await?;
        Ok(chapters.as_slice())
    }
}
