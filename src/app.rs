//! App core for RedBrowser.
//!
//! Owned composition root wiring the browsing-state store, settings, and
//! the optional optimizer client. The UI shell holds one `App`, calls
//! into it from its event-dispatch thread, and renders whatever the
//! query methods return; nothing here is a global.

use std::path::PathBuf;

use crate::managers::state_store::{BrowsingStateStore, BrowsingStateStoreTrait};
use crate::platform;
use crate::services::optimizer_client::{OptimizerClient, OptimizerClientTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::bookmark::{Bookmark, BookmarkState};
use crate::types::errors::StorageError;
use crate::types::history::HistoryEntry;

pub struct App {
    pub settings_engine: SettingsEngine,
    pub store: BrowsingStateStore,
    pub optimizer: Option<OptimizerClient>,
}

impl App {
    /// Builds the app with platform-default paths.
    pub fn new() -> Self {
        Self::with_paths(None, None)
    }

    /// Builds the app with explicit paths, for tests and the demo.
    ///
    /// Settings that fail to load fall back to defaults with a warning;
    /// opening the store itself never fails. The optimizer client is
    /// constructed only when enabled in settings.
    pub fn with_paths(data_dir: Option<PathBuf>, settings_path: Option<PathBuf>) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            log::warn!("using default settings: {}", e);
        }
        let settings = settings_engine.get_settings().clone();

        let data_dir = data_dir.unwrap_or_else(platform::get_data_dir);
        let store = BrowsingStateStore::open(&data_dir, settings.history_limit);

        let optimizer = if settings.optimizer.enabled {
            match OptimizerClient::new(&settings.optimizer) {
                Ok(client) => Some(client),
                Err(e) => {
                    log::warn!("optimizer client unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            settings_engine,
            store,
            optimizer,
        }
    }

    /// Collaborator contract: the shell calls this on every successful
    /// page-load completion with the resolved URL and the reported title
    /// (empty string when the page supplied none).
    ///
    /// Records the visit, then fires a best-effort prefetch; an
    /// unreachable backend never affects the result.
    pub fn page_loaded(&mut self, url: &str, title: &str) -> Result<(), StorageError> {
        let url = BrowsingStateStore::normalize_url(url);
        let result = self.store.record_visit(&url, title);

        if let Some(optimizer) = &self.optimizer {
            if let Err(e) = optimizer.prefetch(&url) {
                log::warn!("prefetch for {} failed: {}", url, e);
            }
        }
        result
    }

    pub fn toggle_bookmark(
        &mut self,
        url: &str,
        title: &str,
    ) -> Result<BookmarkState, StorageError> {
        self.store.toggle_bookmark(url, title)
    }

    pub fn recent_history(&self, limit: usize) -> &[HistoryEntry] {
        self.store.recent_history(limit)
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.store.all_bookmarks()
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.store.is_bookmarked(url)
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.store.clear_history()
    }

    pub fn clear_bookmarks(&mut self) -> Result<(), StorageError> {
        self.store.clear_bookmarks()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
