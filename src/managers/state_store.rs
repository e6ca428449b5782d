//! Browsing-state store for RedBrowser.
//!
//! Implements `BrowsingStateStoreTrait` — recording visits, toggling
//! bookmarks, and querying both collections, backed by two JSON files in
//! the data directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;

use crate::storage::{json_store, migrations};
use crate::types::bookmark::{Bookmark, BookmarkState};
use crate::types::errors::StorageError;
use crate::types::history::HistoryEntry;

/// Default cap on retained history entries.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

const HISTORY_FILE: &str = "history.json";
const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Trait defining the browsing-state operations the shell calls.
pub trait BrowsingStateStoreTrait {
    fn record_visit(&mut self, url: &str, title: &str) -> Result<(), StorageError>;
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> Result<BookmarkState, StorageError>;
    fn recent_history(&self, limit: usize) -> &[HistoryEntry];
    fn all_bookmarks(&self) -> &[Bookmark];
    fn is_bookmarked(&self, url: &str) -> bool;
    fn clear_history(&mut self) -> Result<(), StorageError>;
    fn clear_bookmarks(&mut self) -> Result<(), StorageError>;
    fn history_len(&self) -> usize;
}

/// History and bookmarks backed by two JSON files.
///
/// History stays sorted descending by last-visit time; bookmarks keep
/// insertion order. Single-threaded: every mutation completes its disk
/// write before returning to the caller.
pub struct BrowsingStateStore {
    history: Vec<HistoryEntry>,
    bookmarks: Vec<Bookmark>,
    history_path: PathBuf,
    bookmarks_path: PathBuf,
    history_limit: usize,
}

impl BrowsingStateStore {
    /// Opens the store rooted at `data_dir`.
    ///
    /// Never fails: a missing file yields an empty collection, and an
    /// unreadable or malformed one is moved to a timestamped backup
    /// before the collection starts empty. No file is created until the
    /// first write.
    pub fn open(data_dir: &Path, history_limit: usize) -> Self {
        let history_path = data_dir.join(HISTORY_FILE);
        let bookmarks_path = data_dir.join(BOOKMARKS_FILE);

        let mut history = json_store::read_or_backup(&history_path)
            .map(migrations::decode_history)
            .unwrap_or_default();
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        history.truncate(history_limit);

        let bookmarks = json_store::read_or_backup(&bookmarks_path)
            .map(migrations::decode_bookmarks)
            .unwrap_or_default();

        log::info!(
            "opened browsing state: {} history entries, {} bookmarks",
            history.len(),
            bookmarks.len()
        );

        Self {
            history,
            bookmarks,
            history_path,
            bookmarks_path,
            history_limit,
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Ensures the URL carries a scheme, prefixing `https://` when none
    /// is recognized. Beyond scheme-prefixing the string is kept exactly
    /// as given, since entries are keyed by exact match.
    pub fn normalize_url(url: &str) -> String {
        if Url::parse(url).is_ok() {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    fn persist_history(&self) -> Result<(), StorageError> {
        json_store::write_atomic(&self.history_path, &self.history)
    }

    fn persist_bookmarks(&self) -> Result<(), StorageError> {
        json_store::write_atomic(&self.bookmarks_path, &self.bookmarks)
    }
}

impl BrowsingStateStoreTrait for BrowsingStateStore {
    /// Records a page visit.
    ///
    /// Dedups by exact URL: a repeat visit increments `visit_count`,
    /// refreshes the timestamp, and adopts a non-empty new title. The
    /// collection is re-sorted, truncated to the cap, and both files are
    /// rewritten before returning. On a write failure the in-memory
    /// state is kept so the caller may retry.
    fn record_visit(&mut self, url: &str, title: &str) -> Result<(), StorageError> {
        let url = Self::normalize_url(url);
        let now = Self::now();

        let entry = match self.history.iter().position(|e| e.url == url) {
            Some(idx) => {
                let mut entry = self.history.remove(idx);
                entry.visit_count += 1;
                entry.timestamp = now;
                if !title.is_empty() {
                    entry.title = title.to_string();
                }
                entry
            }
            None => HistoryEntry {
                title: if title.is_empty() {
                    url.clone()
                } else {
                    title.to_string()
                },
                url,
                timestamp: now,
                visit_count: 1,
            },
        };

        // Front insertion keeps the fresh visit first among entries that
        // share its second-resolution timestamp; the stable sort then
        // restores descending order for the rest, and truncation drops
        // the oldest tail.
        self.history.insert(0, entry);
        self.history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.history.truncate(self.history_limit);

        self.persist_history()?;
        self.persist_bookmarks()
    }

    /// Toggles a bookmark by exact URL match.
    ///
    /// Removes and persists when present, otherwise appends `{url, title}`
    /// and persists. The returned state drives the caller's indicator.
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> Result<BookmarkState, StorageError> {
        match self.bookmarks.iter().position(|b| b.url == url) {
            Some(idx) => {
                self.bookmarks.remove(idx);
                self.persist_bookmarks()?;
                Ok(BookmarkState::Removed)
            }
            None => {
                self.bookmarks.push(Bookmark {
                    url: url.to_string(),
                    title: title.to_string(),
                });
                self.persist_bookmarks()?;
                Ok(BookmarkState::Added)
            }
        }
    }

    /// The most recent entries, newest first. Read-only view over the
    /// already-sorted collection; never more than `limit` entries.
    fn recent_history(&self, limit: usize) -> &[HistoryEntry] {
        &self.history[..limit.min(self.history.len())]
    }

    /// The full bookmark collection in insertion order.
    fn all_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    fn clear_history(&mut self) -> Result<(), StorageError> {
        self.history.clear();
        self.persist_history()
    }

    fn clear_bookmarks(&mut self) -> Result<(), StorageError> {
        self.bookmarks.clear();
        self.persist_bookmarks()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }
}
