use serde::{Deserialize, Serialize};

/// A saved URL/title pair, independent of visit history.
///
/// The title is captured at bookmark time and not kept in sync with
/// later page-title changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Outcome of a bookmark toggle.
///
/// Drives the caller's bookmark indicator (filled vs. outline star);
/// the store itself holds no UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    Added,
    Removed,
}
