use serde::{Deserialize, Serialize};

/// A record of one visited URL with last-visit time and visit count.
///
/// Entries are keyed by the exact URL string; at most one entry exists
/// per URL. `title` and `visit_count` may be absent in files written by
/// older shell versions and are backfilled on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Last-visit time, seconds since the UNIX epoch.
    pub timestamp: i64,
    #[serde(default = "default_visit_count")]
    pub visit_count: u32,
}

fn default_visit_count() -> u32 {
    1
}
