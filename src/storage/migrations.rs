//! Migration of legacy on-disk schemas to the canonical form.
//!
//! Canonical: `history.json` is an array of entry objects and
//! `bookmarks.json` an array of bookmark objects. Earlier shell versions
//! wrote a bare array of URL strings for history and a `url -> title`
//! object for bookmarks; both are upgraded here on load and rewritten in
//! canonical form on the next save.

use serde_json::Value;

use crate::types::bookmark::Bookmark;
use crate::types::history::HistoryEntry;

/// Decodes a history file, accepting the canonical and the legacy form.
///
/// Elements that fit neither shape are dropped individually, as are
/// entries missing `url` or `timestamp`. Missing `title` and
/// `visit_count` are backfilled.
pub fn decode_history(value: Value) -> Vec<HistoryEntry> {
    let Value::Array(items) = value else {
        log::warn!("history file is not an array, starting empty");
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match item {
            // Legacy form: a bare URL string. The visit time is unknown,
            // so the entry sorts oldest and is first in line for eviction.
            Value::String(url) => entries.push(HistoryEntry {
                title: url.clone(),
                url,
                timestamp: 0,
                visit_count: 1,
            }),
            Value::Object(_) => match serde_json::from_value::<HistoryEntry>(item) {
                Ok(mut entry) => {
                    if entry.title.is_empty() {
                        entry.title = entry.url.clone();
                    }
                    entry.visit_count = entry.visit_count.max(1);
                    entries.push(entry);
                }
                Err(e) => log::warn!("dropping invalid history entry: {}", e),
            },
            other => log::warn!("dropping unexpected history element: {}", other),
        }
    }
    entries
}

/// Decodes a bookmarks file, accepting the canonical array and the
/// legacy `url -> title` map.
pub fn decode_bookmarks(value: Value) -> Vec<Bookmark> {
    match value {
        Value::Array(items) => {
            let mut bookmarks = Vec::with_capacity(items.len());
            for item in items {
                match serde_json::from_value::<Bookmark>(item) {
                    Ok(mut bookmark) => {
                        if bookmark.title.is_empty() {
                            bookmark.title = bookmark.url.clone();
                        }
                        bookmarks.push(bookmark);
                    }
                    Err(e) => log::warn!("dropping invalid bookmark: {}", e),
                }
            }
            bookmarks
        }
        Value::Object(map) => map
            .into_iter()
            .map(|(url, title)| Bookmark {
                title: title
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| url.clone()),
                url,
            })
            .collect(),
        _ => {
            log::warn!("bookmarks file is neither array nor map, starting empty");
            Vec::new()
        }
    }
}
