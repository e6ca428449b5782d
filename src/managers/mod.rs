// RedBrowser state managers
// Managers handle stateful operations; here the browsing-state store
// owning history and bookmarks.

pub mod state_store;
