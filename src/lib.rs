//! RedBrowser — the local browsing-state core of a minimal desktop
//! web-browser shell.
//!
//! The embedded page-rendering engine and the UI shell are external
//! collaborators; this crate owns history and bookmark state, its JSON
//! persistence, shell settings, and the best-effort client for the
//! optional local optimizer backend.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
