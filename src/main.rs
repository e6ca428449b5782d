//! RedBrowser — local browsing-state core for a minimal desktop
//! web-browser shell.
//!
//! Entry point: console demo mode exercising the store, settings, and
//! the optional optimizer backend. The GUI shell and the embedded
//! rendering engine live outside this crate and call into
//! `redbrowser::app::App`.

use std::fs;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║           RedBrowser v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║       Local browsing-state core, console walkthrough     ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let demo_dir = std::env::temp_dir().join(format!("redbrowser-demo-{}", std::process::id()));

    demo_settings(&demo_dir);
    demo_history(&demo_dir);
    demo_bookmarks(&demo_dir);
    demo_persistence(&demo_dir);
    demo_optimizer();
    demo_app_core(&demo_dir);

    let _ = fs::remove_dir_all(&demo_dir);

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  RedBrowser is ready for shell integration.");
    println!("═══════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────");
}

fn demo_settings(demo_dir: &PathBuf) {
    use redbrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let path = demo_dir.join("settings.json");
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap();
    println!("  History limit: {}", settings.history_limit);
    println!("  Optimizer enabled: {}", settings.optimizer.enabled);
    println!("  Optimizer endpoint: {}", settings.optimizer.base_url);

    engine.save().unwrap();
    println!("  Persisted defaults to {}", engine.get_config_path().display());
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_history(demo_dir: &PathBuf) {
    use redbrowser::managers::state_store::{BrowsingStateStore, BrowsingStateStoreTrait};
    section("History Recording");

    let dir = demo_dir.join("history-demo");
    let mut store = BrowsingStateStore::open(&dir, 1000);

    store.record_visit("https://github.com", "GitHub").unwrap();
    store.record_visit("https://rust-lang.org", "Rust").unwrap();
    store.record_visit("https://github.com", "GitHub").unwrap(); // repeat visit
    println!("  Recorded 3 visits (2 unique URLs)");

    let recent = store.recent_history(10);
    println!(
        "  Entries: {}, most recent: {} (visit_count = {})",
        recent.len(),
        recent[0].url,
        recent[0].visit_count
    );

    store.record_visit("example.com", "Example").unwrap();
    let recent = store.recent_history(10);
    println!("  Scheme-less input normalized to: {}", recent[0].url);
    println!("  ✓ History recording OK");
    println!();
}

fn demo_bookmarks(demo_dir: &PathBuf) {
    use redbrowser::managers::state_store::{BrowsingStateStore, BrowsingStateStoreTrait};
    section("Bookmark Toggling");

    let dir = demo_dir.join("bookmarks-demo");
    let mut store = BrowsingStateStore::open(&dir, 1000);

    let state = store.toggle_bookmark("https://docs.rs", "Docs.rs").unwrap();
    println!("  Toggle 1: {:?}", state);
    println!("  Bookmarked: {}", store.is_bookmarked("https://docs.rs"));

    let state = store.toggle_bookmark("https://docs.rs", "Docs.rs").unwrap();
    println!("  Toggle 2: {:?}", state);
    println!("  Bookmarks remaining: {}", store.all_bookmarks().len());
    println!("  ✓ Bookmark toggling OK");
    println!();
}

fn demo_persistence(demo_dir: &PathBuf) {
    use redbrowser::managers::state_store::{BrowsingStateStore, BrowsingStateStoreTrait};
    section("Persistence Round-Trip");

    let dir = demo_dir.join("persist-demo");
    {
        let mut store = BrowsingStateStore::open(&dir, 1000);
        store.record_visit("https://crates.io", "crates.io").unwrap();
        store.toggle_bookmark("https://crates.io", "crates.io").unwrap();
    }

    let store = BrowsingStateStore::open(&dir, 1000);
    println!(
        "  Reloaded from disk: {} history entries, {} bookmarks",
        store.history_len(),
        store.all_bookmarks().len()
    );
    println!("  ✓ Persistence OK");
    println!();
}

fn demo_optimizer() {
    use redbrowser::services::optimizer_client::{OptimizerClient, OptimizerClientTrait};
    use redbrowser::types::settings::OptimizerSettings;
    section("Optimizer Backend (best-effort)");

    let client = OptimizerClient::new(&OptimizerSettings::default()).unwrap();
    println!("  Endpoint: {}", client.base_url());
    match client.metrics() {
        Ok(metrics) => println!("  Metrics: {}", metrics),
        Err(e) => println!("  Backend offline ({}) — browsing unaffected", e),
    }
    println!("  ✓ OptimizerClient OK");
    println!();
}

fn demo_app_core(demo_dir: &PathBuf) {
    use redbrowser::app::App;
    section("App Core (full wiring)");

    let dir = demo_dir.join("app-demo");
    let mut app = App::with_paths(Some(dir.clone()), Some(dir.join("settings.json")));

    app.page_loaded("https://github.com", "GitHub").unwrap();
    app.toggle_bookmark("https://github.com", "GitHub").unwrap();
    println!(
        "  Page load recorded: {} entries, bookmarked = {}",
        app.recent_history(10).len(),
        app.is_bookmarked("https://github.com")
    );

    app.clear_history().unwrap();
    app.clear_bookmarks().unwrap();
    println!(
        "  Cleared: {} entries, {} bookmarks",
        app.recent_history(10).len(),
        app.bookmarks().len()
    );
    println!("  ✓ App Core OK");
}
