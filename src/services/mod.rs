// RedBrowser services
// Services provide supporting functionality: shell settings and the
// client for the optional local optimizer backend.

pub mod optimizer_client;
pub mod settings_engine;
