use serde::{Deserialize, Serialize};

/// Persisted shell settings, stored as `settings.json` in the platform
/// config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Cap on retained history entries; oldest are evicted past it.
    pub history_limit: usize,
    pub optimizer: OptimizerSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            history_limit: 1000,
            optimizer: OptimizerSettings::default(),
        }
    }
}

/// Connection settings for the optional local optimizer backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 2,
        }
    }
}
