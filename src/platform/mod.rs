// RedBrowser platform paths
// Config and data directories for Linux, macOS, and Windows, selected
// with `cfg(target_os)` at compile time.

use std::path::PathBuf;

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))
}

#[cfg(target_os = "linux")]
mod imp {
    use super::*;

    /// `$XDG_CONFIG_HOME/redbrowser` or `~/.config/redbrowser`.
    pub fn config_dir() -> PathBuf {
        match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join("redbrowser"),
            Err(_) => PathBuf::from(home_dir()).join(".config").join("redbrowser"),
        }
    }

    /// `$XDG_DATA_HOME/redbrowser` or `~/.local/share/redbrowser`.
    pub fn data_dir() -> PathBuf {
        match std::env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join("redbrowser"),
            Err(_) => PathBuf::from(home_dir())
                .join(".local")
                .join("share")
                .join("redbrowser"),
        }
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use super::*;

    /// `~/Library/Application Support/RedBrowser` for both config and data.
    pub fn config_dir() -> PathBuf {
        PathBuf::from(home_dir())
            .join("Library")
            .join("Application Support")
            .join("RedBrowser")
    }

    pub fn data_dir() -> PathBuf {
        config_dir()
    }
}

#[cfg(target_os = "windows")]
mod imp {
    use std::path::PathBuf;

    /// `%APPDATA%/RedBrowser` for both config and data.
    pub fn config_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\"));
        PathBuf::from(appdata).join("RedBrowser")
    }

    pub fn data_dir() -> PathBuf {
        config_dir()
    }
}

/// Platform config directory; `settings.json` lives here.
pub fn get_config_dir() -> PathBuf {
    imp::config_dir()
}

/// Platform data directory; `history.json` and `bookmarks.json` live here.
pub fn get_data_dir() -> PathBuf {
    imp::data_dir()
}
