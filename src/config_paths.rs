//! Where wallet-ui keeps its files
//!
//! ```text
//! <base>/wallet-ui/
//!   config.yaml
//!   themes/{id}.yaml
//!   logs/wallet-ui.log.YYYY-MM-DD
//! ```
//!
//! `<base>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix/macOS and
//! `%APPDATA%` on Windows.

use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "wallet-ui";
const CONFIG_FILE: &str = "config.yaml";
const THEMES_DIR: &str = "themes";
const LOGS_DIR: &str = "logs";

/// Prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "wallet-ui.log";

fn base_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// Application directory, `None` when no home can be determined
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(THEMES_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Newest rotated log file, `None` until logging has written one
pub fn log_file() -> Option<PathBuf> {
    fs::read_dir(logs_dir()?)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        // Date suffixes order lexicographically
        .max()
}

/// Create the logs directory (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}
