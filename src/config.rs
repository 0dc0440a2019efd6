//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/wallet-ui/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected theme id (e.g., "light", "dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Currency native amounts are shown in
    #[serde(default = "default_native_currency")]
    pub native_currency: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_native_currency() -> String {
    "USD".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            native_currency: default_native_currency(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to disk, creating the config directory if needed
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolve the configured theme, falling back to the default theme
    pub fn theme(&self) -> crate::theme::Theme {
        match crate::theme::load_theme(&self.theme) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme {:?}: {}", self.theme, e);
                crate::theme::Theme::default()
            }
        }
    }
}
