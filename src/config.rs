//! Preferences that influence key dispatch
//!
//! Stored in `~/.config/chordal/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Dispatch preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Let the terminal receive shortcuts while it has focus
    pub terminal_passthrough: bool,
    /// Expand snippets on the snippet completion chord
    pub complete_snippets: bool,
    /// New tabs open to the right of the current one
    pub tab_order_ltr: bool,
    /// Number Alt+digit tabs from the right when tabs open right-to-left
    pub swap_alt_tab_order: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            terminal_passthrough: true,
            complete_snippets: true,
            tab_order_ltr: true,
            swap_alt_tab_order: false,
        }
    }
}

impl Preferences {
    /// Load preferences from the config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using default preferences");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load preferences from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(prefs) => {
                    tracing::info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences to the config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save preferences to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}
