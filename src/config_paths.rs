//! Centralized configuration paths for chordal
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/chordal/`
//! - Windows: `%APPDATA%\chordal\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "chordal";

/// File name of the keybinding store
pub const KEYBINDINGS_FILE: &str = "keybindings.conf";

/// Base config directory for chordal
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/chordal`
///   - Else: `~/.config/chordal`
///
/// Windows:
///   - `%APPDATA%\chordal`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/chordal/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/chordal/keybindings.conf`
pub fn keybindings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(KEYBINDINGS_FILE))
}

/// `~/.config/chordal/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    ensure_logs_dir_in(&config)
}

/// Ensure `<config_dir>/logs` exists, returning it
pub fn ensure_logs_dir_in(config_dir: &Path) -> Result<PathBuf, String> {
    let logs = config_dir.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
