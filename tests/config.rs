//! Configuration system tests
//!
//! Tests for config paths and dispatch preferences.

use std::fs;

use chordal::config_paths;
use chordal::Preferences;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_ends_with_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some("chordal"));
}

#[test]
fn test_config_files_live_in_config_dir() {
    let dir = config_paths::config_dir().unwrap();

    assert_eq!(config_paths::config_file().unwrap(), dir.join("config.yaml"));
    assert_eq!(
        config_paths::keybindings_file().unwrap(),
        dir.join("keybindings.conf")
    );
    assert_eq!(config_paths::logs_dir().unwrap(), dir.join("logs"));
}

#[test]
fn test_logs_dir_follows_config_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("cfg");

    let logs = config_paths::ensure_logs_dir_in(&custom).unwrap();

    assert_eq!(logs, custom.join("logs"));
    assert!(logs.is_dir());
}

// ========================================================================
// Preferences Tests
// ========================================================================

#[test]
fn test_preferences_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::load_from(&dir.path().join("config.yaml"));
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_preferences_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.yaml");
    let prefs = Preferences {
        terminal_passthrough: false,
        swap_alt_tab_order: true,
        tab_order_ltr: false,
        ..Preferences::default()
    };

    prefs.save_to(&path).unwrap();
    let loaded = Preferences::load_from(&path);

    assert_eq!(loaded, prefs);
}

#[test]
fn test_preferences_invalid_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "terminal_passthrough: [not, a, bool]\n").unwrap();

    assert_eq!(Preferences::load_from(&path), Preferences::default());
}

#[test]
fn test_preferences_ignore_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "theme: dark\ncomplete_snippets: false\n").unwrap();

    let prefs = Preferences::load_from(&path);

    assert!(!prefs.complete_snippets);
    assert!(prefs.terminal_passthrough);
}
