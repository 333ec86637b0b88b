//! chordal - keybinding registry and dispatch engine for desktop text editors
//!
//! This crate provides the grouped shortcut registry, the `keybindings.conf`
//! persistence layer and the key event dispatcher an editor embeds behind its
//! [`keymap::EditorHost`] implementation.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keyfile;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use config::Preferences;
pub use keymap::{Chord, Command, EditorHost, Keybindings, Keymap};
