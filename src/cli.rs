//! Command-line interface for inspecting a user's keybindings
//!
//! Supports:
//! - Listing effective bindings (defaults plus user overrides)
//! - Writing the keybinding store
//! - Resolving a chord to the binding or fixed shortcut it triggers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config_paths;
use crate::keymap::{Chord, FixedBinding, GroupId, Keymap};

/// Keybinding inspector
#[derive(Parser, Debug)]
#[command(name = "chordal", version, about = "Inspect and maintain editor keybindings")]
pub struct CliArgs {
    /// Config directory holding keybindings.conf and config.yaml
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the effective bindings
    List {
        /// Only this group (file, edit, search, ..., other)
        #[arg(long, value_name = "GROUP")]
        group: Option<GroupId>,

        /// Include bindings without a chord
        #[arg(long)]
        all: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write every binding to keybindings.conf
    Save,
    /// Show what a chord such as `<Control>n` dispatches to
    Resolve {
        #[arg(value_name = "CHORD")]
        chord: String,
    },
}

/// Locations derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub preferences: PathBuf,
    pub keybindings: PathBuf,
}

impl CliArgs {
    /// Resolve config file locations, honoring `--config-dir`
    pub fn paths(&self) -> Result<Paths, String> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => config_paths::config_dir()
                .ok_or_else(|| "No config directory available".to_string())?,
        };
        Ok(Paths {
            preferences: dir.join("config.yaml"),
            keybindings: dir.join(config_paths::KEYBINDINGS_FILE),
        })
    }
}

/// One line of `list` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRow {
    pub group: String,
    pub name: String,
    pub label: String,
    /// Persisted accelerator text, empty when unbound
    pub accelerator: String,
    /// Display label, e.g. `Ctrl+Shift+N`
    pub shortcut: String,
}

/// Rows for `list`, in registry order
pub fn binding_rows(keymap: &Keymap, group: Option<GroupId>, include_unbound: bool) -> Vec<BindingRow> {
    keymap
        .iter()
        .filter(|e| group.map_or(true, |g| e.group_id == g as usize))
        .filter(|e| e.binding.is_registered())
        .filter(|e| include_unbound || !e.binding.chord.is_unbound())
        .map(|e| BindingRow {
            group: e.group.label.clone(),
            name: e.binding.name.clone(),
            label: e.binding.label.clone(),
            accelerator: e.binding.chord.to_string(),
            shortcut: e.binding.chord.label(),
        })
        .collect()
}

/// What a chord triggers outside of terminal and snippet handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Binding { group: String, name: String, label: String },
    Fixed(FixedBinding),
    Nothing,
}

pub fn resolve(keymap: &Keymap, chord: &Chord) -> Resolution {
    if let Some(hit) = keymap.find_by_chord(chord) {
        return Resolution::Binding {
            group: hit.group.label.clone(),
            name: hit.binding.name.clone(),
            label: hit.binding.label.clone(),
        };
    }
    match FixedBinding::for_chord(chord) {
        Some(fixed) => Resolution::Fixed(fixed),
        None => Resolution::Nothing,
    }
}
