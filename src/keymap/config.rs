//! Keybinding persistence: user overrides in, current chords out
//!
//! Overrides are matched by (section, binding name), never by position, so a
//! store written by an older or newer build still applies cleanly. Unknown
//! names in the store are ignored and kept when the store is rewritten.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::keyfile::{KeyFile, KeyFileError};

use super::keymap::Keymap;
use super::types::Chord;

/// Comment written at the top of a newly created store
pub const STORE_HEADER: &str = "Keybindings for chordal\n\
The format looks like \"<Control>a\" or \"<Shift><Alt>F1\".\n\
But you can also change the keys in the preferences dialog.";

/// Errors from reading or writing the keybinding store
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: KeyFileError,
    },
}

/// Read and parse the store at `path`
pub fn read_store(path: &Path) -> Result<KeyFile, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    content.parse().map_err(|source| KeymapError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite chords of `keymap` with the values found in `store`
///
/// Returns the number of bindings whose chord was taken from the store.
/// Values that fail to parse leave the binding's chord unchanged.
pub fn apply_overrides(keymap: &mut Keymap, store: &KeyFile) -> usize {
    let mut applied = 0;
    for group in keymap.groups_mut() {
        for binding in group.bindings.iter_mut() {
            if !binding.is_registered() {
                continue;
            }
            let Some(text) = store.get(&group.name, &binding.name) else {
                continue;
            };
            match text.parse::<Chord>() {
                Ok(chord) => {
                    binding.chord = chord;
                    applied += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "Ignoring keybinding {}={:?} in [{}]: {}",
                        binding.name,
                        text,
                        group.name,
                        e
                    );
                }
            }
        }
    }
    applied
}

/// Apply the user's store at `path` to `keymap`
///
/// A missing, unreadable or malformed store applies nothing.
pub fn load_overrides(keymap: &mut Keymap, path: &Path) -> usize {
    if !path.exists() {
        tracing::debug!(
            "Keybinding store not found at {}, using defaults",
            path.display()
        );
        return 0;
    }

    match read_store(path) {
        Ok(store) => apply_overrides(keymap, &store),
        Err(e) => {
            tracing::warn!("{}, using default keybindings", e);
            0
        }
    }
}

/// Write every binding's chord to the store at `path`
///
/// An existing store is updated in place so its comments and unrelated keys
/// survive. A store that does not exist yet (or cannot be parsed) is written
/// fresh with an explanatory header.
pub fn save_keybindings(keymap: &Keymap, path: &Path) -> Result<(), KeymapError> {
    let mut store = match read_store(path) {
        Ok(store) => store,
        Err(e) => {
            if path.exists() {
                tracing::warn!("{}, rewriting keybinding store", e);
            }
            let mut store = KeyFile::new();
            store.set_header_comment(STORE_HEADER);
            store
        }
    };

    for entry in keymap.iter() {
        if entry.binding.is_registered() {
            store.set(
                &entry.group.name,
                &entry.binding.name,
                &entry.binding.chord.to_string(),
            );
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| KeymapError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, store.to_string()).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved keybindings to {}", path.display());
    Ok(())
}
