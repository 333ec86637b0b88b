//! The contract between the dispatch engine and the editor that embeds it
//!
//! Only `key_context` and `execute` are required. Everything else has a
//! neutral default so a host can opt into the collaborators it actually has.

use super::command::{BuildKey, Command};
use super::context::KeyContext;

/// Direction for switching between open documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Left,
    Right,
}

/// Editor-side collaborator invoked by binding handlers
pub trait EditorHost {
    /// Focus and document state for the event being dispatched
    fn key_context(&self) -> KeyContext;

    /// Perform a command that passed its handler's guard
    fn execute(&mut self, command: Command);

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether a project is open
    fn has_project(&self) -> bool {
        false
    }

    /// Whether the toolbar search field is shown
    fn search_bar_visible(&self) -> bool {
        false
    }

    /// Number of configured "send selection to" custom commands
    fn custom_command_count(&self) -> usize {
        0
    }

    /// Whether a build action is enabled for the current file type
    fn build_action_enabled(&self, _key: BuildKey) -> bool {
        false
    }

    /// Cursor position in the current document
    fn cursor_position(&self) -> usize {
        0
    }

    /// The word under the cursor, if any
    fn current_word(&self) -> Option<String> {
        None
    }

    fn tab_count(&self) -> usize {
        0
    }

    fn current_tab(&self) -> Option<usize> {
        None
    }

    /// The previously active tab
    fn last_used_tab(&self) -> Option<usize> {
        None
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Run a current-word command (find usage, go to definition, ...) on `word`
    fn word_action(&mut self, _command: Command, _word: &str) {}

    /// Try to expand a snippet at `position`; returns whether it was consumed
    fn complete_snippet(&mut self, _command_id: usize, _position: usize) -> bool {
        false
    }

    fn insert_text(&mut self, _text: &str) {}

    /// Insert a tab the way the editor's Tab key would
    fn insert_tab(&mut self) {}

    fn switch_document(&mut self, _direction: TabDirection) {}

    fn set_current_tab(&mut self, _index: usize) {}

    /// Move the current tab to `index`
    fn move_current_tab(&mut self, _index: usize) {}

    fn beep(&mut self) {}

    /// Enable or disable the menu bar and popup menu accelerators
    fn set_menu_accelerators_enabled(&mut self, _enabled: bool) {}
}
