//! Key event dispatch
//!
//! `Keybindings` owns the keymap for the lifetime of the editor and routes
//! every key press through four stages, first claim wins:
//!
//! ```text
//! RawKeyEvent → Chord → terminal passthrough → snippet completion
//!                     → keymap scan → fixed tab shortcuts → unhandled
//! ```

use std::path::{Path, PathBuf};

use crate::config::Preferences;

use super::command::{Command, GroupId, TagsKey};
use super::config::{save_keybindings, KeymapError};
use super::defaults::{default_keymap, load_keymap};
use super::handler::HandlerEnv;
use super::host::EditorHost;
use super::idle::{IdleQueue, IdleTask};
use super::keymap::Keymap;
use super::types::{Chord, KeyCode, Modifiers, RawKeyEvent};

/// Non-configurable shortcuts checked after every keymap binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedBinding {
    /// Alt+digit: select a tab by position (0 selects the last tab)
    SelectTab(u8),
    /// Ctrl+Shift+PageUp
    FirstTab,
    /// Ctrl+Shift+PageDown
    LastTab,
}

impl FixedBinding {
    /// The fixed shortcut for a normalized chord, if any
    pub fn for_chord(chord: &Chord) -> Option<Self> {
        // Alt+digit ignores other modifiers; the page keys need exactly Ctrl+Shift
        if chord.mods.contains(Modifiers::ALT) {
            if let Some(d) = chord.key.digit() {
                return Some(FixedBinding::SelectTab(d as u8));
            }
        }
        if chord.mods == Modifiers::CONTROL | Modifiers::SHIFT {
            return match chord.key {
                KeyCode::PageUp => Some(FixedBinding::FirstTab),
                KeyCode::PageDown => Some(FixedBinding::LastTab),
                _ => None,
            };
        }
        None
    }

    /// Index of the tab this shortcut selects among `count` tabs
    pub fn target_tab(self, count: usize, prefs: &Preferences) -> Option<usize> {
        if count == 0 {
            return None;
        }
        match self {
            FixedBinding::SelectTab(digit) => {
                let page = match digit {
                    0 => count - 1,
                    d => usize::from(d) - 1,
                };
                let page = if prefs.swap_alt_tab_order && !prefs.tab_order_ltr {
                    (count - 1).checked_sub(page)?
                } else {
                    page
                };
                (page < count).then_some(page)
            }
            FixedBinding::FirstTab => Some(0),
            FixedBinding::LastTab => Some(count - 1),
        }
    }
}

/// How a key event was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Left for the focused terminal; menu accelerators suspended until idle
    Terminal,
    /// Consumed by snippet expansion
    Snippet,
    /// A binding's handler ran
    Binding { group_id: usize, command_id: usize },
    /// Matched a binding without a handler; consumed with no action
    Swallowed { group_id: usize, command_id: usize },
    Fixed(FixedBinding),
    /// Nothing claimed the event
    Unhandled,
}

impl Dispatch {
    /// Whether the event should be considered consumed
    pub fn is_handled(&self) -> bool {
        !matches!(self, Dispatch::Terminal | Dispatch::Unhandled)
    }
}

/// The keybinding subsystem: keymap, preferences and deferred work
#[derive(Debug)]
pub struct Keybindings {
    keymap: Keymap,
    prefs: Preferences,
    idle: IdleQueue,
    store_path: Option<PathBuf>,
}

impl Keybindings {
    /// Defaults only, with no backing store
    pub fn new(prefs: Preferences) -> Self {
        Self::with_keymap(default_keymap(), prefs)
    }

    pub fn with_keymap(keymap: Keymap, prefs: Preferences) -> Self {
        Self {
            keymap,
            prefs,
            idle: IdleQueue::new(),
            store_path: None,
        }
    }

    /// Build the default keymap and apply the user's store at `store_path`
    pub fn init(prefs: Preferences, store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();
        let keymap = load_keymap(&store_path);
        Self {
            keymap,
            prefs,
            idle: IdleQueue::new(),
            store_path: Some(store_path),
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Rebind one command, e.g. from a preferences dialog
    pub fn set_chord(&mut self, group_id: usize, command_id: usize, chord: Chord) -> bool {
        self.keymap.set_chord(group_id, command_id, chord)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn set_preferences(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Handle a key press; returns whether it was consumed
    pub fn handle_key_event(&mut self, event: RawKeyEvent, host: &mut dyn EditorHost) -> bool {
        self.dispatch(event, host).is_handled()
    }

    /// Route a key press through every dispatch stage
    pub fn dispatch(&mut self, event: RawKeyEvent, host: &mut dyn EditorHost) -> Dispatch {
        self.run_idle(host);

        if event.key == KeyCode::Unbound {
            return Dispatch::Unhandled;
        }

        let chord = Chord::from_raw(event);
        let ctx = host.key_context();

        if self.terminal_passthrough(&chord, ctx.terminal_focused()) {
            tracing::debug!(chord = %chord, "passing key to terminal");
            host.set_menu_accelerators_enabled(false);
            self.idle.schedule(IdleTask::RestoreMenuAccelerators);
            return Dispatch::Terminal;
        }

        if self.prefs.complete_snippets && ctx.editor_focused() {
            let snippet_hit = self
                .keymap
                .get(TagsKey::CompleteSnippet)
                .is_some_and(|b| b.matches(&chord));
            if snippet_hit {
                let position = host.cursor_position();
                if host.complete_snippet(TagsKey::CompleteSnippet as usize, position) {
                    tracing::debug!(chord = %chord, "snippet completed");
                    return Dispatch::Snippet;
                }
            }
        }

        if let Some(hit) = self.keymap.find_by_chord(&chord) {
            let (group_id, command_id) = (hit.group_id, hit.command_id);
            let Some(handler) = hit.binding.handler else {
                if is_snippet_slot(group_id, command_id) {
                    // declined above; let the key reach the editor
                    return Dispatch::Unhandled;
                }
                tracing::debug!(chord = %chord, name = %hit.binding.name, "swallowed by reserved binding");
                return Dispatch::Swallowed {
                    group_id,
                    command_id,
                };
            };

            tracing::debug!(chord = %chord, name = %hit.binding.name, "dispatching binding");
            match Command::from_ids(group_id, command_id) {
                Some(command) => {
                    let env = self.handler_env();
                    handler.invoke(command, &env, host);
                }
                None => tracing::warn!(group_id, command_id, "handler bound outside the default groups"),
            }
            return Dispatch::Binding {
                group_id,
                command_id,
            };
        }

        if let Some(fixed) = FixedBinding::for_chord(&chord) {
            tracing::debug!(chord = %chord, ?fixed, "fixed binding");
            if let Some(index) = fixed.target_tab(host.tab_count(), &self.prefs) {
                host.set_current_tab(index);
            }
            return Dispatch::Fixed(fixed);
        }

        tracing::trace!(chord = %chord, "no binding");
        Dispatch::Unhandled
    }

    /// Run the handler of (group id, command id) directly, bypassing chords
    ///
    /// Returns false when the ids are out of range or the binding has no handler.
    pub fn send_command(
        &mut self,
        group_id: usize,
        command_id: usize,
        host: &mut dyn EditorHost,
    ) -> bool {
        let Some(handler) = self
            .keymap
            .lookup(group_id, command_id)
            .and_then(|b| b.handler)
        else {
            return false;
        };
        let Some(command) = Command::from_ids(group_id, command_id) else {
            return false;
        };

        let env = self.handler_env();
        handler.invoke(command, &env, host);
        true
    }

    /// Run deferred tasks; call on each idle tick of the event loop
    pub fn run_idle(&mut self, host: &mut dyn EditorHost) -> usize {
        self.idle.run_pending(host)
    }

    pub fn has_pending_idle(&self) -> bool {
        !self.idle.is_empty()
    }

    /// Write the current chords to the backing store
    pub fn save(&self) -> Result<(), KeymapError> {
        match &self.store_path {
            Some(path) => save_keybindings(&self.keymap, path),
            None => {
                tracing::debug!("No keybinding store configured, nothing to save");
                Ok(())
            }
        }
    }

    /// Write the current chords to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), KeymapError> {
        save_keybindings(&self.keymap, path)
    }

    /// Finish pending work and release the keymap
    pub fn shutdown(mut self, host: &mut dyn EditorHost) {
        self.run_idle(host);
        tracing::debug!("Keybindings shut down ({} bindings)", self.keymap.len());
    }

    fn handler_env(&self) -> HandlerEnv<'_> {
        HandlerEnv {
            prefs: &self.prefs,
            snippet_chord: self
                .keymap
                .get(TagsKey::CompleteSnippet)
                .map(|b| b.chord)
                .unwrap_or_default(),
        }
    }

    /// Whether a chord should go to the focused terminal instead of the keymap
    fn terminal_passthrough(&self, chord: &Chord, terminal_focused: bool) -> bool {
        if !self.prefs.terminal_passthrough || !terminal_focused {
            return false;
        }
        // Plain typing stays with the terminal widget itself
        if chord.mods == Modifiers::SHIFT && chord.key.is_lowercase_letter() {
            return false;
        }
        if chord.mods.is_empty() && !chord.key.is_function_key() {
            return false;
        }
        // Focus commands must work to leave the terminal
        let focus_chord = self
            .keymap
            .group(GroupId::Focus as usize)
            .is_some_and(|group| group.bindings.iter().any(|b| b.matches(chord)));
        !focus_chord
    }
}

fn is_snippet_slot(group_id: usize, command_id: usize) -> bool {
    group_id == GroupId::Tags as usize && command_id == TagsKey::CompleteSnippet as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(c: char) -> Chord {
        Chord::char(c, Modifiers::ALT)
    }

    #[test]
    fn test_fixed_for_chord() {
        assert_eq!(FixedBinding::for_chord(&alt('0')), Some(FixedBinding::SelectTab(0)));
        assert_eq!(FixedBinding::for_chord(&alt('7')), Some(FixedBinding::SelectTab(7)));
        assert_eq!(FixedBinding::for_chord(&alt('x')), None);
        assert_eq!(
            FixedBinding::for_chord(&Chord::char('1', Modifiers::ALT | Modifiers::LOCK)),
            Some(FixedBinding::SelectTab(1))
        );
        assert_eq!(
            FixedBinding::for_chord(&Chord::char('2', Modifiers::CONTROL | Modifiers::ALT)),
            Some(FixedBinding::SelectTab(2))
        );
        assert_eq!(FixedBinding::for_chord(&Chord::char('1', Modifiers::CONTROL)), None);
        assert_eq!(
            FixedBinding::for_chord(&Chord::new(
                KeyCode::PageUp,
                Modifiers::CONTROL | Modifiers::SHIFT | Modifiers::LOCK
            )),
            None
        );
        assert_eq!(
            FixedBinding::for_chord(&Chord::new(
                KeyCode::PageUp,
                Modifiers::CONTROL | Modifiers::SHIFT
            )),
            Some(FixedBinding::FirstTab)
        );
        assert_eq!(
            FixedBinding::for_chord(&Chord::new(KeyCode::PageDown, Modifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_select_tab_targets() {
        let prefs = Preferences::default();
        assert_eq!(FixedBinding::SelectTab(0).target_tab(4, &prefs), Some(3));
        assert_eq!(FixedBinding::SelectTab(1).target_tab(4, &prefs), Some(0));
        assert_eq!(FixedBinding::SelectTab(3).target_tab(4, &prefs), Some(2));
        assert_eq!(FixedBinding::SelectTab(9).target_tab(4, &prefs), None);
        assert_eq!(FixedBinding::SelectTab(1).target_tab(0, &prefs), None);
    }

    #[test]
    fn test_select_tab_inverted() {
        let prefs = Preferences {
            swap_alt_tab_order: true,
            tab_order_ltr: false,
            ..Preferences::default()
        };
        assert_eq!(FixedBinding::SelectTab(1).target_tab(4, &prefs), Some(3));
        assert_eq!(FixedBinding::SelectTab(0).target_tab(4, &prefs), Some(0));
        assert_eq!(FixedBinding::SelectTab(9).target_tab(4, &prefs), None);

        // swapping only applies to right-to-left tab order
        let ltr = Preferences {
            swap_alt_tab_order: true,
            ..Preferences::default()
        };
        assert_eq!(FixedBinding::SelectTab(1).target_tab(4, &ltr), Some(0));
    }

    #[test]
    fn test_first_last_tab() {
        let prefs = Preferences::default();
        assert_eq!(FixedBinding::FirstTab.target_tab(5, &prefs), Some(0));
        assert_eq!(FixedBinding::LastTab.target_tab(5, &prefs), Some(4));
        assert_eq!(FixedBinding::LastTab.target_tab(0, &prefs), None);
    }

    #[test]
    fn test_dispatch_is_handled() {
        assert!(!Dispatch::Terminal.is_handled());
        assert!(!Dispatch::Unhandled.is_handled());
        assert!(Dispatch::Snippet.is_handled());
        assert!(Dispatch::Fixed(FixedBinding::FirstTab).is_handled());
        assert!(Dispatch::Swallowed {
            group_id: 0,
            command_id: 0
        }
        .is_handled());
    }
}
