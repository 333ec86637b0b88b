//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chordal::keymap::{
    BuildKey, Chord, Command, EditorHost, Focus, KeyCode, KeyContext, Modifiers, RawKeyEvent,
    TabDirection,
};

/// A collaborator call observed by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Execute(Command),
    WordAction(Command, String),
    CompleteSnippet { command_id: usize, position: usize },
    InsertText(String),
    InsertTab,
    SwitchDocument(TabDirection),
    SetCurrentTab(usize),
    MoveCurrentTab(usize),
    Beep,
    MenuAccelerators(bool),
}

/// Editor double with configurable state that records every action call
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub context: KeyContext,
    pub has_project: bool,
    pub search_bar_visible: bool,
    pub custom_commands: usize,
    pub build_enabled: bool,
    pub cursor: usize,
    pub word: Option<String>,
    pub tabs: usize,
    pub current_tab: Option<usize>,
    pub last_used_tab: Option<usize>,
    /// Whether snippet expansion consumes the key
    pub snippet_consumes: bool,
    pub calls: Vec<HostCall>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            context: KeyContext::editor(),
            has_project: false,
            search_bar_visible: true,
            custom_commands: 0,
            build_enabled: true,
            cursor: 0,
            word: None,
            tabs: 0,
            current_tab: None,
            last_used_tab: None,
            snippet_consumes: false,
            calls: Vec::new(),
        }
    }
}

impl RecordingHost {
    /// Host with an open document whose editor has focus
    pub fn editor() -> Self {
        Self::default()
    }

    /// Host with the terminal focused
    pub fn terminal() -> Self {
        Self {
            context: KeyContext::terminal(true),
            ..Self::default()
        }
    }

    /// Host with no open document and nothing focused
    pub fn empty() -> Self {
        Self {
            context: KeyContext {
                focus: Focus::Other,
                has_document: false,
            },
            ..Self::default()
        }
    }

    /// Host with `count` tabs, the first one active
    pub fn with_tabs(count: usize) -> Self {
        Self {
            tabs: count,
            current_tab: (count > 0).then_some(0),
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<Command> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Execute(cmd) => Some(*cmd),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl EditorHost for RecordingHost {
    fn key_context(&self) -> KeyContext {
        self.context
    }

    fn execute(&mut self, command: Command) {
        self.calls.push(HostCall::Execute(command));
    }

    fn has_project(&self) -> bool {
        self.has_project
    }

    fn search_bar_visible(&self) -> bool {
        self.search_bar_visible
    }

    fn custom_command_count(&self) -> usize {
        self.custom_commands
    }

    fn build_action_enabled(&self, _key: BuildKey) -> bool {
        self.build_enabled
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn current_word(&self) -> Option<String> {
        self.word.clone()
    }

    fn tab_count(&self) -> usize {
        self.tabs
    }

    fn current_tab(&self) -> Option<usize> {
        self.current_tab
    }

    fn last_used_tab(&self) -> Option<usize> {
        self.last_used_tab
    }

    fn word_action(&mut self, command: Command, word: &str) {
        self.calls.push(HostCall::WordAction(command, word.to_string()));
    }

    fn complete_snippet(&mut self, command_id: usize, position: usize) -> bool {
        self.calls.push(HostCall::CompleteSnippet {
            command_id,
            position,
        });
        self.snippet_consumes
    }

    fn insert_text(&mut self, text: &str) {
        self.calls.push(HostCall::InsertText(text.to_string()));
    }

    fn insert_tab(&mut self) {
        self.calls.push(HostCall::InsertTab);
    }

    fn switch_document(&mut self, direction: TabDirection) {
        self.calls.push(HostCall::SwitchDocument(direction));
    }

    fn set_current_tab(&mut self, index: usize) {
        self.calls.push(HostCall::SetCurrentTab(index));
    }

    fn move_current_tab(&mut self, index: usize) {
        self.calls.push(HostCall::MoveCurrentTab(index));
    }

    fn beep(&mut self) {
        self.calls.push(HostCall::Beep);
    }

    fn set_menu_accelerators_enabled(&mut self, enabled: bool) {
        self.calls.push(HostCall::MenuAccelerators(enabled));
    }
}

// ========================================================================
// Event builders
// ========================================================================

pub fn ctrl(c: char) -> RawKeyEvent {
    RawKeyEvent::char(c, Modifiers::CONTROL)
}

pub fn ctrl_shift(c: char) -> RawKeyEvent {
    RawKeyEvent::char(c, Modifiers::CONTROL | Modifiers::SHIFT)
}

pub fn alt(c: char) -> RawKeyEvent {
    RawKeyEvent::char(c, Modifiers::ALT)
}

pub fn key(key: KeyCode, mods: Modifiers) -> RawKeyEvent {
    RawKeyEvent::new(key, mods.bits())
}

pub fn plain(key: KeyCode) -> RawKeyEvent {
    RawKeyEvent::new(key, 0)
}

pub fn chord(text: &str) -> Chord {
    text.parse().expect("valid chord text")
}
