//! Binding handlers: one variant per action category
//!
//! A handler receives the command it was bound to and checks the same
//! preconditions the editor's menu action would (an open document, editor
//! focus, an enabled build target, ...) before forwarding to the host.

use crate::config::Preferences;

use super::command::{Command, EditingKey, FileKey, NotebookKey, TagsKey};
use super::host::{EditorHost, TabDirection};
use super::types::{Chord, KeyCode};

/// State a handler may consult besides the host
#[derive(Debug, Clone, Copy)]
pub struct HandlerEnv<'a> {
    pub prefs: &'a Preferences,
    /// Current chord of the snippet completion binding
    pub snippet_chord: Chord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    FileAction,
    Print,
    Undo,
    Redo,
    Clipboard,
    SelectAll,
    InsertDate,
    Preferences,
    Help,
    Search,
    ToggleAll,
    Fullscreen,
    MessageWindow,
    ToggleSidebar,
    ZoomIn,
    ZoomOut,
    ReplaceTabs,
    FoldAll,
    UnfoldAll,
    ReloadTagList,
    ColorChooser,
    /// Registered so it can be rebound; has no key action of its own
    InsertSpecialChars,
    BuildAction,
    SwitchEditor,
    SwitchScribble,
    SwitchTerminal,
    SwitchSearchBar,
    SwitchTabLeft,
    SwitchTabRight,
    SwitchTabLastUsed,
    MoveTab,
    /// Text editing; needs editor focus
    Editing,
    /// Brace and marker navigation; needs only a document
    EditingGlobal,
    Tags,
    /// Commands acting on the word under the cursor
    CurrentWord,
    NavBack,
    NavForward,
}

impl Handler {
    pub fn invoke(self, command: Command, env: &HandlerEnv<'_>, host: &mut dyn EditorHost) {
        let ctx = host.key_context();
        tracing::debug!(?command, handler = ?self, "invoking handler");

        match self {
            Handler::FileAction => {
                if command == Command::File(FileKey::ProjectProperties) && !host.has_project() {
                    return;
                }
                host.execute(command);
            }

            Handler::Print
            | Handler::Undo
            | Handler::Redo
            | Handler::Clipboard
            | Handler::SelectAll
            | Handler::InsertDate
            | Handler::Preferences
            | Handler::Help
            | Handler::Search
            | Handler::ToggleAll
            | Handler::Fullscreen
            | Handler::MessageWindow
            | Handler::ToggleSidebar
            | Handler::ZoomIn
            | Handler::ZoomOut
            | Handler::ReplaceTabs
            | Handler::ColorChooser
            | Handler::SwitchScribble
            | Handler::SwitchTerminal
            | Handler::NavBack
            | Handler::NavForward => host.execute(command),

            Handler::FoldAll | Handler::UnfoldAll | Handler::ReloadTagList => {
                if ctx.has_document {
                    host.execute(command);
                }
            }

            Handler::InsertSpecialChars => {}

            Handler::BuildAction => {
                if let Command::Build(key) = command {
                    if ctx.has_document && host.build_action_enabled(key) {
                        host.execute(command);
                    }
                }
            }

            Handler::SwitchEditor => {
                if ctx.has_document {
                    host.execute(command);
                }
            }

            Handler::SwitchSearchBar => {
                if host.search_bar_visible() {
                    host.execute(command);
                }
            }

            Handler::SwitchTabLeft => host.switch_document(TabDirection::Left),
            Handler::SwitchTabRight => host.switch_document(TabDirection::Right),
            Handler::SwitchTabLastUsed => {
                if let Some(index) = host.last_used_tab() {
                    host.set_current_tab(index);
                }
            }

            Handler::MoveTab => {
                if let Command::Notebook(key) = command {
                    let target = move_tab_target(
                        key,
                        host.current_tab(),
                        host.tab_count(),
                        env.prefs.tab_order_ltr,
                    );
                    if let Some(index) = target {
                        host.move_current_tab(index);
                    }
                }
            }

            Handler::Editing => {
                if !ctx.editor_focused() {
                    return;
                }
                let required = match command {
                    Command::Editing(EditingKey::SendToCmd1) => 1,
                    Command::Editing(EditingKey::SendToCmd2) => 2,
                    Command::Editing(EditingKey::SendToCmd3) => 3,
                    _ => 0,
                };
                if host.custom_command_count() >= required {
                    host.execute(command);
                }
            }

            Handler::EditingGlobal => {
                if ctx.has_document {
                    host.execute(command);
                }
            }

            Handler::Tags => {
                if !ctx.editor_focused() {
                    return;
                }
                if command == Command::Tags(TagsKey::SuppressSnippetCompletion) {
                    match env.snippet_chord.key {
                        KeyCode::Space => host.insert_text(" "),
                        KeyCode::Tab => host.insert_tab(),
                        _ => {}
                    }
                } else {
                    host.execute(command);
                }
            }

            Handler::CurrentWord => {
                if !ctx.has_document {
                    return;
                }
                match host.current_word().filter(|w| !w.is_empty()) {
                    Some(word) => host.word_action(command, &word),
                    None => host.beep(),
                }
            }
        }
    }
}

/// Where the current tab moves to; `None` when there is nothing to move
pub fn move_tab_target(
    key: NotebookKey,
    current: Option<usize>,
    count: usize,
    tab_order_ltr: bool,
) -> Option<usize> {
    let current = current?;
    if count == 0 {
        return None;
    }
    let last = count - 1;

    match key {
        NotebookKey::MoveTabLeft => Some(if current == 0 { last } else { current - 1 }),
        NotebookKey::MoveTabRight => Some(if current >= last { 0 } else { current + 1 }),
        NotebookKey::MoveTabFirst => Some(if tab_order_ltr { 0 } else { last }),
        NotebookKey::MoveTabLast => Some(if tab_order_ltr { last } else { 0 }),
        _ => None,
    }
}
