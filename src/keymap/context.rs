//! Focus and document state consulted while dispatching a key event

/// Which surface currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text editing widget of the current document
    Editor,
    /// The embedded terminal emulator
    Terminal,
    /// The toolbar search field
    SearchBar,
    /// The scribble (notes) pane
    Scribble,
    /// Anything else (sidebar, message window, dialogs)
    #[default]
    Other,
}

/// Snapshot of the host's state taken at the start of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub focus: Focus,
    /// Whether a document is open
    pub has_document: bool,
}

impl KeyContext {
    /// Context with an open document whose editor has focus
    pub fn editor() -> Self {
        Self {
            focus: Focus::Editor,
            has_document: true,
        }
    }

    /// Context with the terminal focused
    pub fn terminal(has_document: bool) -> Self {
        Self {
            focus: Focus::Terminal,
            has_document,
        }
    }

    /// Whether the editor of an open document has focus
    pub fn editor_focused(&self) -> bool {
        self.has_document && self.focus == Focus::Editor
    }

    pub fn terminal_focused(&self) -> bool {
        self.focus == Focus::Terminal
    }
}
