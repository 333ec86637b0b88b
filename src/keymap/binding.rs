//! Binding and group records stored in the keymap

use super::handler::Handler;
use super::types::Chord;

/// A named shortcut: chord plus the handler it fires
///
/// A binding without a handler is reserved: matching it swallows the key
/// event without doing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    /// Stable persistence key, e.g. `menu_new`
    pub name: String,
    /// Human-readable description
    pub label: String,
    pub chord: Chord,
    pub handler: Option<Handler>,
}

impl Binding {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        chord: Chord,
        handler: Option<Handler>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            chord,
            handler,
        }
    }

    /// Whether this binding can be triggered by `chord`
    pub fn matches(&self, chord: &Chord) -> bool {
        !self.chord.is_unbound() && self.chord == *chord
    }

    /// Whether `set_binding` has filled this slot
    pub fn is_registered(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A fixed-size group of bindings; a binding's index is its command id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Store section the group's bindings are persisted under
    pub name: String,
    pub label: String,
    pub bindings: Box<[Binding]>,
}

impl Group {
    pub fn new(name: impl Into<String>, label: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            bindings: vec![Binding::default(); count].into_boxed_slice(),
        }
    }

    /// Number of command slots
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, command_id: usize) -> Option<&Binding> {
        self.bindings.get(command_id)
    }
}
