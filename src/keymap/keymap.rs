//! The group registry: every binding addressed by (group id, command id)

use super::binding::{Binding, Group};
use super::command::GroupCommand;
use super::handler::Handler;
use super::types::Chord;

/// A binding together with its position in the registry
#[derive(Debug, Clone, Copy)]
pub struct BindingRef<'a> {
    pub group_id: usize,
    pub command_id: usize,
    pub group: &'a Group,
    pub binding: &'a Binding,
}

/// Ordered collection of groups; iteration follows declaration order
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    groups: Vec<Group>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty keymap sized for `groups` groups
    pub fn with_capacity(groups: usize) -> Self {
        Self {
            groups: Vec::with_capacity(groups),
        }
    }

    /// Append a group of `count` empty slots, returning its group id
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        count: usize,
    ) -> usize {
        self.groups.push(Group::new(name, label, count));
        self.groups.len() - 1
    }

    /// Fill the slot `command_id` of group `group_id`
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn set_binding(
        &mut self,
        group_id: usize,
        command_id: usize,
        handler: Option<Handler>,
        chord: Chord,
        name: impl Into<String>,
        label: impl Into<String>,
    ) {
        assert!(
            group_id < self.groups.len(),
            "group id {} out of range ({} groups)",
            group_id,
            self.groups.len()
        );
        let group = &mut self.groups[group_id];
        assert!(
            command_id < group.len(),
            "command id {} out of range for group '{}' ({} commands)",
            command_id,
            group.label,
            group.len()
        );
        let chord = Chord::new(chord.key, chord.mods);
        group.bindings[command_id] = Binding::new(name, label, chord, handler);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> impl Iterator<Item = &mut Group> {
        self.groups.iter_mut()
    }

    pub fn group(&self, group_id: usize) -> Option<&Group> {
        self.groups.get(group_id)
    }

    /// Total number of binding slots
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every binding, groups then commands in declaration order
    pub fn iter(&self) -> impl Iterator<Item = BindingRef<'_>> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(group_id, group)| {
                group
                    .bindings
                    .iter()
                    .enumerate()
                    .map(move |(command_id, binding)| BindingRef {
                        group_id,
                        command_id,
                        group,
                        binding,
                    })
            })
    }

    /// Visit every registered binding with its group and command id
    pub fn for_each_binding(&self, mut f: impl FnMut(&Group, usize, usize, &Binding)) {
        for entry in self.iter().filter(|e| e.binding.is_registered()) {
            f(entry.group, entry.group_id, entry.command_id, entry.binding);
        }
    }

    /// Binding at (group id, command id); `None` for out-of-range ids
    pub fn lookup(&self, group_id: usize, command_id: usize) -> Option<&Binding> {
        let binding = self
            .groups
            .get(group_id)
            .and_then(|group| group.get(command_id));
        if binding.is_none() {
            tracing::warn!(group_id, command_id, "keybinding lookup out of range");
        }
        binding
    }

    /// Binding for a typed command
    pub fn get<K: GroupCommand>(&self, key: K) -> Option<&Binding> {
        self.lookup(K::GROUP as usize, key.id())
    }

    /// Replace the chord of a binding; returns false for out-of-range ids
    ///
    /// The chord is normalized first, so a literal `Chord { key: 'A', mods: SHIFT }`
    /// is stored as Shift+a.
    pub fn set_chord(&mut self, group_id: usize, command_id: usize, chord: Chord) -> bool {
        match self
            .groups
            .get_mut(group_id)
            .and_then(|group| group.bindings.get_mut(command_id))
        {
            Some(binding) => {
                binding.chord = Chord::new(chord.key, chord.mods);
                true
            }
            None => false,
        }
    }

    /// First binding (declaration order) triggered by `chord`
    pub fn find_by_chord(&self, chord: &Chord) -> Option<BindingRef<'_>> {
        if chord.is_unbound() {
            return None;
        }
        self.iter().find(|entry| entry.binding.matches(chord))
    }

    /// Find a registered binding by its persistence name
    pub fn find_by_name(&self, name: &str) -> Option<BindingRef<'_>> {
        self.iter().find(|entry| entry.binding.name == name)
    }
}
