//! Core types for the keymap system: Chord, Modifiers, KeyCode, RawKeyEvent

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The modifier keys a binding can be defined with.
    ///
    /// Bit values match the raw modifier mask delivered by the windowing layer,
    /// so a raw mask can be reduced with [`Modifiers::from_bits_truncate`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        /// Alt (Mod1)
        const ALT = 1 << 3;
    }
}

/// Raw mask bit for Num Lock (Mod2); never part of a chord
pub const NUM_LOCK_MASK: u32 = 1 << 4;
/// Raw mask bit for the Super/Windows key; never part of a chord
pub const SUPER_MASK: u32 = 1 << 26;

impl Modifiers {
    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.contains(Modifiers::CONTROL)
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.contains(Modifiers::ALT)
    }

    /// Check if caps lock is on
    #[inline]
    pub const fn lock(self) -> bool {
        self.contains(Modifiers::LOCK)
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// No key. A chord with this key is unbound and never matches.
    Unbound,

    /// A printable, non-space character key
    Char(char),

    // Named keys
    Space,
    Tab,
    Enter,
    Escape,
    Backspace,
    Delete,
    Insert,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,

    // Function keys
    F(u8), // F1-F35

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadEnter,
    NumpadDecimal,
}

impl KeyCode {
    /// Key code for a typed character (`' '` maps to [`KeyCode::Space`])
    pub fn from_char(c: char) -> Self {
        if c == ' ' {
            KeyCode::Space
        } else {
            KeyCode::Char(c)
        }
    }

    /// F1 through F35
    pub fn is_function_key(self) -> bool {
        matches!(self, KeyCode::F(1..=35))
    }

    /// Lowercase ASCII letter
    pub fn is_lowercase_letter(self) -> bool {
        matches!(self, KeyCode::Char('a'..='z'))
    }

    /// The digit value of a top-row digit key
    pub fn digit(self) -> Option<u32> {
        match self {
            KeyCode::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Unbound => Ok(()),
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad0 => write!(f, "Num0"),
            KeyCode::Numpad1 => write!(f, "Num1"),
            KeyCode::Numpad2 => write!(f, "Num2"),
            KeyCode::Numpad3 => write!(f, "Num3"),
            KeyCode::Numpad4 => write!(f, "Num4"),
            KeyCode::Numpad5 => write!(f, "Num5"),
            KeyCode::Numpad6 => write!(f, "Num6"),
            KeyCode::Numpad7 => write!(f, "Num7"),
            KeyCode::Numpad8 => write!(f, "Num8"),
            KeyCode::Numpad9 => write!(f, "Num9"),
            KeyCode::NumpadAdd => write!(f, "Num+"),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadMultiply => write!(f, "Num*"),
            KeyCode::NumpadDivide => write!(f, "Num/"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::NumpadDecimal => write!(f, "Num."),
        }
    }
}

/// A key press as delivered by the windowing layer, before normalization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: KeyCode,
    /// Raw modifier mask; may carry bits (Num Lock, Super, ...) that chords ignore
    pub state: u32,
}

impl RawKeyEvent {
    pub const fn new(key: KeyCode, state: u32) -> Self {
        Self { key, state }
    }

    /// Event for a typed character with the given modifiers
    pub fn char(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::from_char(c),
            state: mods.bits(),
        }
    }
}

/// A base key plus modifier set: the unit a binding matches against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Chord {
    /// The canonical "no shortcut" chord
    pub const UNBOUND: Chord = Chord {
        key: KeyCode::Unbound,
        mods: Modifiers::empty(),
    };

    /// Create a chord, folding an uppercase letter to lowercase when Shift or
    /// Lock is part of the modifier set
    pub fn new(key: KeyCode, mods: Modifiers) -> Self {
        let key = match key {
            KeyCode::Char(c)
                if c.is_ascii_uppercase() && mods.intersects(Modifiers::SHIFT | Modifiers::LOCK) =>
            {
                KeyCode::Char(c.to_ascii_lowercase())
            }
            other => other,
        };
        Self { key, mods }
    }

    /// Create a chord with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::empty(),
        }
    }

    /// Create a chord with a character key and modifiers
    pub fn char(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::from_char(c), mods)
    }

    /// The effective chord of a raw key event
    pub fn from_raw(event: RawKeyEvent) -> Self {
        Self::new(event.key, Modifiers::from_bits_truncate(event.state))
    }

    /// Whether this chord denotes "no shortcut"
    pub fn is_unbound(&self) -> bool {
        self.key == KeyCode::Unbound
    }

    /// Human-readable label, e.g. `Ctrl+Shift+N`
    pub fn label(&self) -> String {
        if self.is_unbound() {
            return String::new();
        }

        let mut parts = Vec::new();
        if self.mods.ctrl() {
            parts.push("Ctrl+");
        }
        if self.mods.alt() {
            parts.push("Alt+");
        }
        if self.mods.shift() {
            parts.push("Shift+");
        }
        if self.mods.lock() {
            parts.push("Lock+");
        }

        format!("{}{}", parts.join(""), self.key)
    }
}

impl Default for Chord {
    fn default() -> Self {
        Chord::UNBOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::empty();
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
        assert!(!mods.lock());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
    }

    #[test]
    fn test_raw_mask_drops_unknown_bits() {
        let raw = Modifiers::CONTROL.bits() | NUM_LOCK_MASK | SUPER_MASK;
        assert_eq!(Modifiers::from_bits_truncate(raw), Modifiers::CONTROL);
    }

    #[test]
    fn test_shift_folds_uppercase() {
        let chord = Chord::new(KeyCode::Char('R'), Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(chord.key, KeyCode::Char('r'));
    }

    #[test]
    fn test_lock_folds_uppercase() {
        let chord = Chord::new(KeyCode::Char('N'), Modifiers::LOCK);
        assert_eq!(chord.key, KeyCode::Char('n'));
    }

    #[test]
    fn test_unshifted_uppercase_kept() {
        let chord = Chord::new(KeyCode::Char('A'), Modifiers::CONTROL);
        assert_eq!(chord.key, KeyCode::Char('A'));
    }

    #[test]
    fn test_from_raw_normalizes() {
        let event = RawKeyEvent::new(
            KeyCode::Char('S'),
            (Modifiers::CONTROL | Modifiers::SHIFT).bits() | NUM_LOCK_MASK,
        );
        assert_eq!(
            Chord::from_raw(event),
            Chord::char('s', Modifiers::CONTROL | Modifiers::SHIFT)
        );
    }

    #[test]
    fn test_space_char_is_space_key() {
        assert_eq!(KeyCode::from_char(' '), KeyCode::Space);
        assert_eq!(Chord::char(' ', Modifiers::CONTROL).key, KeyCode::Space);
    }

    #[test]
    fn test_function_key_range() {
        assert!(KeyCode::F(1).is_function_key());
        assert!(KeyCode::F(35).is_function_key());
        assert!(!KeyCode::F(36).is_function_key());
        assert!(!KeyCode::Tab.is_function_key());
    }

    #[test]
    fn test_chord_label() {
        let chord = Chord::char('n', Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(chord.label(), "Ctrl+Shift+N");
        assert_eq!(Chord::UNBOUND.label(), "");
    }
}
