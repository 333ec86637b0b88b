//! Accelerator text: the persisted form of a chord
//!
//! The format is zero or more bracketed modifier tokens followed by a key name,
//! e.g. `<Control>n`, `<Shift><Alt>F1`, `<Control>Page_Up`. An empty string
//! means "unbound". Writing a chord and parsing the result yields the same chord.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::{Chord, KeyCode, Modifiers};

/// Error returned when accelerator text cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("unknown modifier <{0}>")]
    UnknownModifier(String),
    #[error("unterminated modifier in {0:?}")]
    UnterminatedModifier(String),
    #[error("no key after modifiers in {0:?}")]
    MissingKey(String),
    #[error("unknown key name {0:?}")]
    UnknownKey(String),
}

/// Key names for printable ASCII punctuation
const PUNCTUATION: &[(char, &str)] = &[
    ('!', "exclam"),
    ('"', "quotedbl"),
    ('#', "numbersign"),
    ('$', "dollar"),
    ('%', "percent"),
    ('&', "ampersand"),
    ('\'', "apostrophe"),
    ('(', "parenleft"),
    (')', "parenright"),
    ('*', "asterisk"),
    ('+', "plus"),
    (',', "comma"),
    ('-', "minus"),
    ('.', "period"),
    ('/', "slash"),
    (':', "colon"),
    (';', "semicolon"),
    ('<', "less"),
    ('=', "equal"),
    ('>', "greater"),
    ('?', "question"),
    ('@', "at"),
    ('[', "bracketleft"),
    ('\\', "backslash"),
    (']', "bracketright"),
    ('^', "asciicircum"),
    ('_', "underscore"),
    ('`', "grave"),
    ('{', "braceleft"),
    ('|', "bar"),
    ('}', "braceright"),
    ('~', "asciitilde"),
];

/// Named keys other than characters and function keys
const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::Space, "space"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::Enter, "Return"),
    (KeyCode::Escape, "Escape"),
    (KeyCode::Backspace, "BackSpace"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::Insert, "Insert"),
    (KeyCode::Home, "Home"),
    (KeyCode::End, "End"),
    (KeyCode::PageUp, "Page_Up"),
    (KeyCode::PageDown, "Page_Down"),
    (KeyCode::Up, "Up"),
    (KeyCode::Down, "Down"),
    (KeyCode::Left, "Left"),
    (KeyCode::Right, "Right"),
    (KeyCode::Numpad0, "KP_0"),
    (KeyCode::Numpad1, "KP_1"),
    (KeyCode::Numpad2, "KP_2"),
    (KeyCode::Numpad3, "KP_3"),
    (KeyCode::Numpad4, "KP_4"),
    (KeyCode::Numpad5, "KP_5"),
    (KeyCode::Numpad6, "KP_6"),
    (KeyCode::Numpad7, "KP_7"),
    (KeyCode::Numpad8, "KP_8"),
    (KeyCode::Numpad9, "KP_9"),
    (KeyCode::NumpadAdd, "KP_Add"),
    (KeyCode::NumpadSubtract, "KP_Subtract"),
    (KeyCode::NumpadMultiply, "KP_Multiply"),
    (KeyCode::NumpadDivide, "KP_Divide"),
    (KeyCode::NumpadEnter, "KP_Enter"),
    (KeyCode::NumpadDecimal, "KP_Decimal"),
];

/// Alternative spellings accepted when reading
const KEY_ALIASES: &[(KeyCode, &str)] = &[
    (KeyCode::Enter, "Enter"),
    (KeyCode::Escape, "Esc"),
    (KeyCode::Tab, "ISO_Left_Tab"),
    (KeyCode::PageUp, "Prior"),
    (KeyCode::PageDown, "Next"),
];

/// Write the key name used in accelerator text
fn write_key_name(f: &mut fmt::Formatter<'_>, key: KeyCode) -> fmt::Result {
    match key {
        KeyCode::Unbound => Ok(()),
        KeyCode::F(n) => write!(f, "F{}", n),
        KeyCode::Char(c) => match PUNCTUATION.iter().find(|(p, _)| *p == c) {
            Some((_, name)) => f.write_str(name),
            None => write!(f, "{}", c),
        },
        named => match NAMED_KEYS.iter().find(|(k, _)| *k == named) {
            Some((_, name)) => f.write_str(name),
            None => Ok(()),
        },
    }
}

/// Resolve a key name to a key code
fn parse_key_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::from_char(c));
    }

    if let Some(digits) = name.strip_prefix(['F', 'f']) {
        if let Ok(n) = digits.parse::<u8>() {
            return (1..=35).contains(&n).then_some(KeyCode::F(n));
        }
    }

    NAMED_KEYS
        .iter()
        .chain(KEY_ALIASES)
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(k, _)| *k)
        .or_else(|| {
            PUNCTUATION
                .iter()
                .find(|(_, n)| n.eq_ignore_ascii_case(name))
                .map(|(c, _)| KeyCode::Char(*c))
        })
}

fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "shift" => Some(Modifiers::SHIFT),
        "control" | "ctrl" | "ctl" | "primary" => Some(Modifiers::CONTROL),
        "alt" | "mod1" => Some(Modifiers::ALT),
        "lock" => Some(Modifiers::LOCK),
        _ => None,
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbound() {
            return Ok(());
        }
        if self.mods.shift() {
            f.write_str("<Shift>")?;
        }
        if self.mods.ctrl() {
            f.write_str("<Control>")?;
        }
        if self.mods.alt() {
            f.write_str("<Alt>")?;
        }
        if self.mods.lock() {
            f.write_str("<Lock>")?;
        }
        write_key_name(f, self.key)
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Ok(Chord::UNBOUND);
        }

        let mut mods = Modifiers::empty();
        let mut rest = text;
        while rest.len() > 1 && rest.starts_with('<') {
            let Some(end) = rest.find('>') else {
                return Err(ChordParseError::UnterminatedModifier(text.to_string()));
            };
            let token = &rest[1..end];
            mods |= parse_modifier(token)
                .ok_or_else(|| ChordParseError::UnknownModifier(token.to_string()))?;
            rest = &rest[end + 1..];
        }

        if rest.is_empty() {
            return Err(ChordParseError::MissingKey(text.to_string()));
        }

        let key =
            parse_key_name(rest).ok_or_else(|| ChordParseError::UnknownKey(rest.to_string()))?;
        Ok(Chord::new(key, mods))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Chord {
        s.parse().expect("chord should parse")
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse("<Control>n"), Chord::char('n', Modifiers::CONTROL));
        assert_eq!(parse("F11"), Chord::key(KeyCode::F(11)));
        assert_eq!(parse("Tab"), Chord::key(KeyCode::Tab));
    }

    #[test]
    fn test_parse_multiple_modifiers() {
        assert_eq!(
            parse("<Shift><Alt>F1"),
            Chord::new(KeyCode::F(1), Modifiers::SHIFT | Modifiers::ALT)
        );
        assert_eq!(
            parse("<Control><Shift>n"),
            Chord::char('n', Modifiers::CONTROL | Modifiers::SHIFT)
        );
    }

    #[test]
    fn test_parse_modifier_aliases() {
        assert_eq!(parse("<ctrl>a"), parse("<Control>a"));
        assert_eq!(parse("<Primary>a"), parse("<Control>a"));
        assert_eq!(parse("<Mod1>a"), parse("<Alt>a"));
    }

    #[test]
    fn test_parse_shifted_uppercase_folds() {
        assert_eq!(parse("<Shift><Control>S"), parse("<Shift><Control>s"));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse("<Control>Page_Up"), Chord::new(KeyCode::PageUp, Modifiers::CONTROL));
        assert_eq!(parse("<Control>Prior"), Chord::new(KeyCode::PageUp, Modifiers::CONTROL));
        assert_eq!(parse("<Control>Return"), Chord::new(KeyCode::Enter, Modifiers::CONTROL));
        assert_eq!(parse("<Control>space"), Chord::new(KeyCode::Space, Modifiers::CONTROL));
        assert_eq!(parse("<Control>plus"), Chord::char('+', Modifiers::CONTROL));
        assert_eq!(parse("<Control>period"), Chord::char('.', Modifiers::CONTROL));
        assert_eq!(parse("KP_Add"), Chord::key(KeyCode::NumpadAdd));
    }

    #[test]
    fn test_parse_empty_is_unbound() {
        assert!(parse("").is_unbound());
        assert!(parse("   ").is_unbound());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "<Hyper>a".parse::<Chord>(),
            Err(ChordParseError::UnknownModifier(_))
        ));
        assert!(matches!(
            "<Control>".parse::<Chord>(),
            Err(ChordParseError::MissingKey(_))
        ));
        assert!(matches!(
            "<Control".parse::<Chord>(),
            Err(ChordParseError::UnterminatedModifier(_))
        ));
        assert!(matches!(
            "<Control>NotAKey".parse::<Chord>(),
            Err(ChordParseError::UnknownKey(_))
        ));
        assert!(matches!("F36".parse::<Chord>(), Err(ChordParseError::UnknownKey(_))));
    }

    #[test]
    fn test_write_modifier_order() {
        let chord = Chord::char('g', Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(chord.to_string(), "<Shift><Control>g");

        let chord = Chord::new(KeyCode::F(9), Modifiers::all());
        assert_eq!(chord.to_string(), "<Shift><Control><Alt><Lock>F9");
    }

    #[test]
    fn test_write_named_keys() {
        assert_eq!(Chord::new(KeyCode::PageDown, Modifiers::ALT).to_string(), "<Alt>Page_Down");
        assert_eq!(Chord::char('-', Modifiers::CONTROL).to_string(), "<Control>minus");
        assert_eq!(Chord::key(KeyCode::Enter).to_string(), "Return");
        assert_eq!(Chord::UNBOUND.to_string(), "");
    }

    #[test]
    fn test_round_trip_samples() {
        for text in [
            "<Control>n",
            "<Shift><Control>s",
            "<Shift><Alt>d",
            "<Control><Alt>p",
            "<Shift><Control>F9",
            "<Control>space",
            "<Control>comma",
            "<Alt>Up",
            "<Control>1",
            "KP_Enter",
        ] {
            let chord = parse(text);
            assert_eq!(chord.to_string().parse::<Chord>(), Ok(chord), "{text}");
        }
    }
}
