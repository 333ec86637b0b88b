//! Property-based tests for chords and accelerator text
//!
//! Test coverage:
//! - Writing any chord and parsing the text yields the same chord
//! - Shifted uppercase letters resolve to the lowercase chord
//! - Modifier bits outside the chord mask never change the effective chord
//! - Lookup by chord agrees with a linear scan of the registry

use proptest::prelude::*;

use chordal::keymap::{default_keymap, Chord, KeyCode, Modifiers, RawKeyEvent};

/// Strategy for modifier sets built from the four chord modifiers
fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    (0u32..16).prop_map(Modifiers::from_bits_truncate)
}

/// Strategy for printable ASCII characters, including punctuation
fn char_strategy() -> impl Strategy<Value = char> {
    (0x21u8..0x7f).prop_map(char::from)
}

/// Strategy for keys that are not plain characters
fn named_key_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Space),
        Just(KeyCode::Tab),
        Just(KeyCode::Enter),
        Just(KeyCode::Escape),
        Just(KeyCode::Backspace),
        Just(KeyCode::Delete),
        Just(KeyCode::Insert),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Numpad5),
        Just(KeyCode::NumpadAdd),
        Just(KeyCode::NumpadEnter),
        (1u8..=35).prop_map(KeyCode::F),
    ]
}

/// Strategy for any bound chord
fn chord_strategy() -> impl Strategy<Value = Chord> {
    prop_oneof![
        (char_strategy(), modifiers_strategy()).prop_map(|(c, m)| Chord::char(c, m)),
        (named_key_strategy(), modifiers_strategy()).prop_map(|(k, m)| Chord::new(k, m)),
    ]
}

proptest! {
    #[test]
    fn prop_accelerator_text_round_trip(chord in chord_strategy()) {
        let text = chord.to_string();
        let parsed: Chord = text.parse().expect("writer output parses");
        prop_assert_eq!(parsed, chord, "text was {:?}", text);
    }

    #[test]
    fn prop_shifted_letter_folds_to_lowercase(
        c in prop::char::range('a', 'z'),
        mods in modifiers_strategy(),
    ) {
        let mods = mods | Modifiers::SHIFT;
        let upper = Chord::from_raw(RawKeyEvent::char(c.to_ascii_uppercase(), mods));
        prop_assert_eq!(upper, Chord::char(c, mods));
    }

    #[test]
    fn prop_extra_state_bits_ignored(
        c in char_strategy(),
        mods in modifiers_strategy(),
        extra in any::<u32>(),
    ) {
        let noisy = RawKeyEvent::new(KeyCode::from_char(c), mods.bits() | (extra & !0xf));
        prop_assert_eq!(Chord::from_raw(noisy), Chord::char(c, mods));
    }

    #[test]
    fn prop_find_by_chord_is_first_match(chord in chord_strategy()) {
        let keymap = default_keymap();
        let expected = keymap
            .iter()
            .find(|e| e.binding.matches(&chord))
            .map(|e| (e.group_id, e.command_id));
        let found = keymap.find_by_chord(&chord).map(|e| (e.group_id, e.command_id));
        prop_assert_eq!(found, expected);
    }
}
