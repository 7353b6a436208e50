//! Property-based tests for character mapping and pack validation.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use fontpack::core::charset;
use fontpack::core::mapper::CharacterMapper;
use fontpack::core::types::{Category, FontPack, Style};
use fontpack::core::validate::{validate_pack, validate_pack_at, ValidationLevel};
use fontpack::engine::{StyleEngine, StyleRequest};

/// A style mapping every baseline char to its uppercase form.
fn shouting_style() -> Style {
    charset::baseline().fold(Style::new("shout", "Shout"), |s, c| {
        s.map(c, c.to_uppercase().collect::<String>())
    })
}

fn pack_with(style: Style) -> FontPack {
    let mut pack = FontPack::new("prop", "Prop", Category::Community);
    pack.styles.push(style);
    pack
}

/// Strategy for characters outside the baseline set.
fn non_baseline_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be outside the baseline", |c| !charset::is_baseline(*c))
}

/// Strategy for an index into the baseline set.
fn baseline_index() -> impl Strategy<Value = usize> {
    0..charset::BASELINE_LEN
}

proptest! {
    /// Characters without a mapping are emitted unchanged.
    #[test]
    fn unmapped_chars_are_identity(chars in prop::collection::vec(non_baseline_char(), 0..40)) {
        let text: String = chars.into_iter().collect();
        let mut mapper = CharacterMapper::new();
        mapper.load_mapping(&shouting_style());

        prop_assert_eq!(mapper.transform(&text), text);
    }

    /// Output has one replacement per input char.
    #[test]
    fn transform_is_char_wise(text in "[a-z0-9 .,!?]{0,40}") {
        let mut mapper = CharacterMapper::new();
        mapper.load_mapping(&shouting_style());

        let expected: String = text.chars().flat_map(char::to_uppercase).collect();
        prop_assert_eq!(mapper.transform(&text), expected);
    }

    /// Applying a style twice gives the same result and leaves the pack alone.
    #[test]
    fn apply_style_is_pure(text in "\\PC{0,40}") {
        let pack = pack_with(shouting_style());
        let mut engine = StyleEngine::new();
        engine.load_pack(pack.clone());

        let request = StyleRequest::new(&text, "shout").in_pack("prop");
        let first = engine.apply_style(&request).unwrap();
        let second = engine.apply_style(&request).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.original, text);
        prop_assert_eq!(engine.get_pack("prop"), Some(&pack));
    }

    /// Dropping any single baseline char fails validation and names it.
    #[test]
    fn missing_baseline_char_is_reported(index in baseline_index()) {
        let dropped = charset::baseline().nth(index).unwrap();
        let style = charset::baseline()
            .filter(|&c| c != dropped)
            .fold(Style::new("gap", "Gap"), |s, c| s.map(c, c.to_string()));

        let result = validate_pack(&pack_with(style));
        prop_assert!(!result.valid);
        prop_assert_eq!(
            result.errors,
            vec![format!("Style gap missing mappings for: {dropped}")]
        );
    }

    /// Strict validation never accepts what basic validation rejects.
    #[test]
    fn strict_is_at_least_as_strict(mapped in prop::collection::btree_set(baseline_index(), 0..=charset::BASELINE_LEN)) {
        let style = charset::baseline()
            .enumerate()
            .filter(|(i, _)| mapped.contains(i))
            .fold(Style::new("some", "Some"), |s, (_, c)| s.map(c, c.to_string()));
        let pack = pack_with(style);

        let basic = validate_pack_at(&pack, ValidationLevel::Basic);
        let strict = validate_pack_at(&pack, ValidationLevel::Strict);

        prop_assert_eq!(basic.valid, mapped.len() == charset::BASELINE_LEN);
        if !basic.valid {
            prop_assert!(!strict.valid);
        }
        prop_assert!(strict.errors.len() >= basic.errors.len());
    }
}
