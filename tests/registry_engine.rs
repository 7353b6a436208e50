//! Integration tests for the registry and style engine together.
//!
//! Packs are validated by a [`PackRegistry`] and then handed to a
//! [`StyleEngine`], the same way the CLI wires them up.

use fontpack::core::charset;
use fontpack::core::store::PackStore;
use fontpack::core::types::{Category, Decorator, FontPack, Style};
use fontpack::core::validate::ValidationLevel;
use fontpack::engine::{EngineError, PackRegistry, RegistryError, StyleEngine, StyleRequest};
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Mathematical bold for letters and digits, identity for the rest.
fn bold(c: char) -> String {
    let mapped = match c {
        'A'..='Z' => char::from_u32(0x1D400 + (c as u32 - 'A' as u32)),
        'a'..='z' => char::from_u32(0x1D41A + (c as u32 - 'a' as u32)),
        '0'..='9' => char::from_u32(0x1D7CE + (c as u32 - '0' as u32)),
        _ => Some(c),
    };
    mapped.unwrap_or(c).to_string()
}

fn bold_style() -> Style {
    charset::baseline().fold(Style::new("bold", "Bold"), |s, c| s.map(c, bold(c)))
}

fn identity_style(id: &str) -> Style {
    charset::baseline().fold(Style::new(id, id), |s, c| s.map(c, c.to_string()))
}

fn test_pack() -> FontPack {
    let mut pack = FontPack::new("test", "Test Pack", Category::Core);
    pack.description = "Bold letters".into();
    pack.styles.push(bold_style());
    pack.decorators
        .push(Decorator::new("sparkles", "Sparkles", "✨{text}✨"));
    pack
}

fn engine_with(packs: Vec<FontPack>) -> StyleEngine {
    let mut registry = PackRegistry::new();
    registry.load_packs(packs).unwrap();
    StyleEngine::from_registry(&registry)
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn batch_load_keeps_packs_before_failure() {
    let mut first = test_pack();
    first.id = "first".into();

    let mut broken = test_pack();
    broken.id = "broken".into();
    broken.styles = vec![Style::new("partial", "Partial").map('a', "𝐚")];

    let mut third = test_pack();
    third.id = "third".into();

    let mut registry = PackRegistry::new();
    let err = registry.load_packs(vec![first, broken, third]).unwrap_err();

    assert!(matches!(err, RegistryError::InvalidPack { ref id, .. } if id == "broken"));
    assert!(registry.is_pack_loaded("first"));
    assert!(!registry.is_pack_loaded("broken"));
    assert!(!registry.is_pack_loaded("third"));
    assert_eq!(registry.pack_count(), 1);
}

#[test]
fn batch_load_stops_at_leading_failure() {
    let mut broken = test_pack();
    broken.id = "broken".into();
    broken.styles.clear();

    let mut registry = PackRegistry::new();
    let err = registry.load_packs(vec![broken, test_pack()]).unwrap_err();

    assert!(err.to_string().contains("Pack missing styles array"));
    assert_eq!(registry.pack_count(), 0);
}

#[test]
fn missing_char_error_names_the_char() {
    let mut pack = test_pack();
    pack.styles = vec![charset::baseline()
        .filter(|&c| c != 'Q')
        .fold(Style::new("noq", "No Q"), |s, c| s.map(c, c.to_string()))];

    let err = PackRegistry::new().load_pack(pack).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid pack: test\nStyle noq missing mappings for: Q"
    );
}

#[test]
fn strict_registry_rejects_placeholderless_decorator() {
    let mut pack = test_pack();
    pack.decorators
        .push(Decorator::new("plain", "Plain", "no placeholder"));

    let mut basic = PackRegistry::new();
    assert!(basic.load_pack(pack.clone()).is_ok());

    let mut strict = PackRegistry::with_level(ValidationLevel::Strict);
    let err = strict.load_pack(pack).unwrap_err();
    assert!(err
        .to_string()
        .contains("decorators[1].pattern: Decorator pattern must include {text} placeholder"));
}

#[test]
fn load_store_reads_pack_files() {
    let temp = TempDir::new().unwrap();
    let mut seasonal = test_pack();
    seasonal.id = "seasonal".into();
    seasonal.category = Category::Seasonal;
    seasonal.price = 1.99;

    for pack in [test_pack(), seasonal] {
        std::fs::write(
            temp.path().join(format!("{}.json", pack.id)),
            pack.to_json().unwrap(),
        )
        .unwrap();
    }

    let mut registry = PackRegistry::new();
    let loaded = registry.load_store(&PackStore::new(temp.path())).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(registry.free_packs().len(), 1);
    assert_eq!(registry.premium_packs()[0].id, "seasonal");
    assert_eq!(registry.packs_by_category(Category::Seasonal).len(), 1);
}

// =============================================================================
// Engine
// =============================================================================

#[test]
fn bold_transform() {
    let mut engine = engine_with(vec![test_pack()]);
    let result = engine
        .apply_style(&StyleRequest::new("Hello", "bold").in_pack("test"))
        .unwrap();

    assert_eq!(result.original, "Hello");
    assert_eq!(result.styled, "𝐇𝐞𝐥𝐥𝐨");
    assert_eq!(result.style_id, "test_bold");
    assert_eq!(result.pack_id, "test");
}

#[test]
fn unmapped_chars_pass_through() {
    let mut engine = engine_with(vec![test_pack()]);
    let result = engine
        .apply_style(&StyleRequest::new("Hi 👋 café", "bold").in_pack("test"))
        .unwrap();
    assert_eq!(result.styled, "𝐇𝐢 👋 𝐜𝐚𝐟é");
}

#[test]
fn decorator_wraps_styled_text() {
    let mut engine = engine_with(vec![test_pack()]);
    let request = StyleRequest::new("Hello", "bold")
        .in_pack("test")
        .with_decorator("sparkles");

    assert_eq!(engine.apply_style(&request).unwrap().styled, "✨𝐇𝐞𝐥𝐥𝐨✨");
}

#[test]
fn missing_decorator_is_ignored() {
    let mut engine = engine_with(vec![test_pack()]);
    let request = StyleRequest::new("Hello", "bold")
        .in_pack("test")
        .with_decorator("nope");

    assert_eq!(engine.apply_style(&request).unwrap().styled, "𝐇𝐞𝐥𝐥𝐨");
}

#[test]
fn only_first_placeholder_is_replaced() {
    let decorator = Decorator::new("twice", "Twice", "{text} and {text}");
    assert_eq!(
        StyleEngine::apply_decorator("X", &decorator),
        "X and {text}"
    );
}

#[test]
fn empty_input() {
    let mut engine = engine_with(vec![test_pack()]);
    let result = engine
        .apply_style(&StyleRequest::new("", "bold").in_pack("test"))
        .unwrap();
    assert_eq!(result.styled, "");
}

#[test]
fn missing_pack_and_style() {
    let mut engine = engine_with(vec![test_pack()]);

    let err = engine
        .apply_style(&StyleRequest::new("Hello", "bold").in_pack("missing"))
        .unwrap_err();
    assert_eq!(err, EngineError::PackNotFound("missing".into()));
    insta::assert_snapshot!(err.to_string(), @"Pack not found: missing");

    let err = engine
        .apply_style(&StyleRequest::new("Hello", "italic").in_pack("test"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Style not found: italic in pack test");
}

#[test]
fn multiple_styles_and_preview() {
    let mut pack = test_pack();
    pack.styles.push(identity_style("plain"));
    let mut engine = engine_with(vec![pack]);

    let results = engine
        .apply_multiple_styles("Hi", &["plain", "bold"], "test")
        .unwrap();
    let styled: Vec<_> = results.iter().map(|r| r.styled.as_str()).collect();
    assert_eq!(styled, vec!["Hi", "𝐇𝐢"]);

    let preview = engine.preview_styles("Hi", &["bold", "unknown"], "test");
    assert_eq!(preview[0].styled, "𝐇𝐢");
    assert_eq!(preview[1].styled, "Hi");
    assert_eq!(preview[1].style_id, "test_unknown");

    let all = engine.preview("Hi", "test").unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn styling_does_not_change_registry_packs() {
    let mut registry = PackRegistry::new();
    registry.load_pack(test_pack()).unwrap();

    let mut engine = StyleEngine::from_registry(&registry);
    engine
        .apply_style(&StyleRequest::new("Hello", "bold").in_pack("test"))
        .unwrap();

    assert_eq!(registry.get_pack("test"), Some(&test_pack()));
}
