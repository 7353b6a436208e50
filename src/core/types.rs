//! core::types
//!
//! Data model for font packs, styles, and decorators.
//!
//! # Types
//!
//! - [`FontPack`] - Versioned bundle of styles and decorators
//! - [`Style`] - Per-character substitution table plus display metadata
//! - [`Decorator`] - Template that wraps styled text
//! - [`Category`] - Closed set of pack categories
//! - [`StyledResult`] - Output of a single style application
//! - [`ValidationResult`] - Outcome of the pack validator
//!
//! # Wire Format
//!
//! Packs are JSON documents with camelCase keys. Identity fields default to
//! the empty string when absent so that the validator (not the decoder)
//! reports them. `category` and `price` are required.
//!
//! # Example
//!
//! ```
//! use fontpack::core::types::{Category, FontPack};
//!
//! let json = r#"{
//!     "id": "default",
//!     "name": "Default",
//!     "category": "core",
//!     "version": "1.0.0",
//!     "description": "Built-in styles",
//!     "price": 0,
//!     "styles": [],
//!     "decorators": [{ "id": "stars", "name": "Stars", "pattern": "✨{text}✨" }]
//! }"#;
//!
//! let pack = FontPack::from_json(json).unwrap();
//! assert_eq!(pack.category, Category::Core);
//! assert!(pack.is_free());
//! assert_eq!(pack.decorator("stars").unwrap().apply("hi"), "✨hi✨");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder token substituted by a decorator.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Errors from model decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("failed to parse font pack: {0}")]
    ParseError(String),

    #[error("invalid category '{0}', must be one of: core, aesthetic, seasonal, community")]
    InvalidCategory(String),
}

/// Pack category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Aesthetic,
    Seasonal,
    Community,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::Aesthetic,
        Category::Seasonal,
        Category::Community,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Aesthetic => "aesthetic",
            Category::Seasonal => "seasonal",
            Category::Community => "community",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TypeError::InvalidCategory(s.to_string()))
    }
}

/// A character substitution table with display metadata.
///
/// `mapping` keys are expected to be single characters. Keys of any other
/// length are kept for round-tripping but never match during transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub preview: String,

    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
}

impl Style {
    /// Create a style with an empty mapping.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            preview: name.clone(),
            name,
            mapping: BTreeMap::new(),
        }
    }

    /// Add a single character mapping (builder style).
    pub fn map(mut self, from: char, to: impl Into<String>) -> Self {
        self.mapping.insert(from.to_string(), to.into());
        self
    }

    /// Look up the replacement for a character.
    pub fn replacement(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.mapping.get(&*c.encode_utf8(&mut buf)).map(String::as_str)
    }

    /// Whether the mapping has an entry for `c`.
    pub fn maps(&self, c: char) -> bool {
        self.replacement(c).is_some()
    }

    /// Mapping keys that are not exactly one character long.
    pub fn multi_char_keys(&self) -> Vec<&str> {
        self.mapping
            .keys()
            .filter(|k| k.chars().count() != 1)
            .map(String::as_str)
            .collect()
    }
}

/// A text template that wraps styled output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorator {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Decorator {
    /// Create a decorator.
    pub fn new(id: impl Into<String>, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pattern: pattern.into(),
            color: None,
        }
    }

    /// Whether the pattern contains the `{text}` placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.pattern.contains(TEXT_PLACEHOLDER)
    }

    /// Substitute `text` into the pattern.
    ///
    /// Only the first `{text}` token is replaced; later tokens are left
    /// verbatim. A pattern with no token is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replacen(TEXT_PLACEHOLDER, text, 1)
    }
}

/// A named, versioned bundle of styles and decorators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPack {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub category: Category,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Price in USD; `0` denotes a free pack.
    pub price: f64,

    #[serde(default)]
    pub styles: Vec<Style>,

    #[serde(default)]
    pub decorators: Vec<Decorator>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

impl FontPack {
    /// Create an empty free pack.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            version: "1.0.0".to_string(),
            description: String::new(),
            price: 0.0,
            styles: Vec::new(),
            decorators: Vec::new(),
            preview_image: None,
        }
    }

    /// Decode a pack from JSON.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::ParseError` for malformed JSON, a missing
    /// `category`/`price`, or an unknown category.
    pub fn from_json(json: &str) -> Result<Self, TypeError> {
        serde_json::from_str(json).map_err(|e| TypeError::ParseError(e.to_string()))
    }

    /// Encode the pack as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TypeError> {
        serde_json::to_string_pretty(self).map_err(|e| TypeError::ParseError(e.to_string()))
    }

    /// Whether the pack is free (`price == 0`).
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Whether the pack is premium (`price > 0`).
    pub fn is_premium(&self) -> bool {
        self.price > 0.0
    }

    /// Find a style by id (first match).
    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Find a decorator by id (first match).
    pub fn decorator(&self, id: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.id == id)
    }
}

/// Output of applying one style to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledResult {
    /// The input text, unchanged.
    pub original: String,
    /// The transformed (and possibly decorated) text.
    pub styled: String,
    /// Composite id: `<pack_id>_<style_id>`.
    pub style_id: String,
    pub pack_id: String,
}

impl StyledResult {
    /// Build the composite style id used in results.
    pub fn composite_id(pack_id: &str, style_id: &str) -> String {
        format!("{pack_id}_{style_id}")
    }
}

/// Outcome of validating a pack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
