//! core::draft
//!
//! Lenient decoding of pack JSON for validation.
//!
//! [`FontPack::from_json`] rejects a document at its first shape problem:
//! an unknown category, a missing price, a number where a string belongs.
//! A [`PackDraft`] accepts any JSON object so the validator can report every
//! problem at once. Ill-typed fields read as empty or absent and the rest of
//! the document is kept.
//!
//! A draft only becomes a [`FontPack`] through [`PackDraft::into_pack`],
//! which refuses drafts whose category or price could not be typed.
//!
//! # Example
//!
//! ```
//! use fontpack::core::draft::PackDraft;
//!
//! let draft = PackDraft::from_json(r#"{ "id": 7, "category": "retro", "styles": [] }"#).unwrap();
//! assert_eq!(draft.pack().id, "");
//! assert!(draft.category().is_none());
//! assert!(draft.price().is_none());
//! assert!(!draft.has_decorators());
//! assert!(draft.into_pack().is_err());
//! ```

use serde_json::{Map, Value};

use super::types::{Category, Decorator, FontPack, Style, TypeError};

/// A pack document decoded without rejecting bad fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PackDraft {
    /// Every field that could be read. Untyped category and price hold
    /// placeholders; check [`PackDraft::category`] and [`PackDraft::price`].
    pack: FontPack,
    category: Option<Category>,
    price: Option<f64>,
    has_decorators: bool,
    /// Per style: whether `mapping` was a JSON object.
    mapping_objects: Vec<bool>,
}

impl PackDraft {
    /// Decode a draft from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::ParseError` only for malformed JSON or a
    /// document that is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, TypeError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| TypeError::ParseError(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode a draft from a parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, TypeError> {
        let root = value.as_object().ok_or_else(|| {
            TypeError::ParseError("font pack must be a JSON object".to_string())
        })?;

        let category = root
            .get("category")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok());
        let price = root.get("price").and_then(Value::as_f64);
        let decorators = root.get("decorators").and_then(Value::as_array);

        let (styles, mapping_objects): (Vec<Style>, Vec<bool>) =
            array(root, "styles").map(style_entry).unzip();

        let pack = FontPack {
            id: string(root, "id"),
            name: string(root, "name"),
            category: category.unwrap_or(Category::Core),
            version: string(root, "version"),
            description: string(root, "description"),
            price: price.unwrap_or(0.0),
            styles,
            decorators: decorators
                .into_iter()
                .flatten()
                .map(decorator_entry)
                .collect(),
            preview_image: root
                .get("previewImage")
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        Ok(Self {
            pack,
            category,
            price,
            has_decorators: decorators.is_some(),
            mapping_objects,
        })
    }

    /// Wrap an already typed pack.
    pub fn from_pack(pack: &FontPack) -> Self {
        Self {
            category: Some(pack.category),
            price: Some(pack.price),
            has_decorators: true,
            mapping_objects: vec![true; pack.styles.len()],
            pack: pack.clone(),
        }
    }

    /// The readable part of the document.
    pub fn pack(&self) -> &FontPack {
        &self.pack
    }

    /// The category, if present and one of the known values.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The price, if present and numeric.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Whether `decorators` was an array (possibly empty).
    pub fn has_decorators(&self) -> bool {
        self.has_decorators
    }

    /// Whether the style at `index` had an object `mapping`.
    pub fn has_mapping_object(&self, index: usize) -> bool {
        self.mapping_objects.get(index).copied().unwrap_or(false)
    }

    /// Convert to a typed pack.
    ///
    /// Does not validate; run the validator on the draft first.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::ParseError` if the category or price could not
    /// be typed.
    pub fn into_pack(self) -> Result<FontPack, TypeError> {
        if self.category.is_none() {
            return Err(TypeError::ParseError(
                "font pack has a missing or unknown category".to_string(),
            ));
        }
        if self.price.is_none() {
            return Err(TypeError::ParseError(
                "font pack has a missing or non-numeric price".to_string(),
            ));
        }
        Ok(self.pack)
    }
}

fn string(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array<'a>(fields: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn style_entry(value: &Value) -> (Style, bool) {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);
    let mapping = fields.get("mapping").and_then(Value::as_object);

    let style = Style {
        id: string(fields, "id"),
        name: string(fields, "name"),
        preview: string(fields, "preview"),
        // Non-string replacements keep their key so coverage still counts them.
        mapping: mapping
            .into_iter()
            .flatten()
            .map(|(key, to)| (key.clone(), to.as_str().unwrap_or_default().to_string()))
            .collect(),
    };
    (style, mapping.is_some())
}

fn decorator_entry(value: &Value) -> Decorator {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);
    Decorator {
        id: string(fields, "id"),
        name: string(fields, "name"),
        pattern: string(fields, "pattern"),
        color: fields
            .get("color")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
