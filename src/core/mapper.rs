//! core::mapper
//!
//! Character-by-character substitution using one active mapping.
//!
//! # Granularity
//!
//! Text is iterated by Unicode scalar value (`char`). Multi-scalar grapheme
//! clusters are not segmented: each scalar is looked up on its own, and
//! unmapped scalars pass through unchanged, so emoji and combining marks
//! survive intact.
//!
//! # Example
//!
//! ```
//! use fontpack::core::mapper::CharacterMapper;
//! use fontpack::core::types::Style;
//!
//! let style = Style::new("bold", "Bold").map('a', "𝐚");
//! let mut mapper = CharacterMapper::new();
//! mapper.load_mapping(&style);
//!
//! assert_eq!(mapper.transform("abc"), "𝐚bc");
//! ```

use std::collections::HashMap;

use super::charset;
use super::types::Style;

/// Applies a single loaded character mapping to text.
#[derive(Debug, Clone, Default)]
pub struct CharacterMapper {
    mapping: HashMap<char, String>,
}

impl CharacterMapper {
    /// Create a mapper with an empty mapping (identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active mapping with a copy of the style's mapping.
    ///
    /// The previous mapping is discarded, never merged. Keys that are not
    /// exactly one character are skipped since they can never match.
    pub fn load_mapping(&mut self, style: &Style) {
        self.mapping = style
            .mapping
            .iter()
            .filter_map(|(key, value)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, value.clone())),
                    _ => None,
                }
            })
            .collect();
    }

    /// Transform text through the active mapping.
    ///
    /// Unmapped characters, and characters mapped to an empty string, are
    /// emitted unchanged.
    pub fn transform(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.mapping.get(&c) {
                Some(replacement) if !replacement.is_empty() => out.push_str(replacement),
                _ => out.push(c),
            }
        }
        out
    }

    /// Whether the active mapping covers the whole baseline character set.
    pub fn validate_mapping(&self) -> bool {
        charset::baseline().all(|c| self.mapping.contains_key(&c))
    }

    /// Reset to an empty mapping.
    pub fn clear(&mut self) {
        self.mapping.clear();
    }

    /// Number of characters in the active mapping.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the active mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
