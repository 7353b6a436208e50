//! engine::style
//!
//! Applies styles and decorators to text.
//!
//! # Pipeline
//!
//! ```text
//! resolve pack -> resolve style -> load mapping -> transform -> [decorate]
//! ```
//!
//! A missing pack or style is an error. A missing decorator is not: the
//! undecorated styled text is returned instead.
//!
//! # Trust
//!
//! [`StyleEngine::load_pack`] does not validate. Populate the engine from a
//! [`PackRegistry`] (see [`StyleEngine::from_registry`]) when packs come
//! from untrusted input.
//!
//! # Example
//!
//! ```
//! use fontpack::core::types::{Category, Decorator, FontPack, Style};
//! use fontpack::engine::style::{StyleEngine, StyleRequest};
//!
//! let mut pack = FontPack::new("test", "Test", Category::Core);
//! pack.styles.push(Style::new("bold", "Bold").map('H', "𝐇").map('i', "𝐢"));
//! pack.decorators.push(Decorator::new("stars", "Stars", "✨{text}✨"));
//!
//! let mut engine = StyleEngine::new();
//! engine.load_pack(pack);
//!
//! let request = StyleRequest::new("Hi", "bold").in_pack("test").with_decorator("stars");
//! let result = engine.apply_style(&request).unwrap();
//! assert_eq!(result.styled, "✨𝐇𝐢✨");
//! assert_eq!(result.style_id, "test_bold");
//! ```

use thiserror::Error;

use super::packs::PackMap;
use super::registry::PackRegistry;
use crate::core::mapper::CharacterMapper;
use crate::core::types::{Decorator, FontPack, StyledResult};

/// Pack id used when a request does not name one.
pub const DEFAULT_PACK_ID: &str = "default";

/// Errors from style application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Pack not found: {0}")]
    PackNotFound(String),

    #[error("Style not found: {style_id} in pack {pack_id}")]
    StyleNotFound { style_id: String, pack_id: String },
}

/// A single style application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    pub text: &'a str,
    pub style_id: &'a str,
    pub pack_id: &'a str,
    pub decorator_id: Option<&'a str>,
}

impl<'a> StyleRequest<'a> {
    /// Request `style_id` from the default pack, undecorated.
    pub fn new(text: &'a str, style_id: &'a str) -> Self {
        Self {
            text,
            style_id,
            pack_id: DEFAULT_PACK_ID,
            decorator_id: None,
        }
    }

    /// Use a specific pack.
    pub fn in_pack(mut self, pack_id: &'a str) -> Self {
        self.pack_id = pack_id;
        self
    }

    /// Wrap the result in a decorator.
    pub fn with_decorator(mut self, decorator_id: &'a str) -> Self {
        self.decorator_id = Some(decorator_id);
        self
    }
}

/// Resolves (pack, style) pairs and runs the transform pipeline.
#[derive(Debug, Clone, Default)]
pub struct StyleEngine {
    mapper: CharacterMapper,
    packs: PackMap,
}

impl StyleEngine {
    /// Create an engine with no packs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine holding every pack in the registry.
    pub fn from_registry(registry: &PackRegistry) -> Self {
        let mut engine = Self::new();
        for pack in registry.installed_packs() {
            engine.load_pack(pack.clone());
        }
        engine
    }

    /// Store a pack for lookup, replacing any pack with the same id.
    pub fn load_pack(&mut self, pack: FontPack) {
        self.packs.insert(pack);
    }

    /// Apply one style (and optional decorator) to text.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::PackNotFound` or `EngineError::StyleNotFound`
    /// when the request names something that is not loaded.
    pub fn apply_style(&mut self, request: &StyleRequest<'_>) -> Result<StyledResult, EngineError> {
        let pack = self
            .packs
            .get(request.pack_id)
            .ok_or_else(|| EngineError::PackNotFound(request.pack_id.to_string()))?;

        let style = pack
            .style(request.style_id)
            .ok_or_else(|| EngineError::StyleNotFound {
                style_id: request.style_id.to_string(),
                pack_id: request.pack_id.to_string(),
            })?;

        self.mapper.load_mapping(style);
        let mut styled = self.mapper.transform(request.text);

        if let Some(decorator) = request.decorator_id.and_then(|id| pack.decorator(id)) {
            styled = Self::apply_decorator(&styled, decorator);
        }

        Ok(StyledResult {
            original: request.text.to_string(),
            styled,
            style_id: StyledResult::composite_id(request.pack_id, request.style_id),
            pack_id: request.pack_id.to_string(),
        })
    }

    /// Apply several styles to the same text, in order.
    ///
    /// The first failing style aborts the batch.
    pub fn apply_multiple_styles(
        &mut self,
        text: &str,
        style_ids: &[&str],
        pack_id: &str,
    ) -> Result<Vec<StyledResult>, EngineError> {
        style_ids
            .iter()
            .map(|style_id| self.apply_style(&StyleRequest::new(text, style_id).in_pack(pack_id)))
            .collect()
    }

    /// Substitute `text` into the decorator's pattern.
    ///
    /// Only the first `{text}` token is replaced.
    pub fn apply_decorator(text: &str, decorator: &Decorator) -> String {
        decorator.apply(text)
    }

    /// Apply a style and decorator, returning only the styled text.
    pub fn apply_style_with_decorator(
        &mut self,
        text: &str,
        style_id: &str,
        decorator_id: &str,
        pack_id: &str,
    ) -> Result<String, EngineError> {
        let request = StyleRequest::new(text, style_id)
            .in_pack(pack_id)
            .with_decorator(decorator_id);
        Ok(self.apply_style(&request)?.styled)
    }

    /// Preview every style in a pack.
    ///
    /// Styles are applied in pack order. A style that fails yields the
    /// original text rather than aborting the preview.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::PackNotFound` if the pack is not loaded.
    pub fn preview(&mut self, text: &str, pack_id: &str) -> Result<Vec<StyledResult>, EngineError> {
        let style_ids: Vec<String> = self
            .packs
            .get(pack_id)
            .ok_or_else(|| EngineError::PackNotFound(pack_id.to_string()))?
            .styles
            .iter()
            .map(|s| s.id.clone())
            .collect();

        Ok(self.preview_styles(text, style_ids.as_slice(), pack_id))
    }

    /// Preview a chosen list of styles.
    ///
    /// Never fails: any style that cannot be applied (unknown pack or style)
    /// yields a result whose `styled` text equals the original.
    pub fn preview_styles<S: AsRef<str>>(
        &mut self,
        text: &str,
        style_ids: &[S],
        pack_id: &str,
    ) -> Vec<StyledResult> {
        style_ids
            .iter()
            .map(|style_id| {
                let style_id = style_id.as_ref();
                self.apply_style(&StyleRequest::new(text, style_id).in_pack(pack_id))
                    .unwrap_or_else(|_| StyledResult {
                        original: text.to_string(),
                        styled: text.to_string(),
                        style_id: StyledResult::composite_id(pack_id, style_id),
                        pack_id: pack_id.to_string(),
                    })
            })
            .collect()
    }

    /// All loaded packs in load order.
    pub fn loaded_packs(&self) -> &[FontPack] {
        self.packs.as_slice()
    }

    pub fn get_pack(&self, pack_id: &str) -> Option<&FontPack> {
        self.packs.get(pack_id)
    }
}
