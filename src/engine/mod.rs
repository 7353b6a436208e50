//! engine
//!
//! Pack registry and the style application pipeline.
//!
//! # Architecture
//!
//! ```text
//! FontPack JSON -> PackRegistry (validate, store) -> StyleEngine -> StyledResult
//! ```
//!
//! - [`registry`] - Validated pack store; the trust boundary for pack input
//! - [`style`] - Resolves (pack, style) pairs, transforms, and decorates
//! - [`packs`] - Insertion-ordered pack map shared by both
//!
//! # Invariants
//!
//! - Packs enter the registry only after validation
//! - The engine assumes its packs were validated upstream
//! - Every operation is synchronous; failures surface immediately to the caller
//!
//! # Example
//!
//! ```no_run
//! use fontpack::core::store::PackStore;
//! use fontpack::engine::{PackRegistry, StyleEngine, StyleRequest};
//!
//! let mut registry = PackRegistry::new();
//! registry.load_store(&PackStore::new("data/packs"))?;
//!
//! let mut engine = StyleEngine::from_registry(&registry);
//! let result = engine.apply_style(&StyleRequest::new("Hello", "bold"))?;
//! println!("{}", result.styled);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod packs;
pub mod registry;
pub mod style;

pub use packs::PackMap;
pub use registry::{PackRegistry, RegistryError};
pub use style::{EngineError, StyleEngine, StyleRequest, DEFAULT_PACK_ID};
