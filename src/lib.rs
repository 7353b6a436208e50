//! fontpack - Unicode text styling from validated font packs
//!
//! A font pack is a JSON document holding named character-mapping styles
//! (for example `H` → `𝐇`) and decorators that wrap styled text in a
//! pattern such as `✨{text}✨`. fontpack validates packs, keeps the valid
//! ones in a registry, and applies their styles to text.
//!
//! # Architecture
//!
//! - [`core`] - Pack types, the character mapper, validation, config, storage
//! - [`engine`] - The pack registry and the style engine
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`ui`] - Output helpers used by the CLI
//!
//! # Invariants
//!
//! 1. A pack in a [`engine::PackRegistry`] passed validation when it was loaded
//! 2. Characters without a mapping pass through unchanged
//! 3. Styling never mutates the pack it reads from

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
