//! core
//!
//! Core domain types, validation, and transformation for fontpack.
//!
//! # Modules
//!
//! - [`types`] - Font pack data model: packs, styles, decorators
//! - [`draft`] - Lenient pack decoding so validation sees every problem
//! - [`charset`] - The baseline character set every style must cover
//! - [`mapper`] - Character-by-character substitution
//! - [`validate`] - Structural validation of packs
//! - [`text`] - Input text checks
//! - [`store`] - Pack files on disk
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Untrusted JSON is decoded into strong types before anything else
//! - Validation collects every violation, never just the first
//! - Transformation is pure given a loaded mapping

pub mod charset;
pub mod config;
pub mod draft;
pub mod mapper;
pub mod store;
pub mod text;
pub mod types;
pub mod validate;
