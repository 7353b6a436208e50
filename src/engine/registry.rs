//! engine::registry
//!
//! Authoritative in-memory store of validated font packs.
//!
//! # Invariants
//!
//! - Every stored pack passed validation at the registry's level
//! - Loading is all-or-nothing per pack: a rejected pack is never stored
//! - Batch loads run in order and stop at the first rejection; packs loaded
//!   earlier in the batch stay loaded
//!
//! # Concurrency
//!
//! The registry has no internal synchronization. Share it behind a lock if
//! it is mutated from more than one thread.
//!
//! # Example
//!
//! ```
//! use fontpack::core::charset;
//! use fontpack::core::types::{Category, FontPack, Style};
//! use fontpack::engine::registry::PackRegistry;
//!
//! let style = charset::baseline().fold(Style::new("plain", "Plain"), |s, c| s.map(c, c.to_string()));
//! let mut pack = FontPack::new("default", "Default", Category::Core);
//! pack.styles.push(style);
//!
//! let mut registry = PackRegistry::new();
//! registry.load_pack(pack).unwrap();
//! assert!(registry.is_pack_loaded("default"));
//! assert_eq!(registry.free_packs().len(), 1);
//! ```

use thiserror::Error;

use super::packs::PackMap;
use crate::core::draft::PackDraft;
use crate::core::store::{PackStore, StoreError};
use crate::core::types::{Category, FontPack, ValidationResult};
use crate::core::validate::{validate_draft, validate_pack_at, ValidationLevel};

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The pack failed validation and was not stored.
    #[error("Invalid pack: {id}\n{}", .errors.join("\n"))]
    InvalidPack { id: String, errors: Vec<String> },

    /// A pack file could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registry of validated font packs keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    packs: PackMap,
    level: ValidationLevel,
}

impl PackRegistry {
    /// Create an empty registry validating at the basic level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry validating at `level`.
    pub fn with_level(level: ValidationLevel) -> Self {
        Self {
            packs: PackMap::new(),
            level,
        }
    }

    /// The validation level applied on load.
    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    /// Validate a pack without storing it.
    pub fn validate_pack(&self, pack: &FontPack) -> ValidationResult {
        validate_pack_at(pack, self.level)
    }

    /// Validate and store a pack, replacing any pack with the same id.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPack` carrying every validation error.
    pub fn load_pack(&mut self, pack: FontPack) -> Result<(), RegistryError> {
        let result = self.validate_pack(&pack);
        if !result.valid {
            return Err(RegistryError::InvalidPack {
                id: pack.id,
                errors: result.errors,
            });
        }

        self.packs.insert(pack);
        Ok(())
    }

    /// Validate and store a leniently decoded pack.
    ///
    /// A category or price that cannot be typed is reported alongside the
    /// other errors at every validation level.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPack` carrying every validation error.
    pub fn load_draft(&mut self, draft: PackDraft) -> Result<(), RegistryError> {
        let result = validate_draft(&draft, self.level);
        let id = draft.pack().id.clone();
        if !result.valid {
            return Err(RegistryError::InvalidPack {
                id,
                errors: result.errors,
            });
        }

        let pack = draft.into_pack().map_err(|e| RegistryError::InvalidPack {
            id,
            errors: vec![e.to_string()],
        })?;
        self.packs.insert(pack);
        Ok(())
    }

    /// Load packs in order, stopping at the first invalid one.
    ///
    /// Packs loaded before the failure remain loaded.
    pub fn load_packs(
        &mut self,
        packs: impl IntoIterator<Item = FontPack>,
    ) -> Result<(), RegistryError> {
        for pack in packs {
            self.load_pack(pack)?;
        }
        Ok(())
    }

    /// Load every pack file from a store, in file-name order.
    ///
    /// Returns the number of packs loaded. Read failures and invalid packs
    /// stop the load the same way [`PackRegistry::load_packs`] does.
    pub fn load_store(&mut self, store: &PackStore) -> Result<usize, RegistryError> {
        let mut loaded = 0;
        for path in store.list()? {
            self.load_draft(store.read(&path)?)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn get_pack(&self, id: &str) -> Option<&FontPack> {
        self.packs.get(id)
    }

    /// All installed packs in insertion order.
    pub fn installed_packs(&self) -> &[FontPack] {
        self.packs.as_slice()
    }

    pub fn packs_by_category(&self, category: Category) -> Vec<&FontPack> {
        self.packs.iter().filter(|p| p.category == category).collect()
    }

    /// Packs with `price == 0`.
    pub fn free_packs(&self) -> Vec<&FontPack> {
        self.packs.iter().filter(|p| p.is_free()).collect()
    }

    /// Packs with `price > 0`.
    pub fn premium_packs(&self) -> Vec<&FontPack> {
        self.packs.iter().filter(|p| p.is_premium()).collect()
    }

    pub fn is_pack_loaded(&self, id: &str) -> bool {
        self.packs.contains(id)
    }

    /// Remove a pack; returns true if one was removed.
    pub fn remove_pack(&mut self, id: &str) -> bool {
        self.packs.remove(id).is_some()
    }

    pub fn clear_all(&mut self) {
        self.packs.clear();
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }
}
