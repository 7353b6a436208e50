//! core::store
//!
//! Font pack files on disk.
//!
//! # Layout
//!
//! A packs directory holds one `<name>.json` file per pack. The store only
//! reads files and decodes them leniently into [`PackDraft`]s; validation
//! and typing are the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use fontpack::core::store::PackStore;
//!
//! let store = PackStore::new("data/packs");
//! for path in store.list().unwrap() {
//!     let draft = store.read(&path).unwrap();
//!     println!("{} ({})", draft.pack().name, draft.pack().id);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::draft::PackDraft;

/// File extension for pack files.
pub const PACK_EXTENSION: &str = "json";

/// Errors from pack file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read packs directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read pack file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse pack file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Directory of pack JSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStore {
    dir: PathBuf,
}

impl PackStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The packs directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a pack name to a file path.
    ///
    /// The `.json` suffix is optional.
    ///
    /// ```
    /// use fontpack::core::store::PackStore;
    /// use std::path::PathBuf;
    ///
    /// let store = PackStore::new("/packs");
    /// assert_eq!(store.resolve("default"), PathBuf::from("/packs/default.json"));
    /// assert_eq!(store.resolve("default.json"), PathBuf::from("/packs/default.json"));
    /// ```
    pub fn resolve(&self, name: &str) -> PathBuf {
        let suffix = format!(".{PACK_EXTENSION}");
        if name.ends_with(&suffix) {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{name}{suffix}"))
        }
    }

    /// List pack files in the directory, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadDir` if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<PathBuf>, StoreError> {
        let read_dir_err = |source| StoreError::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == PACK_EXTENSION) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Read a pack file into a draft.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` for I/O failures and `StoreError::Parse`
    /// when the contents are not a JSON object. Bad field values are left
    /// for the validator.
    pub fn read(&self, path: &Path) -> Result<PackDraft, StoreError> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        PackDraft::from_json(&contents).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
