//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! fontpack has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Per-directory overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$FONTPACK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/fontpack/config.toml`
//! 3. `~/.fontpack/config.toml`
//!
//! # Project Config Location
//!
//! `<project>/.fontpack/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use fontpack::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("."))).unwrap();
//! println!("Packs: {}", config.packs_dir().display());
//! println!("Default pack: {}", config.default_pack());
//! ```

pub mod schema;

pub use schema::{FileConfig, PreviewConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::text::DEFAULT_MAX_TEXT_LENGTH;
use crate::core::validate::ValidationLevel;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "FONTPACK_CONFIG";

/// Default packs directory, relative to the project.
pub const DEFAULT_PACKS_DIR: &str = "data/packs";

/// Default pack id.
pub const DEFAULT_PACK: &str = "default";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: project overrides global, global overrides
/// the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Project configuration (if present)
    pub project: Option<FileConfig>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads the project override.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing files are not an error.
    pub fn load(project_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global();
        let project_path = project_dir
            .map(Self::project_config_path)
            .filter(|p| p.exists());
        Self::load_from(global_path.as_deref(), project_path.as_deref())
    }

    /// Load configuration from explicit file paths.
    pub fn load_from(global: Option<&Path>, project: Option<&Path>) -> Result<Config, ConfigError> {
        let global_config = match global {
            Some(path) => Self::read_file(path)?,
            None => FileConfig::default(),
        };
        let project_config = project.map(Self::read_file).transpose()?;

        global_config.validate()?;
        if let Some(ref p) = project_config {
            p.validate()?;
        }

        Ok(Config {
            global: global_config,
            project: project_config,
            global_path: global.map(Path::to_path_buf),
            project_path: project.map(Path::to_path_buf),
        })
    }

    /// Locate the global config file, if one exists.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("fontpack/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".fontpack/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the project config file for `project_dir`.
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(".fontpack/config.toml")
    }

    /// Look up a value, project first.
    fn lookup<T>(&self, get: impl Fn(&FileConfig) -> Option<T>) -> Option<T> {
        self.project.as_ref().and_then(&get).or_else(|| get(&self.global))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Directory containing pack files.
    ///
    /// Defaults to `data/packs`.
    pub fn packs_dir(&self) -> PathBuf {
        self.lookup(|c| c.packs_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKS_DIR))
    }

    /// Pack used when none is named.
    ///
    /// Defaults to `default`.
    pub fn default_pack(&self) -> String {
        self.lookup(|c| c.default_pack.clone())
            .unwrap_or_else(|| DEFAULT_PACK.to_string())
    }

    /// Registry validation level.
    ///
    /// Defaults to `basic`.
    pub fn validation(&self) -> ValidationLevel {
        self.lookup(|c| c.validation).unwrap_or_default()
    }

    /// Maximum input text length.
    ///
    /// Defaults to 200.
    pub fn max_text_length(&self) -> usize {
        self.lookup(|c| c.max_text_length)
            .unwrap_or(DEFAULT_MAX_TEXT_LENGTH)
    }

    /// Style ids for the default preview grid, if configured.
    pub fn preview_styles(&self) -> Option<Vec<String>> {
        self.lookup(|c| c.preview.as_ref().and_then(|p| p.styles.clone()))
    }

    /// Path the global config was loaded from.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path the project config was loaded from.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_files() {
        let config = Config::load_from(None, None).unwrap();
        assert_eq!(config.packs_dir(), PathBuf::from("data/packs"));
        assert_eq!(config.default_pack(), "default");
        assert_eq!(config.validation(), ValidationLevel::Basic);
        assert_eq!(config.max_text_length(), 200);
        assert!(config.preview_styles().is_none());
        assert!(config.global_config_loaded_from().is_none());
    }

    #[test]
    fn load_global_file() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "config.toml",
            r#"
            packs_dir = "/srv/packs"
            validation = "strict"
            "#,
        );

        let config = Config::load_from(Some(&path), None).unwrap();
        assert_eq!(config.packs_dir(), PathBuf::from("/srv/packs"));
        assert_eq!(config.validation(), ValidationLevel::Strict);
        assert_eq!(config.global_config_loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn project_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = write(
            temp.path(),
            "global.toml",
            r#"
            default_pack = "core"
            max_text_length = 50
            "#,
        );
        let project = write(temp.path(), "project.toml", r#"default_pack = "seasonal""#);

        let config = Config::load_from(Some(&global), Some(&project)).unwrap();
        assert_eq!(config.default_pack(), "seasonal");
        assert_eq!(config.max_text_length(), 50);
    }

    #[test]
    fn load_finds_project_config() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            ".fontpack/config.toml",
            r#"
            [preview]
            styles = ["bold"]
            "#,
        );

        let config = Config::load(Some(temp.path())).unwrap();
        assert_eq!(config.preview_styles(), Some(vec!["bold".to_string()]));
        assert!(config.project_config_loaded_from().is_some());
    }

    #[test]
    fn parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "packs_dir = [");

        let err = Config::load_from(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "max_text_length = 0");

        let result = Config::load_from(None, Some(&path));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "config.toml", "colour = \"red\"");
        assert!(Config::load_from(Some(&path), None).is_err());
    }
}
