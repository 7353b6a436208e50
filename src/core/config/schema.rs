//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global file and the project override;
//! every key is optional so either file may set any subset.
//!
//! # Validation
//!
//! Values are validated after parsing (e.g. `default_pack` must be
//! non-empty, `max_text_length` must be positive).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::validate::ValidationLevel;

/// Contents of a `config.toml` file.
///
/// # Example
///
/// ```toml
/// packs_dir = "data/packs"
/// default_pack = "default"
/// validation = "strict"
/// max_text_length = 200
///
/// [preview]
/// styles = ["bold", "circled", "fullwidth"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory containing pack JSON files
    pub packs_dir: Option<PathBuf>,

    /// Pack used when a command does not name one
    pub default_pack: Option<String>,

    /// Registry validation level
    pub validation: Option<ValidationLevel>,

    /// Maximum input text length, in characters
    pub max_text_length: Option<usize>,

    /// Preview grid settings
    pub preview: Option<PreviewConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pack) = &self.default_pack {
            if pack.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "default_pack cannot be empty".to_string(),
                ));
            }
        }

        if self.max_text_length == Some(0) {
            return Err(ConfigError::InvalidValue(
                "max_text_length must be greater than 0".to_string(),
            ));
        }

        if let Some(preview) = &self.preview {
            preview.validate()?;
        }

        Ok(())
    }
}

/// Preview grid settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Style ids shown by default, in order
    pub styles: Option<Vec<String>>,
}

impl PreviewConfig {
    /// Validate the preview settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(styles) = &self.styles {
            if styles.iter().any(String::is_empty) {
                return Err(ConfigError::InvalidValue(
                    "preview styles cannot contain an empty id".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FileConfig::default();
        assert!(config.packs_dir.is_none());
        assert!(config.default_pack.is_none());
        assert!(config.validation.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full() {
        let config: FileConfig = toml::from_str(
            r#"
            packs_dir = "packs"
            default_pack = "core"
            validation = "strict"
            max_text_length = 80

            [preview]
            styles = ["bold", "italic"]
            "#,
        )
        .unwrap();

        assert_eq!(config.packs_dir, Some(PathBuf::from("packs")));
        assert_eq!(config.default_pack.as_deref(), Some("core"));
        assert_eq!(config.validation, Some(ValidationLevel::Strict));
        assert_eq!(config.max_text_length, Some(80));
        assert_eq!(
            config.preview.and_then(|p| p.styles),
            Some(vec!["bold".to_string(), "italic".to_string()])
        );
    }

    #[test]
    fn empty_default_pack_rejected() {
        let config = FileConfig {
            default_pack: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_length_rejected() {
        let config = FileConfig {
            max_text_length: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_preview_style_rejected() {
        let config = FileConfig {
            preview: Some(PreviewConfig {
                styles: Some(vec!["bold".into(), String::new()]),
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_validation_level_rejected() {
        let result: Result<FileConfig, _> = toml::from_str(r#"validation = "loose""#);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let result: Result<FileConfig, _> = toml::from_str(
            r#"
            packs_dir = "packs"
            unknown_field = true
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip() {
        let config = FileConfig {
            packs_dir: Some(PathBuf::from("packs")),
            default_pack: Some("default".to_string()),
            validation: Some(ValidationLevel::Basic),
            max_text_length: Some(120),
            preview: Some(PreviewConfig {
                styles: Some(vec!["bold".to_string()]),
            }),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
