//! core::validate
//!
//! Structural validation of font packs.
//!
//! # Tiers
//!
//! - **Basic** ([`validate_pack`]): required identity fields, a non-empty
//!   style list, style ids, and baseline character coverage. Its messages
//!   are a stable contract (e.g. `"Pack missing id"`).
//! - **Audit** ([`audit_pack`], [`audit_draft`]): the pack-authoring
//!   checks. Adds category, price, the decorators array, style/decorator
//!   metadata, duplicate ids, decorator placeholders, and multi-character
//!   mapping keys. Each finding carries the offending field.
//!
//! [`validate_draft`] selects a tier by [`ValidationLevel`]. At `Strict`,
//! the basic errors are kept verbatim and the audit-only findings are
//! appended as `"<field>: <message>"`. A category or price that cannot be
//! typed is appended at every level, since such a draft can never become a
//! [`FontPack`].
//!
//! # Invariants
//!
//! - Validation is exhaustive: every violation is reported, not just the first
//! - Never mutates the pack

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::charset;
use super::draft::PackDraft;
use super::types::{Category, FontPack, TypeError, ValidationResult};

/// How strictly packs are checked before entering a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Identity fields, style ids, and baseline coverage.
    #[default]
    Basic,
    /// Basic checks plus every pack-authoring check.
    Strict,
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Basic => f.write_str("basic"),
            ValidationLevel::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ValidationLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ValidationLevel::Basic),
            "strict" => Ok(ValidationLevel::Strict),
            other => Err(TypeError::ParseError(format!(
                "invalid validation level '{other}', must be one of: basic, strict"
            ))),
        }
    }
}

/// A single finding from [`audit_pack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackIssue {
    /// Pack id, or `"unknown"` when the pack has none.
    pub pack_id: String,
    /// Path of the offending field, e.g. `styles[2].mapping`.
    pub field: String,
    pub message: String,
}

impl fmt::Display for PackIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Whether the basic tier already reports the same condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Shared,
    AuditOnly,
    /// The field cannot be typed; reported at every level.
    Decode,
}

/// Run the basic validator.
///
/// # Example
///
/// ```
/// use fontpack::core::types::{Category, FontPack};
/// use fontpack::core::validate::validate_pack;
///
/// let pack = FontPack::new("", "Nameless", Category::Core);
/// let result = validate_pack(&pack);
///
/// assert!(!result.valid);
/// assert_eq!(result.errors, vec!["Pack missing id", "Pack missing styles array"]);
/// ```
pub fn validate_pack(pack: &FontPack) -> ValidationResult {
    let mut errors = Vec::new();

    if pack.id.is_empty() {
        errors.push("Pack missing id".to_string());
    }
    if pack.name.is_empty() {
        errors.push("Pack missing name".to_string());
    }
    if pack.version.is_empty() {
        errors.push("Pack missing version".to_string());
    }
    // An empty list counts as missing too, not only a non-array.
    if pack.styles.is_empty() {
        errors.push("Pack missing styles array".to_string());
    }

    for style in &pack.styles {
        if style.id.is_empty() {
            errors.push("Style missing id".to_string());
            continue;
        }

        let missing = charset::missing(|c| style.maps(c));
        if !missing.is_empty() {
            let list = missing
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(format!("Style {} missing mappings for: {}", style.id, list));
        }
    }

    ValidationResult::from_errors(errors)
}

/// Run the validator on a typed pack at the given level.
pub fn validate_pack_at(pack: &FontPack, level: ValidationLevel) -> ValidationResult {
    validate_draft(&PackDraft::from_pack(pack), level)
}

/// Run the validator on a leniently decoded pack at the given level.
pub fn validate_draft(draft: &PackDraft, level: ValidationLevel) -> ValidationResult {
    let mut result = validate_pack(draft.pack());
    result.errors.extend(
        collect_issues(draft)
            .into_iter()
            .filter(|(_, tier)| match tier {
                Tier::Shared => false,
                Tier::AuditOnly => level == ValidationLevel::Strict,
                Tier::Decode => true,
            })
            .map(|(issue, _)| issue.to_string()),
    );
    result.valid = result.errors.is_empty();
    result
}

/// Run the pack-authoring audit on a typed pack.
///
/// Returns an empty list for a clean pack.
pub fn audit_pack(pack: &FontPack) -> Vec<PackIssue> {
    audit_draft(&PackDraft::from_pack(pack))
}

/// Run the pack-authoring audit on a leniently decoded pack.
pub fn audit_draft(draft: &PackDraft) -> Vec<PackIssue> {
    collect_issues(draft)
        .into_iter()
        .map(|(issue, _)| issue)
        .collect()
}

fn collect_issues(draft: &PackDraft) -> Vec<(PackIssue, Tier)> {
    let pack = draft.pack();
    let pack_id = if pack.id.is_empty() {
        "unknown"
    } else {
        pack.id.as_str()
    };
    let mut issues = Vec::new();
    let mut push = |field: String, message: String, tier: Tier| {
        issues.push((
            PackIssue {
                pack_id: pack_id.to_string(),
                field,
                message,
            },
            tier,
        ));
    };

    if pack.id.is_empty() {
        push("id".into(), "Pack must have a valid string id".into(), Tier::Shared);
    }
    if pack.name.is_empty() {
        push("name".into(), "Pack must have a valid string name".into(), Tier::Shared);
    }
    if draft.category().is_none() {
        let allowed = Category::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        push(
            "category".into(),
            format!("Pack category must be one of: {allowed}"),
            Tier::Decode,
        );
    }
    if pack.version.is_empty() {
        push(
            "version".into(),
            "Pack must have a valid version string".into(),
            Tier::Shared,
        );
    }
    let price_tier = match draft.price() {
        None => Some(Tier::Decode),
        Some(price) if !price.is_finite() || price < 0.0 => Some(Tier::AuditOnly),
        Some(_) => None,
    };
    if let Some(tier) = price_tier {
        push(
            "price".into(),
            "Pack price must be a non-negative number".into(),
            tier,
        );
    }
    if pack.styles.is_empty() {
        push(
            "styles".into(),
            "Pack must have at least one style".into(),
            Tier::Shared,
        );
        return issues;
    }
    if !draft.has_decorators() {
        push(
            "decorators".into(),
            "Pack must have a decorators array (can be empty)".into(),
            Tier::AuditOnly,
        );
    }

    let mut style_ids = HashSet::new();
    for (index, style) in pack.styles.iter().enumerate() {
        let at = |name: &str| format!("styles[{index}].{name}");

        if style.id.is_empty() {
            push(at("id"), "Style must have a valid string id".into(), Tier::Shared);
        } else if !style_ids.insert(style.id.as_str()) {
            push(
                at("id"),
                format!("Duplicate style id: {}", style.id),
                Tier::AuditOnly,
            );
        }

        if style.name.is_empty() {
            push(at("name"), "Style must have a valid string name".into(), Tier::AuditOnly);
        }
        if style.preview.is_empty() {
            push(
                at("preview"),
                "Style must have a valid preview string".into(),
                Tier::AuditOnly,
            );
        }

        let missing = charset::missing(|c| style.maps(c));
        if !draft.has_mapping_object(index) {
            push(
                at("mapping"),
                "Style must have a valid mapping object".into(),
                Tier::AuditOnly,
            );
        } else if !missing.is_empty() {
            let list = missing
                .into_iter()
                .map(charset::label)
                .collect::<Vec<_>>()
                .join(", ");
            // The basic tier skips coverage for styles without an id.
            let tier = if style.id.is_empty() {
                Tier::AuditOnly
            } else {
                Tier::Shared
            };
            push(
                at("mapping"),
                format!(
                    "Style \"{}\" missing mappings for characters: {}",
                    style.id, list
                ),
                tier,
            );
        }

        let multi = style.multi_char_keys();
        if !multi.is_empty() {
            let list = multi
                .iter()
                .map(|k| format!("'{k}'"))
                .collect::<Vec<_>>()
                .join(", ");
            push(
                at("mapping"),
                format!(
                    "Style \"{}\" has multi-character mapping keys: {}",
                    style.id, list
                ),
                Tier::AuditOnly,
            );
        }
    }

    let mut decorator_ids = HashSet::new();
    for (index, decorator) in pack.decorators.iter().enumerate() {
        let at = |name: &str| format!("decorators[{index}].{name}");

        if decorator.id.is_empty() {
            push(
                at("id"),
                "Decorator must have a valid string id".into(),
                Tier::AuditOnly,
            );
        } else if !decorator_ids.insert(decorator.id.as_str()) {
            push(
                at("id"),
                format!("Duplicate decorator id: {}", decorator.id),
                Tier::AuditOnly,
            );
        }

        if decorator.name.is_empty() {
            push(
                at("name"),
                "Decorator must have a valid string name".into(),
                Tier::AuditOnly,
            );
        }

        if decorator.pattern.is_empty() {
            push(
                at("pattern"),
                "Decorator must have a valid pattern string".into(),
                Tier::AuditOnly,
            );
        } else if !decorator.has_placeholder() {
            push(
                at("pattern"),
                "Decorator pattern must include {text} placeholder".into(),
                Tier::AuditOnly,
            );
        }
    }

    issues
}
