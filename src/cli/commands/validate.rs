//! validate command - Check pack files for structural problems

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::draft::PackDraft;
use crate::core::store::PackStore;
use crate::core::types::FontPack;
use crate::core::validate::{audit_draft, PackIssue};
use crate::ui::output;

/// Running totals across validated files.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    checked: usize,
    valid: usize,
    errors: usize,
}

/// Validate the named packs, or every pack file when `names` is empty.
///
/// Fails if any file cannot be loaded or any pack has issues.
pub fn validate(ctx: &Context, names: &[String]) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let store = PackStore::new(ctx.packs_dir(&config)?);

    let files = if names.is_empty() {
        store
            .list()
            .with_context(|| format!("Failed to read packs directory: {}", store.dir().display()))?
    } else {
        names.iter().map(|name| store.resolve(name)).collect()
    };

    if files.is_empty() {
        bail!("No pack files found to validate in {}", store.dir().display());
    }

    output::print("🔍 Font Pack Validator\n", verbosity);
    output::print(
        format!("📦 Found {} pack(s) to validate\n", files.len()),
        verbosity,
    );

    let mut summary = Summary::default();
    for path in &files {
        summary.checked += 1;
        output::debug(format!("checking {}", path.display()), verbosity);

        match check_file(&store, path) {
            Ok((draft, issues)) => {
                output::print(render_pack(draft.pack(), &issues), verbosity);
                if issues.is_empty() {
                    summary.valid += 1;
                } else {
                    summary.errors += issues.len();
                }
            }
            Err(err) => {
                output::error(format!("{err:#}"));
                summary.errors += 1;
            }
        }
    }

    output::print("━".repeat(60), verbosity);
    output::print(render_summary(&summary), verbosity);

    if summary.errors > 0 {
        bail!("Validation failed with {} error(s)", summary.errors);
    }

    output::success("✅ All packs are valid!", verbosity);
    Ok(())
}

fn check_file(store: &PackStore, path: &Path) -> Result<(PackDraft, Vec<PackIssue>)> {
    let draft = store
        .read(path)
        .with_context(|| format!("Failed to load pack file: {}", path.display()))?;
    let issues = audit_draft(&draft);
    Ok((draft, issues))
}

fn render_pack(pack: &FontPack, issues: &[PackIssue]) -> String {
    let or_unknown = |s: &str, fallback: &str| {
        if s.is_empty() {
            fallback.to_string()
        } else {
            s.to_string()
        }
    };

    let mut lines = Vec::new();
    if issues.is_empty() {
        lines.push(format!("✅ {} ({})", pack.name, pack.id));
        lines.push(format!("   Version: {}", pack.version));
        lines.push(format!("   Styles: {}", pack.styles.len()));
        lines.push(format!("   Decorators: {}", pack.decorators.len()));
    } else {
        lines.push(format!(
            "❌ {} ({})",
            or_unknown(&pack.name, "Unknown"),
            or_unknown(&pack.id, "unknown")
        ));
        let entries: Vec<String> = issues
            .iter()
            .map(|issue| format!("[{}] {}", issue.field, issue.message))
            .collect();
        lines.push(output::format_list(&entries, "   • "));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn render_summary(summary: &Summary) -> String {
    format!(
        "\n📊 Validation Summary:\n   Valid packs: {}/{}\n   Total errors: {}\n",
        summary.valid, summary.checked, summary.errors
    )
}
