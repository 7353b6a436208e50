//! list command - List installed packs

use anyhow::Result;

use crate::cli::Context;
use crate::core::types::{Category, FontPack};
use crate::ui::output;

/// List installed packs, optionally filtered.
pub fn list(ctx: &Context, category: Option<Category>, free: bool, premium: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let registry = ctx.open_registry(&config)?;

    let mut packs: Vec<&FontPack> = if free {
        registry.free_packs()
    } else if premium {
        registry.premium_packs()
    } else {
        registry.installed_packs().iter().collect()
    };
    if let Some(category) = category {
        packs.retain(|p| p.category == category);
    }

    if packs.is_empty() {
        output::print("No packs installed", verbosity);
        return Ok(());
    }

    for pack in packs {
        println!("{}", format_pack(pack));
    }
    Ok(())
}

fn format_pack(pack: &FontPack) -> String {
    let price = if pack.is_free() {
        "free".to_string()
    } else {
        format!("${:.2}", pack.price)
    };
    format!(
        "{} ({}) v{} [{}] {} - {} style(s), {} decorator(s)",
        pack.name,
        pack.id,
        pack.version,
        pack.category,
        price,
        pack.styles.len(),
        pack.decorators.len()
    )
}
