//! preview command - Show text in many styles at once

use anyhow::Result;

use crate::cli::Context;
use crate::core::text::{sanitize_text, validate_text_input};
use crate::core::types::StyledResult;
use crate::engine::StyleEngine;

/// Style `text` with several styles.
///
/// Style ids come from `styles`, then the configured preview list, then
/// every style in the pack. Styles that cannot be applied show the
/// original text.
pub fn preview(
    ctx: &Context,
    text: &str,
    pack: Option<&str>,
    styles: &[String],
    json: bool,
) -> Result<()> {
    let config = ctx.load_config()?;

    let text = sanitize_text(text);
    validate_text_input(text, config.max_text_length())?;

    let registry = ctx.open_registry(&config)?;
    let mut engine = StyleEngine::from_registry(&registry);
    let pack_id = pack.map_or_else(|| config.default_pack(), str::to_string);

    let results = if !styles.is_empty() {
        engine.preview_styles(text, styles, &pack_id)
    } else if let Some(configured) = config.preview_styles() {
        engine.preview_styles(text, configured.as_slice(), &pack_id)
    } else {
        engine.preview(text, &pack_id)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render(&results));
    }

    Ok(())
}

fn render(results: &[StyledResult]) -> String {
    let width = results
        .iter()
        .map(|r| r.style_id.chars().count())
        .max()
        .unwrap_or(0);

    results
        .iter()
        .map(|r| format!("{:<width$}  {}\n", r.style_id, r.styled))
        .collect()
}
