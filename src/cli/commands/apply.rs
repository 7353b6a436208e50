//! apply command - Style a piece of text

use anyhow::Result;

use crate::cli::Context;
use crate::core::text::{sanitize_text, validate_text_input};
use crate::engine::{StyleEngine, StyleRequest};
use crate::ui::output;

/// Style `text` with one style and an optional decorator.
pub fn apply(
    ctx: &Context,
    text: &str,
    style: &str,
    pack: Option<&str>,
    decorator: Option<&str>,
    json: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;

    let text = sanitize_text(text);
    validate_text_input(text, config.max_text_length())?;

    let registry = ctx.open_registry(&config)?;
    let mut engine = StyleEngine::from_registry(&registry);

    let pack_id = pack.map_or_else(|| config.default_pack(), str::to_string);
    let mut request = StyleRequest::new(text, style).in_pack(&pack_id);

    if let Some(decorator_id) = decorator {
        let known = engine
            .get_pack(&pack_id)
            .is_some_and(|p| p.decorator(decorator_id).is_some());
        if !known {
            output::warn(
                format!("decorator '{decorator_id}' not found in pack '{pack_id}', leaving text undecorated"),
                verbosity,
            );
        }
        request = request.with_decorator(decorator_id);
    }

    output::debug(
        format!("applying {}/{}", request.pack_id, request.style_id),
        verbosity,
    );
    let result = engine.apply_style(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.styled);
    }

    Ok(())
}
