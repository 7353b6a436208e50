//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and resolves defaults
//! 2. Calls the registry or engine to do the work
//! 3. Formats and displays output
//!
//! Handlers never write pack files.

mod apply;
mod completion;
mod list;
mod preview;
mod validate;

// Re-export command functions for testing and direct invocation
pub use apply::apply;
pub use completion::completion;
pub use list::list;
pub use preview::preview;
pub use validate::validate;

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Validate { packs } => validate::validate(ctx, &packs),
        Command::Apply {
            text,
            style,
            pack,
            decorator,
            json,
        } => apply::apply(
            ctx,
            &text,
            &style,
            pack.as_deref(),
            decorator.as_deref(),
            json,
        ),
        Command::Preview {
            text,
            pack,
            styles,
            json,
        } => preview::preview(ctx, &text, pack.as_deref(), &styles, json),
        Command::List {
            category,
            free,
            premium,
        } => list::list(ctx, category, free, premium),
        Command::Completion { shell } => completion::completion(shell),
    }
}
