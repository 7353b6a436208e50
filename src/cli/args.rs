//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--dir <path>`: Packs directory (overrides config)
//! - `--strict`: Validate packs with every authoring check before use
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Category;

/// fontpack - Unicode text styling from validated font packs
#[derive(Parser, Debug)]
#[command(name = "fontpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if fontpack was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Directory containing pack JSON files
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Apply every authoring check when loading packs
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check pack files for structural problems
    #[command(
        name = "validate",
        long_about = "Check pack files for structural problems.\n\n\
            Runs every authoring check: required fields, category, price, the \
            decorators array, baseline character coverage, duplicate style and \
            decorator ids, and decorator placeholders. Every problem in a file is \
            reported, even when fields have the wrong type. \
            With no arguments, every *.json file in the packs directory is checked.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Validate every pack in the packs directory
    fontpack validate

    # Validate specific packs (.json suffix optional)
    fontpack validate default seasonal.json

    # Validate packs somewhere else
    fontpack validate --dir ./build/packs

EXIT STATUS:
    0   every pack is valid
    1   a pack failed to load or has validation errors"
    )]
    Validate {
        /// Pack names to validate (defaults to all)
        packs: Vec<String>,
    },

    /// Style a piece of text
    #[command(
        name = "apply",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bold text from the default pack
    fontpack apply \"Hello world\" --style bold

    # Wrap the result in a decorator
    fontpack apply \"Hello\" -s circled -d sparkles

    # Machine-readable result
    fontpack apply \"Hello\" -s fullwidth --json"
    )]
    Apply {
        /// Text to style
        text: String,

        /// Style id
        #[arg(short, long)]
        style: String,

        /// Pack id (defaults to the configured default pack)
        #[arg(short, long)]
        pack: Option<String>,

        /// Decorator id
        #[arg(short, long)]
        decorator: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show text in many styles at once
    #[command(
        name = "preview",
        after_help = "\
WORKFLOW EXAMPLES:
    # Every style in the default pack
    fontpack preview \"Hello\"

    # A chosen set of styles
    fontpack preview \"Hello\" -s bold -s circled -s fullwidth"
    )]
    Preview {
        /// Text to style
        text: String,

        /// Pack id (defaults to the configured default pack)
        #[arg(short, long)]
        pack: Option<String>,

        /// Style ids to show (defaults to config, then every style)
        #[arg(short = 's', long = "style")]
        styles: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List installed packs
    #[command(name = "list")]
    List {
        /// Only packs in this category
        #[arg(long)]
        category: Option<Category>,

        /// Only free packs
        #[arg(long, conflicts_with = "premium")]
        free: bool,

        /// Only premium packs
        #[arg(long)]
        premium: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    fontpack completion bash > ~/.local/share/bash-completion/completions/fontpack

    # Zsh
    fontpack completion zsh > ~/.zfunc/_fontpack

    # Fish
    fontpack completion fish > ~/.config/fish/completions/fontpack.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
