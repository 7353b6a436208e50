//! cli
//!
//! Command-line interface layer for fontpack.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration (flags override config files)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads packs into a
//! [`crate::engine::PackRegistry`] once, and hands the populated registry
//! to the [`crate::engine::StyleEngine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::store::PackStore;
use crate::core::validate::ValidationLevel;
use crate::engine::PackRegistry;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Packs directory override.
    pub dir: Option<PathBuf>,
    /// Strict validation requested.
    pub strict: bool,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity from flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The directory commands run in.
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Load configuration for the project directory.
    pub fn load_config(&self) -> Result<Config> {
        let project = self.project_dir()?;
        let config = Config::load(Some(&project)).context("Failed to load config")?;

        let verbosity = self.verbosity();
        if let Some(path) = config.global_config_loaded_from() {
            output::debug(format!("global config: {}", path.display()), verbosity);
        }
        if let Some(path) = config.project_config_loaded_from() {
            output::debug(format!("project config: {}", path.display()), verbosity);
        }
        Ok(config)
    }

    /// Packs directory: `--dir` first, then config. Relative paths are
    /// resolved against the project directory.
    pub fn packs_dir(&self, config: &Config) -> Result<PathBuf> {
        let dir = self.dir.clone().unwrap_or_else(|| config.packs_dir());
        Ok(resolve(&self.project_dir()?, dir))
    }

    /// Registry validation level: `--strict` first, then config.
    pub fn validation_level(&self, config: &Config) -> ValidationLevel {
        if self.strict {
            ValidationLevel::Strict
        } else {
            config.validation()
        }
    }

    /// Build a registry from every pack in the packs directory.
    pub fn open_registry(&self, config: &Config) -> Result<PackRegistry> {
        let verbosity = self.verbosity();
        let store = PackStore::new(self.packs_dir(config)?);
        let mut registry = PackRegistry::with_level(self.validation_level(config));

        output::debug(
            format!(
                "loading packs from {} ({} validation)",
                store.dir().display(),
                registry.level()
            ),
            verbosity,
        );
        let loaded = registry
            .load_store(&store)
            .with_context(|| format!("Failed to load packs from {}", store.dir().display()))?;
        output::debug(format!("loaded {loaded} pack(s)"), verbosity);

        Ok(registry)
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        dir: cli.dir.clone(),
        strict: cli.strict,
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
