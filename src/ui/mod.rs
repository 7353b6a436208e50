//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All terminal output from command handlers goes through this module so
//! that `--quiet` and `--debug` behave the same everywhere. Library code
//! in [`crate::core`] and [`crate::engine`] never prints.

pub mod output;
