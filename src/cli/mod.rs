//! CLI command handlers for Periodic Samples.
//!
//! Each subcommand owns its `clap` arguments and an `execute` method that
//! reports failures as [`common::CliError`] with a stable exit code.

pub mod common;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
