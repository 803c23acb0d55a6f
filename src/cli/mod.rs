//! CLI module for stayscore
//!
//! Provides the command-line interface:
//! - start: load artifacts and serve the prediction UI/API
//! - predict: one-shot prediction for a record read from a file or stdin
//! - check: load and summarize the artifact pair, then exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, predict, run, run_command, start};
pub use errors::{CliError, CliResult};
