//! CLI argument definitions using clap
//!
//! Commands:
//! - stayscore start --config <path>
//! - stayscore predict --config <path> [--input <path>]
//! - stayscore check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stayscore - hotel booking cancellation prediction and explanation service
#[derive(Parser, Debug)]
#[command(name = "stayscore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the prediction server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./stayscore.json")]
        config: PathBuf,
    },

    /// Predict one booking record and print the result as JSON
    Predict {
        /// Path to configuration file
        #[arg(long, default_value = "./stayscore.json")]
        config: PathBuf,

        /// Record JSON file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Load the artifact pair and print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./stayscore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
