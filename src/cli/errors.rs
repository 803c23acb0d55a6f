//! CLI error types

use thiserror::Error;

use crate::artifact::ArtifactError;
use crate::config::ConfigError;
use crate::service::ServiceError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Top-level CLI errors, each wrapping its subsystem cause
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("prediction error: {0}")]
    Service(#[from] ServiceError),

    #[error("invalid input record: {0}")]
    InvalidInput(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),
}
