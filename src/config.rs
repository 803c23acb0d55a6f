//! Service configuration
//!
//! One JSON file (default `./stayscore.json`) holding the two artifact
//! paths and the HTTP server settings. Every field has a default, so an
//! empty `{}` file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::ArtifactPaths;
use crate::http_server::HttpServerConfig;

/// Configuration load/validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {cause}")]
    Read { path: String, cause: String },

    #[error("invalid config JSON in {path}: {cause}")]
    Parse { path: String, cause: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_pipeline_path() -> PathBuf {
    PathBuf::from("models/pipeline.json")
}

fn default_explainer_path() -> PathBuf {
    PathBuf::from("models/explainer.json")
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Serialized trained pipeline
    #[serde(default = "default_pipeline_path")]
    pub pipeline_path: PathBuf,

    /// Serialized explanation generator
    #[serde(default = "default_explainer_path")]
    pub explainer_path: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            pipeline_path: default_pipeline_path(),
            explainer_path: default_explainer_path(),
            http: HttpServerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                cause: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("pipeline_path must not be empty".into()));
        }
        if self.explainer_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "explainer_path must not be empty".into(),
            ));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be non-zero".into()));
        }
        Ok(())
    }

    /// Artifact locations for the loader
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(self.pipeline_path.clone(), self.explainer_path.clone())
    }
}
