//! Artifact loading and the process-wide cache
//!
//! `LoadedArtifacts::load` reads, parses, and cross-validates the pipeline
//! and explainer files. `ArtifactStore` wraps it in a load-at-most-once
//! cache: the first call resolves, every later call returns the same pair
//! (or the same failure) for the process lifetime.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use super::errors::{ArtifactError, ArtifactResult};
use super::explainer::ExplainerArtifact;
use super::pipeline::PipelineArtifact;

/// Filesystem locations of the two required artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub pipeline: PathBuf,
    pub explainer: PathBuf,
}

impl ArtifactPaths {
    pub fn new(pipeline: impl Into<PathBuf>, explainer: impl Into<PathBuf>) -> Self {
        ArtifactPaths {
            pipeline: pipeline.into(),
            explainer: explainer.into(),
        }
    }
}

/// The validated, immutable artifact pair
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedArtifacts {
    pub pipeline: PipelineArtifact,
    pub explainer: ExplainerArtifact,
}

impl LoadedArtifacts {
    /// Read both artifacts and cross-validate the pair
    pub fn load(paths: &ArtifactPaths) -> ArtifactResult<Self> {
        let pipeline: PipelineArtifact = read_artifact(&paths.pipeline)?;
        pipeline.validate().map_err(|cause| ArtifactError::Corrupt {
            path: display_path(&paths.pipeline),
            cause,
        })?;

        let explainer: ExplainerArtifact = read_artifact(&paths.explainer)?;
        explainer.validate().map_err(|cause| ArtifactError::Corrupt {
            path: display_path(&paths.explainer),
            cause,
        })?;

        cross_validate(&pipeline, &explainer)?;

        Ok(LoadedArtifacts {
            pipeline,
            explainer,
        })
    }
}

/// A mismatched pair must never serve a request, so the binding between the
/// two artifacts is checked once here.
fn cross_validate(
    pipeline: &PipelineArtifact,
    explainer: &ExplainerArtifact,
) -> ArtifactResult<()> {
    let pipeline_features = pipeline.n_transformed_features();
    if explainer.n_features() != pipeline_features {
        return Err(ArtifactError::Mismatch {
            detail: format!(
                "pipeline emits {} transformed features but explainer was fitted for {}",
                pipeline_features,
                explainer.n_features()
            ),
        });
    }

    let mut pipeline_classes = pipeline.classes().to_vec();
    let mut explainer_classes = explainer.classes.clone();
    pipeline_classes.sort_unstable();
    explainer_classes.sort_unstable();
    if pipeline_classes != explainer_classes {
        return Err(ArtifactError::Mismatch {
            detail: format!(
                "pipeline classes {:?} differ from explainer classes {:?}",
                pipeline.classes(),
                explainer.classes
            ),
        });
    }

    Ok(())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ArtifactError::NotFound {
                path: display_path(path),
            }
        } else {
            ArtifactError::Corrupt {
                path: display_path(path),
                cause: e.to_string(),
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|e| ArtifactError::Corrupt {
        path: display_path(path),
        cause: e.to_string(),
    })
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Load-at-most-once store for the artifact pair
///
/// The cache cell is written exactly once, before any reader can observe it;
/// afterwards the pair is shared read-only across all requests.
#[derive(Debug)]
pub struct ArtifactStore {
    paths: ArtifactPaths,
    cache: OnceLock<ArtifactResult<Arc<LoadedArtifacts>>>,
}

impl ArtifactStore {
    pub fn new(paths: ArtifactPaths) -> Self {
        ArtifactStore {
            paths,
            cache: OnceLock::new(),
        }
    }

    /// The configured artifact locations
    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// The cached artifact pair, loading on first call
    pub fn get(&self) -> ArtifactResult<Arc<LoadedArtifacts>> {
        self.cache
            .get_or_init(|| LoadedArtifacts::load(&self.paths).map(Arc::new))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pipeline_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(
            dir.path().join("pipeline.json"),
            dir.path().join("explainer.json"),
        );
        let err = LoadedArtifacts::load(&paths).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { ref path } if path.contains("pipeline.json")));
    }

    #[test]
    fn test_unparseable_pipeline_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = dir.path().join("pipeline.json");
        fs::write(&pipeline, "not json at all").unwrap();
        let paths = ArtifactPaths::new(pipeline, dir.path().join("explainer.json"));
        let err = LoadedArtifacts::load(&paths).unwrap_err();
        assert!(matches!(err, ArtifactError::Corrupt { .. }));
    }

    #[test]
    fn test_store_caches_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(ArtifactPaths::new(
            dir.path().join("pipeline.json"),
            dir.path().join("explainer.json"),
        ));
        let first = store.get().unwrap_err();

        // Creating the file after the first load must not change the result.
        fs::write(dir.path().join("pipeline.json"), "{}").unwrap();
        let second = store.get().unwrap_err();
        assert_eq!(first, second);
    }
}
