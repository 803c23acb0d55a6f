//! CLI command implementations
//!
//! Boot sequence for `start`: load config, resolve the artifact pair once,
//! then serve. An artifact failure does not abort the boot: the server comes
//! up with prediction disabled and a static diagnostic naming both required
//! files, matching the startup error tier.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::artifact::{ArtifactStore, LoadedArtifacts};
use crate::booking::BookingRecord;
use crate::config::ServiceConfig;
use crate::http_server::{Availability, HttpServer};
use crate::observability::{Logger, MetricsRegistry};
use crate::service::{PredictionService, DISPLAY_LIMIT};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start { config } => start(&config),
        Command::Predict { config, input } => predict(&config, input.as_deref()),
        Command::Check { config } => check(&config),
    }
}

/// Static diagnostic for the startup error tier: names both required files
fn disabled_message(config: &ServiceConfig, cause: &str) -> String {
    format!(
        "Prediction is disabled: {}. Required files:\n  - {}\n  - {}",
        cause,
        config.pipeline_path.display(),
        config.explainer_path.display()
    )
}

/// Boot the server
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store = ArtifactStore::new(config.artifact_paths());

    let availability = match store.get() {
        Ok(artifacts) => {
            let service = PredictionService::new(artifacts);
            let features = service.feature_count().to_string();
            let pipeline = config.pipeline_path.display().to_string();
            Logger::info(
                "ARTIFACTS_LOADED",
                &[("features", features.as_str()), ("pipeline", pipeline.as_str())],
            );
            Availability::Ready(service)
        }
        Err(err) => {
            let cause = err.to_string();
            Logger::fatal("ARTIFACT_LOAD_FAILED", &[("cause", cause.as_str())]);
            Availability::Disabled {
                reason: disabled_message(&config, &cause),
            }
        }
    };

    let metrics = Arc::new(MetricsRegistry::new());
    let server = HttpServer::new(config.http.clone(), availability, metrics);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}

/// One-shot prediction: record JSON in, result JSON out
pub fn predict(config_path: &Path, input: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store = ArtifactStore::new(config.artifact_paths());
    let artifacts = store.get()?;

    let record = read_record(input)?;
    let service = PredictionService::new(artifacts);
    let (prediction, explanation) = service.predict_and_explain(&record)?;

    let output = json!({
        "prediction": prediction,
        "explanation": {
            "base_value": explanation.base_value,
            "contributions": explanation.contributions,
            "top_contributions": explanation.top_contributions(DISPLAY_LIMIT),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
    Ok(())
}

/// Load the artifact pair and print a summary
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store = ArtifactStore::new(config.artifact_paths());
    let artifacts: Arc<LoadedArtifacts> = store.get()?;

    let summary = json!({
        "pipeline": config.pipeline_path.display().to_string(),
        "explainer": config.explainer_path.display().to_string(),
        "columns": artifacts.pipeline.columns,
        "transformed_features": artifacts.pipeline.n_transformed_features(),
        "classes": artifacts.pipeline.classes(),
        "positive_class": artifacts.explainer.positive_class,
    });
    println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
    Ok(())
}

fn read_record(input: Option<&Path>) -> CliResult<BookingRecord> {
    let content = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&content).map_err(|e| CliError::InvalidInput(e.to_string()))
}
