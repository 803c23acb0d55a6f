//! Shared fixtures for integration tests
//!
//! Builds a small but fully-shaped artifact pair over the real booking
//! columns: every categorical domain one-hot encoded, every counter carried
//! through, and an explainer bound to the same transformed space.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use stayscore::artifact::{
    ArtifactPaths, ArtifactStore, Classifier, Encoder, EncoderKind, ExpectedValue,
    ExplainerArtifact, LoadedArtifacts, OutputLayout, PipelineArtifact, Preprocessing,
};
use stayscore::booking::{
    CustomerType, DepositType, MarketSegment, ReservedRoomType, COLUMNS, COUNTRY_CODES,
};
use stayscore::service::PredictionService;

/// Hand-picked coefficients over the transformed feature names; everything
/// not listed carries zero weight.
fn weight_for(feature: &str) -> f64 {
    match feature {
        "country=PRT" => 0.3,
        "market_segment=Groups" => 0.5,
        "deposit_type=No Deposit" => -0.2,
        "deposit_type=Non Refund" => 1.6,
        "previous_cancellations" => 0.35,
        "booking_changes" => 0.1,
        "days_in_waiting_list" => 0.002,
        "required_car_parking_spaces" => -0.4,
        "total_of_special_requests" => -0.3,
        _ => 0.0,
    }
}

fn one_hot(column: &str, categories: Vec<String>) -> Encoder {
    Encoder {
        column: column.to_string(),
        kind: EncoderKind::OneHot { categories },
    }
}

fn passthrough(column: &str) -> Encoder {
    Encoder {
        column: column.to_string(),
        kind: EncoderKind::Passthrough,
    }
}

pub fn fixture_pipeline() -> PipelineArtifact {
    let preprocessing = Preprocessing {
        encoders: vec![
            one_hot(
                "country",
                COUNTRY_CODES.iter().map(|c| c.to_string()).collect(),
            ),
            one_hot(
                "market_segment",
                MarketSegment::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            ),
            one_hot(
                "deposit_type",
                DepositType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            ),
            one_hot(
                "customer_type",
                CustomerType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            ),
            one_hot(
                "reserved_room_type",
                ReservedRoomType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            ),
            passthrough("previous_cancellations"),
            passthrough("booking_changes"),
            passthrough("days_in_waiting_list"),
            passthrough("required_car_parking_spaces"),
            passthrough("total_of_special_requests"),
        ],
    };

    let coefficients: Vec<f64> = preprocessing
        .feature_names_out()
        .iter()
        .map(|name| weight_for(name))
        .collect();

    PipelineArtifact {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        preprocessing,
        classifier: Classifier {
            classes: vec![0, 1],
            coefficients,
            intercept: -1.2,
            threshold: 0.5,
        },
    }
}

pub fn fixture_explainer(layout: OutputLayout) -> ExplainerArtifact {
    let pipeline = fixture_pipeline();
    let weights = pipeline.classifier.coefficients.clone();
    let intercept = pipeline.classifier.intercept;
    let background = vec![0.0; weights.len()];
    // Over an all-zeros background the expected score is just the intercept
    ExplainerArtifact {
        classes: vec![0, 1],
        positive_class: 1,
        weights,
        intercept,
        background,
        expected_value: ExpectedValue::PerClass(vec![-intercept, intercept]),
        output_layout: layout,
    }
}

/// Write both artifacts into `dir` and return their paths
pub fn write_artifacts(
    dir: &Path,
    pipeline: &PipelineArtifact,
    explainer: &ExplainerArtifact,
) -> ArtifactPaths {
    let pipeline_path = dir.join("pipeline.json");
    let explainer_path = dir.join("explainer.json");
    std::fs::write(&pipeline_path, serde_json::to_string(pipeline).unwrap()).unwrap();
    std::fs::write(&explainer_path, serde_json::to_string(explainer).unwrap()).unwrap();
    ArtifactPaths::new(pipeline_path, explainer_path)
}

/// Write the default fixture pair into `dir` and load it
pub fn load_fixture_artifacts(dir: &Path, layout: OutputLayout) -> Arc<LoadedArtifacts> {
    let paths = write_artifacts(dir, &fixture_pipeline(), &fixture_explainer(layout));
    ArtifactStore::new(paths).get().unwrap()
}

/// A ready service over the default fixture pair
pub fn ready_service(dir: &Path) -> PredictionService {
    PredictionService::new(load_fixture_artifacts(dir, OutputLayout::PerClass))
}
