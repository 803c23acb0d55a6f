//! Trained classification pipeline artifact
//!
//! JSON-exported counterpart of the trainer's fitted pipeline object: a
//! preprocessing stage (per-column encoders over the raw columns) feeding a
//! logistic classifier over the transformed feature space.
//!
//! Capability surface mirrors what the service needs from the external
//! toolkit and nothing more: `predict`, `predict_proba`, `decision_function`,
//! `transform` (the preprocessing stage in isolation), and
//! `feature_names_out`.

use serde::{Deserialize, Serialize};

use super::errors::{ModelError, ModelResult};
use super::frame::Frame;

fn default_threshold() -> f64 {
    0.5
}

/// Per-column encoder kinds fitted by the trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "encoder", rename_all = "snake_case")]
pub enum EncoderKind {
    /// One-hot over a fitted category list; unknown categories encode as
    /// all-zeros (the trainer's ignore-unknown convention)
    OneHot { categories: Vec<String> },
    /// Standard scaling with fitted mean and scale
    Standardize { mean: f64, scale: f64 },
    /// Numeric column carried through unchanged
    Passthrough,
}

/// One fitted encoder bound to a raw column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoder {
    pub column: String,
    #[serde(flatten)]
    pub kind: EncoderKind,
}

impl Encoder {
    /// Number of transformed features this encoder emits
    fn width(&self) -> usize {
        match &self.kind {
            EncoderKind::OneHot { categories } => categories.len(),
            EncoderKind::Standardize { .. } | EncoderKind::Passthrough => 1,
        }
    }

    /// Transformed feature names, `column=category` for one-hot outputs
    fn feature_names(&self) -> Vec<String> {
        match &self.kind {
            EncoderKind::OneHot { categories } => categories
                .iter()
                .map(|c| format!("{}={}", self.column, c))
                .collect(),
            EncoderKind::Standardize { .. } | EncoderKind::Passthrough => {
                vec![self.column.clone()]
            }
        }
    }

    fn transform_into(&self, frame: &Frame, out: &mut Vec<f64>) -> ModelResult<()> {
        match &self.kind {
            EncoderKind::OneHot { categories } => {
                let value = frame.text_cell(&self.column)?;
                for category in categories {
                    out.push(if category == value { 1.0 } else { 0.0 });
                }
            }
            EncoderKind::Standardize { mean, scale } => {
                let value = frame.numeric_cell(&self.column)?;
                out.push((value - mean) / scale);
            }
            EncoderKind::Passthrough => {
                out.push(frame.numeric_cell(&self.column)?);
            }
        }
        Ok(())
    }
}

/// The pipeline's fitted preprocessing stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessing {
    pub encoders: Vec<Encoder>,
}

impl Preprocessing {
    /// Transformed feature count
    pub fn n_features_out(&self) -> usize {
        self.encoders.iter().map(Encoder::width).sum()
    }

    /// Transformed feature names, in output order
    pub fn feature_names_out(&self) -> Vec<String> {
        self.encoders
            .iter()
            .flat_map(|e| e.feature_names())
            .collect()
    }

    /// Encode one frame into the transformed numeric vector
    pub fn transform(&self, frame: &Frame) -> ModelResult<Vec<f64>> {
        let mut out = Vec::with_capacity(self.n_features_out());
        for encoder in &self.encoders {
            encoder.transform_into(frame, &mut out)?;
        }
        Ok(out)
    }
}

/// Fitted logistic classifier over the transformed feature space
///
/// `classes` lists the trained class labels in probability-column order;
/// the decision function is the log-odds of `classes[1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    pub classes: Vec<i64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Classifier {
    /// Raw log-odds score for `classes[1]`
    pub fn decision_function(&self, features: &[f64]) -> ModelResult<f64> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let score = self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        if !score.is_finite() {
            return Err(ModelError::NonNumeric {
                context: "decision function produced a non-finite score".to_string(),
            });
        }
        Ok(score)
    }

    /// Probability distribution over `classes`, in class order
    pub fn predict_proba(&self, features: &[f64]) -> ModelResult<Vec<f64>> {
        let score = self.decision_function(features)?;
        let positive = sigmoid(score);
        Ok(vec![1.0 - positive, positive])
    }

    /// Predicted class label per the fitted decision threshold
    pub fn predict(&self, features: &[f64]) -> ModelResult<i64> {
        let proba = self.predict_proba(features)?;
        if proba[1] >= self.threshold {
            Ok(self.classes[1])
        } else {
            Ok(self.classes[0])
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// The full trained pipeline artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    /// Raw column names, in training order
    pub columns: Vec<String>,
    pub preprocessing: Preprocessing,
    pub classifier: Classifier,
}

impl PipelineArtifact {
    /// Internal consistency check, run once at load time
    pub fn validate(&self) -> Result<(), String> {
        if self.columns.is_empty() {
            return Err("pipeline declares no columns".to_string());
        }
        if self.classifier.classes.len() != 2 {
            return Err(format!(
                "pipeline classifier must be binary, found {} classes",
                self.classifier.classes.len()
            ));
        }
        if self.classifier.classes[0] == self.classifier.classes[1] {
            return Err("pipeline classifier classes must be distinct".to_string());
        }
        if !(self.classifier.threshold > 0.0 && self.classifier.threshold < 1.0) {
            return Err(format!(
                "decision threshold must lie in (0, 1), found {}",
                self.classifier.threshold
            ));
        }
        let n_features = self.preprocessing.n_features_out();
        if self.classifier.coefficients.len() != n_features {
            return Err(format!(
                "classifier has {} coefficients but preprocessing emits {} features",
                self.classifier.coefficients.len(),
                n_features
            ));
        }
        for encoder in &self.preprocessing.encoders {
            if !self.columns.contains(&encoder.column) {
                return Err(format!(
                    "encoder bound to undeclared column '{}'",
                    encoder.column
                ));
            }
            match &encoder.kind {
                EncoderKind::OneHot { categories } if categories.is_empty() => {
                    return Err(format!(
                        "one-hot encoder for '{}' has no categories",
                        encoder.column
                    ));
                }
                EncoderKind::Standardize { scale, .. } if *scale <= 0.0 => {
                    return Err(format!(
                        "standardize encoder for '{}' has non-positive scale",
                        encoder.column
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// The preprocessing stage in isolation, with the trained-column check
    /// the full pipeline applies
    pub fn transform(&self, frame: &Frame) -> ModelResult<Vec<f64>> {
        frame.check_columns(&self.columns)?;
        self.preprocessing.transform(frame)
    }

    /// Transformed feature names
    pub fn feature_names_out(&self) -> Vec<String> {
        self.preprocessing.feature_names_out()
    }

    /// Transformed feature count
    pub fn n_transformed_features(&self) -> usize {
        self.preprocessing.n_features_out()
    }

    /// Trained class labels, in probability-column order
    pub fn classes(&self) -> &[i64] {
        &self.classifier.classes
    }

    /// Raw log-odds score for `classes()[1]`
    pub fn decision_function(&self, frame: &Frame) -> ModelResult<f64> {
        let features = self.transform(frame)?;
        self.classifier.decision_function(&features)
    }

    /// Probability distribution over `classes()`, in class order
    pub fn predict_proba(&self, frame: &Frame) -> ModelResult<Vec<f64>> {
        let features = self.transform(frame)?;
        self.classifier.predict_proba(&features)
    }

    /// Predicted class label
    pub fn predict(&self, frame: &Frame) -> ModelResult<i64> {
        let features = self.transform(frame)?;
        self.classifier.predict(&features)
    }
}
