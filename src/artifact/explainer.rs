//! Explanation-generator artifact
//!
//! JSON-exported counterpart of the trainer's explainer object, bound to the
//! pipeline it was fitted against. It carries its own copy of the attribution
//! weights plus the background (expected feature) vector, and attributes one
//! transformed row's deviation from the expected model score to individual
//! transformed features.
//!
//! Historical trainer versions serialized `shap_values` output in two shapes:
//! a list of per-class arrays, or a single array with a trailing class axis.
//! The artifact declares which shape it produces via `output_layout`; the
//! service normalizes both behind one adapter.

use serde::{Deserialize, Serialize};

use super::errors::{ModelError, ModelResult};

/// Declared shape of `shap_values` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// `[class][feature]` — a list of per-class arrays
    PerClass,
    /// `[feature][class]` — one array with a trailing class axis
    ClassAxis,
}

/// Expected model output, either a bare scalar or one value per class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    Scalar(f64),
    PerClass(Vec<f64>),
}

/// Attribution output in one of the two declared layouts
#[derive(Debug, Clone, PartialEq)]
pub enum ShapOutput {
    /// Indexed `[class][feature]`
    PerClass(Vec<Vec<f64>>),
    /// Indexed `[feature][class]`
    ClassAxis(Vec<Vec<f64>>),
}

/// The explainer artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainerArtifact {
    /// Class labels in the explainer's own output order
    pub classes: Vec<i64>,
    /// The class whose attributions explain "will cancel"
    pub positive_class: i64,
    /// Attribution weights over the transformed feature space
    pub weights: Vec<f64>,
    pub intercept: f64,
    /// Background (expected) transformed feature vector
    pub background: Vec<f64>,
    pub expected_value: ExpectedValue,
    pub output_layout: OutputLayout,
}

impl ExplainerArtifact {
    /// Transformed feature count this explainer was fitted for
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Index of the declared positive class within `classes`
    pub fn positive_class_index(&self) -> Option<usize> {
        self.classes.iter().position(|c| *c == self.positive_class)
    }

    /// Internal consistency check, run once at load time
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() != 2 {
            return Err(format!(
                "explainer must cover exactly two classes, found {}",
                self.classes.len()
            ));
        }
        if self.positive_class_index().is_none() {
            return Err(format!(
                "declared positive class {} is not among explainer classes {:?}",
                self.positive_class, self.classes
            ));
        }
        if self.background.len() != self.weights.len() {
            return Err(format!(
                "background vector has {} entries but {} weights are declared",
                self.background.len(),
                self.weights.len()
            ));
        }
        if let ExpectedValue::PerClass(values) = &self.expected_value {
            if values.len() != self.classes.len() {
                return Err(format!(
                    "expected_value lists {} entries for {} classes",
                    values.len(),
                    self.classes.len()
                ));
            }
        }

        // The declared expected value must agree with the fitted weights over
        // the background row, otherwise additivity cannot hold at runtime.
        let declared = match &self.expected_value {
            ExpectedValue::Scalar(v) => *v,
            ExpectedValue::PerClass(values) => {
                // index is present, checked above
                values[self.positive_class_index().unwrap_or(0)]
            }
        };
        let derived = self
            .weights
            .iter()
            .zip(&self.background)
            .fold(self.intercept, |acc, (w, b)| acc + w * b);
        if (declared - derived).abs() > 1e-3 {
            return Err(format!(
                "expected_value {} disagrees with weights over the background ({})",
                declared, derived
            ));
        }
        Ok(())
    }

    /// Per-feature contribution values for one transformed row
    ///
    /// The positive-class contribution of feature `j` is
    /// `weights[j] * (row[j] - background[j])`; the complementary class
    /// carries the negated values. Output is shaped per `output_layout`.
    pub fn shap_values(&self, row: &[f64]) -> ModelResult<ShapOutput> {
        if row.len() != self.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.weights.len(),
                actual: row.len(),
            });
        }

        let positive: Vec<f64> = self
            .weights
            .iter()
            .zip(row.iter().zip(&self.background))
            .map(|(w, (x, b))| w * (x - b))
            .collect();
        if positive.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::NonNumeric {
                context: "attribution produced a non-finite contribution".to_string(),
            });
        }

        let per_class: Vec<Vec<f64>> = self
            .classes
            .iter()
            .map(|class| {
                if *class == self.positive_class {
                    positive.clone()
                } else {
                    positive.iter().map(|v| -v).collect()
                }
            })
            .collect();

        Ok(match self.output_layout {
            OutputLayout::PerClass => ShapOutput::PerClass(per_class),
            OutputLayout::ClassAxis => {
                let n_features = positive.len();
                let rows = (0..n_features)
                    .map(|j| per_class.iter().map(|class| class[j]).collect())
                    .collect();
                ShapOutput::ClassAxis(rows)
            }
        })
    }

    /// Expected model output, in whichever shape the trainer serialized
    pub fn expected_value(&self) -> ExpectedValue {
        self.expected_value.clone()
    }
}
