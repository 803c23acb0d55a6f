//! Explainer output normalization
//!
//! The explainer hands back attributions in one of two layouts and its
//! expected value as a scalar or per-class list. This adapter is the only
//! place that knows about the variability: everything downstream sees one
//! positive-class contribution vector and one base value.
//!
//! Class indexing is always resolved from the artifact's declared class
//! list; no positional convention is assumed.

use crate::artifact::{ExpectedValue, ShapOutput};

use super::errors::{ServiceError, ServiceResult};

/// Index of `class` within the declared class list
pub fn positive_class_index(classes: &[i64], class: i64) -> ServiceResult<usize> {
    classes
        .iter()
        .position(|c| *c == class)
        .ok_or_else(|| ServiceError::UnknownClass {
            class,
            classes: classes.to_vec(),
        })
}

/// Per-feature contribution values for one class, from either layout
pub fn contributions_for_class(
    output: &ShapOutput,
    class_index: usize,
    n_classes: usize,
    n_features: usize,
) -> ServiceResult<Vec<f64>> {
    let values = match output {
        ShapOutput::PerClass(classes) => {
            if classes.len() != n_classes {
                return Err(mismatch(n_classes, classes.len()));
            }
            classes[class_index].clone()
        }
        ShapOutput::ClassAxis(rows) => {
            if rows.len() != n_features {
                return Err(mismatch(n_features, rows.len()));
            }
            rows.iter()
                .map(|row| {
                    row.get(class_index)
                        .copied()
                        .ok_or_else(|| mismatch(n_classes, row.len()))
                })
                .collect::<ServiceResult<Vec<f64>>>()?
        }
    };

    if values.len() != n_features {
        return Err(mismatch(n_features, values.len()));
    }
    Ok(values)
}

/// Base value for one class, from either expected-value shape
pub fn base_value_for_class(
    expected: &ExpectedValue,
    class_index: usize,
    n_classes: usize,
) -> ServiceResult<f64> {
    match expected {
        ExpectedValue::Scalar(value) => Ok(*value),
        ExpectedValue::PerClass(values) => values
            .get(class_index)
            .copied()
            .ok_or_else(|| mismatch(n_classes, values.len())),
    }
}

fn mismatch(expected: usize, actual: usize) -> ServiceError {
    ServiceError::Model(crate::artifact::ModelError::ShapeMismatch { expected, actual })
}
