//! One-row tabular input for the pipeline
//!
//! The pipeline was trained on a named, ordered column set; a `Frame` wraps
//! one record's cells in exactly that shape. Cells are JSON values: strings
//! for categorical columns, numbers for counters.

use serde_json::Value;

use super::errors::{ModelError, ModelResult};

/// A single-row frame of named cells
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    cells: Vec<Value>,
}

impl Frame {
    /// Build a frame from `(column, cell)` pairs, preserving order
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        let (columns, cells) = pairs.into_iter().unzip();
        Frame { columns, cells }
    }

    /// Column names in frame order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell for a named column
    pub fn cell(&self, column: &str) -> ModelResult<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.cells[i])
            .ok_or_else(|| ModelError::MissingColumn(column.to_string()))
    }

    /// Cell as a categorical string
    pub fn text_cell(&self, column: &str) -> ModelResult<&str> {
        self.cell(column)?
            .as_str()
            .ok_or_else(|| ModelError::UnexpectedType {
                column: column.to_string(),
                expected: "string",
            })
    }

    /// Cell as a numeric value
    pub fn numeric_cell(&self, column: &str) -> ModelResult<f64> {
        self.cell(column)?
            .as_f64()
            .ok_or_else(|| ModelError::UnexpectedType {
                column: column.to_string(),
                expected: "numeric",
            })
    }

    /// Verify the frame columns match the trained columns, name for name and
    /// in the same order
    pub fn check_columns(&self, expected: &[String]) -> ModelResult<()> {
        if self.columns != expected {
            return Err(ModelError::ColumnMismatch {
                expected: expected.join(", "),
                actual: self.columns.join(", "),
            });
        }
        Ok(())
    }
}
