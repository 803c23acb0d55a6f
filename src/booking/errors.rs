//! Booking record validation errors

use thiserror::Error;

/// Result type for record validation
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors produced while constructing or validating a `BookingRecord`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Country code outside the closed set
    #[error("unknown country code: '{0}'")]
    UnknownCountry(String),

    /// Integer field outside its declared bound
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
}
