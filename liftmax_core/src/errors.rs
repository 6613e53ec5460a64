//! # Error Types
//!
//! Structured error types for liftmax_core. The core never formats user-facing
//! copy for validation failures; it reports an error kind and lets the
//! presentation layer decide what to show.
//!
//! ## Example
//!
//! ```rust
//! use liftmax_core::errors::{CalcError, CalcResult};
//!
//! fn validate_reps(reps: i64) -> CalcResult<()> {
//!     if reps < 1 {
//!         return Err(CalcError::invalid_reps(reps));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_reps(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formulas::Formula;

/// Result type alias for liftmax_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// All variants are locally recoverable: a failed operation leaves the
/// session untouched and the caller may simply retry with corrected input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Reps performed was missing, zero, or negative
    #[error("Invalid reps: {reps} (must be at least 1)")]
    InvalidReps { reps: i64 },

    /// A bodyweight movement was submitted without a positive bodyweight
    #[error("Missing bodyweight: {bodyweight} (bodyweight movements need a bodyweight above 0)")]
    MissingBodyweight { bodyweight: f64 },

    /// A table was requested before any estimate has been calculated
    #[error("No estimate available for {formula}: calculate a 1RM first")]
    NoEstimate { formula: Formula },

    /// An input value could not be parsed or is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidReps error
    pub fn invalid_reps(reps: i64) -> Self {
        CalcError::InvalidReps { reps }
    }

    /// Create a MissingBodyweight error
    pub fn missing_bodyweight(bodyweight: f64) -> Self {
        CalcError::MissingBodyweight { bodyweight }
    }

    /// Create a NoEstimate error
    pub fn no_estimate(formula: Formula) -> Self {
        CalcError::NoEstimate { formula }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the two form validation kinds (reps, bodyweight)
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::InvalidReps { .. } | CalcError::MissingBodyweight { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidReps { .. } => "INVALID_REPS",
            CalcError::MissingBodyweight { .. } => "MISSING_BODYWEIGHT",
            CalcError::NoEstimate { .. } => "NO_ESTIMATE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::missing_bodyweight(0.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("MissingBodyweight"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_reps(0).error_code(), "INVALID_REPS");
        assert_eq!(CalcError::no_estimate(Formula::Lander).error_code(), "NO_ESTIMATE");
        assert_eq!(CalcError::invalid_input("reps", "x", "not a number").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validation_kinds() {
        assert!(CalcError::invalid_reps(-2).is_validation());
        assert!(CalcError::missing_bodyweight(-1.0).is_validation());
        assert!(!CalcError::no_estimate(Formula::Epley).is_validation());
    }

    #[test]
    fn test_no_estimate_message_names_formula() {
        let msg = CalcError::no_estimate(Formula::Brzycki).to_string();
        assert!(msg.contains("Brzycki"));
    }
}
