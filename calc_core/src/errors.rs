//! # Error Types
//!
//! Structured error types for calc_core. Every failure is caused by the
//! input alone, so errors carry the offending field or unit and enough
//! context for a caller to show a useful message or fix the request.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_span(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for conversion and beam operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value is not a number, or is NaN / infinite
    #[error("Invalid number for '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    /// A unit symbol is not part of the dimension's unit set
    #[error("Unknown unit '{unit}' for dimension '{dimension}'")]
    UnknownUnit { unit: String, dimension: String },

    /// An input value is out of range (zero, negative, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required form field was left blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Inputs were valid but the result is not representable
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, dimension: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            unit: unit.into(),
            dimension: dimension.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidNumber { field, .. }
            | CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => "INVALID_NUMBER",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

/// Reject NaN and infinite values.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_number(field, value.to_string()))
    }
}
