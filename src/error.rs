//! Error taxonomy for the chemistry engine and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Validation failures raised before any computation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChemistryError {
    /// Non-positive, non-finite or missing geometry input.
    #[error("invalid dimension '{field}': {message}")]
    InvalidDimension { field: &'static str, message: String },

    /// Chemistry value outside its physically valid domain.
    #[error("'{field}' out of range ({value}): {message}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        message: String,
    },

    /// Missing or inconsistent field for the selected mode.
    #[error("validation failed for '{field}': {message}")]
    Validation { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, ChemistryError>;

impl ChemistryError {
    pub fn invalid_dimension(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field,
            message: message.into(),
        }
    }

    pub fn out_of_range(field: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            value,
            message: message.into(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDimension { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Validation { field, .. } => field,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => "invalid_dimension",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Validation { .. } => "validation_error",
        }
    }
}

/// Require `value > 0` for a geometry input.
pub(crate) fn require_positive_dimension(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChemistryError::invalid_dimension(
            field,
            format!("must be greater than 0, got {value}"),
        ))
    }
}

/// Require `value` to lie in `[min, max]`.
pub(crate) fn require_within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ChemistryError::out_of_range(
            field,
            value,
            format!("must be between {min} and {max}"),
        ))
    }
}

/// Require `value >= 0` for a chemistry reading.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ChemistryError::out_of_range(field, value, "must be 0 or greater"))
    }
}

/// Require `value > 0` for a chemistry reading.
pub(crate) fn require_positive_reading(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChemistryError::out_of_range(field, value, "must be greater than 0"))
    }
}

/// Body returned to API callers for a rejected calculation.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl IntoResponse for ChemistryError {
    fn into_response(self) -> Response {
        tracing::warn!(field = self.field(), "calculation rejected: {}", self);
        let body = ErrorResponse {
            error_type: self.error_type(),
            field: self.field(),
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
