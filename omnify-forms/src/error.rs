//! Form error types.

use crate::FieldError;
use serde_json::Value;
use thiserror::Error;

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Why a form mutation failed.
#[derive(Debug, Clone, Error)]
pub enum FormError {
    /// The server rejected the input field by field.
    #[error("{}", .summary.as_deref().unwrap_or("validation failed"))]
    Validation {
        /// The 422 summary message, if the server sent one.
        summary: Option<String>,
        fields: Vec<FieldError>,
        /// The error as the client reported it.
        raw: Value,
    },

    /// Any other failure.
    #[error("request failed: {0}")]
    Request(Value),
}

impl FormError {
    /// Raw client error.
    pub fn raw(&self) -> &Value {
        match self {
            FormError::Validation { raw, .. } => raw,
            FormError::Request(value) => value,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Validation { fields, .. } => fields,
            FormError::Request(_) => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation { .. })
    }
}
