// Validation errors

use std::fmt;
use thiserror::Error;

/// A failed rule on a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Localized message
    pub message: String,

    /// Catalog key of the rule that failed (`required`, `minLength`, `kana`, ...)
    pub constraint: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Render in the Laravel 422 body shape:
    /// `{"message": ..., "errors": {"field": ["msg", ...]}}`.
    ///
    /// Fields keep first-failure order. `message` is the first error's text.
    pub fn to_json(&self) -> serde_json::Value {
        let mut fields = serde_json::Map::new();
        for error in &self.errors {
            let entry = fields
                .entry(error.field.clone())
                .or_insert_with(|| serde_json::Value::Array(Vec::new()));
            if let serde_json::Value::Array(messages) = entry {
                messages.push(serde_json::Value::String(error.message.clone()));
            }
        }

        serde_json::json!({
            "message": self.errors.first().map(|e| e.message.clone()),
            "errors": fields,
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

/// Errors raised while compiling kana rules
#[derive(Debug, Error)]
pub enum KanaError {
    /// Pattern did not compile
    #[error("Invalid kana pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_builders() {
        let error = ValidationError::new("name_kana", "全角カタカナで入力してください")
            .with_constraint("kana")
            .with_value("たなか");

        assert_eq!(error.constraint, "kana");
        assert_eq!(error.value.as_deref(), Some("たなか"));
        assert_eq!(error.to_string(), "name_kana: 全角カタカナで入力してください");
    }

    #[test]
    fn test_to_json_groups_by_field() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("email", "Email is required"),
            ValidationError::new("name", "Name is required"),
            ValidationError::new("email", "Please enter a valid email address"),
        ]);

        let json = errors.to_json();
        assert_eq!(json["message"], "Email is required");
        assert_eq!(
            json["errors"]["email"],
            serde_json::json!(["Email is required", "Please enter a valid email address"])
        );
        assert_eq!(errors.get_field_errors("name").len(), 1);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_to_json_empty() {
        let json = ValidationErrors::default().to_json();
        assert!(json["message"].is_null());
        assert_eq!(json["errors"], serde_json::json!({}));
    }
}
