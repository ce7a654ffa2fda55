//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur while loading messages into a catalog.
///
/// Lookups themselves never fail; they fall back to the raw key.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Message table was not valid JSON or had the wrong shape
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Locale code was empty
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),
}
