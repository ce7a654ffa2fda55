//! Laravel validation errors to form field errors.

use crate::{AxiosAdapter, EnvelopeAdapter, ErrorEnvelope, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status Laravel answers validation failures with.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Errors for one form field, serialized as `{ "name", "errors" }`.
///
/// `messages` mirrors the server list as sent: a field answered with `[]`
/// still yields a `FieldError`, with no messages, so form sinks can clear
/// or flag that field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "name")]
    pub path: FieldPath,
    #[serde(rename = "errors")]
    pub messages: Vec<String>,
}

impl FieldError {
    pub fn new(path: FieldPath, messages: Vec<String>) -> Self {
        Self { path, messages }
    }

    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Strings stay as they are; any other value uses its JSON text.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(message_text).collect(),
        other => vec![message_text(other)],
    }
}

impl<'a> ErrorEnvelope<'a> {
    /// Field errors in the order the server sent them.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let Some(errors) = self.errors() else {
            return Vec::new();
        };

        errors
            .iter()
            .map(|(key, value)| FieldError::new(FieldPath::parse(key), coerce_messages(value)))
            .collect()
    }

    /// The summary message, only for a 422 response.
    pub fn summary_message(&self) -> Option<String> {
        if self.status() != Some(UNPROCESSABLE_ENTITY) {
            return None;
        }
        self.message().map(str::to_string)
    }

    /// First message of the first field.
    pub fn first_message(&self) -> Option<String> {
        let (_, value) = self.errors()?.iter().next()?;
        coerce_messages(value).into_iter().next()
    }
}

/// Turns an HTTP client error into form field errors.
///
/// ```
/// use omnify_forms::{FieldPath, map_field_errors};
/// use serde_json::json;
///
/// let error = json!({
///     "response": {
///         "status": 422,
///         "data": { "errors": { "items.0.name": ["Required"] } }
///     }
/// });
/// let fields = map_field_errors(Some(&error));
/// assert_eq!(fields[0].path, FieldPath::parse("items.0.name"));
/// assert_eq!(fields[0].messages, vec!["Required"]);
/// ```
pub fn map_field_errors(error: Option<&Value>) -> Vec<FieldError> {
    map_field_errors_with(&AxiosAdapter, error)
}

/// The server's summary for a 422 response, `None` for anything else.
pub fn extract_summary_message(error: Option<&Value>) -> Option<String> {
    extract_summary_message_with(&AxiosAdapter, error)
}

/// First message of the first field, for when field names don't match the form.
pub fn first_message(error: Option<&Value>) -> Option<String> {
    first_message_with(&AxiosAdapter, error)
}

pub fn map_field_errors_with(adapter: &dyn EnvelopeAdapter, error: Option<&Value>) -> Vec<FieldError> {
    error
        .map(|e| adapter.parse(e).field_errors())
        .unwrap_or_default()
}

pub fn extract_summary_message_with(
    adapter: &dyn EnvelopeAdapter,
    error: Option<&Value>,
) -> Option<String> {
    adapter.parse(error?).summary_message()
}

pub fn first_message_with(adapter: &dyn EnvelopeAdapter, error: Option<&Value>) -> Option<String> {
    adapter.parse(error?).first_message()
}
