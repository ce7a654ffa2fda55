//! Error envelope parsing.
//!
//! HTTP clients wrap a failed response differently. An [`EnvelopeAdapter`]
//! turns one client's error value into an [`ErrorEnvelope`] so the mapping
//! code never probes raw JSON.

use omnify_log::debug;
use serde_json::{Map, Value};

/// The parts of a failed response that form handling cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorEnvelope<'a> {
    Recognized {
        /// HTTP status, when present and a valid integer
        status: Option<u16>,
        /// `data.message` when it is a string
        message: Option<&'a str>,
        /// `data.errors` when it is an object
        errors: Option<&'a Map<String, Value>>,
    },
    Unrecognized,
}

impl<'a> ErrorEnvelope<'a> {
    pub fn status(&self) -> Option<u16> {
        match self {
            ErrorEnvelope::Recognized { status, .. } => *status,
            ErrorEnvelope::Unrecognized => None,
        }
    }

    pub fn message(&self) -> Option<&'a str> {
        match self {
            ErrorEnvelope::Recognized { message, .. } => *message,
            ErrorEnvelope::Unrecognized => None,
        }
    }

    pub fn errors(&self) -> Option<&'a Map<String, Value>> {
        match self {
            ErrorEnvelope::Recognized { errors, .. } => *errors,
            ErrorEnvelope::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, ErrorEnvelope::Recognized { .. })
    }

    /// Build an envelope from a response object holding `status` and `data`.
    ///
    /// Anything that is not an object is unrecognized.
    pub fn from_response(response: &'a Value) -> Self {
        let Some(response) = response.as_object() else {
            return ErrorEnvelope::Unrecognized;
        };

        let data = response.get("data");
        ErrorEnvelope::Recognized {
            status: response.get("status").and_then(parse_status),
            message: data.and_then(|d| d.get("message")).and_then(Value::as_str),
            errors: data.and_then(|d| d.get("errors")).and_then(Value::as_object),
        }
    }
}

/// Accepts `422` and `422.0`, rejects anything outside `u16`.
fn parse_status(value: &Value) -> Option<u16> {
    if let Some(status) = value.as_u64() {
        return u16::try_from(status).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u16::MAX as f64)
        .map(|f| f as u16)
}

/// Reads one HTTP client's error convention.
pub trait EnvelopeAdapter: Send + Sync {
    fn parse<'a>(&self, error: &'a Value) -> ErrorEnvelope<'a>;
}

impl<A: EnvelopeAdapter + ?Sized> EnvelopeAdapter for &A {
    fn parse<'a>(&self, error: &'a Value) -> ErrorEnvelope<'a> {
        (**self).parse(error)
    }
}

impl<A: EnvelopeAdapter + ?Sized> EnvelopeAdapter for Box<A> {
    fn parse<'a>(&self, error: &'a Value) -> ErrorEnvelope<'a> {
        (**self).parse(error)
    }
}

/// Errors shaped `{ "response": { "status", "data" } }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxiosAdapter;

impl EnvelopeAdapter for AxiosAdapter {
    fn parse<'a>(&self, error: &'a Value) -> ErrorEnvelope<'a> {
        match error.get("response") {
            Some(response) => ErrorEnvelope::from_response(response),
            None => {
                debug!(target: "omnify::forms", "error has no response object");
                ErrorEnvelope::Unrecognized
            }
        }
    }
}

/// Errors that are the response itself: `{ "status", "data" }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareResponseAdapter;

impl EnvelopeAdapter for BareResponseAdapter {
    fn parse<'a>(&self, error: &'a Value) -> ErrorEnvelope<'a> {
        let envelope = ErrorEnvelope::from_response(error);
        if !envelope.is_recognized() {
            debug!(target: "omnify::forms", "error is not a response object");
        }
        envelope
    }
}
