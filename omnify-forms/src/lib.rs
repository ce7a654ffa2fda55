//! # Omnify Forms
//!
//! Glue between Laravel validation responses and form widgets.
//!
//! ## Features
//!
//! - **Field errors**: `response.data.errors` becomes `{ name, errors }`
//!   entries, with `items.0.name` split into `["items", 0, "name"]`
//! - **Summary**: the 422 `message`, and nothing for other statuses
//! - **Adapters**: one [`EnvelopeAdapter`] per HTTP client error shape
//! - **Mutations**: [`FormMutation`] runs a submit and routes its outcome to
//!   the form, notifications, query cache and router
//!
//! ## Quick Start
//!
//! ```rust
//! use omnify_forms::{extract_summary_message, first_message, map_field_errors};
//! use serde_json::json;
//!
//! let error = json!({
//!     "response": {
//!         "status": 422,
//!         "data": {
//!             "message": "The email field is required. (and 1 more error)",
//!             "errors": {
//!                 "email": ["The email field is required."],
//!                 "items.0.name": ["The item name is required."]
//!             }
//!         }
//!     }
//! });
//!
//! let fields = map_field_errors(Some(&error));
//! assert_eq!(
//!     serde_json::to_value(&fields).unwrap(),
//!     json!([
//!         {"name": "email", "errors": ["The email field is required."]},
//!         {"name": ["items", 0, "name"], "errors": ["The item name is required."]}
//!     ])
//! );
//! assert_eq!(
//!     extract_summary_message(Some(&error)).as_deref(),
//!     Some("The email field is required. (and 1 more error)")
//! );
//! assert_eq!(first_message(Some(&error)).as_deref(), Some("The email field is required."));
//! ```

mod envelope;
mod error;
mod mapper;
mod mutation;
mod path;

pub use envelope::{AxiosAdapter, BareResponseAdapter, EnvelopeAdapter, ErrorEnvelope};
pub use error::{FormError, Result};
pub use mapper::{
    FieldError, UNPROCESSABLE_ENTITY, extract_summary_message, extract_summary_message_with,
    first_message, first_message_with, map_field_errors, map_field_errors_with,
};
pub use mutation::{
    FormMutation, FormSink, MutationFn, Navigator, Notifier, QueryInvalidator, Translate,
};
pub use path::{FieldPath, PathSegment};

/// Prelude for common imports.
///
/// ```
/// use omnify_forms::prelude::*;
/// ```
pub mod prelude {
    pub use crate::envelope::{AxiosAdapter, BareResponseAdapter, EnvelopeAdapter, ErrorEnvelope};
    pub use crate::error::{FormError, Result};
    pub use crate::mapper::{FieldError, extract_summary_message, first_message, map_field_errors};
    pub use crate::mutation::{FormMutation, FormSink, Navigator, Notifier, QueryInvalidator};
    pub use crate::path::{FieldPath, PathSegment};
}
