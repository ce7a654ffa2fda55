// Validation traits

use crate::Issue;
use serde_json::Value;

/// Whether a field must be filled in.
///
/// Implemented by an adapter per schema library, so rule mapping never
/// inspects a library's internal type descriptors.
pub trait RequiredCapability {
    fn is_required(&self) -> bool;
}

/// A schema that can check a single field value.
pub trait FieldSchema: RequiredCapability + Send + Sync {
    /// Issues found in `value`, in the order the schema reports them.
    ///
    /// An empty list means the value is accepted.
    fn check(&self, value: &Value) -> Vec<Issue>;
}

impl<T: RequiredCapability + ?Sized> RequiredCapability for &T {
    fn is_required(&self) -> bool {
        (**self).is_required()
    }
}

impl<T: RequiredCapability + ?Sized> RequiredCapability for Box<T> {
    fn is_required(&self) -> bool {
        (**self).is_required()
    }
}

impl<T: FieldSchema + ?Sized> FieldSchema for Box<T> {
    fn check(&self, value: &Value) -> Vec<Issue> {
        (**self).check(value)
    }
}

/// Emptiness as form widgets see it: absent, `null` or `""`.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
