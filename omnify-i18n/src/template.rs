//! `${name}` placeholder substitution

use std::fmt::Display;

/// Ordered template parameters.
///
/// # Examples
///
/// ```
/// use omnify_i18n::TemplateParams;
///
/// let params = TemplateParams::new().with("displayName", "Name").with("min", 3);
/// assert_eq!(params.apply("${displayName} needs ${min}"), "Name needs 3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    values: Vec<(String, String)>,
}

impl TemplateParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Values are stringified with `Display`.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.values.push((name.into(), value.to_string()));
        self
    }

    /// Whether no parameters were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every `${name}` for each parameter, in insertion order.
    ///
    /// Matching is exact and case-sensitive. Placeholders without a
    /// parameter are left as they are.
    pub fn apply(&self, template: &str) -> String {
        let mut message = template.to_string();
        for (name, value) in &self.values {
            let placeholder = format!("${{{}}}", name);
            message = message.replace(&placeholder, value);
        }
        message
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateParams
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}
