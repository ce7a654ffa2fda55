// Field rules: schema issues to localized messages

use crate::{FieldSchema, ValidationError, ValidationErrors, is_empty_value};
use omnify_i18n::{MessageCatalog, TemplateParams};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// What kind of value a size constraint applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Length in characters
    String,
    Number,
    Array,
    Other,
}

/// Format constraints a schema can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFormat {
    Email,
    Url,
    Regex,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    TooSmall { origin: Origin, minimum: f64 },
    TooBig { origin: Origin, maximum: f64 },
    InvalidFormat(StringFormat),
    InvalidType { expected: String },
    Custom,
}

/// One problem reported by a schema, library-neutral.
///
/// `message` is the schema's own text, used when no catalog key fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Catalog key and parameters for this issue, if one applies.
    ///
    /// A string minimum of 1 is how schemas spell "non-empty", so it maps
    /// to `required`.
    fn catalog_key(&self) -> Option<(&'static str, TemplateParams)> {
        match &self.kind {
            IssueKind::TooSmall {
                origin: Origin::String,
                minimum,
            } if *minimum == 1.0 => Some(("required", TemplateParams::new())),
            IssueKind::TooSmall {
                origin: Origin::String,
                minimum,
            } => Some(("minLength", TemplateParams::new().with("min", minimum))),
            IssueKind::TooSmall { minimum, .. } => {
                Some(("min", TemplateParams::new().with("min", minimum)))
            }
            IssueKind::TooBig {
                origin: Origin::String,
                maximum,
            } => Some(("maxLength", TemplateParams::new().with("max", maximum))),
            IssueKind::TooBig { maximum, .. } => {
                Some(("max", TemplateParams::new().with("max", maximum)))
            }
            IssueKind::InvalidFormat(StringFormat::Email) => Some(("email", TemplateParams::new())),
            IssueKind::InvalidFormat(StringFormat::Url) => Some(("url", TemplateParams::new())),
            IssueKind::InvalidFormat(StringFormat::Regex) => {
                Some(("pattern", TemplateParams::new()))
            }
            IssueKind::InvalidFormat(StringFormat::Other(_))
            | IssueKind::InvalidType { .. }
            | IssueKind::Custom => None,
        }
    }
}

/// Binds a schema to a display name and catalog, producing one localized
/// message per failed value.
pub struct FieldRule<S> {
    schema: S,
    display_name: Option<String>,
    catalog: MessageCatalog,
}

impl<S: FieldSchema> FieldRule<S> {
    pub fn new(schema: S, catalog: MessageCatalog) -> Self {
        Self {
            schema,
            display_name: None,
            catalog,
        }
    }

    /// Name shown in messages. Defaults to the catalog's `fieldName`.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    fn display_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.catalog.resolve("fieldName", &TemplateParams::new()))
    }

    fn error(&self, key: &str, params: TemplateParams) -> ValidationError {
        let display_name = self.display_name();
        let message = self
            .catalog
            .resolve(key, &params.with("displayName", &display_name));
        ValidationError::new(display_name, message).with_constraint(key)
    }

    /// Check `value`, returning the first issue as a localized error.
    ///
    /// Empty values (absent, `null`, `""`) pass when the schema is optional
    /// and fail with `required` otherwise.
    pub fn validate(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        if is_empty_value(value) {
            if self.schema.is_required() {
                return Err(self.error("required", TemplateParams::new()));
            }
            return Ok(());
        }

        let value = value.unwrap_or(&Value::Null);
        let Some(issue) = self.schema.check(value).into_iter().next() else {
            return Ok(());
        };

        let shown = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());

        match issue.catalog_key() {
            Some((key, params)) => Err(self.error(key, params).with_value(shown)),
            None => Err(ValidationError::new(self.display_name(), issue.message)
                .with_constraint("custom")
                .with_value(shown)),
        }
    }
}

/// `{ required: true, message }` for widgets that only need a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredRule {
    pub required: bool,
    pub message: String,
}

pub fn required_rule(display_name: &str, catalog: &MessageCatalog) -> RequiredRule {
    RequiredRule {
        required: true,
        message: catalog.resolve(
            "required",
            &TemplateParams::new().with("displayName", display_name),
        ),
    }
}

type DynRule = Arc<FieldRule<Box<dyn FieldSchema>>>;

/// Validates a whole form object field by field.
#[derive(Clone, Default)]
pub struct FormValidator {
    fields: Vec<(String, DynRule)>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `field`. Errors are reported under `field`.
    pub fn field(mut self, field: impl Into<String>, rule: FieldRule<Box<dyn FieldSchema>>) -> Self {
        self.fields.push((field.into(), Arc::new(rule)));
        self
    }

    /// Validate every configured field of `data`.
    ///
    /// Missing fields count as empty.
    pub fn validate(&self, data: &Value) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (field, rule) in &self.fields {
            if let Err(mut error) = rule.validate(data.get(field)) {
                error.field = field.clone();
                errors.add(error);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequiredCapability;
    use serde_json::json;

    struct Fixed {
        required: bool,
        issues: Vec<Issue>,
    }

    impl RequiredCapability for Fixed {
        fn is_required(&self) -> bool {
            self.required
        }
    }

    impl FieldSchema for Fixed {
        fn check(&self, _value: &Value) -> Vec<Issue> {
            self.issues.clone()
        }
    }

    fn rule(required: bool, kind: IssueKind) -> FieldRule<Fixed> {
        let catalog = MessageCatalog::new().with_locale("en");
        FieldRule::new(
            Fixed {
                required,
                issues: vec![Issue::new(kind, "schema says no")],
            },
            catalog,
        )
        .with_display_name("Name")
    }

    fn message(rule: &FieldRule<Fixed>, value: Value) -> String {
        rule.validate(Some(&value)).unwrap_err().message
    }

    #[test]
    fn test_empty_optional_passes() {
        let rule = rule(false, IssueKind::Custom);
        assert!(rule.validate(None).is_ok());
        assert!(rule.validate(Some(&json!(""))).is_ok());
        assert!(rule.validate(Some(&Value::Null)).is_ok());
    }

    #[test]
    fn test_empty_required_fails() {
        let rule = rule(true, IssueKind::Custom);
        let error = rule.validate(None).unwrap_err();
        assert_eq!(error.message, "Name is required");
        assert_eq!(error.constraint, "required");
    }

    #[test]
    fn test_string_minimum_one_is_required() {
        let rule = rule(
            true,
            IssueKind::TooSmall {
                origin: Origin::String,
                minimum: 1.0,
            },
        );
        assert_eq!(message(&rule, json!("x")), "Name is required");
    }

    #[test]
    fn test_length_messages() {
        let min = rule(
            true,
            IssueKind::TooSmall {
                origin: Origin::String,
                minimum: 3.0,
            },
        );
        assert_eq!(message(&min, json!("ab")), "Name must be at least 3 characters");

        let max = rule(
            true,
            IssueKind::TooBig {
                origin: Origin::String,
                maximum: 100.0,
            },
        );
        assert_eq!(message(&max, json!("a")), "Name must be at most 100 characters");
    }

    #[test]
    fn test_numeric_messages() {
        let min = rule(
            true,
            IssueKind::TooSmall {
                origin: Origin::Number,
                minimum: 18.0,
            },
        );
        assert_eq!(message(&min, json!(3)), "Name must be at least 18");

        let max = rule(
            true,
            IssueKind::TooBig {
                origin: Origin::Number,
                maximum: 1.5,
            },
        );
        assert_eq!(message(&max, json!(3)), "Name must be at most 1.5");
    }

    #[test]
    fn test_format_messages() {
        assert_eq!(
            message(&rule(true, IssueKind::InvalidFormat(StringFormat::Email)), json!("x")),
            "Please enter a valid email address"
        );
        assert_eq!(
            message(&rule(true, IssueKind::InvalidFormat(StringFormat::Url)), json!("x")),
            "Please enter a valid URL"
        );
        assert_eq!(
            message(&rule(true, IssueKind::InvalidFormat(StringFormat::Regex)), json!("x")),
            "Name format is invalid"
        );
    }

    #[test]
    fn test_unmapped_issue_keeps_schema_message() {
        let rule = rule(
            true,
            IssueKind::InvalidType {
                expected: "string".to_string(),
            },
        );
        let error = rule.validate(Some(&json!(5))).unwrap_err();
        assert_eq!(error.message, "schema says no");
        assert_eq!(error.constraint, "custom");
        assert_eq!(error.value.as_deref(), Some("5"));
    }

    #[test]
    fn test_no_issue_passes() {
        let catalog = MessageCatalog::new();
        let rule = FieldRule::new(
            Fixed {
                required: true,
                issues: vec![],
            },
            catalog,
        );
        assert!(rule.validate(Some(&json!("ok"))).is_ok());
    }

    #[test]
    fn test_default_display_name_is_localized() {
        let catalog = MessageCatalog::new();
        let rule = FieldRule::new(
            Fixed {
                required: true,
                issues: vec![],
            },
            catalog.clone(),
        );
        assert_eq!(rule.validate(None).unwrap_err().message, "この項目は必須です");

        catalog.set_locale("en");
        assert_eq!(rule.validate(None).unwrap_err().message, "This field is required");
    }

    #[test]
    fn test_required_rule() {
        let catalog = MessageCatalog::new();
        let rule = required_rule("氏名", &catalog);
        assert!(rule.required);
        assert_eq!(rule.message, "氏名は必須です");
    }

    #[test]
    fn test_form_validator_collects_per_field() {
        let catalog = MessageCatalog::new().with_locale("en");
        let optional: Box<dyn FieldSchema> = Box::new(Fixed {
            required: false,
            issues: vec![],
        });
        let required: Box<dyn FieldSchema> = Box::new(Fixed {
            required: true,
            issues: vec![],
        });

        let validator = FormValidator::new()
            .field("nickname", FieldRule::new(optional, catalog.clone()))
            .field(
                "email",
                FieldRule::new(required, catalog).with_display_name("Email"),
            );

        let errors = validator.validate(&json!({"nickname": ""})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "email");
        assert_eq!(errors.errors[0].message, "Email is required");

        assert!(validator.validate(&json!({"email": "a@b.c"})).is_ok());
    }
}
