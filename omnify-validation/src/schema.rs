// Built-in string schema

use crate::{FieldSchema, Issue, IssueKind, KanaRule, Origin, RequiredCapability, StringFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// A string field schema for forms that do not bring their own library.
///
/// Lengths count characters, not bytes.
///
/// ```
/// use omnify_validation::{FieldSchema, KanaRule, StringSchema, KATAKANA_FULL_WIDTH};
/// use serde_json::json;
///
/// let schema = StringSchema::new()
///     .max_length(50)
///     .kana(KanaRule::new(KATAKANA_FULL_WIDTH.clone()).unwrap());
/// assert!(schema.check(&json!("ヤマダ")).is_empty());
/// assert_eq!(schema.check(&json!("やまだ")).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    optional: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    email: bool,
    url: bool,
    pattern: Option<Regex>,
    kana: Option<KanaRule>,
}

impl StringSchema {
    /// A required string with no other constraint.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    pub fn pattern(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }

    /// Restrict to a kana rule; failures report as a regex format issue.
    pub fn kana(mut self, rule: KanaRule) -> Self {
        self.kana = Some(rule);
        self
    }
}

impl RequiredCapability for StringSchema {
    fn is_required(&self) -> bool {
        !self.optional
    }
}

impl FieldSchema for StringSchema {
    fn check(&self, value: &Value) -> Vec<Issue> {
        let Some(text) = value.as_str() else {
            return vec![Issue::new(
                IssueKind::InvalidType {
                    expected: "string".to_string(),
                },
                "Expected string",
            )];
        };

        let mut issues = Vec::new();
        let length = text.chars().count();

        if let Some(min) = self.min_length.filter(|min| length < *min) {
            issues.push(Issue::new(
                IssueKind::TooSmall {
                    origin: Origin::String,
                    minimum: min as f64,
                },
                format!("Too small: expected at least {} characters", min),
            ));
        }
        if let Some(max) = self.max_length.filter(|max| length > *max) {
            issues.push(Issue::new(
                IssueKind::TooBig {
                    origin: Origin::String,
                    maximum: max as f64,
                },
                format!("Too big: expected at most {} characters", max),
            ));
        }
        if self.email && !EMAIL_REGEX.is_match(text) {
            issues.push(Issue::new(
                IssueKind::InvalidFormat(StringFormat::Email),
                "Invalid email address",
            ));
        }
        if self.url && !URL_REGEX.is_match(text) {
            issues.push(Issue::new(
                IssueKind::InvalidFormat(StringFormat::Url),
                "Invalid URL",
            ));
        }
        if let Some(regex) = self.pattern.as_ref().filter(|r| !r.is_match(text)) {
            issues.push(Issue::new(
                IssueKind::InvalidFormat(StringFormat::Regex),
                format!("Invalid string: must match pattern {}", regex.as_str()),
            ));
        }
        if let Some(rule) = self.kana.as_ref().filter(|r| !r.is_valid(text)) {
            issues.push(Issue::new(
                IssueKind::InvalidFormat(StringFormat::Regex),
                format!("Invalid string: must match pattern {}", rule.pattern()),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldRule, HIRAGANA};
    use omnify_i18n::MessageCatalog;
    use serde_json::json;

    #[test]
    fn test_requiredness() {
        assert!(StringSchema::new().is_required());
        assert!(!StringSchema::new().optional().is_required());
    }

    #[test]
    fn test_non_string_is_type_issue() {
        let issues = StringSchema::new().check(&json!(42));
        assert!(matches!(issues[0].kind, IssueKind::InvalidType { .. }));
    }

    #[test]
    fn test_lengths_count_characters() {
        let schema = StringSchema::new().min_length(2).max_length(3);
        assert!(schema.check(&json!("山田")).is_empty());
        assert!(schema.check(&json!("山田太")).is_empty());
        assert_eq!(schema.check(&json!("山")).len(), 1);
        assert_eq!(schema.check(&json!("山田太郎")).len(), 1);
    }

    #[test]
    fn test_email_and_url() {
        let email = StringSchema::new().email();
        assert!(email.check(&json!("user@example.com")).is_empty());
        assert!(!email.check(&json!("invalid-email")).is_empty());

        let url = StringSchema::new().url();
        assert!(url.check(&json!("https://example.com")).is_empty());
        assert!(!url.check(&json!("not-a-url")).is_empty());
    }

    #[test]
    fn test_pattern() {
        let schema = StringSchema::new().pattern(Regex::new(r"^\d{3}-\d{4}$").unwrap());
        assert!(schema.check(&json!("123-4567")).is_empty());
        assert_eq!(
            schema.check(&json!("1234567"))[0].kind,
            IssueKind::InvalidFormat(StringFormat::Regex)
        );
    }

    #[test]
    fn test_kana_through_field_rule() {
        let catalog = MessageCatalog::new();
        let schema = StringSchema::new().kana(KanaRule::new(HIRAGANA.clone()).unwrap());
        let rule = FieldRule::new(schema, catalog).with_display_name("ふりがな");

        assert!(rule.validate(Some(&json!("やまだ"))).is_ok());
        let error = rule.validate(Some(&json!("ヤマダ"))).unwrap_err();
        assert_eq!(error.message, "ふりがなの形式が正しくありません");
        assert_eq!(error.constraint, "pattern");
    }

    #[test]
    fn test_first_issue_wins() {
        let catalog = MessageCatalog::new().with_locale("en");
        let schema = StringSchema::new().min_length(5).email();
        let rule = FieldRule::new(schema, catalog).with_display_name("Email");

        let error = rule.validate(Some(&json!("a@b"))).unwrap_err();
        assert_eq!(error.message, "Email must be at least 5 characters");
    }
}
