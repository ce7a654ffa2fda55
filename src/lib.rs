// Omnify - form glue for Laravel backends
//
// Maps Laravel validation responses onto form fields, builds Japanese kana
// input rules and resolves localized validation messages.

// Re-export always-on crates
pub use omnify_i18n as i18n;
pub use omnify_log as log;

pub use omnify_i18n::{I18nError, MessageCatalog, MessageTable, TemplateParams};

// Re-export optional crates
#[cfg(feature = "validation")]
pub use omnify_validation as validation;

#[cfg(feature = "forms")]
pub use omnify_forms as forms;

#[cfg(feature = "config")]
pub use omnify_config as config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{MessageCatalog, TemplateParams};
    pub use serde_json::{Value, json};

    #[cfg(feature = "validation")]
    pub use omnify_validation::{
        FieldRule, FieldSchema, FormValidator, HIRAGANA, KANA_ANY, KATAKANA_FULL_WIDTH,
        KATAKANA_HALF_WIDTH, KATAKANA_WITH_NUMBERS, KanaRule, KanaRuleConfig, KanaRuleOverrides,
        RequiredCapability, StringSchema, ValidationError, ValidationErrors, build_pattern,
        build_regex, describe, required_rule, validate,
    };

    #[cfg(feature = "forms")]
    pub use omnify_forms::{
        AxiosAdapter, BareResponseAdapter, EnvelopeAdapter, ErrorEnvelope, FieldError, FieldPath,
        FormError, FormMutation, FormSink, Navigator, Notifier, PathSegment, QueryInvalidator,
        extract_summary_message, first_message, map_field_errors,
    };

    #[cfg(feature = "config")]
    pub use omnify_config::{I18nSettings, SettingsLoader};
}
