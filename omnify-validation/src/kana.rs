// Japanese kana script rules
//
// A rule is a set of additive toggles over fixed Unicode ranges. From a rule
// we build a `^[...]*$` pattern, a compiled regex, a validator and a
// localized description of what is accepted.

use crate::{KanaError, ValidationError};
use omnify_i18n::{MessageCatalog, TemplateParams};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full-width katakana ァ-ヶ plus the prolonged sound mark ー
const FULL_WIDTH_KATAKANA: &str = "\u{30A1}-\u{30F6}\u{30FC}";
/// Half-width katakana ｦ-ﾟ
const HALF_WIDTH_KATAKANA: &str = "\u{FF66}-\u{FF9F}";
/// Hiragana ぁ-ゖ
const HIRAGANA_RANGE: &str = "\u{3041}-\u{3096}";
/// Full-width digits ０-９
const FULL_WIDTH_NUMBERS: &str = "\u{FF10}-\u{FF19}";
const HALF_WIDTH_NUMBERS: &str = "0-9";
const FULL_WIDTH_SPACE: &str = "\u{3000}";
const HALF_WIDTH_SPACE: &str = " ";

/// Prolonged sound mark and middle dot, the usual extras in name fields.
pub const DEFAULT_SPECIAL_CHARS: [char; 2] = ['\u{30FC}', '\u{30FB}'];

/// Which Japanese character classes a field accepts.
///
/// Toggles are additive: the accepted set is the union of every enabled
/// class plus the literal special characters. Deserializing fills missing
/// fields from [`KanaRuleConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KanaRuleConfig {
    pub full_width_katakana: bool,
    pub half_width_katakana: bool,
    pub hiragana: bool,
    /// Shorthand for both number widths
    pub allow_numbers: bool,
    pub full_width_numbers: bool,
    pub half_width_numbers: bool,
    /// Full-width and half-width space
    pub allow_spaces: bool,
    pub allow_special_chars: Vec<char>,
    /// Replaces the generated description when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for KanaRuleConfig {
    fn default() -> Self {
        Self {
            full_width_katakana: true,
            half_width_katakana: false,
            hiragana: false,
            allow_numbers: false,
            full_width_numbers: false,
            half_width_numbers: false,
            allow_spaces: true,
            allow_special_chars: DEFAULT_SPECIAL_CHARS.to_vec(),
            message: None,
        }
    }
}

impl KanaRuleConfig {
    /// Defaults with `overrides` applied.
    pub fn from_overrides(overrides: KanaRuleOverrides) -> Self {
        overrides.apply_to(&Self::default())
    }

    fn accepts_full_width_numbers(&self) -> bool {
        self.allow_numbers || self.full_width_numbers
    }

    fn accepts_half_width_numbers(&self) -> bool {
        self.allow_numbers || self.half_width_numbers
    }

    fn label_key(&self) -> &'static str {
        match (
            self.full_width_katakana,
            self.half_width_katakana,
            self.hiragana,
        ) {
            (true, false, false) => "kana.fullWidthKatakana",
            (false, true, false) => "kana.halfWidthKatakana",
            (false, false, true) => "kana.hiragana",
            _ => "kana.mixed",
        }
    }
}

/// Partial [`KanaRuleConfig`]; `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KanaRuleOverrides {
    pub full_width_katakana: Option<bool>,
    pub half_width_katakana: Option<bool>,
    pub hiragana: Option<bool>,
    pub allow_numbers: Option<bool>,
    pub full_width_numbers: Option<bool>,
    pub half_width_numbers: Option<bool>,
    pub allow_spaces: Option<bool>,
    pub allow_special_chars: Option<Vec<char>>,
    pub message: Option<String>,
}

impl KanaRuleOverrides {
    /// Merge over `base`.
    pub fn apply_to(self, base: &KanaRuleConfig) -> KanaRuleConfig {
        KanaRuleConfig {
            full_width_katakana: self.full_width_katakana.unwrap_or(base.full_width_katakana),
            half_width_katakana: self.half_width_katakana.unwrap_or(base.half_width_katakana),
            hiragana: self.hiragana.unwrap_or(base.hiragana),
            allow_numbers: self.allow_numbers.unwrap_or(base.allow_numbers),
            full_width_numbers: self.full_width_numbers.unwrap_or(base.full_width_numbers),
            half_width_numbers: self.half_width_numbers.unwrap_or(base.half_width_numbers),
            allow_spaces: self.allow_spaces.unwrap_or(base.allow_spaces),
            allow_special_chars: self
                .allow_special_chars
                .unwrap_or_else(|| base.allow_special_chars.clone()),
            message: self.message.or_else(|| base.message.clone()),
        }
    }
}

// Presets

/// Full-width katakana only.
pub static KATAKANA_FULL_WIDTH: Lazy<KanaRuleConfig> = Lazy::new(KanaRuleConfig::default);

/// Half-width katakana only, with the half-width prolonged sound mark.
pub static KATAKANA_HALF_WIDTH: Lazy<KanaRuleConfig> = Lazy::new(|| KanaRuleConfig {
    full_width_katakana: false,
    half_width_katakana: true,
    allow_special_chars: vec!['\u{FF70}'],
    ..KanaRuleConfig::default()
});

/// Hiragana only.
pub static HIRAGANA: Lazy<KanaRuleConfig> = Lazy::new(|| KanaRuleConfig {
    full_width_katakana: false,
    hiragana: true,
    allow_special_chars: vec!['\u{30FC}'],
    ..KanaRuleConfig::default()
});

/// All three scripts and every special mark.
pub static KANA_ANY: Lazy<KanaRuleConfig> = Lazy::new(|| KanaRuleConfig {
    full_width_katakana: true,
    half_width_katakana: true,
    hiragana: true,
    allow_special_chars: vec!['\u{30FC}', '\u{30FB}', '\u{FF70}'],
    ..KanaRuleConfig::default()
});

/// Full-width katakana plus digits of either width.
pub static KATAKANA_WITH_NUMBERS: Lazy<KanaRuleConfig> = Lazy::new(|| KanaRuleConfig {
    allow_numbers: true,
    ..KanaRuleConfig::default()
});

// Precompiled preset patterns. Presets always produce a valid pattern.

pub static KATAKANA_PATTERN: Lazy<Regex> =
    Lazy::new(|| build_regex(&KATAKANA_FULL_WIDTH).unwrap());

/// Half-width katakana and the half-width space only. Unlike
/// [`KATAKANA_HALF_WIDTH`], a full-width space is rejected.
pub static KATAKANA_HALF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[\u{FF66}-\u{FF9F}\u{FF70} ]*$").unwrap());

pub static HIRAGANA_PATTERN: Lazy<Regex> = Lazy::new(|| build_regex(&HIRAGANA).unwrap());

pub static KANA_ANY_PATTERN: Lazy<Regex> = Lazy::new(|| build_regex(&KANA_ANY).unwrap());

// Builders

fn character_class(config: &KanaRuleConfig) -> String {
    let mut class = String::new();

    if config.full_width_katakana {
        class.push_str(FULL_WIDTH_KATAKANA);
    }
    if config.half_width_katakana {
        class.push_str(HALF_WIDTH_KATAKANA);
    }
    if config.hiragana {
        class.push_str(HIRAGANA_RANGE);
    }
    if config.accepts_full_width_numbers() {
        class.push_str(FULL_WIDTH_NUMBERS);
    }
    if config.accepts_half_width_numbers() {
        class.push_str(HALF_WIDTH_NUMBERS);
    }
    if config.allow_spaces {
        class.push_str(FULL_WIDTH_SPACE);
        class.push_str(HALF_WIDTH_SPACE);
    }
    for c in &config.allow_special_chars {
        class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
    }

    class
}

/// Build the `^[<classes>]*$` pattern for `config`.
///
/// The pattern matches the empty string and any run of accepted
/// characters. With nothing enabled it is `^[]*$`.
///
/// ```
/// use omnify_validation::{build_pattern, KanaRuleConfig};
///
/// let config = KanaRuleConfig {
///     allow_spaces: false,
///     allow_special_chars: vec![],
///     ..KanaRuleConfig::default()
/// };
/// assert_eq!(build_pattern(&config), "^[ァ-ヶー]*$");
/// ```
pub fn build_pattern(config: &KanaRuleConfig) -> String {
    format!("^[{}]*$", character_class(config))
}

/// Compile the pattern for `config`.
///
/// The `regex` crate has no empty class, so an empty rule compiles to
/// `^$`, which accepts exactly what `^[]*$` accepts.
pub fn build_regex(config: &KanaRuleConfig) -> Result<Regex, KanaError> {
    let class = character_class(config);
    let regex = if class.is_empty() {
        Regex::new("^$")?
    } else {
        Regex::new(&format!("^[{}]*$", class))?
    };
    Ok(regex)
}

/// Whether `value` only contains characters `config` accepts.
///
/// Empty input is always valid; requiredness is a separate rule.
pub fn validate(value: &str, config: &KanaRuleConfig) -> bool {
    if value.is_empty() {
        return true;
    }
    build_regex(config)
        .map(|regex| regex.is_match(value))
        .unwrap_or(false)
}

/// Describe what `config` accepts, in `locale`.
///
/// `config.message` wins when set. Otherwise the script label is resolved
/// from `catalog` and wrapped in the `kana.pleaseEnter` sentence.
pub fn describe(config: &KanaRuleConfig, locale: &str, catalog: &MessageCatalog) -> String {
    if let Some(message) = &config.message {
        return message.clone();
    }

    let label = catalog.resolve_in(locale, config.label_key(), &TemplateParams::new());
    catalog.resolve_in(
        locale,
        "kana.pleaseEnter",
        &TemplateParams::new().with("label", label),
    )
}

/// A compiled kana rule, reusable across values.
#[derive(Debug, Clone)]
pub struct KanaRule {
    config: KanaRuleConfig,
    pattern: String,
    regex: Regex,
}

impl KanaRule {
    /// Compile `config`.
    pub fn new(config: KanaRuleConfig) -> Result<Self, KanaError> {
        let regex = build_regex(&config)?;
        Ok(Self {
            pattern: build_pattern(&config),
            regex,
            config,
        })
    }

    /// Compile full-width katakana with `overrides` applied.
    pub fn from_overrides(overrides: KanaRuleOverrides) -> Result<Self, KanaError> {
        Self::new(KanaRuleConfig::from_overrides(overrides))
    }

    pub fn config(&self) -> &KanaRuleConfig {
        &self.config
    }

    /// The `^[...]*$` source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_valid(&self, value: &str) -> bool {
        value.is_empty() || self.regex.is_match(value)
    }

    /// Description in the catalog's current locale.
    pub fn message(&self, catalog: &MessageCatalog) -> String {
        describe(&self.config, &catalog.locale(), catalog)
    }

    /// Validate a field value, reporting the rule description on failure.
    pub fn check(
        &self,
        value: &str,
        field: &str,
        catalog: &MessageCatalog,
    ) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, self.message(catalog))
                .with_constraint("kana")
                .with_value(value))
        }
    }
}
