// Locale and message settings

use crate::{ConfigError, ConfigLoader, EnvLoader, Result};
use omnify_i18n::{MessageCatalog, MessageTable};
use omnify_log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for settings environment variables.
pub const DEFAULT_PREFIX: &str = "OMNIFY";

/// How a message catalog should be set up.
///
/// Deserializes from `{ "locale", "fallbackLocale", "messages" }`; every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub locale: Option<String>,
    pub fallback_locale: Option<String>,
    pub messages: MessageTable,
}

impl I18nSettings {
    /// Layer `other` on top: its locales win, messages merge per key and locale.
    pub fn merge(&mut self, other: I18nSettings) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }
        if other.fallback_locale.is_some() {
            self.fallback_locale = other.fallback_locale;
        }
        for (key, locales) in other.messages {
            self.messages.entry(key).or_default().extend(locales);
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("locale", &self.locale),
            ("fallbackLocale", &self.fallback_locale),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidSetting {
                    key: key.to_string(),
                    reason: "locale cannot be empty".to_string(),
                });
            }
        }

        for (key, locales) in &self.messages {
            if locales.keys().any(|locale| locale.trim().is_empty()) {
                return Err(ConfigError::InvalidSetting {
                    key: format!("messages.{}", key),
                    reason: "locale cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Configure `catalog`. Unset locales leave the catalog's own in place.
    pub fn apply(&self, catalog: &MessageCatalog) -> Result<()> {
        self.validate()?;

        if let Some(locale) = &self.locale {
            catalog.set_locale(locale.as_str());
        }
        if let Some(fallback) = &self.fallback_locale {
            catalog.set_fallback_locale(fallback.as_str());
        }
        if !self.messages.is_empty() {
            catalog.register_messages(self.messages.clone());
        }

        Ok(())
    }

    /// A catalog configured from these settings.
    pub fn catalog(&self) -> Result<MessageCatalog> {
        let catalog = MessageCatalog::new();
        self.apply(&catalog)?;
        Ok(catalog)
    }
}

/// Builds [`I18nSettings`] from files and environment variables.
///
/// Sources apply in order: settings files, message files, then
/// `<PREFIX>_LOCALE` and `<PREFIX>_FALLBACK_LOCALE`.
///
/// ```rust,no_run
/// use omnify_config::SettingsLoader;
///
/// let settings = SettingsLoader::new()
///     .with_default_dotenv()?
///     .file("config/i18n.toml")
///     .messages_file("config/messages.json")
///     .load()?;
/// # Ok::<(), omnify_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env: EnvLoader,
    files: Vec<PathBuf>,
    message_files: Vec<PathBuf>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_env(EnvLoader::new(Some(prefix.into())))
    }

    pub fn with_env(env: EnvLoader) -> Self {
        Self {
            env,
            files: Vec::new(),
            message_files: Vec::new(),
        }
    }

    pub fn dotenv(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.env = self.env.with_dotenv(path)?;
        Ok(self)
    }

    pub fn with_default_dotenv(mut self) -> Result<Self> {
        self.env = self.env.with_default_dotenv()?;
        Ok(self)
    }

    /// A JSON or TOML file shaped like [`I18nSettings`].
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// A JSON or TOML file holding only `{ key: { locale: template } }`.
    pub fn messages_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.message_files.push(path.into());
        self
    }

    pub fn load(&self) -> Result<I18nSettings> {
        let mut settings = I18nSettings::default();

        for path in &self.files {
            debug!(target: "omnify::config", "loading settings from {}", path.display());
            let value = ConfigLoader::auto(path)?.load_file(path)?;
            settings.merge(serde_json::from_value(value)?);
        }

        for path in &self.message_files {
            debug!(target: "omnify::config", "loading messages from {}", path.display());
            let value = ConfigLoader::auto(path)?.load_file(path)?;
            settings.merge(I18nSettings {
                messages: serde_json::from_value(value)?,
                ..Default::default()
            });
        }

        settings.merge(I18nSettings {
            locale: self.env.get("LOCALE"),
            fallback_locale: self.env.get("FALLBACK_LOCALE"),
            ..Default::default()
        });

        settings.validate()?;

        info!(
            target: "omnify::config",
            "i18n settings loaded: locale={} fallback={} custom keys={}",
            settings.locale.as_deref().unwrap_or("-"),
            settings.fallback_locale.as_deref().unwrap_or("-"),
            settings.messages.len()
        );

        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnify_i18n::TemplateParams;
    use std::collections::HashMap;

    fn table(key: &str, locale: &str, template: &str) -> MessageTable {
        HashMap::from([(
            key.to_string(),
            HashMap::from([(locale.to_string(), template.to_string())]),
        )])
    }

    #[test]
    fn test_merge_layers() {
        let mut base = I18nSettings {
            locale: Some("ja".into()),
            fallback_locale: Some("en".into()),
            messages: table("required", "ja", "必須"),
        };
        base.merge(I18nSettings {
            locale: Some("vi".into()),
            messages: table("required", "en", "Required"),
            ..Default::default()
        });

        assert_eq!(base.locale.as_deref(), Some("vi"));
        assert_eq!(base.fallback_locale.as_deref(), Some("en"));
        assert_eq!(base.messages["required"].len(), 2);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let settings: I18nSettings = serde_json::from_str(
            r#"{"fallbackLocale": "en", "messages": {"email": {"en": "Bad email"}}}"#,
        )
        .unwrap();
        assert_eq!(settings.locale, None);
        assert_eq!(settings.fallback_locale.as_deref(), Some("en"));
        assert_eq!(settings.messages["email"]["en"], "Bad email");
    }

    #[test]
    fn test_validate_rejects_blank_locale() {
        let settings = I18nSettings {
            locale: Some(" ".into()),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidSetting { .. })
        ));

        let settings = I18nSettings {
            messages: table("required", "", "x"),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_apply_configures_catalog() {
        let settings = I18nSettings {
            locale: Some("en".into()),
            fallback_locale: None,
            messages: table("required", "en", "${displayName} please"),
        };
        let catalog = settings.catalog().unwrap();

        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.fallback_locale(), "en");
        assert_eq!(
            catalog.resolve("required", &TemplateParams::new().with("displayName", "Name")),
            "Name please"
        );
    }

    #[test]
    fn test_env_overrides_files() {
        let loader = SettingsLoader::with_env(
            EnvLoader::new(Some(DEFAULT_PREFIX.to_string()))
                .with_vars([("OMNIFY_LOCALE", "ko"), ("OMNIFY_FALLBACK_LOCALE", "ja")]),
        );
        let settings = loader.load().unwrap();
        assert_eq!(settings.locale.as_deref(), Some("ko"));
        assert_eq!(settings.fallback_locale.as_deref(), Some("ja"));
        assert!(settings.messages.is_empty());
    }
}
