//! Message catalog
//!
//! Locale-aware lookup of validation message templates with layered
//! fallback and caller-registered overrides.

use crate::{I18nError, Result, TemplateParams, builtin};
use omnify_log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// `key -> locale -> template`
pub type MessageTable = HashMap<String, HashMap<String, String>>;

/// Locale used when a catalog is created or reset.
pub const DEFAULT_LOCALE: &str = "ja";

/// Fallback locale used when a catalog is created or reset.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

#[derive(Debug)]
struct CatalogState {
    locale: String,
    fallback_locale: String,
    custom: MessageTable,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
            custom: HashMap::new(),
        }
    }
}

impl CatalogState {
    fn custom(&self, key: &str, locale: &str) -> Option<&str> {
        self.custom
            .get(key)
            .and_then(|locales| locales.get(locale))
            .map(|s| s.as_str())
    }

    /// custom[locale] -> custom[fallback] -> builtin[locale] ->
    /// builtin[fallback] -> builtin["en"]
    fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        let fallback = self.fallback_locale.as_str();

        self.custom(key, locale)
            .or_else(|| self.custom(key, fallback))
            .map(str::to_string)
            .or_else(|| {
                builtin::template(key, locale)
                    .or_else(|| builtin::template(key, fallback))
                    .or_else(|| builtin::template(key, "en"))
                    .map(str::to_string)
            })
    }
}

/// Localized message catalog.
///
/// Each catalog owns its locale settings and overrides, so independent form
/// sessions in one process do not interfere. Clones share state.
///
/// # Examples
///
/// ```
/// use omnify_i18n::{MessageCatalog, TemplateParams};
///
/// let catalog = MessageCatalog::new().with_locale("en");
/// let params = TemplateParams::new().with("displayName", "Name").with("min", 3);
/// assert_eq!(
///     catalog.resolve("minLength", &params),
///     "Name must be at least 3 characters"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl MessageCatalog {
    /// Create a catalog with locale `ja` and fallback `en`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current locale.
    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        self.set_locale(locale);
        self
    }

    /// Set the fallback locale.
    pub fn with_fallback(self, locale: impl Into<String>) -> Self {
        self.set_fallback_locale(locale);
        self
    }

    pub fn set_locale(&self, locale: impl Into<String>) {
        self.state.write().locale = locale.into();
    }

    pub fn locale(&self) -> String {
        self.state.read().locale.clone()
    }

    pub fn set_fallback_locale(&self, locale: impl Into<String>) {
        self.state.write().fallback_locale = locale.into();
    }

    pub fn fallback_locale(&self) -> String {
        self.state.read().fallback_locale.clone()
    }

    /// Merge overrides into the catalog.
    ///
    /// Merging is per `(key, locale)`: registering `email.ja` leaves an
    /// earlier `email.en` override in place. The last registration wins.
    pub fn register_messages(&self, messages: MessageTable) {
        let mut state = self.state.write();
        for (key, locales) in messages {
            debug!(target: "omnify::i18n", "registering {} locale(s) for {}", locales.len(), key);
            state.custom.entry(key).or_default().extend(locales);
        }
    }

    /// Register a single override.
    pub fn register(
        &self,
        key: impl Into<String>,
        locale: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.state
            .write()
            .custom
            .entry(key.into())
            .or_default()
            .insert(locale.into(), template.into());
    }

    /// Parse `{"key": {"locale": "template"}}` and register it.
    pub fn register_messages_json(&self, json: &str) -> Result<()> {
        let messages: MessageTable = serde_json::from_str(json)?;

        if let Some(locale) = messages
            .values()
            .flat_map(|locales| locales.keys())
            .find(|locale| locale.trim().is_empty())
        {
            return Err(I18nError::InvalidLocale(locale.clone()));
        }

        self.register_messages(messages);
        Ok(())
    }

    /// Resolve `key` in the current locale and substitute `params`.
    ///
    /// Unknown keys resolve to the key itself.
    pub fn resolve(&self, key: &str, params: &TemplateParams) -> String {
        let locale = self.locale();
        self.resolve_in(&locale, key, params)
    }

    /// Resolve `key` as if `locale` were current.
    pub fn resolve_in(&self, locale: &str, key: &str, params: &TemplateParams) -> String {
        let template = self.template(locale, key).unwrap_or_else(|| {
            debug!(target: "omnify::i18n", "no template for {} in {}", key, locale);
            key.to_string()
        });
        params.apply(&template)
    }

    /// Raw template for `key`, following the fallback chain.
    pub fn template(&self, locale: &str, key: &str) -> Option<String> {
        self.state.read().lookup(key, locale)
    }

    /// Whether any layer has a template for `key`.
    pub fn has(&self, key: &str) -> bool {
        builtin::contains(key) || self.state.read().custom.contains_key(key)
    }

    /// Every built-in and custom key resolved for `locale` (or the current
    /// locale), placeholders left intact.
    pub fn resolve_all(&self, locale: Option<&str>) -> HashMap<String, String> {
        let state = self.state.read();
        let locale = locale.unwrap_or(state.locale.as_str());

        builtin::keys()
            .map(str::to_string)
            .chain(state.custom.keys().cloned())
            .map(|key| {
                let template = state.lookup(&key, locale).unwrap_or_else(|| key.clone());
                (key, template)
            })
            .collect()
    }

    /// Restore locale `ja`, fallback `en` and drop every override.
    pub fn reset(&self) {
        *self.state.write() = CatalogState::default();
    }
}
