//! Localized validation messages for omnify forms
//!
//! - **Built-in table**: `required`, `minLength`, `maxLength`, `min`, `max`,
//!   `email`, `url` and `pattern` in eight locales, plus the labels used to
//!   describe kana rules
//! - **Overrides**: callers register their own templates per key and locale
//! - **Fallback**: custom current → custom fallback → built-in current →
//!   built-in fallback → built-in English → the key itself
//!
//! # Quick Start
//!
//! ```rust
//! use omnify_i18n::{MessageCatalog, TemplateParams};
//!
//! let catalog = MessageCatalog::new(); // locale "ja", fallback "en"
//! let params = TemplateParams::new().with("displayName", "氏名");
//! assert_eq!(catalog.resolve("required", &params), "氏名は必須です");
//!
//! catalog.register("required", "ja", "${displayName}を入力してください");
//! assert_eq!(catalog.resolve("required", &params), "氏名を入力してください");
//! ```

pub mod builtin;
mod catalog;
mod error;
mod template;

pub use catalog::{DEFAULT_FALLBACK_LOCALE, DEFAULT_LOCALE, MessageCatalog, MessageTable};
pub use error::I18nError;
pub use template::TemplateParams;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{I18nError, MessageCatalog, MessageTable, Result, TemplateParams};
}
