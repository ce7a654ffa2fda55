//! Settings for omnify message catalogs
//!
//! Locale and message overrides come from, in increasing priority:
//!
//! 1. JSON or TOML settings files (`locale`, `fallbackLocale`, `messages`)
//! 2. JSON or TOML message files (`{ key: { locale: template } }`)
//! 3. `.env` entries and environment variables, `OMNIFY_LOCALE` and
//!    `OMNIFY_FALLBACK_LOCALE`, process variables winning over `.env`
//!
//! ```rust
//! use omnify_config::{EnvLoader, SettingsLoader};
//!
//! let env = EnvLoader::new(Some("OMNIFY".to_string())).with_vars([("OMNIFY_LOCALE", "en")]);
//! let settings = SettingsLoader::with_env(env).load()?;
//!
//! let catalog = settings.catalog()?;
//! assert_eq!(catalog.locale(), "en");
//! # Ok::<(), omnify_config::ConfigError>(())
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{DEFAULT_PREFIX, I18nSettings, SettingsLoader};
