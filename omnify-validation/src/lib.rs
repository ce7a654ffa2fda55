//! Form validation rules for omnify
//!
//! Japanese script rules, schema-neutral field rules and localized
//! messages for form widgets.
//!
//! # Examples
//!
//! ## Kana rules
//!
//! ```
//! use omnify_i18n::MessageCatalog;
//! use omnify_validation::{KanaRuleConfig, KATAKANA_FULL_WIDTH, build_pattern, describe, validate};
//!
//! assert!(validate("ヤマダ タロウ", &KATAKANA_FULL_WIDTH));
//! assert!(!validate("やまだ", &KATAKANA_FULL_WIDTH));
//! assert!(validate("", &KATAKANA_FULL_WIDTH));
//!
//! // toggles add to what is accepted
//! let with_numbers = KanaRuleConfig { allow_numbers: true, ..KATAKANA_FULL_WIDTH.clone() };
//! assert!(validate("タナカ123", &with_numbers));
//!
//! let catalog = MessageCatalog::new();
//! assert_eq!(
//!     describe(&KATAKANA_FULL_WIDTH, "en", &catalog),
//!     "Please enter in full-width katakana"
//! );
//! assert!(build_pattern(&with_numbers).starts_with("^["));
//! ```
//!
//! ## Field rules
//!
//! ```
//! use omnify_i18n::MessageCatalog;
//! use omnify_validation::{FieldRule, StringSchema};
//! use serde_json::json;
//!
//! let catalog = MessageCatalog::new().with_locale("en");
//! let rule = FieldRule::new(StringSchema::new().min_length(3), catalog)
//!     .with_display_name("Name");
//!
//! assert!(rule.validate(Some(&json!("Taro"))).is_ok());
//! assert_eq!(
//!     rule.validate(Some(&json!("Ta"))).unwrap_err().message,
//!     "Name must be at least 3 characters"
//! );
//! assert_eq!(rule.validate(None).unwrap_err().message, "Name is required");
//! ```

mod errors;
mod kana;
mod rules;
mod schema;
mod traits;

pub use errors::*;
pub use kana::*;
pub use rules::*;
pub use schema::*;
pub use traits::*;
