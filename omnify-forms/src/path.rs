//! Field paths for nested form fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a nested field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl PathSegment {
    /// Parse a single segment. ASCII digits that fit `usize` become an index.
    pub fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse::<usize>() {
                return PathSegment::Index(index);
            }
        }
        PathSegment::Key(segment.to_string())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Key(key) => f.write_str(key),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(segment: &str) -> Self {
        PathSegment::Key(segment.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Where a server error belongs in a form.
///
/// Serializes as a plain string for flat names and as an array of strings
/// and numbers for nested ones, which is what form widgets accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldPath {
    Name(String),
    Segments(Vec<PathSegment>),
}

impl FieldPath {
    /// Parse a Laravel error key.
    ///
    /// ```
    /// use omnify_forms::{FieldPath, PathSegment};
    ///
    /// assert_eq!(FieldPath::parse("email"), FieldPath::Name("email".into()));
    /// assert_eq!(
    ///     FieldPath::parse("items.0.name"),
    ///     FieldPath::Segments(vec!["items".into(), 0.into(), "name".into()])
    /// );
    /// ```
    pub fn parse(key: &str) -> Self {
        if key.contains('.') {
            FieldPath::Segments(key.split('.').map(PathSegment::parse).collect())
        } else {
            FieldPath::Name(key.to_string())
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, FieldPath::Segments(_))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name(name) => f.write_str(name),
            FieldPath::Segments(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_parsing() {
        assert_eq!(PathSegment::parse("0"), PathSegment::Index(0));
        assert_eq!(PathSegment::parse("12"), PathSegment::Index(12));
        assert_eq!(PathSegment::parse("name"), PathSegment::Key("name".into()));
        assert_eq!(PathSegment::parse("1a"), PathSegment::Key("1a".into()));
        assert_eq!(PathSegment::parse("-1"), PathSegment::Key("-1".into()));
        assert_eq!(PathSegment::parse(""), PathSegment::Key("".into()));
    }

    #[test]
    fn test_overflowing_index_stays_key() {
        let huge = "99999999999999999999999999";
        assert_eq!(PathSegment::parse(huge), PathSegment::Key(huge.into()));
    }

    #[test]
    fn test_flat_key_is_bare_name() {
        assert_eq!(FieldPath::parse("0"), FieldPath::Name("0".into()));
        assert!(!FieldPath::parse("email").is_nested());
    }

    #[test]
    fn test_serializes_like_form_names() {
        assert_eq!(serde_json::to_value(FieldPath::parse("email")).unwrap(), json!("email"));
        assert_eq!(
            serde_json::to_value(FieldPath::parse("users.1.addresses.0.city")).unwrap(),
            json!(["users", 1, "addresses", 0, "city"])
        );
    }

    #[test]
    fn test_display_round_trips_key() {
        for key in ["email", "user.name", "items.0.name", "a..b"] {
            assert_eq!(FieldPath::parse(key).to_string(), key);
        }
    }
}
