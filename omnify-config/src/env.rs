// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Reads prefixed variables from the process environment, optionally
/// layered over a `.env` file and fixed values.
///
/// Process variables win over `.env` entries, which win over nothing.
/// Fixed values set with [`EnvLoader::with_vars`] replace the process
/// environment entirely.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
    dotenv: HashMap<String, String>,
    fixed: Option<HashMap<String, String>>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            ..Default::default()
        }
    }

    /// Use `vars` instead of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fixed = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Read a `.env` file as a lower layer.
    pub fn with_dotenv(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path.as_ref())
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;

        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::ParseError(e.to_string()))?;
            self.dotenv.insert(key, value);
        }

        Ok(self)
    }

    /// Read `.env` from the working directory or its parents, if present.
    pub fn with_default_dotenv(self) -> Result<Self> {
        match dotenvy::dotenv_iter() {
            Ok(entries) => {
                let mut loader = self;
                for entry in entries {
                    let (key, value) =
                        entry.map_err(|e| ConfigError::ParseError(e.to_string()))?;
                    loader.dotenv.insert(key, value);
                }
                Ok(loader)
            }
            Err(_) => Ok(self),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    fn lookup(&self, full_key: &str) -> Option<String> {
        let primary = match &self.fixed {
            Some(fixed) => fixed.get(full_key).cloned(),
            None => env::var(full_key).ok(),
        };
        primary.or_else(|| self.dotenv.get(full_key).cloned())
    }

    /// All variables under the prefix, keyed by their lowercase suffix.
    pub fn load(&self) -> HashMap<String, String> {
        let process: Vec<(String, String)> = match &self.fixed {
            Some(fixed) => fixed.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => env::vars().collect(),
        };

        let mut config = HashMap::new();
        for (key, value) in self.dotenv.iter().map(|(k, v)| (k.clone(), v.clone())).chain(process) {
            let trimmed = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(rest) if rest.starts_with('_') => rest.trim_start_matches('_'),
                    _ => continue,
                },
                None => key.as_str(),
            };
            config.insert(trimmed.to_lowercase(), value);
        }

        config
    }

    /// Load one variable, adding the prefix.
    pub fn load_var(&self, key: &str) -> Result<String> {
        self.lookup(&self.full_key(key))
            .ok_or(ConfigError::EnvError(env::VarError::NotPresent))
    }

    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Like [`EnvLoader::load_var`], but a missing or blank variable is `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.load_var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_loader_with_default() {
        let loader = EnvLoader::new(None);
        assert_eq!(loader.load_var_or("NONEXISTENT_VAR_12345", "default"), "default");
    }

    #[test]
    fn test_prefixed_lookup() {
        let loader = EnvLoader::new(Some("OMNIFY".to_string()))
            .with_vars([("OMNIFY_LOCALE", "vi"), ("LOCALE", "ko")]);

        assert_eq!(loader.load_var("locale").unwrap(), "vi");
        assert!(loader.load_var("fallback_locale").is_err());
    }

    #[test]
    fn test_blank_is_none() {
        let loader = EnvLoader::new(Some("OMNIFY".to_string()))
            .with_vars([("OMNIFY_LOCALE", "  ")]);
        assert_eq!(loader.get("LOCALE"), None);
    }

    #[test]
    fn test_load_strips_prefix() {
        let loader = EnvLoader::new(Some("OMNIFY".to_string())).with_vars([
            ("OMNIFY_LOCALE", "en"),
            ("OMNIFY_FALLBACK_LOCALE", "ja"),
            ("OMNIFYX_OTHER", "x"),
            ("PATH", "/bin"),
        ]);

        let vars = loader.load();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["locale"], "en");
        assert_eq!(vars["fallback_locale"], "ja");
    }

    #[test]
    fn test_dotenv_is_lower_layer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "OMNIFY_LOCALE=th").unwrap();
        writeln!(file, "OMNIFY_FALLBACK_LOCALE=es").unwrap();

        let loader = EnvLoader::new(Some("OMNIFY".to_string()))
            .with_vars([("OMNIFY_LOCALE", "zh-TW")])
            .with_dotenv(file.path())
            .unwrap();

        assert_eq!(loader.get("LOCALE").as_deref(), Some("zh-TW"));
        assert_eq!(loader.get("FALLBACK_LOCALE").as_deref(), Some("es"));
    }

    #[test]
    fn test_missing_dotenv_is_error() {
        let result = EnvLoader::new(None).with_dotenv("/nonexistent/omnify/.env");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
