//! Console transport configuration
//!
//! Configuration is either built in code with [`ConsoleConfig::builder`], or
//! parsed from untyped options (a JSON value, JSON text or TOML text). Only
//! the untyped path can fail, since the builder cannot express bad input.

use crate::error::{Error, Result};
use crate::severity::{SeveritySet, kind_of, to_severity_set};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Option keys naming the stderr severities, in lookup order
const SEVERITY_KEYS: &[&str] = &[
    "errorSeverities",
    "error_severities",
    "stderrLevels",
    "stderr_levels",
    "level",
];

/// Option key for the message prefix
const PREFIX_KEY: &str = "prefix";

/// Immutable configuration for a [`ConsoleRouter`](crate::ConsoleRouter)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ConsoleConfig {
    error_severities: SeveritySet,
    prefix: Option<String>,
}

impl ConsoleConfig {
    /// Start building a configuration
    pub fn builder() -> ConsoleConfigBuilder {
        ConsoleConfigBuilder::default()
    }

    /// Parse untyped options.
    ///
    /// `null` is treated as "no options". Otherwise the value must be an
    /// object; unknown keys are ignored.
    pub fn from_value(options: &Value) -> Result<Self> {
        let empty = Map::new();
        let map = match options {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(Error::invalid(format!(
                    "options must be an object, got {}",
                    kind_of(other)
                )));
            }
        };

        let error_severities = match SEVERITY_KEYS.iter().find_map(|key| map.get(*key)) {
            Some(value) => to_severity_set(Some(value))?,
            None => SeveritySet::default_error(),
        };

        let prefix = match map.get(PREFIX_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(prefix)) => Some(prefix.clone()),
            Some(other) => {
                return Err(Error::invalid(format!(
                    "prefix must be a string, got {}",
                    kind_of(other)
                )));
            }
        };

        Ok(Self {
            error_severities,
            prefix,
        })
    }

    /// Parse options from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: Value = toml::from_str(text)?;
        Self::from_value(&value)
    }

    /// Severities written to stderr
    pub fn error_severities(&self) -> &SeveritySet {
        &self.error_severities
    }

    /// Prefix prepended to every message, if any
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            error_severities: SeveritySet::default_error(),
            prefix: None,
        }
    }
}

impl TryFrom<Value> for ConsoleConfig {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

/// Builder for [`ConsoleConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfigBuilder {
    error_severities: Option<SeveritySet>,
    prefix: Option<String>,
}

impl ConsoleConfigBuilder {
    /// Set the severities written to stderr, replacing the default
    pub fn stderr_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_severities = Some(levels.into_iter().collect());
        self
    }

    /// Set the message prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConsoleConfig {
        ConsoleConfig {
            error_severities: self
                .error_severities
                .unwrap_or_else(SeveritySet::default_error),
            prefix: self.prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_severities_use_default() {
        let config = ConsoleConfig::from_value(&json!({})).unwrap();
        assert_eq!(config.error_severities(), &SeveritySet::default_error());
        assert_eq!(config.prefix(), None);
    }

    #[test]
    fn null_options_use_default() {
        let config = ConsoleConfig::from_value(&Value::Null).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn accepts_every_severity_key() {
        for key in SEVERITY_KEYS {
            let mut options = Map::new();
            options.insert(key.to_string(), json!(["warn"]));
            let config = ConsoleConfig::from_value(&Value::Object(options)).unwrap();
            assert!(config.error_severities().contains("warn"), "{key}");
            assert!(!config.error_severities().contains("error"), "{key}");
        }
    }

    #[test]
    fn stderr_levels_wins_over_level() {
        let config =
            ConsoleConfig::from_value(&json!({ "level": ["debug"], "stderrLevels": ["warn"] }))
                .unwrap();
        assert!(config.error_severities().contains("warn"));
        assert!(!config.error_severities().contains("debug"));
    }

    #[test]
    fn error_severities_key_wins_over_aliases() {
        let config = ConsoleConfig::from_value(
            &json!({ "errorSeverities": ["fatal"], "stderrLevels": ["warn"], "level": ["debug"] }),
        )
        .unwrap();
        assert!(config.error_severities().contains("fatal"));
        assert_eq!(config.error_severities().len(), 1);
    }

    #[test]
    fn empty_error_severities_are_not_defaulted() {
        let config = ConsoleConfig::from_value(&json!({ "errorSeverities": [] })).unwrap();
        assert!(config.error_severities().is_empty());
    }

    #[test]
    fn empty_severities_are_kept_empty() {
        let config = ConsoleConfig::from_value(&json!({ "stderrLevels": [] })).unwrap();
        assert!(config.error_severities().is_empty());
    }

    #[test]
    fn rejects_non_object_options() {
        let err = ConsoleConfig::from_value(&json!(["error"])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_non_array_severities() {
        let err = ConsoleConfig::from_value(&json!({ "stderrLevels": "error" })).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = ConsoleConfig::from_value(&json!({ "level": null })).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_non_string_prefix() {
        let err = ConsoleConfig::from_value(&json!({ "prefix": 7 })).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn parses_json_text() {
        let config =
            ConsoleConfig::from_json_str(r#"{"stderrLevels": ["error", "warn"], "prefix": "APP"}"#)
                .unwrap();
        assert_eq!(config.error_severities().len(), 2);
        assert_eq!(config.prefix(), Some("APP"));
    }

    #[test]
    fn json_syntax_error_is_reported() {
        let err = ConsoleConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn parses_toml_text() {
        let config =
            ConsoleConfig::from_toml_str("stderr_levels = [\"warn\"]\nprefix = \"svc\"\n").unwrap();
        assert!(config.error_severities().contains("warn"));
        assert_eq!(config.prefix(), Some("svc"));
    }

    #[test]
    fn toml_non_string_element_is_invalid() {
        let err = ConsoleConfig::from_toml_str("stderr_levels = [\"warn\", 3]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn deserializes_inside_larger_config() {
        #[derive(Deserialize)]
        struct AppConfig {
            console: ConsoleConfig,
        }

        let app: AppConfig =
            serde_json::from_value(json!({ "console": { "stderrLevels": ["fatal"] } })).unwrap();
        assert!(app.console.error_severities().contains("fatal"));

        let bad = serde_json::from_value::<AppConfig>(json!({ "console": { "level": 1 } }));
        assert!(bad.is_err());
    }

    #[test]
    fn builder_defaults_and_overrides() {
        let config = ConsoleConfig::builder().build();
        assert_eq!(config, ConsoleConfig::default());

        let config = ConsoleConfig::builder()
            .stderr_levels(["error", "debug", "error"])
            .prefix("APP")
            .build();
        assert_eq!(config.error_severities().len(), 2);
        assert_eq!(config.prefix(), Some("APP"));
    }
}
