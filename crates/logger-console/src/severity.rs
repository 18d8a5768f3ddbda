//! Severity label sets

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Severities routed to stderr when the configuration does not name any
pub const DEFAULT_ERROR_SEVERITIES: &[&str] = &["error"];

/// An unordered set of unique severity labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeveritySet(HashSet<String>);

impl SeveritySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The set used when no severities are configured
    pub fn default_error() -> Self {
        DEFAULT_ERROR_SEVERITIES.iter().copied().collect()
    }

    /// Check membership of a severity label
    #[inline]
    pub fn contains(&self, severity: &str) -> bool {
        self.0.contains(severity)
    }

    /// Number of unique labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no label is in the set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the labels in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SeveritySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SeveritySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<&str> = self.iter().collect();
        labels.sort_unstable();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

/// Normalize an untyped severity list into a [`SeveritySet`].
///
/// `None` yields an empty set. Anything other than an array of strings is
/// rejected with [`Error::InvalidConfiguration`]. Duplicates collapse.
pub fn to_severity_set(input: Option<&Value>) -> Result<SeveritySet> {
    let Some(value) = input else {
        return Ok(SeveritySet::new());
    };

    let Value::Array(elements) = value else {
        return Err(Error::invalid(format!(
            "severities must be an array of strings, got {}",
            kind_of(value)
        )));
    };

    elements
        .iter()
        .map(|el| match el {
            Value::String(label) => Ok(label.clone()),
            other => Err(Error::invalid(format!(
                "severity list may only contain strings, found {}",
                kind_of(other)
            ))),
        })
        .collect()
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_input_is_empty() {
        assert!(to_severity_set(None).unwrap().is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let set = to_severity_set(Some(&json!(["error", "warn", "error"]))).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("error"));
        assert!(set.contains("warn"));
    }

    #[test]
    fn empty_array_is_valid() {
        let set = to_severity_set(Some(&json!([]))).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_non_array() {
        for bad in [json!("error"), json!(1), json!(null), json!({"error": true})] {
            let err = to_severity_set(Some(&bad)).unwrap_err();
            assert!(matches!(err, Error::InvalidConfiguration(_)), "{bad}");
        }
    }

    #[test]
    fn rejects_non_string_element() {
        let err = to_severity_set(Some(&json!(["error", 5]))).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn default_set_is_error_only() {
        let set = SeveritySet::default_error();
        assert_eq!(set.len(), 1);
        assert!(set.contains("error"));
        assert!(!set.contains("debug"));
    }

    #[test]
    fn display_is_sorted() {
        let set: SeveritySet = ["warn", "error"].into_iter().collect();
        assert_eq!(set.to_string(), "{error, warn}");
    }
}
