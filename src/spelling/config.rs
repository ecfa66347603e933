//! Configuration for spelling suggestion processing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SpellmendError};

/// Default number of candidates kept per misspelled term.
pub const DEFAULT_LIMIT: usize = 3;

/// Options controlling how backend corrections are filtered and displayed.
///
/// Any key missing from a configuration source falls back to its default and
/// unknown keys are ignored.
///
/// ```
/// use spellmend::spelling::config::SpellingConfig;
///
/// let config = SpellingConfig::from_json_str(r#"{"limit": 5, "color": "red"}"#).unwrap();
/// assert_eq!(config.limit, 5);
/// assert!(config.skip_numeric);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Maximum number of candidates kept per misspelled term.
    pub limit: usize,
    /// Whether purely numeric terms are left out.
    pub skip_numeric: bool,
    /// Whether each candidate carries a broadening `(term OR candidate)` clause.
    pub expand: bool,
    /// Whether candidates are keyed by the full corrected query.
    pub phrase: bool,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        SpellingConfig {
            limit: DEFAULT_LIMIT,
            skip_numeric: true,
            expand: true,
            phrase: false,
        }
    }
}

impl SpellingConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a configuration from a JSON value.
    ///
    /// The value must be an object. Known keys with the wrong type are rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(SpellmendError::config(format!(
                "expected a key/value object, found {value}"
            )));
        }
        serde_json::from_value(value).map_err(|e| SpellmendError::config(e.to_string()))
    }

    /// Resolve a configuration from a plain key/value map.
    pub fn from_map(map: HashMap<String, Value>) -> Result<Self> {
        Self::from_value(Value::Object(map.into_iter().collect()))
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded spelling config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Set the per-term candidate limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set whether numeric terms are skipped.
    pub fn with_skip_numeric(mut self, skip_numeric: bool) -> Self {
        self.skip_numeric = skip_numeric;
        self
    }

    /// Set whether expand clauses are produced.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Set whether phrase mode is used for display keys.
    pub fn with_phrase(mut self, phrase: bool) -> Self {
        self.phrase = phrase;
        self
    }
}
