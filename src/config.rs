//! Configuration for building an [`Interpolator`](crate::Interpolator)
//!
//! A config can be assembled with builder methods or loaded from TOML:
//!
//! ```toml
//! [delimiters]
//! left = "<%"
//! right = "%>"
//!
//! [variables]
//! GREETING = "hello"
//! ```
//!
//! Every section and key is optional; missing ones keep their defaults.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::interpolator::{DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM};

/// Delimiters and initial variables for an interpolator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolatorConfig {
    /// Token opening a placeholder
    pub left_delim: String,
    /// Token closing a placeholder
    pub right_delim: String,
    /// Variables to register, name -> value
    pub variables: HashMap<String, String>,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    delimiters: Option<TomlDelimiters>,
    #[serde(default)]
    variables: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDelimiters {
    left: Option<String>,
    right: Option<String>,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            left_delim: DEFAULT_LEFT_DELIM.to_string(),
            right_delim: DEFAULT_RIGHT_DELIM.to_string(),
            variables: HashMap::new(),
        }
    }
}

impl InterpolatorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            variables = config.variables.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let (left, right) = match parsed.delimiters {
            Some(d) => (d.left, d.right),
            None => (None, None),
        };

        Ok(Self {
            left_delim: left.unwrap_or(defaults.left_delim),
            right_delim: right.unwrap_or(defaults.right_delim),
            variables: parsed.variables,
        })
    }

    /// Set the left delimiter
    pub fn with_left_delim(mut self, delim: impl Into<String>) -> Self {
        self.left_delim = delim.into();
        self
    }

    /// Set the right delimiter
    pub fn with_right_delim(mut self, delim: impl Into<String>) -> Self {
        self.right_delim = delim.into();
        self
    }

    /// Set both delimiters
    pub fn with_delims(self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.with_left_delim(left).with_right_delim(right)
    }

    /// Add a variable, overwriting an existing entry with the same name
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Add several variables
    pub fn with_variables<I, K, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.variables
            .extend(variables.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Parse a `NAME=VALUE` assignment
///
/// Splits at the first `=`. The name is trimmed of spaces and must not be
/// empty; the value is kept verbatim and may itself contain `=`.
pub fn parse_assignment(input: &str) -> Result<(String, String), ConfigError> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| ConfigError::invalid_assignment(input))?;
    let name = name.trim_matches(' ');
    if name.is_empty() {
        return Err(ConfigError::invalid_assignment(input));
    }
    Ok((name.to_string(), value.to_string()))
}
