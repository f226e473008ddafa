//! Error types for configuration loading and command-line input

use thiserror::Error;

/// Errors that can occur while building an interpolator from external input
///
/// Evaluation itself never fails; only reading configuration can.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `NAME=VALUE` assignment without `=` or without a name
    #[error("invalid variable assignment '{input}': expected NAME=VALUE")]
    InvalidAssignment { input: String },
}

impl ConfigError {
    pub fn invalid_assignment(input: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
        }
    }
}
