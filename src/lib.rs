//! Text Interpolator - delimiter-based placeholder substitution
//!
//! This library replaces `{{ NAME }}`-style placeholders in text with values
//! from a registered mapping. Delimiters are configurable; unknown names
//! resolve to empty text and evaluation never fails.
//!
//! # Example
//!
//! ```rust
//! use text_interpolator::Interpolator;
//!
//! let mut interpolator = Interpolator::new("{{", "}}");
//! interpolator.register_variable("FAV_ANIMAL", "tigers");
//! interpolator.register_variable("SECOND_FAV", "lions");
//!
//! let text = interpolator.evaluate("My favorite animals are {{ FAV_ANIMAL }} and {{ SECOND_FAV }}.");
//! assert_eq!(text, "My favorite animals are tigers and lions.");
//! ```

pub mod config;
pub mod error;
pub mod interpolator;

pub use config::{parse_assignment, InterpolatorConfig};
pub use error::ConfigError;
pub use interpolator::{Interpolator, DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM};

/// Evaluate a template with a one-off interpolator built from `config`
///
/// # Example
///
/// ```rust
/// use text_interpolator::{interpolate_with_config, InterpolatorConfig};
///
/// let config = InterpolatorConfig::new()
///     .with_delims("${", "}")
///     .with_variable("USER", "ferris");
///
/// assert_eq!(interpolate_with_config("hello ${USER}", &config), "hello ferris");
/// ```
pub fn interpolate_with_config(template: &str, config: &InterpolatorConfig) -> String {
    Interpolator::from_config(config).evaluate(template)
}
