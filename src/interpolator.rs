//! Delimiter-based placeholder substitution
//!
//! An [`Interpolator`] owns a name -> value mapping and a pair of delimiter
//! tokens. [`Interpolator::evaluate`] replaces every `left ... right`
//! placeholder in a template with the registered value for the (space
//! trimmed) name between the delimiters.

use std::collections::HashMap;

use crate::config::InterpolatorConfig;

/// Left delimiter used by [`Interpolator::default`]
pub const DEFAULT_LEFT_DELIM: &str = "{{";

/// Right delimiter used by [`Interpolator::default`]
pub const DEFAULT_RIGHT_DELIM: &str = "}}";

/// Substitutes delimited placeholders with registered values
///
/// # Example
///
/// ```rust
/// use text_interpolator::Interpolator;
///
/// let mut interpolator = Interpolator::new("{{", "}}");
/// interpolator.register_variable("FAV_ANIMAL", "tigers");
///
/// assert_eq!(
///     interpolator.evaluate("{{ FAV_ANIMAL }} are my favorite animal."),
///     "tigers are my favorite animal."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolator {
    variables: HashMap<String, String>,
    left_delim: String,
    right_delim: String,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM)
    }
}

impl Interpolator {
    /// Create an interpolator with an empty mapping and the given delimiters
    ///
    /// Delimiters are not validated. Empty or overlapping tokens are accepted
    /// and only change how templates are split.
    pub fn new(left_delim: impl Into<String>, right_delim: impl Into<String>) -> Self {
        Self {
            variables: HashMap::new(),
            left_delim: left_delim.into(),
            right_delim: right_delim.into(),
        }
    }

    /// Create an interpolator from a loaded configuration
    ///
    /// Variables go through [`Interpolator::register_variables`], so their
    /// names are trimmed.
    pub fn from_config(config: &InterpolatorConfig) -> Self {
        let mut interpolator = Self::new(config.left_delim.as_str(), config.right_delim.as_str());
        interpolator.register_variables(&config.variables);
        interpolator
    }

    /// Set the left delimiter
    pub fn set_left_delim(&mut self, left_delim: impl Into<String>) {
        self.left_delim = left_delim.into();
    }

    /// Set the right delimiter
    pub fn set_right_delim(&mut self, right_delim: impl Into<String>) {
        self.right_delim = right_delim.into();
    }

    /// Set both delimiters
    pub fn set_delims(&mut self, left_delim: impl Into<String>, right_delim: impl Into<String>) {
        self.set_left_delim(left_delim);
        self.set_right_delim(right_delim);
    }

    pub fn left_delim(&self) -> &str {
        &self.left_delim
    }

    pub fn right_delim(&self) -> &str {
        &self.right_delim
    }

    /// Both delimiters as `(left, right)`
    pub fn delims(&self) -> (&str, &str) {
        (self.left_delim(), self.right_delim())
    }

    /// Register a single variable
    ///
    /// Leading and trailing spaces are removed from `name`; the value is
    /// stored as given. Registering an existing name overwrites its value.
    pub fn register_variable(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = trim_spaces(name.as_ref());
        self.variables.insert(name.to_string(), value.into());
    }

    /// Register every name/value pair, trimming each name
    pub fn register_variables<I, K, V>(&mut self, variables: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in variables {
            self.register_variable(name, value);
        }
    }

    /// Replace the whole mapping
    ///
    /// Keys are taken verbatim, without the trimming applied by
    /// [`Interpolator::register_variable`].
    pub fn replace_data(&mut self, data: HashMap<String, String>) {
        self.variables = data;
    }

    /// Remove all registered variables, keeping the delimiters
    pub fn clear_data(&mut self) {
        self.variables.clear();
    }

    /// Look up a variable by its exact stored name
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The current name -> value mapping
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Number of registered variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluate a template against the current mapping
    ///
    /// The template is split at every occurrence of the left delimiter. Each
    /// resulting segment that contains the right delimiter is split again at
    /// every right delimiter, and its first piece is replaced by the value
    /// registered for that piece's trimmed text (or by nothing when the name
    /// is unknown). Delimiter tokens are consumed by the splits.
    ///
    /// Placeholders do not nest: a name runs from a left delimiter to the
    /// first right delimiter after it within the same segment.
    ///
    /// ```rust
    /// use text_interpolator::Interpolator;
    ///
    /// let mut interpolator = Interpolator::default();
    /// interpolator.register_variable("NESTED_VAR", "value");
    ///
    /// assert_eq!(
    ///     interpolator.evaluate("{{ {{ NESTED_VAR }} }} should not match."),
    ///     " value  should not match."
    /// );
    /// ```
    pub fn evaluate(&self, template: &str) -> String {
        if !template.contains(self.left_delim.as_str()) {
            return template.to_string();
        }

        let mut output = String::with_capacity(template.len());
        for segment in split_literal(template, &self.left_delim) {
            self.substitute_segment(segment, &mut output);
        }
        output
    }

    /// Resolve the placeholder (if any) at the start of one segment
    fn substitute_segment(&self, segment: &str, output: &mut String) {
        if !segment.contains(self.right_delim.as_str()) {
            output.push_str(segment);
            return;
        }

        let mut pieces = split_literal(segment, &self.right_delim).into_iter();
        let name = trim_spaces(pieces.next().unwrap_or_default());
        match self.variables.get(name) {
            Some(value) => output.push_str(value),
            None => tracing::trace!(name, "unresolved placeholder"),
        }
        for rest in pieces {
            output.push_str(rest);
        }
    }
}

/// Strip leading and trailing ASCII spaces (tabs and newlines are kept)
fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Split at every literal occurrence of `token`
///
/// An empty token splits the text into its characters, and empty text split
/// on an empty token has no pieces at all.
fn split_literal<'a>(text: &'a str, token: &str) -> Vec<&'a str> {
    if token.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    text.split(token).collect()
}
