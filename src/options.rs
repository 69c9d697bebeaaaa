//! Configuration options for the calculator.
//!
//! - [`CalculatorOptions`]: default delimiters and header handling
//!
//! Options implement `Serialize`/`Deserialize`, so they can be loaded from
//! any serde format. Missing fields take their default values.
//!
//! ## Examples
//!
//! ```rust
//! use string_calculator::{add_with_options, CalculatorOptions, Delimiters};
//!
//! let options = CalculatorOptions::new().with_delimiters(Delimiters::new([";", "|"]));
//! assert_eq!(add_with_options("1;2|3", options).unwrap(), 6);
//!
//! // Headers can be switched off entirely.
//! let options = CalculatorOptions::new().with_custom_delimiters(false);
//! assert!(add_with_options("//;\n1;2", options).is_err());
//! ```

use crate::Delimiters;
use serde::{Deserialize, Serialize};

/// Configuration options for [`StringCalculator`](crate::StringCalculator).
///
/// # Examples
///
/// ```rust
/// use string_calculator::CalculatorOptions;
///
/// let options = CalculatorOptions::new();
/// assert!(options.custom_delimiters);
/// assert!(options.delimiters.contains(","));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorOptions {
    /// Delimiters used when the input carries no header.
    pub delimiters: Delimiters,
    /// Whether a leading `//<declaration>\n` header is recognized.
    pub custom_delimiters: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        CalculatorOptions {
            delimiters: Delimiters::default(),
            custom_delimiters: true,
        }
    }
}

impl CalculatorOptions {
    /// Creates default options (`,` and `\n` delimiters, headers enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default delimiter set.
    ///
    /// A header still replaces this set wholesale for inputs that carry one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::{CalculatorOptions, Delimiters};
    ///
    /// let options = CalculatorOptions::new().with_delimiters(Delimiters::new(["\t"]));
    /// assert_eq!(options.delimiters.len(), 1);
    /// ```
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Enables or disables `//<declaration>\n` header detection.
    #[must_use]
    pub fn with_custom_delimiters(mut self, enabled: bool) -> Self {
        self.custom_delimiters = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let options = CalculatorOptions::new()
            .with_delimiters(Delimiters::new([";"]))
            .with_custom_delimiters(false);
        assert_eq!(options.delimiters, Delimiters::new([";"]));
        assert!(!options.custom_delimiters);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorOptions::default(), CalculatorOptions::new());
    }
}
