//! The string calculator.
//!
//! [`StringCalculator`] runs the whole pipeline for one input:
//!
//! 1. detect an optional `//<declaration>\n` header
//! 2. resolve the delimiter set
//! 3. tokenize the body
//! 4. parse every token as an `i64`
//! 5. reject negatives
//! 6. sum
//!
//! The calculator holds only its options and never mutates them, so one
//! instance can be shared freely, across threads included.

use crate::header::split_header;
use crate::tokenizer::tokenize;
use crate::{CalculatorOptions, Delimiters, Error, Result};
use std::borrow::Cow;

/// Adds up delimiter-separated integers.
///
/// # Examples
///
/// ```rust
/// use string_calculator::StringCalculator;
///
/// let calc = StringCalculator::new();
/// assert_eq!(calc.add("").unwrap(), 0);
/// assert_eq!(calc.add("1,2\n3").unwrap(), 6);
/// assert_eq!(calc.add("//[***]\n1***2***3").unwrap(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringCalculator {
    options: CalculatorOptions,
}

impl StringCalculator {
    /// Creates a calculator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: CalculatorOptions) -> Self {
        StringCalculator { options }
    }

    #[must_use]
    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Sums the integers in `numbers`.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] if a token is not a base-10 integer
    /// - [`Error::NegativeNumbers`] if any value is negative
    /// - [`Error::Overflow`] if the sum does not fit in an `i64`
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn add(&self, numbers: &str) -> Result<i64> {
        if numbers.is_empty() {
            return Ok(0);
        }

        let (delimiters, body) = self.resolve(numbers);
        let values = parse_tokens(body, &delimiters)?;
        reject_negatives(&values)?;
        sum(&values)
    }

    /// Like [`add`](Self::add), but accepts an absent value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for `None`, otherwise the errors of
    /// [`add`](Self::add).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::{Error, StringCalculator};
    ///
    /// let calc = StringCalculator::new();
    /// assert_eq!(calc.add_opt(Some("1,2")).unwrap(), 3);
    /// assert!(matches!(calc.add_opt(None), Err(Error::InvalidInput(_))));
    /// ```
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn add_opt(&self, numbers: Option<&str>) -> Result<i64> {
        match numbers {
            Some(numbers) => self.add(numbers),
            None => Err(Error::invalid_input("None")),
        }
    }

    /// Like [`add`](Self::add), but takes raw bytes that must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the bytes are not valid UTF-8,
    /// otherwise the errors of [`add`](Self::add).
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn add_bytes(&self, numbers: &[u8]) -> Result<i64> {
        let numbers = std::str::from_utf8(numbers)
            .map_err(|e| Error::invalid_input(format!("invalid UTF-8: {e}")))?;
        self.add(numbers)
    }

    /// Picks the delimiter set and the body for `numbers`.
    fn resolve<'a>(&'a self, numbers: &'a str) -> (Cow<'a, Delimiters>, &'a str) {
        if self.options.custom_delimiters {
            if let (Some(declaration), body) = split_header(numbers) {
                let delimiters = Delimiters::from_declaration(declaration, &self.options.delimiters);
                log::debug!("custom delimiter header {declaration:?} resolved to {delimiters:?}");
                return (Cow::Owned(delimiters), body);
            }
        }
        (Cow::Borrowed(&self.options.delimiters), numbers)
    }
}

/// Parses every token, failing on the first one that is not an integer.
fn parse_tokens(body: &str, delimiters: &Delimiters) -> Result<Vec<i64>> {
    tokenize(body, delimiters)
        .map(|token| token.parse::<i64>().map_err(|e| Error::parse(token, e)))
        .collect()
}

fn reject_negatives(values: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = values.iter().copied().filter(|n| *n < 0).collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(Error::negative_numbers(negatives))
    }
}

fn sum(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(Error::Overflow)
}
