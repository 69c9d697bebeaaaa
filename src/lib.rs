//! # string_calculator
//!
//! Sums the integers found in a delimiter-separated string.
//!
//! ## Key Features
//!
//! - **Default Delimiters**: `,` and newline
//! - **Custom Delimiters**: a leading `//<declaration>\n` header declares one delimiter
//!   (`//;\n`) or several of any length (`//[***][%]\n`)
//! - **Literal Matching**: delimiters are never treated as pattern syntax; the
//!   longest delimiter wins where several could match
//! - **Structured Errors**: negative numbers are reported with the full,
//!   ordered list of offending values
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use string_calculator::{add, Error};
//!
//! assert_eq!(add("").unwrap(), 0);
//! assert_eq!(add("1,2\n3").unwrap(), 6);
//! assert_eq!(add("//;\n1;2").unwrap(), 3);
//! assert_eq!(add("//[*][%]\n1*2%3").unwrap(), 6);
//!
//! let err = add("1,-2,3,-5").unwrap_err();
//! assert_eq!(err.to_string(), "negative numbers not allowed -2,-5");
//! assert_eq!(err.negatives(), Some(&[-2, -5][..]));
//!
//! assert!(matches!(add("1,2,foo"), Err(Error::Parse { .. })));
//! ```
//!
//! ## Logging
//!
//! Header resolution is reported at `debug` level and every token at `trace`
//! level through the [`log`](https://docs.rs/log) facade. Install any logger
//! to see them.
//!
//! ## Input Format
//!
//! See the [`format`] module for the complete description of the input format.

pub mod calculator;
pub mod delimiters;
pub mod error;
pub mod format;
pub mod header;
pub mod options;
pub mod tokenizer;

pub use calculator::StringCalculator;
pub use delimiters::{Delimiters, DEFAULT_DELIMITERS};
pub use error::{Error, Result};
pub use options::CalculatorOptions;
pub use tokenizer::{tokenize, Tokens};

/// Sums the integers in `numbers` using default options.
///
/// # Examples
///
/// ```rust
/// use string_calculator::add;
///
/// assert_eq!(add(" 1 , 2 \n 3 ").unwrap(), 6);
/// ```
///
/// # Errors
///
/// Returns an error if a token is not an integer, if any value is negative,
/// or if the sum overflows.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn add(numbers: &str) -> Result<i64> {
    StringCalculator::new().add(numbers)
}

/// Sums the integers in `numbers` with custom options.
///
/// # Examples
///
/// ```rust
/// use string_calculator::{add_with_options, CalculatorOptions, Delimiters};
///
/// let options = CalculatorOptions::new().with_delimiters(Delimiters::new(["\t"]));
/// assert_eq!(add_with_options("1\t2", options).unwrap(), 3);
/// ```
///
/// # Errors
///
/// Same as [`add`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn add_with_options(numbers: &str, options: CalculatorOptions) -> Result<i64> {
    StringCalculator::with_options(options).add(numbers)
}

/// Sums the integers in `numbers`, rejecting an absent value.
///
/// # Examples
///
/// ```rust
/// use string_calculator::{add_opt, Error};
///
/// assert_eq!(add_opt(Some("4,5")).unwrap(), 9);
/// assert!(matches!(add_opt(None), Err(Error::InvalidInput(_))));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for `None`, otherwise the errors of [`add`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn add_opt(numbers: Option<&str>) -> Result<i64> {
    StringCalculator::new().add_opt(numbers)
}

/// Sums the integers in a UTF-8 byte slice.
///
/// # Examples
///
/// ```rust
/// use string_calculator::add_bytes;
///
/// assert_eq!(add_bytes(b"//;\n1;2").unwrap(), 3);
/// assert!(add_bytes(&[0xff, 0xfe]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the bytes are not valid UTF-8,
/// otherwise the errors of [`add`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn add_bytes(numbers: &[u8]) -> Result<i64> {
    StringCalculator::new().add_bytes(numbers)
}
