//! Error types for string calculation.
//!
//! Every failure is a variant of [`Error`], so callers can match on the kind
//! instead of inspecting message text.
//!
//! ## Error Categories
//!
//! - **Invalid Input**: no string was supplied (absent value, non-UTF-8 bytes)
//! - **Parse Errors**: a token is not a base-10 integer
//! - **Negative Numbers**: one or more values are below zero
//! - **Overflow**: the sum does not fit in an `i64`
//!
//! ## Examples
//!
//! ```rust
//! use string_calculator::{add, Error};
//!
//! match add("-1,-2,3,-5") {
//!     Err(Error::NegativeNumbers { negatives }) => {
//!         assert_eq!(negatives, vec![-1, -2, -5]);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::num::ParseIntError;
use thiserror::Error;

/// Represents all possible errors that can occur while adding a number string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was not a string.
    #[error("numbers must be a string (got {0})")]
    InvalidInput(String),

    /// A non-empty token is not a valid base-10 integer.
    #[error("unable to parse integer from token {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// One or more parsed values are negative, listed in encounter order.
    #[error("negative numbers not allowed {}", join_negatives(.negatives))]
    NegativeNumbers { negatives: Vec<i64> },

    /// The sum exceeds the range of `i64`.
    #[error("sum overflows a 64-bit signed integer")]
    Overflow,
}

impl Error {
    /// Creates an invalid input error describing what was received instead of a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::Error;
    ///
    /// let err = Error::invalid_input("None");
    /// assert_eq!(err.to_string(), "numbers must be a string (got None)");
    /// ```
    pub fn invalid_input(found: impl Into<String>) -> Self {
        Error::InvalidInput(found.into())
    }

    /// Creates a parse error for the offending token.
    pub fn parse(token: &str, source: ParseIntError) -> Self {
        Error::Parse {
            token: token.to_string(),
            source,
        }
    }

    /// Creates a negative number error carrying every negative value in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::Error;
    ///
    /// let err = Error::negative_numbers(vec![-1, -2, -5]);
    /// assert_eq!(err.to_string(), "negative numbers not allowed -1,-2,-5");
    /// ```
    pub fn negative_numbers(negatives: Vec<i64>) -> Self {
        Error::NegativeNumbers { negatives }
    }

    /// Returns the rejected negative values, if this is a negative number error.
    #[must_use]
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Error::NegativeNumbers { negatives } => Some(negatives),
            _ => None,
        }
    }

    /// Returns the offending token, if this is a parse error.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::Parse { token, .. } => Some(token),
            _ => None,
        }
    }
}

fn join_negatives(negatives: &[i64]) -> String {
    negatives
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub type Result<T> = std::result::Result<T, Error>;
