//! Custom delimiter header detection.
//!
//! An input may start with `//<declaration>\n`. The declaration runs up to the first
//! newline after `//`; everything after that newline is the body.

/// Prefix that opens a delimiter header.
pub const HEADER_PREFIX: &str = "//";

/// Splits `input` into its header declaration and body.
///
/// Returns `(Some(declaration), body)` when the input starts with `//` and has a
/// newline after it, `(None, input)` otherwise.
///
/// # Examples
///
/// ```rust
/// use string_calculator::header::split_header;
///
/// assert_eq!(split_header("//;\n1;2"), (Some(";"), "1;2"));
/// assert_eq!(split_header("//[*]\n1*2\n3"), (Some("[*]"), "1*2\n3"));
/// assert_eq!(split_header("1,2"), (None, "1,2"));
/// assert_eq!(split_header("//;"), (None, "//;"));
/// ```
#[must_use]
pub fn split_header(input: &str) -> (Option<&str>, &str) {
    input
        .strip_prefix(HEADER_PREFIX)
        .and_then(|rest| rest.split_once('\n'))
        .map_or((None, input), |(declaration, body)| (Some(declaration), body))
}
