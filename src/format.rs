//! Input Format
//!
//! This module documents the number-string format accepted by
//! [`add`](crate::add). It contains no code.
//!
//! # Overview
//!
//! An input is an optional delimiter header followed by a body of integers
//! separated by delimiters:
//!
//! ```text
//! [//<declaration>\n]<n1><d><n2><d>...<nN>
//! ```
//!
//! The empty string sums to `0` and is never inspected further.
//!
//! # Header
//!
//! | Input | Delimiters | Body |
//! |-------|------------|------|
//! | `1,2\n3` | `,` `\n` (defaults) | `1,2\n3` |
//! | `//;\n1;2` | `;` | `1;2` |
//! | `//[***]\n1***2` | `***` | `1***2` |
//! | `//[*][%]\n1*2%3` | `*` `%` | `1*2%3` |
//! | `//\n1,2` | defaults | `1,2` |
//! | `//[]\n1,2` | defaults | `1,2` |
//! | `//;1;2` | defaults (no newline, so no header) | `//;1;2` |
//!
//! **Rules**:
//! - The header starts at the very first character. `//` anywhere else is body text.
//! - The declaration ends at the first newline after `//`. Later newlines belong to the body.
//! - A declaration that starts with `[` and ends with `]` is a list of bracketed groups.
//!   Each group ends at the first `]` after its `[`, so `[[x]]` declares `[x`.
//! - Any other non-empty declaration is one literal delimiter, brackets included (`[*`).
//! - Declared delimiters replace the defaults; they are never merged.
//! - Empty delimiters never split. A header that declares only empty ones
//!   behaves as if it declared nothing and the defaults apply.
//!
//! # Body
//!
//! - Delimiters are literal text. `.`, `*`, `|`, `$`, `\` have no special meaning.
//! - At each position the longest matching delimiter wins: with `*` and `**`
//!   declared, `1**2` is `1` and `2`.
//! - Each piece between delimiters is trimmed of whitespace. Empty pieces are
//!   dropped, so `,1,,2,` sums to `3`.
//!
//! # Numbers
//!
//! | Token | Accepted | Value |
//! |-------|----------|-------|
//! | `42` | yes | 42 |
//! | `+42` | yes | 42 |
//! | `-0` | yes | 0 |
//! | `-7` | parsed, then rejected as negative | |
//! | `1.5` | no | |
//! | `1_000` | no | |
//! | `0x10` | no | |
//! | `99999999999999999999` | no (outside `i64`) | |
//!
//! # Errors
//!
//! Tokens are parsed left to right and the first invalid token fails the
//! call. Only when every token parses are negatives checked; all of them are
//! reported together:
//!
//! ```text
//! negative numbers not allowed -1,-2,-5
//! ```
