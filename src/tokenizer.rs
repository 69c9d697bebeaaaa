//! Literal, longest-first tokenization of the number list.
//!
//! The body is scanned left to right. At each position the delimiters are
//! tried longest first and the first literal match ends the current piece.
//! Pieces are trimmed; pieces that are empty after trimming are skipped, so
//! doubled delimiters or delimiters at either edge never produce a token.

use crate::Delimiters;

/// Iterator over the tokens of a body, created by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a, 'd> {
    rest: Option<&'a str>,
    delimiters: Vec<&'d str>,
}

/// Splits `body` on `delimiters`, yielding trimmed, non-empty tokens.
///
/// # Examples
///
/// ```rust
/// use string_calculator::{tokenize, Delimiters};
///
/// let tokens: Vec<_> = tokenize(" 1 ,, 2\n3 ,", &Delimiters::default()).collect();
/// assert_eq!(tokens, vec!["1", "2", "3"]);
///
/// let stars = Delimiters::new(["*", "**"]);
/// let tokens: Vec<_> = tokenize("1**2*3", &stars).collect();
/// assert_eq!(tokens, vec!["1", "2", "3"]);
/// ```
pub fn tokenize<'a, 'd>(body: &'a str, delimiters: &'d Delimiters) -> Tokens<'a, 'd> {
    Tokens {
        rest: Some(body),
        delimiters: delimiters.split_order(),
    }
}

impl<'a> Tokens<'a, '_> {
    /// Cuts the next raw piece off the remaining body.
    fn next_piece(&mut self) -> Option<&'a str> {
        let rest = self.rest?;

        for (idx, _) in rest.char_indices() {
            let tail = &rest[idx..];
            if let Some(delimiter) = self.delimiters.iter().find(|d| tail.starts_with(**d)) {
                self.rest = Some(&tail[delimiter.len()..]);
                return Some(&rest[..idx]);
            }
        }

        self.rest = None;
        Some(rest)
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(piece) = self.next_piece() {
            let token = piece.trim();
            if !token.is_empty() {
                log::trace!("token {token:?}");
                return Some(token);
            }
        }
        None
    }
}
