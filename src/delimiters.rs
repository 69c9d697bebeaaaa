//! Literal delimiter sets.
//!
//! A [`Delimiters`] value is an ordered list of separator strings. Separators
//! are always matched as literal text: `.`, `*`, `|` and friends carry no
//! special meaning.
//!
//! ## Examples
//!
//! ```rust
//! use string_calculator::Delimiters;
//!
//! let defaults = Delimiters::default();
//! assert!(defaults.contains(","));
//! assert!(defaults.contains("\n"));
//!
//! let custom = Delimiters::from_declaration("[***][%]", &defaults);
//! assert_eq!(custom.iter().collect::<Vec<_>>(), vec!["***", "%"]);
//! ```

use serde::{Deserialize, Serialize};

/// Separators used when no header declares custom ones.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// An ordered set of literal delimiter strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delimiters(Vec<String>);

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::new(DEFAULT_DELIMITERS)
    }
}

impl Delimiters {
    /// Builds a delimiter set from literal strings, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::Delimiters;
    ///
    /// let delimiters = Delimiters::new([";", "|"]);
    /// assert_eq!(delimiters.len(), 2);
    /// ```
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Delimiters(delimiters.into_iter().map(Into::into).collect())
    }

    /// Resolves the delimiter part of a `//<declaration>\n` header.
    ///
    /// - an empty declaration keeps `defaults`
    /// - `[d1][d2]...` yields every bracketed group, left to right
    /// - anything else is a single literal delimiter
    ///
    /// A result without any non-empty delimiter (such as `[]`) falls back to
    /// `defaults`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_calculator::Delimiters;
    ///
    /// let defaults = Delimiters::default();
    /// assert_eq!(Delimiters::from_declaration(";", &defaults), Delimiters::new([";"]));
    /// assert_eq!(Delimiters::from_declaration("", &defaults), defaults);
    /// assert_eq!(Delimiters::from_declaration("[]", &defaults), defaults);
    /// ```
    #[must_use]
    pub fn from_declaration(declaration: &str, defaults: &Delimiters) -> Self {
        if declaration.is_empty() {
            return defaults.clone();
        }

        let declared = if declaration.starts_with('[') && declaration.ends_with(']') {
            Delimiters::new(bracketed_groups(declaration))
        } else {
            Delimiters::new([declaration])
        };

        if declared.iter().all(str::is_empty) {
            log::debug!("header {declaration:?} declares no usable delimiter, using defaults");
            return defaults.clone();
        }

        declared
    }

    /// Iterates over the delimiters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `delimiter` is part of the set.
    #[must_use]
    pub fn contains(&self, delimiter: &str) -> bool {
        self.iter().any(|d| d == delimiter)
    }

    /// Returns the non-empty delimiters, longest first.
    ///
    /// When one delimiter is a prefix of another the longer one must be tried
    /// first, otherwise `**` would be split by `*` into an empty token and a
    /// stray `*`. Equal lengths keep declaration order.
    #[must_use]
    pub fn split_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = self.iter().filter(|d| !d.is_empty()).collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));
        ordered
    }
}

/// Extracts `[...]` groups the way a non-greedy `\[(.*?)\]` scan does: each
/// group ends at the first `]` after its opening `[`.
fn bracketed_groups(declaration: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = declaration;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(']') else {
            break;
        };
        groups.push(&after_open[..close]);
        rest = &after_open[close + 1..];
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.iter().collect::<Vec<_>>(), vec![",", "\n"]);
    }

    #[test]
    fn test_single_literal_declaration() {
        let defaults = Delimiters::default();
        assert_eq!(
            Delimiters::from_declaration("sep", &defaults),
            Delimiters::new(["sep"])
        );
    }

    #[test]
    fn test_bracketed_groups_in_order() {
        let defaults = Delimiters::default();
        let delimiters = Delimiters::from_declaration("[*][%][abc]", &defaults);
        assert_eq!(delimiters.iter().collect::<Vec<_>>(), vec!["*", "%", "abc"]);
    }

    #[test]
    fn test_bracket_group_stops_at_first_close() {
        assert_eq!(bracketed_groups("[[x]]"), vec!["[x"]);
        assert_eq!(bracketed_groups("[a]junk[b]"), vec!["a", "b"]);
        assert_eq!(bracketed_groups("[a][b"), vec!["a"]);
    }

    #[test]
    fn test_half_bracketed_declaration_is_literal() {
        let defaults = Delimiters::default();
        assert_eq!(
            Delimiters::from_declaration("[*", &defaults),
            Delimiters::new(["[*"])
        );
        assert_eq!(
            Delimiters::from_declaration("*]", &defaults),
            Delimiters::new(["*]"])
        );
    }

    #[test]
    fn test_empty_groups_fall_back_to_defaults() {
        let defaults = Delimiters::default();
        assert_eq!(Delimiters::from_declaration("[]", &defaults), defaults);
        assert_eq!(Delimiters::from_declaration("[][]", &defaults), defaults);
    }

    #[test]
    fn test_empty_group_next_to_real_one_is_kept_but_not_split_on() {
        let defaults = Delimiters::default();
        let delimiters = Delimiters::from_declaration("[][;]", &defaults);
        assert_eq!(delimiters.len(), 2);
        assert_eq!(delimiters.split_order(), vec![";"]);
    }

    #[test]
    fn test_split_order_longest_first() {
        let delimiters = Delimiters::new(["*", "***", "%", "**"]);
        assert_eq!(delimiters.split_order(), vec!["***", "**", "*", "%"]);
    }

    #[test]
    fn test_multibyte_delimiters() {
        let defaults = Delimiters::default();
        let delimiters = Delimiters::from_declaration("[é][→→]", &defaults);
        assert_eq!(delimiters.split_order(), vec!["→→", "é"]);
    }
}
