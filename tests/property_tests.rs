//! Property-based tests over generated number lists and delimiters.

use proptest::prelude::*;
use string_calculator::{add, Error};

const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

fn join(values: &[i64], delimiter: &str) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Delimiters that cannot be mistaken for part of a number or for whitespace.
fn custom_delimiter() -> impl Strategy<Value = String> {
    "[;*%|.$?\\[\\]()a-z]{1,4}"
}

proptest! {
    #[test]
    fn prop_default_delimiters_sum(
        values in prop::collection::vec(0i64..1_000_000, 1..20),
        idx in 0usize..2,
    ) {
        let input = join(&values, DEFAULT_DELIMITERS[idx]);
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_bracketed_delimiter_sum(
        values in prop::collection::vec(0i64..1_000_000, 1..20),
        delimiter in custom_delimiter().prop_filter("no closing bracket", |d| !d.contains(']')),
    ) {
        let input = format!("//[{}]\n{}", delimiter, join(&values, &delimiter));
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_whitespace_insensitive(
        values in prop::collection::vec(0i64..1_000, 1..10),
        padding in prop::collection::vec("[ \t]{0,3}", 2),
    ) {
        let delimiter = format!("{},{}", padding[0], padding[1]);
        let input = format!("{}{}{}", padding[1], join(&values, &delimiter), padding[0]);
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_whitespace_insensitive_around_newline(
        values in prop::collection::vec(0i64..1_000, 1..10),
        padding in prop::collection::vec("[ \t]{0,3}", 2),
    ) {
        let delimiter = format!("{}\n{}", padding[0], padding[1]);
        let input = format!("{}{}{}", padding[1], join(&values, &delimiter), padding[0]);
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_whitespace_insensitive_around_custom_delimiter(
        values in prop::collection::vec(0i64..1_000, 1..10),
        padding in prop::collection::vec("[ \t]{0,3}", 2),
    ) {
        let delimiter = format!("{}***{}", padding[0], padding[1]);
        let input = format!(
            "//[***]\n{}{}{}",
            padding[1],
            join(&values, &delimiter),
            padding[0]
        );
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_negatives_reported_in_order(values in prop::collection::vec(-1_000i64..1_000, 1..20)) {
        let input = join(&values, ",");
        let negatives: Vec<i64> = values.iter().copied().filter(|n| *n < 0).collect();

        match add(&input) {
            Ok(sum) => {
                prop_assert!(negatives.is_empty());
                prop_assert_eq!(sum, values.iter().sum::<i64>());
            }
            Err(Error::NegativeNumbers { negatives: reported }) => {
                prop_assert_eq!(reported, negatives);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_idempotent(input in "\\PC{0,30}") {
        prop_assert_eq!(add(&input), add(&input));
    }
}
