//! Two columns of location ids, compared by rank and by frequency.

use itertools::Itertools;
use tracing::debug;

use crate::error::{checked_total, parse_int, Overflow, ParseError};

/// The left and right columns of the input, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocationLists {
    /// First column.
    pub left: Vec<u64>,
    /// Second column.
    pub right: Vec<u64>,
}

/// Each non-blank line holds exactly two whitespace-separated ids.
pub fn parse(input: &str) -> Result<LocationLists, ParseError> {
    let mut lists = LocationLists::default();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let tokens = line.split_whitespace().collect_vec();
        let [left, right] = tokens.as_slice() else {
            return Err(ParseError::Malformed {
                line: index + 1,
                expected: "two whitespace-separated integers",
                found: line.to_string(),
            });
        };
        lists.left.push(parse_int(left, index + 1)?);
        lists.right.push(parse_int(right, index + 1)?);
    }

    if lists.left.is_empty() {
        return Err(ParseError::Empty);
    }
    debug!(pairs = lists.left.len(), "parsed location lists");
    Ok(lists)
}

/// Pairs the smallest left id with the smallest right id, and so on, summing the gaps.
pub fn total_distance(lists: &LocationLists) -> Result<u64, Overflow> {
    let gaps = lists.left.iter().sorted_unstable()
        .zip(lists.right.iter().sorted_unstable())
        .map(|(left, right)| Some(left.abs_diff(*right)));
    checked_total(gaps, "total distance")
}

/// Weights every left id by how often it shows up on the right.
pub fn similarity(lists: &LocationLists) -> Result<u64, Overflow> {
    let frequency = lists.right.iter().counts();

    let scores = lists.left.iter()
        .map(|id| id.checked_mul(frequency.get(id).copied().unwrap_or_default() as u64));
    checked_total(scores, "similarity score")
}

#[cfg(test)]
mod tests {
    use super::{parse, similarity, total_distance};
    use crate::error::{Overflow, ParseError};

    const SAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn sample_distance() {
        assert_eq!(total_distance(&parse(SAMPLE).unwrap()), Ok(11));
    }

    #[test]
    fn sample_similarity() {
        assert_eq!(similarity(&parse(SAMPLE).unwrap()), Ok(31));
    }

    #[test]
    fn ids_missing_on_the_right_count_zero() {
        let lists = parse("7 1\n8 2\n").unwrap();
        assert_eq!(similarity(&lists), Ok(0));
        assert_eq!(total_distance(&lists), Ok(12));
    }

    #[test]
    fn huge_ids_overflow_instead_of_panicking() {
        let lists = parse("10000000000000000000 10000000000000000000
10000000000000000000 1
").unwrap();
        assert_eq!(similarity(&lists), Err(Overflow { what: "similarity score" }));

        let lists = parse("18446744073709551615 0
18446744073709551615 0
").unwrap();
        assert_eq!(total_distance(&lists), Err(Overflow { what: "total distance" }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lists = parse("\n1 2\n\n3 4\n\n").unwrap();
        assert_eq!(lists.left, vec![1, 3]);
        assert_eq!(lists.right, vec![2, 4]);
    }

    #[test]
    fn three_columns_are_malformed() {
        assert!(matches!(parse("1 2\n1 2 3\n"), Err(ParseError::Malformed { line: 2, .. })));
    }

    #[test]
    fn bad_integer_names_its_line() {
        assert!(matches!(parse("1 2\n3 x\n"), Err(ParseError::InvalidInteger { line: 2, .. })));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse("\n  \n"), Err(ParseError::Empty)));
    }
}
