use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Reasons a puzzle input may be rejected while parsing.
///
/// Line numbers are 1-based and refer to the raw input text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input held nothing but whitespace.
    #[error("input is empty")]
    Empty,

    /// A line (or block) did not have the expected structure.
    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        /// Line on which the offending text starts.
        line: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// The offending text.
        found: String,
    },

    /// A token had the right shape but did not fit the integer type.
    #[error("line {line}: {token:?} is not a valid integer")]
    InvalidInteger {
        /// Line holding the token.
        line: usize,
        /// The token itself.
        token: String,
        /// Underlying conversion failure.
        #[source]
        source: ParseIntError,
    },

    /// A grid row differed in width from the first row.
    #[error("line {line}: row is {found} cells wide, expected {expected}")]
    Ragged {
        /// Line holding the row.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
}

/// An answer, or a value on the way to it, did not fit its integer type.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{what} overflowed")]
pub struct Overflow {
    /// The quantity that overflowed.
    pub what: &'static str,
}

/// Sums `terms`, failing with `what` on the first term that is itself an overflow or that overflows the total.
pub(crate) fn checked_total<I>(terms: I, what: &'static str) -> Result<u64, Overflow>
where
    I: IntoIterator<Item = Option<u64>>,
{
    terms.into_iter()
        .try_fold(0u64, |total, term| total.checked_add(term?))
        .ok_or(Overflow { what })
}

pub(crate) fn parse_int<T>(token: &str, line: usize) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| ParseError::InvalidInteger {
        line,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{checked_total, parse_int, Overflow, ParseError};

    #[test]
    fn integer_errors_keep_token_and_line() {
        let err = parse_int::<u64>("12x", 4).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { line: 4, ref token, .. } if token == "12x"));
        assert_eq!(err.to_string(), "line 4: \"12x\" is not a valid integer");
    }

    #[test]
    fn negative_rejected_for_unsigned() {
        assert!(parse_int::<u32>("-3", 1).is_err());
        assert_eq!(parse_int::<i64>("-3", 1).unwrap(), -3);
    }

    #[test]
    fn totals_report_overflow() {
        assert_eq!(checked_total([Some(1), Some(2)], "sum"), Ok(3));
        assert_eq!(checked_total([Some(u64::MAX), Some(1)], "sum"), Err(Overflow { what: "sum" }));
        assert_eq!(checked_total([Some(1), None], "term"), Err(Overflow { what: "term" }));
        assert_eq!(Overflow { what: "similarity score" }.to_string(), "similarity score overflowed");
    }
}
