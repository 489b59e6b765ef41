//! Calibration equations whose operators were lost.
//!
//! Operators are always evaluated left to right; there is no precedence.

use strum::VariantArray;
use tracing::{debug, trace};

use crate::error::{checked_total, parse_int, Overflow, ParseError};

/// An operator that may sit between two operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, VariantArray)]
pub enum Operator {
    /// `a + b`
    Add,
    /// `a * b`
    Multiply,
    /// Decimal concatenation, `12 || 345 = 12345`.
    Concatenate,
}

impl Operator {
    /// `None` if the result does not fit in a `u64`.
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Concatenate => {
                let digits = rhs.checked_ilog10().map_or(1, |log| log + 1);
                lhs.checked_mul(10u64.checked_pow(digits)?)?.checked_add(rhs)
            }
        }
    }
}

/// Addition and multiplication only.
pub const BASIC_OPERATORS: &[Operator] = &[Operator::Add, Operator::Multiply];
/// Every operator, concatenation included.
pub const ALL_OPERATORS: &[Operator] = Operator::VARIANTS;

/// One `test: operands...` line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Equation {
    /// The value the operands must combine to.
    pub test_value: u64,
    /// Never empty.
    pub operands: Vec<u64>,
}

impl Equation {
    /// Whether some choice of `operators` between the operands yields the test value.
    pub fn is_satisfiable(&self, operators: &[Operator]) -> bool {
        match self.operands.split_first() {
            None => false,
            Some((first, rest)) => reaches(self.test_value, *first, rest, operators),
        }
    }
}

fn reaches(target: u64, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
    match rest.split_first() {
        None => acc == target,
        Some((next, rest)) => operators.iter()
            .filter_map(|op| op.apply(acc, *next))
            .any(|value| reaches(target, value, rest, operators)),
    }
}

/// Parses one equation per non-blank line.
pub fn parse(input: &str) -> Result<Vec<Equation>, ParseError> {
    let mut equations = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((test_value, operands)) = line.split_once(':') else {
            return Err(ParseError::Malformed { line: index + 1, expected: "`test: operands`", found: line.to_string() });
        };
        let operands = operands.split_whitespace()
            .map(|token| parse_int(token, index + 1))
            .collect::<Result<Vec<u64>, _>>()?;
        if operands.is_empty() {
            return Err(ParseError::Malformed { line: index + 1, expected: "at least one operand", found: line.to_string() });
        }

        equations.push(Equation { test_value: parse_int(test_value.trim(), index + 1)?, operands });
    }

    if equations.is_empty() {
        return Err(ParseError::Empty);
    }
    debug!(equations = equations.len(), "parsed calibration equations");
    Ok(equations)
}

/// Sum of the test values of every equation satisfiable with `operators`.
pub fn total_calibration(equations: &[Equation], operators: &[Operator]) -> Result<u64, Overflow> {
    let satisfied = equations.iter()
        .filter(|equation| {
            let ok = equation.is_satisfiable(operators);
            trace!(test_value = equation.test_value, ok, "checked equation");
            ok
        })
        .map(|equation| Some(equation.test_value));
    checked_total(satisfied, "total calibration result")
}

#[cfg(test)]
mod tests {
    use super::{parse, total_calibration, Equation, Operator, ALL_OPERATORS, BASIC_OPERATORS};
    use crate::error::{Overflow, ParseError};

    const SAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn sample_with_basic_operators() {
        assert_eq!(total_calibration(&parse(SAMPLE).unwrap(), BASIC_OPERATORS), Ok(3749));
    }

    #[test]
    fn sample_with_concatenation() {
        assert_eq!(total_calibration(&parse(SAMPLE).unwrap(), ALL_OPERATORS), Ok(11387));
    }

    #[test]
    fn evaluation_is_left_to_right() {
        // 2 + 3 * 4 = 20 without precedence
        let equation = Equation { test_value: 20, operands: vec![2, 3, 4] };
        assert!(equation.is_satisfiable(BASIC_OPERATORS));
        let equation = Equation { test_value: 14, operands: vec![2, 3, 4] };
        assert!(!equation.is_satisfiable(BASIC_OPERATORS));
    }

    #[test]
    fn concatenation_appends_digits() {
        assert_eq!(Operator::Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concatenate.apply(7, 0), Some(70));
        assert_eq!(Operator::Concatenate.apply(u64::MAX / 10, 99), None);
    }

    #[test]
    fn single_operand_must_match() {
        assert!(Equation { test_value: 5, operands: vec![5] }.is_satisfiable(BASIC_OPERATORS));
        assert!(!Equation { test_value: 5, operands: vec![4] }.is_satisfiable(ALL_OPERATORS));
    }

    #[test]
    fn overflowing_branches_are_dropped() {
        let equation = Equation { test_value: u64::MAX, operands: vec![u64::MAX, 2] };
        assert!(!equation.is_satisfiable(BASIC_OPERATORS));
        let equation = Equation { test_value: u64::MAX, operands: vec![u64::MAX, 1] };
        assert!(equation.is_satisfiable(BASIC_OPERATORS));
    }

    #[test]
    fn total_overflow_is_reported() {
        let equations = parse("18446744073709551615: 18446744073709551615\n2: 2\n").unwrap();
        assert_eq!(
            total_calibration(&equations, BASIC_OPERATORS),
            Err(Overflow { what: "total calibration result" })
        );
    }

    #[test]
    fn missing_colon_is_malformed() {
        assert!(matches!(parse("190 10 19\n"), Err(ParseError::Malformed { line: 1, .. })));
    }

    #[test]
    fn missing_operands_are_malformed() {
        assert!(matches!(parse("1: 1\n190:\n"), Err(ParseError::Malformed { line: 2, .. })));
    }

    #[test]
    fn bad_operand() {
        assert!(matches!(parse("190: 10 1a\n"), Err(ParseError::InvalidInteger { line: 1, .. })));
    }
}
