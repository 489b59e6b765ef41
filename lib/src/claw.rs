//! Claw machines with two buttons.
//!
//! Button A costs 3 tokens and button B costs 1. Winning a machine means
//! landing the claw exactly on the prize; finding the cheapest way to do so is
//! a two-variable linear Diophantine problem.

use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{checked_total, parse_int, Overflow, ParseError};

/// Tokens spent per press of button A.
pub const A_COST: u64 = 3;
/// Tokens spent per press of button B.
pub const B_COST: u64 = 1;
/// How far the prizes really are, once the unit conversion error is fixed.
pub const PRIZE_OFFSET: i64 = 10_000_000_000_000;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Button A: X\+(\d+), Y\+(\d+)\nButton B: X\+(\d+), Y\+(\d+)\nPrize: X=(\d+), Y=(\d+)$")
        .expect("machine pattern is valid")
});

/// A position or a displacement.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vector {
    /// Horizontal component.
    pub x: i64,
    /// Vertical component.
    pub y: i64,
}

/// One machine's buttons and prize.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Machine {
    /// Claw displacement per press of A.
    pub button_a: Vector,
    /// Claw displacement per press of B.
    pub button_b: Vector,
    /// Where the claw must end up.
    pub prize: Vector,
}

impl Machine {
    /// `None` once the claw would leave the `i64` range.
    fn claw_after(&self, a: u64, b: u64) -> Option<Vector> {
        let (a, b) = (i64::try_from(a).ok()?, i64::try_from(b).ok()?);
        let axis = |a_step: i64, b_step: i64| a.checked_mul(a_step)?.checked_add(b.checked_mul(b_step)?);
        Some(Vector {
            x: axis(self.button_a.x, self.button_b.x)?,
            y: axis(self.button_a.y, self.button_b.y)?,
        })
    }

    /// The same machine with the prize moved by `offset` on both axes.
    /// `None` if the moved prize does not fit in an `i64`.
    pub fn with_prize_offset(&self, offset: i64) -> Option<Self> {
        let prize = Vector { x: self.prize.x.checked_add(offset)?, y: self.prize.y.checked_add(offset)? };
        Some(Self { prize, ..*self })
    }

    /// Cheapest win found by breadth-first search over press counts.
    ///
    /// States past the prize on either axis, or costing at least the best win
    /// so far, are pruned.
    pub fn min_tokens_search(&self) -> Option<u64> {
        let mut queue = VecDeque::from([(0u64, 0u64)]);
        let mut seen = HashSet::new();
        let mut best: Option<u64> = None;

        while let Some((a, b)) = queue.pop_front() {
            if !seen.insert((a, b)) {
                continue;
            }
            let cost = a * A_COST + b * B_COST;
            if best.is_some_and(|best| cost >= best) {
                continue;
            }

            // leaving the i64 range is certainly past the prize
            let Some(claw) = self.claw_after(a, b) else { continue };
            if claw.x > self.prize.x || claw.y > self.prize.y {
                continue;
            }
            if claw == self.prize {
                best = Some(cost);
                continue;
            }

            // a button that does not move the claw would never end the search
            if self.button_a != Vector::default() {
                queue.push_back((a + 1, b));
            }
            if self.button_b != Vector::default() {
                queue.push_back((a, b + 1));
            }
        }

        trace!(states = seen.len(), ?best, "searched machine");
        best
    }

    /// Cheapest win found with Cramer's rule.
    ///
    /// Needs linearly independent buttons; the unique solution must use a
    /// non-negative whole number of presses of each. Press counts stay below
    /// 2^126, so the cost always fits in a `u128`.
    pub fn min_tokens_exact(&self) -> Option<u128> {
        let (ax, ay) = (self.button_a.x as i128, self.button_a.y as i128);
        let (bx, by) = (self.button_b.x as i128, self.button_b.y as i128);
        let (px, py) = (self.prize.x as i128, self.prize.y as i128);

        let determinant = ax * by - ay * bx;
        if determinant == 0 {
            return None;
        }
        let a_numerator = px * by - py * bx;
        let b_numerator = ax * py - ay * px;
        if a_numerator % determinant != 0 || b_numerator % determinant != 0 {
            return None;
        }

        let (a, b) = (a_numerator / determinant, b_numerator / determinant);
        if a < 0 || b < 0 {
            return None;
        }
        Some(a as u128 * A_COST as u128 + b as u128 * B_COST as u128)
    }
}

/// Machines are three-line blocks separated by blank lines.
pub fn parse(input: &str) -> Result<Vec<Machine>, ParseError> {
    let mut machines = Vec::new();

    for (blank, group) in &input.lines().enumerate().chunk_by(|(_, line)| line.trim().is_empty()) {
        if blank {
            continue;
        }
        let lines = group.collect_vec();
        let first_line = lines[0].0 + 1;
        let block = lines.iter().map(|(_, line)| line.trim()).join("\n");

        let Some(captures) = MACHINE.captures(&block) else {
            return Err(ParseError::Malformed {
                line: first_line,
                expected: "a `Button A` / `Button B` / `Prize` block",
                found: block.clone(),
            });
        };
        let number = |group: usize| parse_int::<i64>(&captures[group], first_line);
        machines.push(Machine {
            button_a: Vector { x: number(1)?, y: number(2)? },
            button_b: Vector { x: number(3)?, y: number(4)? },
            prize: Vector { x: number(5)?, y: number(6)? },
        });
    }

    if machines.is_empty() {
        return Err(ParseError::Empty);
    }
    debug!(machines = machines.len(), "parsed claw machines");
    Ok(machines)
}

/// Tokens needed to win every winnable machine, by search.
pub fn fewest_tokens(machines: &[Machine]) -> Result<u64, Overflow> {
    checked_total(machines.iter().filter_map(Machine::min_tokens_search).map(Some), "token total")
}

/// Tokens needed to win every winnable machine once the prizes are moved by [`PRIZE_OFFSET`].
pub fn fewest_tokens_far(machines: &[Machine]) -> Result<u64, Overflow> {
    let mut total = 0u64;
    for machine in machines {
        let far = machine.with_prize_offset(PRIZE_OFFSET).ok_or(Overflow { what: "prize position" })?;
        let Some(cost) = far.min_tokens_exact() else { continue };
        total = u64::try_from(cost).ok()
            .and_then(|cost| total.checked_add(cost))
            .ok_or(Overflow { what: "token total" })?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::{fewest_tokens, fewest_tokens_far, parse, Machine, Vector, PRIZE_OFFSET};
    use crate::error::{Overflow, ParseError};

    const SAMPLE: &str = "Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    fn machine(a: (i64, i64), b: (i64, i64), prize: (i64, i64)) -> Machine {
        Machine {
            button_a: Vector { x: a.0, y: a.1 },
            button_b: Vector { x: b.0, y: b.1 },
            prize: Vector { x: prize.0, y: prize.1 },
        }
    }

    #[test]
    fn sample_parses() {
        let machines = parse(SAMPLE).unwrap();
        assert_eq!(machines.len(), 4);
        assert_eq!(machines[0], machine((94, 34), (22, 67), (8400, 5400)));
    }

    #[test]
    fn sample_by_search() {
        let machines = parse(SAMPLE).unwrap();
        assert_eq!(machines[0].min_tokens_search(), Some(280));
        assert_eq!(machines[1].min_tokens_search(), None);
        assert_eq!(machines[2].min_tokens_search(), Some(200));
        assert_eq!(machines[3].min_tokens_search(), None);
        assert_eq!(fewest_tokens(&machines), Ok(480));
    }

    #[test]
    fn exact_agrees_with_search_on_sample() {
        for machine in parse(SAMPLE).unwrap() {
            assert_eq!(machine.min_tokens_exact(), machine.min_tokens_search().map(u128::from));
        }
    }

    #[test]
    fn sample_far_prizes() {
        let machines = parse(SAMPLE).unwrap();
        assert_eq!(machines[0].with_prize_offset(PRIZE_OFFSET).unwrap().min_tokens_exact(), None);
        assert!(machines[1].with_prize_offset(PRIZE_OFFSET).unwrap().min_tokens_exact().is_some());
        assert_eq!(fewest_tokens_far(&machines), Ok(875318608908));
    }

    #[test]
    fn far_prize_past_i64_is_an_overflow() {
        let machines = parse("Button A: X+1, Y+2\nButton B: X+2, Y+1\nPrize: X=9223372036854775807, Y=3\n").unwrap();
        assert_eq!(machines[0].with_prize_offset(PRIZE_OFFSET), None);
        assert_eq!(fewest_tokens_far(&machines), Err(Overflow { what: "prize position" }));
    }

    #[test]
    fn far_cost_past_u64_is_an_overflow() {
        // 2^62 presses of each button cost 2^64 tokens
        let far = machine((1, 0), (0, 1), (1 << 62, 1 << 62));
        assert_eq!(far.min_tokens_exact(), Some(1 << 64));
        let near = machine((1, 0), (0, 1), ((1 << 62) - PRIZE_OFFSET, (1 << 62) - PRIZE_OFFSET));
        assert_eq!(fewest_tokens_far(&[near]), Err(Overflow { what: "token total" }));
    }

    #[test]
    fn claw_leaving_i64_range_is_pruned() {
        // two presses of A are visited before the win at a = 1, b = 2
        let m = machine((i64::MAX, 0), (0, 1), (i64::MAX, 2));
        assert_eq!(m.min_tokens_search(), Some(5));
    }

    #[test]
    fn negative_presses_are_rejected() {
        // solving gives a = 2, b = -1
        let m = machine((2, 1), (1, 1), (3, 1));
        assert_eq!(m.min_tokens_exact(), None);
        assert_eq!(m.min_tokens_search(), None);
    }

    #[test]
    fn dependent_buttons_have_no_exact_answer() {
        assert_eq!(machine((1, 1), (2, 2), (4, 4)).min_tokens_exact(), None);
        // search still finds the cheap way: two presses of B
        assert_eq!(machine((1, 1), (2, 2), (4, 4)).min_tokens_search(), Some(2));
    }

    #[test]
    fn idle_button_terminates() {
        assert_eq!(machine((0, 0), (3, 3), (9, 9)).min_tokens_search(), Some(3));
        assert_eq!(machine((0, 0), (3, 3), (10, 10)).min_tokens_search(), None);
    }

    #[test]
    fn malformed_block_reports_first_line() {
        let input = "Button A: X+1, Y+1\nButton B: X+1, Y+2\nPrize: X=3, Y=4\n\nButton A: X+1\nPrize: X=3, Y=4\n";
        assert!(matches!(parse(input), Err(ParseError::Malformed { line: 5, .. })));
        assert!(matches!(parse("\n\n"), Err(ParseError::Empty)));
    }
}
