//! Stones that change every time you blink.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{parse_int, Overflow, ParseError};

const STONE_COUNT: Overflow = Overflow { what: "stone count" };
const STONE_NUMBER: Overflow = Overflow { what: "stone number" };

/// The whitespace-separated numbers on the only non-blank line.
pub fn parse(input: &str) -> Result<Vec<u64>, ParseError> {
    let mut rows = input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
    let Some((index, line)) = rows.next() else {
        return Err(ParseError::Empty);
    };
    if let Some((extra, found)) = rows.next() {
        return Err(ParseError::Malformed { line: extra + 1, expected: "a single line of stones", found: found.to_string() });
    }

    let stones = line.split_whitespace()
        .map(|token| parse_int(token, index + 1))
        .collect::<Result<Vec<u64>, _>>()?;
    debug!(stones = stones.len(), "parsed stones");
    Ok(stones)
}

/// What a single stone becomes after one blink.
///
/// `0` becomes `1`; a number with an even count of digits splits into its two
/// halves; anything else is multiplied by 2024. `None` if that product does not
/// fit in a `u64`.
pub fn blink(stone: u64) -> Option<(u64, Option<u64>)> {
    if stone == 0 {
        return Some((1, None));
    }

    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Some((stone / half, Some(stone % half)))
    } else {
        Some((stone.checked_mul(2024)?, None))
    }
}

/// Number of stones after `blinks` blinks.
///
/// Stones never interact, so the count is memoized per `(stone, blinks left)`
/// and shared across the whole row.
pub fn count_after(stones: &[u64], blinks: u32) -> Result<u64, Overflow> {
    let mut memo = HashMap::new();
    let mut total = 0u64;
    for stone in stones {
        total = total.checked_add(count_one(*stone, blinks, &mut memo)?).ok_or(STONE_COUNT)?;
    }
    debug!(blinks, memoized = memo.len(), total, "counted stones");
    Ok(total)
}

fn count_one(stone: u64, blinks: u32, memo: &mut HashMap<(u64, u32), u64>) -> Result<u64, Overflow> {
    if blinks == 0 {
        return Ok(1);
    }
    if let Some(count) = memo.get(&(stone, blinks)) {
        return Ok(*count);
    }

    let count = match blink(stone).ok_or(STONE_NUMBER)? {
        (only, None) => count_one(only, blinks - 1, memo)?,
        (left, Some(right)) => count_one(left, blinks - 1, memo)?
            .checked_add(count_one(right, blinks - 1, memo)?)
            .ok_or(STONE_COUNT)?,
    };
    memo.insert((stone, blinks), count);
    Ok(count)
}
