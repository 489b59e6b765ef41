//! Counts stones after 25 and 75 blinks.

use anyhow::{Context, Result};
use puzzles::stones;
use solver::{cli, exit_codes, logging};

const SHORT_BLINKS: u32 = 25;
const LONG_BLINKS: u32 = 75;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day11", "Number of stones after 25 and after 75 blinks");
    let input = cli.read_input()?;
    let row = stones::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    let part1 = stones::count_after(&row, SHORT_BLINKS).context("part 1")?;
    let part2 = stones::count_after(&row, LONG_BLINKS).context("part 2")?;
    println!("{part1}");
    println!("{part2}");
    Ok(())
}
