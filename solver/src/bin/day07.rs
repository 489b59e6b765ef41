//! Sums the calibration equations that some choice of operators can satisfy.

use anyhow::{Context, Result};
use puzzles::calibration::{self, ALL_OPERATORS, BASIC_OPERATORS};
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day07", "Total calibration result with +/* and then with +/*/||");
    let input = cli.read_input()?;
    let equations = calibration::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    let part1 = calibration::total_calibration(&equations, BASIC_OPERATORS).context("part 1")?;
    let part2 = calibration::total_calibration(&equations, ALL_OPERATORS).context("part 2")?;
    println!("{part1}");
    println!("{part2}");
    Ok(())
}
