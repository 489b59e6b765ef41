//! Scores and rates every trailhead on a topographic map.

use anyhow::{Context, Result};
use puzzles::trails;
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day10", "Sum of trailhead scores and of trailhead ratings");
    let input = cli.read_input()?;
    let map = trails::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    println!("{}", trails::total_score(&map));
    println!("{}", trails::total_rating(&map));
    Ok(())
}
