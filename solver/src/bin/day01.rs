//! Compares two location-id lists: total distance, then similarity score.

use anyhow::{Context, Result};
use puzzles::lists;
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day01", "Total distance and similarity score of two location-id lists");
    let input = cli.read_input()?;
    let lists = lists::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    let part1 = lists::total_distance(&lists).context("part 1")?;
    let part2 = lists::similarity(&lists).context("part 2")?;
    println!("{part1}");
    println!("{part2}");
    Ok(())
}
