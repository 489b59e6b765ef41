//! Fewest tokens to win every claw-machine prize, near and far.

use anyhow::{Context, Result};
use puzzles::claw;
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day13", "Fewest tokens to win all prizes, then with the prizes moved far away");
    let input = cli.read_input()?;
    let machines = claw::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    let part1 = claw::fewest_tokens(&machines).context("part 1")?;
    let part2 = claw::fewest_tokens_far(&machines).context("part 2")?;
    println!("{part1}");
    println!("{part2}");
    Ok(())
}
