//! Prices the fencing for every garden region, by perimeter and by side count.

use anyhow::{Context, Result};
use puzzles::garden;
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day12", "Fence price by perimeter, then with the bulk discount");
    let input = cli.read_input()?;
    let garden = garden::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    println!("{}", garden::fence_price(&garden));
    println!("{}", garden::bulk_price(&garden));
    Ok(())
}
