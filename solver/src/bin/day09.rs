//! Compacts a disk map block by block, then file by file, printing each checksum.

use anyhow::{Context, Result};
use puzzles::disk;
use solver::{cli, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse_args("day09", "Filesystem checksum after block-wise and file-wise compaction");
    let input = cli.read_input()?;
    let map = disk::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;

    println!("{}", disk::checksum(&disk::compact_blocks(&map)));
    println!("{}", disk::checksum(&disk::compact_files(&map)));
    Ok(())
}
