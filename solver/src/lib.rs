//! Command-line plumbing shared by the puzzle binaries.
//!
//! Each binary under `src/bin` parses its arguments with [`cli::parse_args`],
//! calls [`logging::init`], runs its puzzle and prints one answer per line.

pub mod cli;
pub mod exit_codes;
pub mod logging;
