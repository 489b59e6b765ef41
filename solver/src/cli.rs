use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use crate::exit_codes;

/// Arguments common to every puzzle binary.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Path to the puzzle input file.
    pub input: PathBuf,
}

impl Cli {
    /// Reads the whole input file.
    pub fn read_input(&self) -> Result<String> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("read input file {}", self.input.display()))?;
        debug!(path = %self.input.display(), bytes = text.len(), "read input");
        Ok(text)
    }
}

/// Parses the process arguments for the binary `name`.
///
/// Usage errors exit with [`exit_codes::INVALID`]; `--help` and `--version` exit successfully.
pub fn parse_args(name: &'static str, about: &'static str) -> Cli {
    let parsed = Cli::command()
        .name(name)
        .about(about)
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches));

    match parsed {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // as clap's `Error::exit`, with our exit code instead of 2
            let _ = err.print();
            process::exit(exit_codes::INVALID);
        }
        Err(err) => err.exit(),
    }
}
