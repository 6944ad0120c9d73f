//! Command-line entry point.
//!
//! ```bash
//! je-audit benford --input je_samples.xlsx --output benford_output
//! je-audit stats --input je_samples.xlsx
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    je_audit::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)
}
