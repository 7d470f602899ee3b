//! Command-line interface for the deltacast transcoder.
//!
//! Thin wrapper over [`deltacast::transcode`]: parses the direction
//! subcommand, opens the input/output streams (file paths or `-` for
//! stdio), and maps failures to a diagnostic on stderr and exit code 1.

mod args;
mod logging;
mod streams;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use deltacast::{Direction, transcode};

use crate::args::{Cli, Command};

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (io, direction) = match cli.command {
        Command::Delta(io) => (io, Direction::Delta),
        Command::Accumulate(io) => (io, Direction::Accumulate),
    };

    let input = streams::open_input(&io.input)
        .with_context(|| format!("cannot open input {}", io.input.display()))?;
    let mut output = streams::open_output(&io.output)
        .with_context(|| format!("cannot open output {}", io.output.display()))?;

    transcode(input, &mut output, direction)?;
    output.flush().context("cannot flush output")?;

    Ok(())
}
