//! Argument definitions for the deltacast binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Transcode asciicast v2 recordings between absolute and delta timing.
#[derive(Debug, Parser)]
#[command(name = "deltacast", version, about)]
pub struct Cli {
    /// Transform direction.
    #[command(subcommand)]
    pub command: Command,
}

/// Transform direction subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite absolute times as deltas: out(n) = in(n) - in(n-1)
    #[command(visible_alias = "Δ")]
    Delta(StreamArgs),

    /// Restore absolute times from deltas: out(n) = in(0) + … + in(n)
    #[command(visible_alias = "Σ")]
    Accumulate(StreamArgs),
}

/// Input/output selection shared by both directions.
#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Input asciicast v2 file, or "-" to read from stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output asciicast v2 file, or "-" to write to stdout
    #[arg(short, long)]
    pub output: PathBuf,
}
