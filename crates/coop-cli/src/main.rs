//! `coop` — nest-box visit simulator for laying hens.
//!
//! Two subcommands:
//!
//! | Command        | Does                                                      |
//! |----------------|-----------------------------------------------------------|
//! | `coop run`     | simulate visits from a YAML config, write run artifacts   |
//! | `coop analyze` | report companion pairs from a previous run's output       |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Cli, Commands};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => commands::run(args),
        Commands::Analyze(args) => commands::analyze(args),
    }
}
