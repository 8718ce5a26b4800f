//! mdgen CLI - definition path resolution for markdown generators
//!
//! Usage: mdgen <COMMAND>
//!
//! Commands:
//!   paths   Resolve the input and output paths for a definition file
//!   rules   Show the effective default output rules

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rules = cli.rules.as_deref();
    match &cli.command {
        Commands::Paths {
            file,
            output,
            package,
        } => commands::cmd_paths(file, output, package.as_deref(), rules, cli.json),
        Commands::Rules => commands::cmd_rules(rules, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` selects debug and `-vv` trace output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "mdgen=debug",
        _ => "mdgen=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
