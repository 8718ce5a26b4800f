use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mdgen - definition path resolution for markdown generators
#[derive(Parser, Debug)]
#[command(name = "mdgen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug        Enable debug logging\n    MDGEN_RULES_FILE      Rule table to use instead of the user config")]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Rule table file overriding every other rule source
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the input and output paths for a definition file
    Paths {
        /// Definition file
        file: String,

        /// Output directory (defaults to the platform's configured location)
        #[arg(short, long, default_value = "")]
        output: String,

        /// Package name to append to the output path (e.g. org.example.api)
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Show the effective default output rules
    Rules,
}
