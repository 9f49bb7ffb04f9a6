use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "data-processor")]
#[command(about = "Transform, validate and store bounded integer values")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(
        long,
        global = true,
        help = "Fail on the first rejected input instead of falling back to a default"
    )]
    pub strict: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Derive a value from an input and a mode
    Transform {
        #[arg(long, allow_negative_numbers = true)]
        input: i32,

        #[arg(long)]
        mode: String,
    },

    /// Check that values are non-empty, fewer than 1000 and all positive
    Validate {
        #[arg(value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i32>,
    },

    /// Append values to a fresh store and print it
    Append {
        #[arg(value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i32>,
    },

    /// Run a TOML job file
    Run {
        #[arg(short, long)]
        job: PathBuf,
    },
}
