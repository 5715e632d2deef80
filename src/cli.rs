use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carbonscore")]
#[command(about = "Company carbon footprint calculator and sector benchmark", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug, one line per calculation phase
    /// -vvv: trace, one line per emission line
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the footprint of one company
    Calculate {
        /// JSON activity input
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .carbonscore.toml)
        #[arg(short, long, env = "CARBONSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Calculate a JSON array of inputs in parallel
    Batch {
        /// JSON array of activity inputs
        inputs: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, env = "CARBONSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Check an input for errors and print warnings and suggestions
    Validate {
        /// JSON activity input
        input: PathBuf,
    },

    /// List the emission factors in use
    Factors {
        /// Configuration file
        #[arg(short, long, env = "CARBONSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List sector benchmarks
    Sectors {
        /// Configuration file
        #[arg(short, long, env = "CARBONSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
