use anyhow::Result;
use carbonscore::cli::{Cli, Commands};
use carbonscore::commands::{self, BatchConfig, CalculateConfig};
use carbonscore::errors::CarbonError;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Calculate {
            input,
            format,
            output,
            config,
        } => commands::run_calculate(CalculateConfig {
            input,
            format,
            output,
            config,
        }),
        Commands::Batch {
            inputs,
            output,
            config,
        } => commands::run_batch(BatchConfig {
            inputs,
            output,
            config,
        }),
        Commands::Validate { input } => commands::validate_input(&input),
        Commands::Factors { config, json } => commands::list_factors(config.as_deref(), json),
        Commands::Sectors { config, json } => commands::list_sectors(config.as_deref(), json),
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CarbonError>())
        .map(|e| e.exit_code() as u8)
        .unwrap_or(1)
}
