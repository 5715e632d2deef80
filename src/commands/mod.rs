//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Footprint, benchmark and recommendations for one company
//! - **batch**: Parallel calculation over a JSON array of inputs
//! - **validate**: Input checks plus non-fatal warnings and suggestions
//! - **factors** / **sectors**: Print the reference data in use
//! - **init**: Write a default `.carbonscore.toml`

pub mod batch;
pub mod calculate;
pub mod init;
pub mod reference;
pub mod validate;

pub use batch::{run_batch, BatchConfig};
pub use calculate::{run_calculate, CalculateConfig};
pub use init::init_config;
pub use reference::{list_factors, list_sectors};
pub use validate::validate_input;

use crate::config::{load_config, load_config_from, EngineConfig};
use crate::engine::Engine;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Explicit config path, or the discovered `.carbonscore.toml`
pub fn resolve_config(config: Option<&Path>) -> Result<EngineConfig> {
    match config {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

pub fn build_engine(config: Option<&Path>) -> Result<Engine> {
    let config = resolve_config(config)?;
    Engine::from_config(config).context("Failed to initialize calculation engine")
}

/// Destination for command output; colours are disabled for files
pub fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
