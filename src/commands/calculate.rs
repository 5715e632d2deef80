use super::{build_engine, open_output};
use crate::core::ActivityInput;
use crate::io::{self, create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct CalculateConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_calculate(config: CalculateConfig) -> Result<()> {
    let engine = build_engine(config.config.as_deref())?;
    let input: ActivityInput = io::read_json(&config.input)?;
    let result = engine.calculate(&input)?;

    let mut writer = create_writer(config.format, open_output(config.output.as_ref())?);
    writer.write_result(&result)?;

    if let Some(path) = &config.output {
        log::info!("Wrote result to {}", path.display());
    }
    Ok(())
}
