use super::{build_engine, open_output};
use crate::core::{ActivityInput, EmissionResult};
use crate::errors::CarbonError;
use crate::io;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub struct BatchConfig {
    pub inputs: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// One element of the batch output, in input order
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchEntry<'a> {
    Ok(&'a EmissionResult),
    Error(&'a CarbonError),
}

/// Per-element failures are reported in the output, not as a command failure
pub fn run_batch(config: BatchConfig) -> Result<()> {
    let engine = build_engine(config.config.as_deref())?;
    let inputs: Vec<ActivityInput> = io::read_json(&config.inputs)?;
    let results = engine.calculate_batch(&inputs);

    let entries: Vec<BatchEntry> = results
        .iter()
        .map(|result| match result {
            Ok(result) => BatchEntry::Ok(result),
            Err(e) => BatchEntry::Error(e),
        })
        .collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!("{} of {} input(s) failed", failed, results.len());
    }

    let mut writer = open_output(config.output.as_ref())?;
    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_entry_shape() {
        let error = CarbonError::unknown_sector("mining");
        let value = serde_json::to_value([BatchEntry::Error(&error)]).unwrap();
        assert_eq!(value[0]["error"]["code"], "E012");
        assert_eq!(value[0]["error"]["category"], "Reference");
    }
}
