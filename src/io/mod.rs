pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use crate::errors::{CarbonError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CarbonError::io(e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| CarbonError::io(e, path))
}

/// Read and deserialize a JSON document; malformed content is a `Parse` error
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CarbonError::parse(e.to_string(), Some(path.to_path_buf())))
}
