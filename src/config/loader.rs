use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::EngineConfig;
use crate::errors::{CarbonError, Result};

pub const CONFIG_FILE_NAME: &str = ".carbonscore.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents).map_err(|e| {
        CarbonError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file; any failure is an error.
///
/// A relative `reference.dataset` path is resolved against the config file's
/// directory.
pub fn load_config_from(path: &Path) -> Result<EngineConfig> {
    let contents = read_config_file(path).map_err(|e| CarbonError::io(e, path))?;
    let mut config = parse_and_validate_config(&contents).map_err(|e| match e {
        CarbonError::Config { message, .. } => CarbonError::config_with_path(message, path),
        other => other,
    })?;
    resolve_dataset_path(&mut config, path);
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn resolve_dataset_path(config: &mut EngineConfig, config_path: &Path) {
    if let (Some(dataset), Some(dir)) = (config.reference.dataset.as_mut(), config_path.parent()) {
        if dataset.is_relative() {
            *dataset = dir.join(&*dataset);
        }
    }
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EngineConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(mut config) => {
            resolve_dataset_path(&mut config, config_path);
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the current directory and its ancestors for `.carbonscore.toml`
pub fn load_config() -> EngineConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return EngineConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EngineConfig::default()
        })
}
