use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# carbonscore configuration

[benchmark]
# "reject" fails on sectors without a benchmark, "global_default" falls back
unknown_sector = "reject"
# Relative band around the sector average reported as "at average"
at_average_tolerance = 0.10

[pricing]
carbon_price_eur_per_tonne = 100.0

[trajectory]
baseline_year = 2024
target_year = 2030
target_reduction = 0.55

[reference]
# dataset = "reference.toml"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, EngineConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_file_parses_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
