use crate::errors::{CarbonError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, read from `.carbonscore.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub benchmark: BenchmarkConfig,
    pub pricing: PricingConfig,
    pub trajectory: TrajectoryConfig,
    pub reference: ReferenceConfig,
}

/// What to do when a sector has no benchmark entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSectorPolicy {
    /// Fail the calculation with `UnknownSector`
    #[default]
    Reject,
    /// Benchmark against the global default values
    GlobalDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkConfig {
    pub unknown_sector: UnknownSectorPolicy,
    /// Relative band around the sector average treated as "at average"
    pub at_average_tolerance: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            unknown_sector: UnknownSectorPolicy::Reject,
            at_average_tolerance: default_at_average_tolerance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub carbon_price_eur_per_tonne: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            carbon_price_eur_per_tonne: default_carbon_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryConfig {
    pub baseline_year: u16,
    pub target_year: u16,
    /// Fraction of baseline emissions to cut by the target year
    pub target_reduction: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            baseline_year: 2024,
            target_year: 2030,
            target_reduction: 0.55,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    /// TOML dataset replacing the built-in tables
    pub dataset: Option<PathBuf>,
}

pub fn default_at_average_tolerance() -> f64 {
    0.10
}

pub fn default_carbon_price() -> f64 {
    100.0
}

impl EngineConfig {
    // Pure function: Collect all range validations
    pub fn collect_validations(&self) -> Vec<std::result::Result<(), String>> {
        let tolerance = self.benchmark.at_average_tolerance;
        let price = self.pricing.carbon_price_eur_per_tonne;
        let trajectory = &self.trajectory;

        vec![
            check(
                tolerance.is_finite() && (0.0..1.0).contains(&tolerance),
                format!("benchmark.at_average_tolerance must be in [0, 1), got {}", tolerance),
            ),
            check(
                price.is_finite() && price >= 0.0,
                format!("pricing.carbon_price_eur_per_tonne must be >= 0, got {}", price),
            ),
            check(
                trajectory.target_year > trajectory.baseline_year,
                format!(
                    "trajectory.target_year ({}) must be after baseline_year ({})",
                    trajectory.target_year, trajectory.baseline_year
                ),
            ),
            check(
                trajectory.target_reduction.is_finite()
                    && (0.0..=1.0).contains(&trajectory.target_reduction),
                format!(
                    "trajectory.target_reduction must be in [0, 1], got {}",
                    trajectory.target_reduction
                ),
            ),
        ]
    }

    /// Validate every section, reporting all violations at once
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .collect_validations()
            .into_iter()
            .filter_map(|r| r.err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CarbonError::config(errors.join("; ")))
        }
    }
}

fn check(valid: bool, message: String) -> std::result::Result<(), String> {
    if valid {
        Ok(())
    } else {
        Err(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut config = EngineConfig::default();
        config.pricing.carbon_price_eur_per_tonne = -1.0;
        config.trajectory.target_year = 2020;
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("carbon_price_eur_per_tonne"));
        assert!(message.contains("target_year"));
    }

    #[test]
    fn test_tolerance_upper_bound_exclusive() {
        let mut config = EngineConfig::default();
        config.benchmark.at_average_tolerance = 1.0;
        assert!(config.validate().is_err());
    }
}
