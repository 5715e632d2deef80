//! TOML reference datasets.
//!
//! A dataset replaces the built-in tables as a whole:
//!
//! ```toml
//! version = "ADEME Base Carbone v17"
//!
//! [[factors]]
//! category = "electricity"
//! unit = "kWh"
//! value = 0.0571
//!
//! [scopes]
//! electricity = "scope2"
//!
//! [[sectors]]
//! sector = "services"
//! label = "Business services"
//! average = 5000.0
//! top_quartile = 3000.0
//!
//! [global_benchmark]
//! average = 8000.0
//! top_quartile = 5000.0
//!
//! [reduction]
//! electricity = 0.30
//!
//! [[employee_bands]]
//! label = "1-9"
//! representative_headcount = 5
//! ```
//!
//! `reduction` and `employee_bands` fall back to the built-in tables when
//! omitted. Factors, scopes and sectors are required.

use super::bands::{EmployeeBand, EmployeeBandTable};
use super::benchmarks::{BenchmarkTable, SectorBenchmark};
use super::factors::{EmissionFactor, EmissionFactorTable};
use super::reduction::ReductionPolicy;
use super::scopes::ScopeMap;
use super::ReferenceTables;
use crate::core::{Category, Scope, Unit};
use crate::errors::{CarbonError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceDataset {
    pub version: String,
    pub factors: Vec<FactorEntry>,
    pub scopes: BTreeMap<String, Scope>,
    pub sectors: Vec<SectorBenchmark>,
    pub global_benchmark: GlobalBenchmark,
    #[serde(default)]
    pub reduction: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub employee_bands: Option<Vec<EmployeeBand>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorEntry {
    pub category: String,
    pub unit: String,
    pub value: f64,
    /// Defaults to the dataset version
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalBenchmark {
    pub average: f64,
    pub top_quartile: f64,
}

impl ReferenceDataset {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| CarbonError::parse(format!("reference dataset: {}", e), None))
    }

    pub fn into_tables(self) -> Result<ReferenceTables> {
        let version = self.version;

        let factors = self
            .factors
            .into_iter()
            .map(|entry| {
                let category: Category = entry.category.parse()?;
                let unit: Unit = entry
                    .unit
                    .parse()
                    .map_err(|e: String| CarbonError::invalid_reference(e))?;
                Ok(EmissionFactor {
                    category,
                    unit,
                    value: entry.value,
                    source: entry.source.unwrap_or_else(|| version.clone()),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let factors = EmissionFactorTable::new(version.clone(), factors)?;

        let scopes = self
            .scopes
            .into_iter()
            .map(|(key, scope)| Ok((key.parse::<Category>()?, scope)))
            .collect::<Result<Vec<_>>>()?;
        let scopes = ScopeMap::new(scopes);

        let global = SectorBenchmark::new(
            "global",
            "All sectors",
            self.global_benchmark.average,
            self.global_benchmark.top_quartile,
        );
        let benchmarks = BenchmarkTable::new(self.sectors, global)?;

        let reduction = match self.reduction {
            Some(rates) => {
                let rates = rates
                    .into_iter()
                    .map(|(key, rate)| Ok((key.parse::<Category>()?, rate)))
                    .collect::<Result<Vec<_>>>()?;
                ReductionPolicy::new(rates)?
            }
            None => ReductionPolicy::best_practice(),
        };

        let bands = match self.employee_bands {
            Some(bands) => EmployeeBandTable::new(bands)?,
            None => EmployeeBandTable::standard(),
        };

        ReferenceTables::new(factors, scopes, benchmarks, reduction, bands)
    }
}

/// Read, parse and validate a dataset file
pub fn load_dataset(path: &Path) -> Result<ReferenceTables> {
    let contents = std::fs::read_to_string(path).map_err(|e| CarbonError::io(e, path))?;
    let tables = ReferenceDataset::from_toml_str(&contents)
        .map_err(|e| match e {
            CarbonError::Parse { message, .. } => {
                CarbonError::parse(message, Some(path.to_path_buf()))
            }
            other => other,
        })?
        .into_tables()?;
    log::info!(
        "Loaded reference dataset '{}' from {} ({} factors, {} sectors)",
        tables.version(),
        path.display(),
        tables.factors().len(),
        tables.benchmarks().len()
    );
    Ok(tables)
}
