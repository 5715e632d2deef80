use crate::errors::{CarbonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference intensity values for one sector, in kgCO2e per employee and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBenchmark {
    pub sector: String,
    pub label: String,
    pub average: f64,
    /// Intensity at or below which a company is in the best quartile
    pub top_quartile: f64,
}

impl SectorBenchmark {
    pub fn new(
        sector: impl Into<String>,
        label: impl Into<String>,
        average: f64,
        top_quartile: f64,
    ) -> Self {
        Self {
            sector: sector.into(),
            label: label.into(),
            average,
            top_quartile,
        }
    }

    fn validate(&self) -> Result<()> {
        let valid = self.average.is_finite()
            && self.top_quartile.is_finite()
            && self.top_quartile > 0.0
            && self.top_quartile <= self.average;
        if valid {
            Ok(())
        } else {
            Err(CarbonError::invalid_reference(format!(
                "benchmark for '{}' requires 0 < top_quartile <= average (got {} / {})",
                self.sector, self.top_quartile, self.average
            )))
        }
    }
}

/// French sector codes accepted by the web front end, mapped to the
/// built-in codes. A code present in the table always wins over an alias.
pub const SECTOR_ALIASES: &[(&str, &str)] = &[
    ("industrie", "manufacturing"),
    ("commerce", "retail"),
    ("restauration", "hospitality"),
    ("sante", "healthcare"),
    ("technologie", "technology"),
];

/// Resolve a French front-end code to its built-in sector code
pub fn canonical_sector(sector: &str) -> &str {
    SECTOR_ALIASES
        .iter()
        .find(|(alias, _)| *alias == sector)
        .map_or(sector, |(_, code)| code)
}

/// Per-sector benchmarks plus the global default used by the fallback policy
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    sectors: BTreeMap<String, SectorBenchmark>,
    global_default: SectorBenchmark,
}

impl BenchmarkTable {
    pub fn new(
        sectors: impl IntoIterator<Item = SectorBenchmark>,
        global_default: SectorBenchmark,
    ) -> Result<Self> {
        global_default.validate()?;
        let mut table = BTreeMap::new();
        for benchmark in sectors {
            benchmark.validate()?;
            if table.contains_key(&benchmark.sector) {
                return Err(CarbonError::invalid_reference(format!(
                    "duplicate benchmark for sector '{}'",
                    benchmark.sector
                )));
            }
            table.insert(benchmark.sector.clone(), benchmark);
        }
        Ok(Self {
            sectors: table,
            global_default,
        })
    }

    /// Built-in reference values (kgCO2e per employee and year).
    ///
    /// These are business parameters, not measured statistics. Replace them
    /// through a reference dataset when sector studies are available.
    ///
    /// | sector | average | top quartile |
    /// |---|---|---|
    /// | agriculture | 18 000 | 11 000 |
    /// | construction | 12 000 | 7 500 |
    /// | education | 3 500 | 2 200 |
    /// | healthcare | 6 000 | 3 800 |
    /// | hospitality | 9 000 | 5 500 |
    /// | manufacturing | 15 000 | 9 000 |
    /// | retail | 7 000 | 4 500 |
    /// | services | 5 000 | 3 000 |
    /// | technology | 4 000 | 2 500 |
    /// | transport | 20 000 | 12 000 |
    /// | global default | 8 000 | 5 000 |
    pub fn builtin() -> Self {
        let sectors = [
            ("agriculture", "Agriculture and food processing", 18_000.0, 11_000.0),
            ("construction", "Construction and public works", 12_000.0, 7_500.0),
            ("education", "Education and training", 3_500.0, 2_200.0),
            ("healthcare", "Health and social services", 6_000.0, 3_800.0),
            ("hospitality", "Restaurants and hotels", 9_000.0, 5_500.0),
            ("manufacturing", "Manufacturing", 15_000.0, 9_000.0),
            ("retail", "Retail and wholesale", 7_000.0, 4_500.0),
            ("services", "Business services", 5_000.0, 3_000.0),
            ("technology", "Technology and digital", 4_000.0, 2_500.0),
            ("transport", "Transport and logistics", 20_000.0, 12_000.0),
        ]
        .into_iter()
        .map(|(code, label, average, top)| {
            (
                code.to_string(),
                SectorBenchmark::new(code, label, average, top),
            )
        })
        .collect();

        Self {
            sectors,
            global_default: SectorBenchmark::new("global", "All sectors", 8_000.0, 5_000.0),
        }
    }

    pub fn get(&self, sector: &str) -> Option<&SectorBenchmark> {
        self.sectors
            .get(sector)
            .or_else(|| self.sectors.get(canonical_sector(sector)))
    }

    pub fn lookup(&self, sector: &str) -> Result<&SectorBenchmark> {
        self.get(sector)
            .ok_or_else(|| CarbonError::unknown_sector(sector))
    }

    pub fn global_default(&self) -> &SectorBenchmark {
        &self.global_default
    }

    /// Sectors in code order
    pub fn iter(&self) -> impl Iterator<Item = &SectorBenchmark> {
        self.sectors.values()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sectors_are_consistent() {
        let table = BenchmarkTable::builtin();
        assert_eq!(table.len(), 10);
        for benchmark in table.iter() {
            assert!(benchmark.validate().is_ok(), "{}", benchmark.sector);
        }
        assert!(table.global_default().validate().is_ok());
    }

    #[test]
    fn test_unknown_sector_lookup() {
        let table = BenchmarkTable::builtin();
        assert!(matches!(
            table.lookup("mining"),
            Err(CarbonError::UnknownSector { .. })
        ));
        assert_eq!(table.lookup("services").unwrap().average, 5_000.0);
    }

    #[test]
    fn test_french_codes_resolve_to_builtin_sectors() {
        let table = BenchmarkTable::builtin();
        for (alias, code) in SECTOR_ALIASES {
            assert_eq!(table.lookup(alias).unwrap().sector, *code);
        }
        assert_eq!(canonical_sector("services"), "services");
        assert_eq!(canonical_sector("mines"), "mines");
    }

    #[test]
    fn test_table_code_wins_over_alias() {
        let commerce = SectorBenchmark::new("commerce", "Commerce", 6_000.0, 4_000.0);
        let retail = SectorBenchmark::new("retail", "Retail", 7_000.0, 4_500.0);
        let global = SectorBenchmark::new("global", "All", 8_000.0, 5_000.0);
        let table = BenchmarkTable::new([commerce, retail], global).unwrap();
        assert_eq!(table.lookup("commerce").unwrap().average, 6_000.0);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let bad = SectorBenchmark::new("x", "X", 1_000.0, 2_000.0);
        let global = SectorBenchmark::new("global", "All", 8_000.0, 5_000.0);
        assert!(BenchmarkTable::new([bad], global).is_err());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let global = SectorBenchmark::new("global", "All", 0.0, 0.0);
        assert!(BenchmarkTable::new([], global).is_err());
    }
}
