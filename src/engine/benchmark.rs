use crate::config::{BenchmarkConfig, UnknownSectorPolicy};
use crate::core::{BenchmarkPosition, BenchmarkSource, PeerComparison};
use crate::errors::{CarbonError, Result};
use crate::reference::{BenchmarkTable, SectorBenchmark};

/// Compares an intensity against the sector reference values
pub struct BenchmarkEngine<'a> {
    table: &'a BenchmarkTable,
    config: &'a BenchmarkConfig,
}

/// Classification together with the reference values it was based on
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkOutcome {
    pub position: BenchmarkPosition,
    pub reference: SectorBenchmark,
    pub source: BenchmarkSource,
}

impl BenchmarkOutcome {
    pub fn peer_comparison(&self, intensity_per_employee: f64) -> PeerComparison {
        PeerComparison {
            sector_average: self.reference.average,
            sector_top_quartile: self.reference.top_quartile,
            intensity_per_employee,
            gap_to_average: intensity_per_employee - self.reference.average,
            gap_to_top_quartile: intensity_per_employee - self.reference.top_quartile,
            benchmark_source: self.source,
        }
    }
}

impl<'a> BenchmarkEngine<'a> {
    pub fn new(table: &'a BenchmarkTable, config: &'a BenchmarkConfig) -> Self {
        Self { table, config }
    }

    /// Reference values for a sector, applying the configured fallback policy
    pub fn resolve(&self, sector: &str) -> Result<(&'a SectorBenchmark, BenchmarkSource)> {
        match (self.table.get(sector), self.config.unknown_sector) {
            (Some(benchmark), _) => Ok((benchmark, BenchmarkSource::Sector)),
            (None, UnknownSectorPolicy::GlobalDefault) => {
                log::warn!(
                    "No benchmark for sector '{}', using global default values",
                    sector
                );
                Ok((self.table.global_default(), BenchmarkSource::GlobalDefault))
            }
            (None, UnknownSectorPolicy::Reject) => Err(CarbonError::unknown_sector(sector)),
        }
    }

    pub fn position(&self, sector: &str, intensity_per_employee: f64) -> Result<BenchmarkOutcome> {
        if !intensity_per_employee.is_finite() || intensity_per_employee < 0.0 {
            return Err(CarbonError::invalid_input(
                "intensity_per_employee",
                format!("must be a non-negative number, got {}", intensity_per_employee),
            ));
        }
        let (reference, source) = self.resolve(sector)?;
        let position = classify(
            intensity_per_employee,
            reference,
            self.config.at_average_tolerance,
        );
        log::debug!(
            "Benchmark {}: {:.1} kg/employee vs average {:.1} -> {:?}",
            reference.sector,
            intensity_per_employee,
            reference.average,
            position
        );
        Ok(BenchmarkOutcome {
            position,
            reference: reference.clone(),
            source,
        })
    }
}

/// Lower intensity is better. Each band's upper bound is inclusive, so a
/// value exactly on a threshold lands in the better band:
///
/// - `intensity <= top_quartile` -> `TopQuartile`
/// - `intensity <= average * (1 - tolerance)` -> `AboveAverage`
/// - `intensity <= average * (1 + tolerance)` -> `AtAverage`
/// - otherwise `BelowAverage`
pub fn classify(intensity: f64, reference: &SectorBenchmark, tolerance: f64) -> BenchmarkPosition {
    if intensity <= reference.top_quartile {
        BenchmarkPosition::TopQuartile
    } else if intensity <= reference.average * (1.0 - tolerance) {
        BenchmarkPosition::AboveAverage
    } else if intensity <= reference.average * (1.0 + tolerance) {
        BenchmarkPosition::AtAverage
    } else {
        BenchmarkPosition::BelowAverage
    }
}
