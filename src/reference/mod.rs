//! Reference data: emission factors, scope policy, sector benchmarks,
//! reduction policy and employee bands.
//!
//! The tables are built once, validated as a whole and then shared read-only
//! through a [`ReferenceHandle`]. Replacing them swaps the entire set; a
//! calculation that already holds a snapshot keeps using it.

pub mod bands;
pub mod benchmarks;
pub mod dataset;
pub mod factors;
pub mod reduction;
pub mod scopes;

pub use bands::{EmployeeBand, EmployeeBandTable};
pub use benchmarks::{canonical_sector, BenchmarkTable, SectorBenchmark, SECTOR_ALIASES};
pub use dataset::{load_dataset, ReferenceDataset};
pub use factors::{EmissionFactor, EmissionFactorTable, ADEME_V17};
pub use reduction::ReductionPolicy;
pub use scopes::ScopeMap;

use crate::core::Category;
use crate::errors::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// The complete, validated set of reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    factors: EmissionFactorTable,
    scopes: ScopeMap,
    benchmarks: BenchmarkTable,
    reduction: ReductionPolicy,
    bands: EmployeeBandTable,
}

impl ReferenceTables {
    /// Assemble tables, requiring a scope and a canonical-unit factor for
    /// every category.
    pub fn new(
        factors: EmissionFactorTable,
        scopes: ScopeMap,
        benchmarks: BenchmarkTable,
        reduction: ReductionPolicy,
        bands: EmployeeBandTable,
    ) -> Result<Self> {
        for category in Category::ALL {
            scopes.scope_of(category)?;
            factors.factor_for(category, category.canonical_unit())?;
        }
        Ok(Self {
            factors,
            scopes,
            benchmarks,
            reduction,
            bands,
        })
    }

    /// Built-in ADEME Base Carbone v17 tables
    pub fn builtin() -> Self {
        Self {
            factors: EmissionFactorTable::ademe_v17(),
            scopes: ScopeMap::ghg_protocol(),
            benchmarks: BenchmarkTable::builtin(),
            reduction: ReductionPolicy::best_practice(),
            bands: EmployeeBandTable::standard(),
        }
    }

    pub fn version(&self) -> &str {
        self.factors.version()
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    pub fn scopes(&self) -> &ScopeMap {
        &self.scopes
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    pub fn reduction(&self) -> &ReductionPolicy {
        &self.reduction
    }

    pub fn bands(&self) -> &EmployeeBandTable {
        &self.bands
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shared read-only handle to the current reference tables.
///
/// Clones share the same underlying slot.
#[derive(Debug, Clone)]
pub struct ReferenceHandle {
    current: Arc<RwLock<Arc<ReferenceTables>>>,
}

impl ReferenceHandle {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(tables))),
        }
    }

    /// Tables in effect right now
    pub fn snapshot(&self) -> Arc<ReferenceTables> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new table set, returning the previous one
    pub fn replace(&self, tables: ReferenceTables) -> Arc<ReferenceTables> {
        let next = Arc::new(tables);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        log::info!(
            "Reference tables replaced: '{}' -> '{}'",
            previous.version(),
            self.snapshot().version()
        );
        previous
    }
}

impl Default for ReferenceHandle {
    fn default() -> Self {
        Self::new(ReferenceTables::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scope, Unit};
    use crate::errors::CarbonError;

    #[test]
    fn test_builtin_tables_pass_validation() {
        let builtin = ReferenceTables::builtin();
        let rebuilt = ReferenceTables::new(
            builtin.factors().clone(),
            builtin.scopes().clone(),
            builtin.benchmarks().clone(),
            builtin.reduction().clone(),
            builtin.bands().clone(),
        )
        .unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(rebuilt.version(), ADEME_V17);
    }

    #[test]
    fn test_category_missing_from_factor_table_rejected() {
        let builtin = ReferenceTables::builtin();
        let factors: Vec<_> = builtin
            .factors()
            .iter()
            .filter(|f| f.category != Category::Gas)
            .cloned()
            .collect();
        let err = ReferenceTables::new(
            EmissionFactorTable::new("partial", factors).unwrap(),
            builtin.scopes().clone(),
            builtin.benchmarks().clone(),
            builtin.reduction().clone(),
            builtin.bands().clone(),
        )
        .unwrap_err();
        assert!(matches!(err, CarbonError::UnknownFactor { .. }));
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let handle = ReferenceHandle::default();
        let before = handle.snapshot();

        let mut factors: Vec<_> = before.factors().iter().cloned().collect();
        for factor in &mut factors {
            factor.value *= 2.0;
        }
        let doubled = ReferenceTables::new(
            EmissionFactorTable::new("doubled", factors).unwrap(),
            ScopeMap::ghg_protocol(),
            BenchmarkTable::builtin(),
            ReductionPolicy::best_practice(),
            EmployeeBandTable::standard(),
        )
        .unwrap();

        let previous = handle.clone().replace(doubled);
        assert_eq!(previous.version(), ADEME_V17);
        assert_eq!(before.version(), ADEME_V17);
        assert_eq!(handle.snapshot().version(), "doubled");
        assert_eq!(
            handle
                .snapshot()
                .factors()
                .factor_for(Category::Electricity, Unit::Kwh)
                .unwrap()
                .value,
            0.0571 * 2.0
        );
        assert_eq!(
            before.scopes().scope_of(Category::Electricity).unwrap(),
            Scope::Scope2
        );
    }
}
