use super::benchmark::BenchmarkEngine;
use super::emissions::{aggregate, EmissionCalculator};
use super::recommendations::{self, RuleContext};
use super::{efficiency, equivalence, finance, intensity, reduction};
use crate::config::EngineConfig;
use crate::core::{ActivityInput, EmissionResult};
use crate::errors::Result;
use crate::reference::{load_dataset, ReferenceHandle, ReferenceTables};
use rayon::prelude::*;

/// Entry point for calculations.
///
/// Holds the shared reference tables and the engine configuration. Every
/// calculation takes one snapshot of the tables up front, so a concurrent
/// [`ReferenceHandle::replace`] never mixes two versions in one result.
#[derive(Debug, Clone)]
pub struct Engine {
    reference: ReferenceHandle,
    config: EngineConfig,
}

impl Engine {
    pub fn new(reference: ReferenceHandle, config: EngineConfig) -> Self {
        Self { reference, config }
    }

    /// Built-in tables with the given configuration
    pub fn with_builtin(config: EngineConfig) -> Self {
        Self::new(ReferenceHandle::default(), config)
    }

    /// Validate `config` and load the dataset it points at, if any
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let tables = match &config.reference.dataset {
            Some(path) => load_dataset(path)?,
            None => ReferenceTables::builtin(),
        };
        Ok(Self::new(ReferenceHandle::new(tables), config))
    }

    pub fn reference(&self) -> &ReferenceHandle {
        &self.reference
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calculate(&self, input: &ActivityInput) -> Result<EmissionResult> {
        let tables = self.reference.snapshot();
        calculate_with(&tables, &self.config, input)
    }

    /// Calculate independent inputs in parallel. Results keep input order and
    /// all of them use the same reference snapshot.
    pub fn calculate_batch(&self, inputs: &[ActivityInput]) -> Vec<Result<EmissionResult>> {
        let tables = self.reference.snapshot();
        log::info!(
            "Calculating {} input(s) against '{}'",
            inputs.len(),
            tables.version()
        );
        inputs
            .par_iter()
            .map(|input| calculate_with(&tables, &self.config, input))
            .collect()
    }
}

/// Full pipeline against one fixed set of tables. Pure: no I/O, no clock.
pub fn calculate_with(
    tables: &ReferenceTables,
    config: &EngineConfig,
    input: &ActivityInput,
) -> Result<EmissionResult> {
    let company = &input.company;
    log::debug!(
        "Calculating '{}' ({}, {})",
        company.name,
        company.sector,
        company.employee_band
    );

    let lines = EmissionCalculator::new(tables.factors(), tables.scopes()).compute(input)?;
    let totals = aggregate(&lines)?;
    log::debug!(
        "Totals: {:.2} kgCO2e (scope 1 {:.2}, scope 2 {:.2}, scope 3 {:.2})",
        totals.total,
        totals.scope_1,
        totals.scope_2,
        totals.scope_3
    );

    let intensity = intensity::compute(
        totals.total,
        &company.employee_band,
        company.annual_revenue,
        tables.bands(),
    )?;

    let outcome = BenchmarkEngine::new(tables.benchmarks(), &config.benchmark)
        .position(&company.sector, intensity.per_employee)?;
    let efficiency = efficiency::score(intensity.per_employee, outcome.reference.average)?;
    log::debug!(
        "Score {:.1} ({}), position {:?}",
        efficiency.score,
        efficiency.grade,
        outcome.position
    );

    let reduction_potential = reduction::estimate(&totals.breakdown, tables.reduction());
    let recommendations = recommendations::recommend(&RuleContext {
        input,
        breakdown: &totals.breakdown,
        total: totals.total,
        potentials: &reduction_potential,
        position: outcome.position,
        benchmark: &outcome.reference,
        headcount: intensity.headcount,
        intensity_per_employee: intensity.per_employee,
    });

    Ok(EmissionResult {
        company_name: company.name.clone(),
        sector: company.sector.clone(),
        reference_version: tables.version().to_string(),
        total_co2e: totals.total,
        scope_1: totals.scope_1,
        scope_2: totals.scope_2,
        scope_3: totals.scope_3,
        intensity_per_employee: intensity.per_employee,
        intensity_per_revenue: intensity.per_revenue,
        benchmark_position: outcome.position,
        peer_comparison: outcome.peer_comparison(intensity.per_employee),
        carbon_efficiency_score: efficiency.score,
        sustainability_grade: efficiency.grade,
        reduction_potential,
        recommendations,
        equivalent_metrics: equivalence::equivalences(totals.total),
        cost_of_carbon_eur: finance::cost_of_carbon(
            totals.total,
            config.pricing.carbon_price_eur_per_tonne,
        ),
        trajectory: finance::trajectory(totals.total, &config.trajectory),
        breakdown: totals.breakdown,
        lines,
    })
}
