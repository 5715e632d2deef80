use crate::core::input::field_name;
use crate::core::{ActivityInput, Category, CategoryEmission, Scope};
use crate::errors::{CarbonError, Result};
use crate::reference::{EmissionFactorTable, ScopeMap};
use std::collections::BTreeMap;

/// Applies emission factors to activity quantities
pub struct EmissionCalculator<'a> {
    factors: &'a EmissionFactorTable,
    scopes: &'a ScopeMap,
}

/// Scope subtotals, overall total and per-category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionTotals {
    pub total: f64,
    pub scope_1: f64,
    pub scope_2: f64,
    pub scope_3: f64,
    pub breakdown: BTreeMap<Category, f64>,
}

impl<'a> EmissionCalculator<'a> {
    pub fn new(factors: &'a EmissionFactorTable, scopes: &'a ScopeMap) -> Self {
        Self { factors, scopes }
    }

    /// One line per category in canonical order. Zero quantities still
    /// produce a line.
    pub fn compute(&self, input: &ActivityInput) -> Result<Vec<CategoryEmission>> {
        input.validate()?;
        input
            .quantities()
            .map(|(category, quantity)| self.line(category, quantity))
            .collect()
    }

    fn line(&self, category: Category, quantity: f64) -> Result<CategoryEmission> {
        let unit = category.canonical_unit();
        let factor = self.factors.factor_for(category, unit)?;
        let scope = self.scopes.scope_of(category)?;
        let co2e_kg = quantity * factor.value;
        if !co2e_kg.is_finite() {
            return Err(CarbonError::invalid_input(
                field_name(category),
                format!("{} {} exceeds the representable emission range", quantity, unit),
            ));
        }
        log::trace!(
            "{}: {} {} x {} = {} kgCO2e ({})",
            category,
            quantity,
            unit,
            factor.value,
            co2e_kg,
            scope
        );
        Ok(CategoryEmission {
            category,
            scope,
            quantity,
            unit,
            factor: factor.value,
            co2e_kg,
            co2e_kg_rounded: round_kg(co2e_kg),
        })
    }
}

/// Sum full-precision line values by scope and overall. Fails when the
/// overall sum overflows, blaming the largest line.
pub fn aggregate(lines: &[CategoryEmission]) -> Result<EmissionTotals> {
    let total: f64 = lines.iter().map(|line| line.co2e_kg).sum();
    if !total.is_finite() {
        let field = lines
            .iter()
            .max_by(|a, b| a.co2e_kg.total_cmp(&b.co2e_kg))
            .map_or("activity", |line| field_name(line.category));
        return Err(CarbonError::invalid_input(
            field,
            "combined emissions exceed the representable range",
        ));
    }

    let scope_sum = |scope: Scope| -> f64 {
        lines
            .iter()
            .filter(|line| line.scope == scope)
            .map(|line| line.co2e_kg)
            .sum()
    };

    let mut breakdown = BTreeMap::new();
    for line in lines {
        *breakdown.entry(line.category).or_insert(0.0) += line.co2e_kg;
    }

    Ok(EmissionTotals {
        total,
        scope_1: scope_sum(Scope::Scope1),
        scope_2: scope_sum(Scope::Scope2),
        scope_3: scope_sum(Scope::Scope3),
        breakdown,
    })
}

/// Presentation rounding to 2 decimals
pub fn round_kg(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
