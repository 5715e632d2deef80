use crate::core::{Category, Unit};
use crate::errors::{CarbonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version tag of the built-in factor set
pub const ADEME_V17: &str = "ADEME Base Carbone v17";

/// Conversion factor from an activity quantity to kgCO2e
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub category: Category,
    pub unit: Unit,
    /// kgCO2e per unit
    pub value: f64,
    /// Dataset version the value was taken from
    pub source: String,
}

/// Immutable lookup of emission factors keyed by (category, unit)
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    version: String,
    factors: BTreeMap<(Category, Unit), EmissionFactor>,
}

impl EmissionFactorTable {
    /// Build a table, rejecting duplicates and negative or non-finite values.
    pub fn new(
        version: impl Into<String>,
        factors: impl IntoIterator<Item = EmissionFactor>,
    ) -> Result<Self> {
        let mut table = BTreeMap::new();
        for factor in factors {
            if !factor.value.is_finite() || factor.value < 0.0 {
                return Err(CarbonError::invalid_reference(format!(
                    "factor for {} ({}) must be a non-negative number, got {}",
                    factor.category, factor.unit, factor.value
                )));
            }
            let key = (factor.category, factor.unit);
            if table.insert(key, factor).is_some() {
                return Err(CarbonError::invalid_reference(format!(
                    "duplicate factor for {} ({})",
                    key.0, key.1
                )));
            }
        }
        Ok(Self {
            version: version.into(),
            factors: table,
        })
    }

    /// Built-in factors, in kgCO2e per canonical unit:
    ///
    /// | category | unit | factor |
    /// |---|---|---|
    /// | electricity | kWh | 0.0571 (French grid mix) |
    /// | gas | kWh | 0.227 (natural gas, LHV) |
    /// | fuel | L | 3.16 (diesel, combustion and upstream) |
    /// | vehicles | km | 0.193 (average passenger car) |
    /// | domestic_flights | passenger.km | 0.230 |
    /// | international_flights | passenger.km | 0.178 |
    /// | purchases | EUR | 0.45 (monetary ratio, mixed goods and services) |
    pub fn ademe_v17() -> Self {
        let entries = [
            (Category::Electricity, 0.0571),
            (Category::Gas, 0.227),
            (Category::Fuel, 3.16),
            (Category::Vehicles, 0.193),
            (Category::DomesticFlights, 0.230),
            (Category::InternationalFlights, 0.178),
            (Category::Purchases, 0.45),
        ];
        let factors = entries
            .into_iter()
            .map(|(category, value)| {
                (
                    (category, category.canonical_unit()),
                    EmissionFactor {
                        category,
                        unit: category.canonical_unit(),
                        value,
                        source: ADEME_V17.to_string(),
                    },
                )
            })
            .collect();
        Self {
            version: ADEME_V17.to_string(),
            factors,
        }
    }

    pub fn factor_for(&self, category: Category, unit: Unit) -> Result<&EmissionFactor> {
        self.factors
            .get(&(category, unit))
            .ok_or_else(|| CarbonError::unknown_factor(category.key(), unit.symbol()))
    }

    /// Lookup by raw keys, as received from reference displays or datasets
    pub fn factor_for_key(&self, category: &str, unit: &str) -> Result<&EmissionFactor> {
        let category_key: Category = category.parse()?;
        let unit_key: Unit = unit
            .parse()
            .map_err(|_| CarbonError::unknown_factor(category, unit))?;
        self.factor_for(category_key, unit_key)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Read-only enumeration in (category, unit) order
    pub fn iter(&self) -> impl Iterator<Item = &EmissionFactor> {
        self.factors.values()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
