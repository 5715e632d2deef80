use crate::core::Category;
use crate::errors::{CarbonError, Result};
use std::collections::BTreeMap;

/// Best-practice reduction rates per category, as fractions in [0, 1].
///
/// A category without a rate has no estimated potential; it is left out of
/// the estimate rather than reported as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionPolicy {
    rates: BTreeMap<Category, f64>,
}

impl ReductionPolicy {
    pub fn new(rates: impl IntoIterator<Item = (Category, f64)>) -> Result<Self> {
        let rates: BTreeMap<_, _> = rates.into_iter().collect();
        if let Some((category, rate)) = rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || !(0.0..=1.0).contains(*rate))
        {
            return Err(CarbonError::invalid_reference(format!(
                "reduction rate for {} must be between 0 and 1, got {}",
                category, rate
            )));
        }
        Ok(Self { rates })
    }

    /// Electricity 30 %, gas 25 %, fuel 20 %, vehicles 20 %, flights 15 %,
    /// purchases 10 %
    pub fn best_practice() -> Self {
        Self {
            rates: [
                (Category::Electricity, 0.30),
                (Category::Gas, 0.25),
                (Category::Fuel, 0.20),
                (Category::Vehicles, 0.20),
                (Category::DomesticFlights, 0.15),
                (Category::InternationalFlights, 0.15),
                (Category::Purchases, 0.10),
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn rate(&self, category: Category) -> Option<f64> {
        self.rates.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }
}
