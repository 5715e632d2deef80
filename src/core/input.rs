//! Activity data submitted for one calculation.
//!
//! The request layer validates types and ranges before building an
//! [`ActivityInput`]; [`ActivityInput::validate`] re-asserts the same
//! invariants so the engine fails fast instead of clamping bad values.

use super::types::Category;
use crate::errors::{CarbonError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyProfile {
    pub name: String,
    /// Sector code, e.g. `services`
    pub sector: String,
    /// Employee-count band, e.g. `10-49`
    pub employee_band: String,
    /// Annual revenue in euros
    #[serde(default)]
    pub annual_revenue: Option<f64>,
    #[serde(default)]
    pub location: String,
}

impl CompanyProfile {
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        employee_band: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            employee_band: employee_band.into(),
            annual_revenue: None,
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyUse {
    pub electricity_kwh: f64,
    pub gas_kwh: f64,
    pub fuel_liters: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportUse {
    pub vehicle_km: f64,
    pub domestic_flight_km: f64,
    pub international_flight_km: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Purchasing {
    /// Annual spend in euros
    pub annual_spend_eur: f64,
    /// Share of purchases sourced locally, 0-100
    pub local_share_pct: f64,
}

/// Yearly activity data for one company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityInput {
    pub company: CompanyProfile,
    #[serde(default)]
    pub energy: EnergyUse,
    #[serde(default)]
    pub transport: TransportUse,
    #[serde(default)]
    pub purchasing: Purchasing,
}

impl ActivityInput {
    pub fn new(company: CompanyProfile) -> Self {
        Self {
            company,
            ..Default::default()
        }
    }

    /// Reported quantity for a category, in its canonical unit
    pub fn quantity(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.energy.electricity_kwh,
            Category::Gas => self.energy.gas_kwh,
            Category::Fuel => self.energy.fuel_liters,
            Category::Vehicles => self.transport.vehicle_km,
            Category::DomesticFlights => self.transport.domestic_flight_km,
            Category::InternationalFlights => self.transport.international_flight_km,
            Category::Purchases => self.purchasing.annual_spend_eur,
        }
    }

    /// All (category, quantity) pairs in canonical category order
    pub fn quantities(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.quantity(category)))
    }

    pub fn is_all_zero(&self) -> bool {
        self.quantities().all(|(_, quantity)| quantity == 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        require_text("company.name", &self.company.name)?;
        require_text("company.sector", &self.company.sector)?;
        require_text("company.employee_band", &self.company.employee_band)?;

        for (category, quantity) in self.quantities() {
            require_non_negative(field_name(category), quantity)?;
        }

        let local = self.purchasing.local_share_pct;
        if !local.is_finite() || !(0.0..=100.0).contains(&local) {
            return Err(CarbonError::invalid_input(
                "purchasing.local_share_pct",
                format!("must be between 0 and 100, got {}", local),
            ));
        }

        if let Some(revenue) = self.company.annual_revenue {
            require_non_negative("company.annual_revenue", revenue)?;
        }

        Ok(())
    }
}

/// Input field path that carries the quantity for `category`
pub fn field_name(category: Category) -> &'static str {
    match category {
        Category::Electricity => "energy.electricity_kwh",
        Category::Gas => "energy.gas_kwh",
        Category::Fuel => "energy.fuel_liters",
        Category::Vehicles => "transport.vehicle_km",
        Category::DomesticFlights => "transport.domestic_flight_km",
        Category::InternationalFlights => "transport.international_flight_km",
        Category::Purchases => "purchasing.annual_spend_eur",
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CarbonError::invalid_input(field, "must not be empty"))
    } else {
        Ok(())
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        Err(CarbonError::invalid_input(field, "must be a finite number"))
    } else if value < 0.0 {
        Err(CarbonError::invalid_input(
            field,
            format!("must be non-negative, got {}", value),
        ))
    } else {
        Ok(())
    }
}
