use crate::errors::CarbonError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Activity category reported by a company.
///
/// Declaration order is the canonical order of the breakdown and of
/// [`CategoryEmission`] sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    Gas,
    Fuel,
    Vehicles,
    DomesticFlights,
    InternationalFlights,
    Purchases,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electricity,
        Category::Gas,
        Category::Fuel,
        Category::Vehicles,
        Category::DomesticFlights,
        Category::InternationalFlights,
        Category::Purchases,
    ];

    /// Stable key used in serialized breakdowns and reference datasets
    pub fn key(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Gas => "gas",
            Category::Fuel => "fuel",
            Category::Vehicles => "vehicles",
            Category::DomesticFlights => "domestic_flights",
            Category::InternationalFlights => "international_flights",
            Category::Purchases => "purchases",
        }
    }

    /// Label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Gas => "Natural gas",
            Category::Fuel => "Fuel",
            Category::Vehicles => "Company vehicles",
            Category::DomesticFlights => "Domestic flights",
            Category::InternationalFlights => "International flights",
            Category::Purchases => "Purchased goods and services",
        }
    }

    /// Unit in which the activity quantity is reported
    pub fn canonical_unit(&self) -> Unit {
        match self {
            Category::Electricity | Category::Gas => Unit::Kwh,
            Category::Fuel => Unit::Liter,
            Category::Vehicles => Unit::Km,
            Category::DomesticFlights | Category::InternationalFlights => Unit::PassengerKm,
            Category::Purchases => Unit::Euro,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CarbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| CarbonError::unknown_category(s))
    }
}

/// Unit of an activity quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kWh")]
    Kwh,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "passenger.km")]
    PassengerKm,
    #[serde(rename = "EUR")]
    Euro,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Kwh, Unit::Liter, Unit::Km, Unit::PassengerKm, Unit::Euro];

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kwh => "kWh",
            Unit::Liter => "L",
            Unit::Km => "km",
            Unit::PassengerKm => "passenger.km",
            Unit::Euro => "EUR",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| format!("unknown unit '{}'", s))
    }
}

/// GHG Protocol scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Direct emissions from owned combustion sources
    Scope1,
    /// Indirect emissions from purchased energy
    Scope2,
    /// Other indirect emissions along the value chain
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Scope1 => "Scope 1",
            Scope::Scope2 => "Scope 2",
            Scope::Scope3 => "Scope 3",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One computed line of the emission inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEmission {
    pub category: Category,
    pub scope: Scope,
    pub quantity: f64,
    pub unit: Unit,
    /// kgCO2e per unit
    pub factor: f64,
    /// Full precision, used for every aggregate
    pub co2e_kg: f64,
    /// Rounded to 2 decimals for presentation
    pub co2e_kg_rounded: f64,
}

/// Position of a company's intensity within its sector distribution.
///
/// Variants are ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkPosition {
    TopQuartile,
    AboveAverage,
    AtAverage,
    BelowAverage,
}

impl BenchmarkPosition {
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkPosition::TopQuartile => "Top quartile of the sector",
            BenchmarkPosition::AboveAverage => "Better than sector average",
            BenchmarkPosition::AtAverage => "In line with sector average",
            BenchmarkPosition::BelowAverage => "Worse than sector average",
        }
    }
}

impl fmt::Display for BenchmarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sustainability grade, `A` best and `F` worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Where the benchmark reference values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSource {
    Sector,
    GlobalDefault,
}

/// Intensity compared with the sector reference values, in kgCO2e per employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    pub sector_average: f64,
    pub sector_top_quartile: f64,
    pub intensity_per_employee: f64,
    /// Positive when the company emits more than the sector average
    pub gap_to_average: f64,
    pub gap_to_top_quartile: f64,
    pub benchmark_source: BenchmarkSource,
}

/// Physical equivalents of a yearly emission total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceMetrics {
    /// Trees needed to absorb the total over one year
    pub trees: u64,
    pub vehicles_off_road: f64,
    pub household_years: f64,
    pub flights_paris_ny: f64,
}

/// Complete outcome of one calculation.
///
/// Created once per request and never mutated. All emission amounts are
/// in kgCO2e; `breakdown`, scope subtotals and `total_co2e` are derived from
/// the same full-precision `lines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub company_name: String,
    pub sector: String,
    pub reference_version: String,
    pub total_co2e: f64,
    pub scope_1: f64,
    pub scope_2: f64,
    pub scope_3: f64,
    pub breakdown: BTreeMap<Category, f64>,
    pub lines: Vec<CategoryEmission>,
    pub intensity_per_employee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_per_revenue: Option<f64>,
    pub benchmark_position: BenchmarkPosition,
    pub peer_comparison: PeerComparison,
    pub carbon_efficiency_score: f64,
    pub sustainability_grade: Grade,
    pub reduction_potential: BTreeMap<Category, f64>,
    pub recommendations: Vec<String>,
    pub equivalent_metrics: EquivalenceMetrics,
    /// Euros, serialized as `cost_of_carbon`
    #[serde(rename = "cost_of_carbon")]
    pub cost_of_carbon_eur: f64,
    /// Year to target kgCO2e, baseline through the configured target year
    pub trajectory: BTreeMap<u16, f64>,
}

impl EmissionResult {
    pub fn scope_total(&self, scope: Scope) -> f64 {
        match scope {
            Scope::Scope1 => self.scope_1,
            Scope::Scope2 => self.scope_2,
            Scope::Scope3 => self.scope_3,
        }
    }

    /// Share of the total attributable to `category`, in [0, 1]
    pub fn share_of(&self, category: Category) -> f64 {
        if self.total_co2e > 0.0 {
            self.breakdown.get(&category).copied().unwrap_or(0.0) / self.total_co2e
        } else {
            0.0
        }
    }

    pub fn total_reduction_potential(&self) -> f64 {
        self.reduction_potential.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_key() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_key_is_rejected() {
        let err = "water".parse::<Category>().unwrap_err();
        assert!(matches!(err, CarbonError::UnknownCategory { .. }));
    }

    #[test]
    fn test_category_serializes_as_map_key() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(Category::DomesticFlights, 12.5);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(json, r#"{"domestic_flights":12.5}"#);
    }

    #[test]
    fn test_benchmark_positions_ordered_best_first() {
        assert!(BenchmarkPosition::TopQuartile < BenchmarkPosition::AboveAverage);
        assert!(BenchmarkPosition::AtAverage < BenchmarkPosition::BelowAverage);
    }

    #[test]
    fn test_unit_symbols_parse() {
        assert_eq!("passenger.km".parse::<Unit>().unwrap(), Unit::PassengerKm);
        assert!("miles".parse::<Unit>().is_err());
    }
}
