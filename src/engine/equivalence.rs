use crate::core::EquivalenceMetrics;

/// CO2 absorbed by one mature tree in a year
pub const KG_PER_TREE_YEAR: f64 = 25.0;
/// Average passenger car driven for a year
pub const KG_PER_VEHICLE_YEAR: f64 = 2_300.0;
/// Energy use of an average French household for a year
pub const KG_PER_HOUSEHOLD_YEAR: f64 = 2_500.0;
/// One economy passenger, Paris to New York one way
pub const KG_PER_FLIGHT_PARIS_NY: f64 = 1_000.0;

/// Express a yearly total in physical equivalents.
///
/// Trees are whole trees, rounded up; the other figures keep one decimal.
pub fn equivalences(total_co2e: f64) -> EquivalenceMetrics {
    let total = total_co2e.max(0.0);
    EquivalenceMetrics {
        trees: (total / KG_PER_TREE_YEAR).ceil() as u64,
        vehicles_off_road: round_one(total / KG_PER_VEHICLE_YEAR),
        household_years: round_one(total / KG_PER_HOUSEHOLD_YEAR),
        flights_paris_ny: round_one(total / KG_PER_FLIGHT_PARIS_NY),
    }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
