use crate::errors::Result;
use crate::reference::EmployeeBandTable;

/// Normalized emission metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity {
    /// Representative headcount the per-employee figure was divided by
    pub headcount: f64,
    /// kgCO2e per employee
    pub per_employee: f64,
    /// kgCO2e per euro of revenue; absent without positive revenue
    pub per_revenue: Option<f64>,
}

/// kgCO2e per employee for a resolved headcount
pub fn per_employee(total: f64, headcount: f64) -> f64 {
    total / headcount
}

/// kgCO2e per euro of revenue. `None` when revenue is missing or zero, or
/// when the quotient is not finite.
pub fn per_revenue(total: f64, revenue: Option<f64>) -> Option<f64> {
    revenue
        .filter(|revenue| revenue.is_finite() && *revenue > 0.0)
        .map(|revenue| total / revenue)
        .filter(|value| value.is_finite())
}

pub fn compute(
    total: f64,
    employee_band: &str,
    revenue: Option<f64>,
    bands: &EmployeeBandTable,
) -> Result<Intensity> {
    let headcount = bands.headcount_for(employee_band)?;
    Ok(Intensity {
        headcount,
        per_employee: per_employee(total, headcount),
        per_revenue: per_revenue(total, revenue),
    })
}
