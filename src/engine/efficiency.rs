use crate::core::Grade;
use crate::errors::{CarbonError, Result};

/// Lower bound (inclusive) of each grade band, best grade first.
/// Scores below the last bound are `F`.
pub const GRADE_THRESHOLDS: [(Grade, f64); 5] = [
    (Grade::A, 90.0),
    (Grade::B, 75.0),
    (Grade::C, 60.0),
    (Grade::D, 45.0),
    (Grade::E, 30.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyScore {
    /// 0-100, one decimal
    pub score: f64,
    pub grade: Grade,
}

/// Score relative to the sector average.
///
/// With `ratio = intensity / sector_average`:
/// `score = clamp(100 * (1 - (ratio - 1)), 0, 100)`.
/// At or below the average the score is 100; at twice the average it is 0.
/// The score is rounded to one decimal before grading so the displayed score
/// and the grade always agree.
pub fn score(intensity_per_employee: f64, sector_average: f64) -> Result<EfficiencyScore> {
    if !sector_average.is_finite() || sector_average <= 0.0 {
        return Err(CarbonError::invalid_reference(format!(
            "sector average must be positive, got {}",
            sector_average
        )));
    }
    if !intensity_per_employee.is_finite() || intensity_per_employee < 0.0 {
        return Err(CarbonError::invalid_input(
            "intensity_per_employee",
            format!("must be a non-negative number, got {}", intensity_per_employee),
        ));
    }

    let ratio = intensity_per_employee / sector_average;
    let raw = (100.0 * (1.0 - (ratio - 1.0))).clamp(0.0, 100.0);
    let score = (raw * 10.0).round() / 10.0;

    Ok(EfficiencyScore {
        score,
        grade: grade_for(score),
    })
}

pub fn grade_for(score: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(_, lower_bound)| score >= *lower_bound)
        .map(|(grade, _)| *grade)
        .unwrap_or(Grade::F)
}
