use crate::errors::{CarbonError, Result};
use serde::{Deserialize, Serialize};

/// Employee-count band and the headcount used to represent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBand {
    pub label: String,
    pub representative_headcount: u32,
}

/// Explicit mapping from employee-count band to a representative headcount.
///
/// Lookup rules, in order:
/// 1. an exact band label from the table (`"10-49"`)
/// 2. a plain positive integer, taken as the exact headcount (`"42"`)
///
/// Anything else is invalid input. Bands are never interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeBandTable {
    bands: Vec<EmployeeBand>,
}

impl EmployeeBandTable {
    pub fn new(bands: impl IntoIterator<Item = EmployeeBand>) -> Result<Self> {
        let bands: Vec<EmployeeBand> = bands.into_iter().collect();
        for (index, band) in bands.iter().enumerate() {
            if band.representative_headcount == 0 {
                return Err(CarbonError::invalid_reference(format!(
                    "employee band '{}' must map to a positive headcount",
                    band.label
                )));
            }
            if bands[..index].iter().any(|b| b.label == band.label) {
                return Err(CarbonError::invalid_reference(format!(
                    "duplicate employee band '{}'",
                    band.label
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Midpoints of the usual company-size bands; open-ended `1000+` maps to 1500.
    ///
    /// | band | headcount |
    /// |---|---|
    /// | 1-9 | 5 |
    /// | 10-49 | 30 |
    /// | 50-249 | 150 |
    /// | 250-499 | 375 |
    /// | 500-999 | 750 |
    /// | 1000+ | 1500 |
    pub fn standard() -> Self {
        let bands = [
            ("1-9", 5),
            ("10-49", 30),
            ("50-249", 150),
            ("250-499", 375),
            ("500-999", 750),
            ("1000+", 1500),
        ]
        .into_iter()
        .map(|(label, headcount)| EmployeeBand {
            label: label.to_string(),
            representative_headcount: headcount,
        })
        .collect();
        Self { bands }
    }

    pub fn headcount_for(&self, band: &str) -> Result<f64> {
        let band = band.trim();
        if let Some(entry) = self.bands.iter().find(|b| b.label == band) {
            return Ok(f64::from(entry.representative_headcount));
        }
        match band.parse::<u32>() {
            Ok(count) if count > 0 => Ok(f64::from(count)),
            _ => Err(CarbonError::invalid_input(
                "company.employee_band",
                format!(
                    "'{}' is neither a known band ({}) nor a positive headcount",
                    band,
                    self.labels().join(", ")
                ),
            )),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bands.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeBand> {
        self.bands.iter()
    }
}
