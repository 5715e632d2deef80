//! Non-fatal review of activity data before calculation.
//!
//! Nothing here blocks a calculation. Warnings point at data that is probably
//! incomplete; suggestions point at values worth a second look.

use crate::core::ActivityInput;
use serde::{Deserialize, Serialize};

const HIGH_VEHICLE_KM: f64 = 100_000.0;
const HIGH_LOCAL_SHARE_PCT: f64 = 80.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputReview {
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl InputReview {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.suggestions.is_empty()
    }
}

pub fn review(input: &ActivityInput) -> InputReview {
    let mut review = InputReview::default();

    if input.energy.electricity_kwh == 0.0 && input.energy.gas_kwh == 0.0 {
        review.warnings.push(
            "No electricity or gas consumption reported; energy data is probably incomplete"
                .to_string(),
        );
    }
    if input.is_all_zero() {
        review
            .warnings
            .push("Every activity quantity is zero; the footprint will be empty".to_string());
    }

    if input.transport.vehicle_km > HIGH_VEHICLE_KM {
        review.suggestions.push(format!(
            "Vehicle distance of {:.0} km is unusually high; check the entry",
            input.transport.vehicle_km
        ));
    }
    if input.purchasing.local_share_pct > HIGH_LOCAL_SHARE_PCT {
        review.suggestions.push(format!(
            "{:.0}% of purchases are local, a strong practice worth highlighting",
            input.purchasing.local_share_pct
        ));
    }

    review
}
