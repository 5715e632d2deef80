use crate::core::Category;
use crate::reference::ReductionPolicy;
use std::collections::BTreeMap;

/// Achievable kgCO2e reduction per category under best-practice rates.
///
/// Only categories that have a rate in the policy appear in the result.
pub fn estimate(
    breakdown: &BTreeMap<Category, f64>,
    policy: &ReductionPolicy,
) -> BTreeMap<Category, f64> {
    breakdown
        .iter()
        .filter_map(|(category, emissions)| {
            policy
                .rate(*category)
                .map(|rate| (*category, emissions * rate))
        })
        .collect()
}
