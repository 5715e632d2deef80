use crate::config::TrajectoryConfig;
use std::collections::BTreeMap;

/// Cost of the footprint at an internal carbon price, in euros
pub fn cost_of_carbon(total_co2e_kg: f64, price_eur_per_tonne: f64) -> f64 {
    total_co2e_kg / 1_000.0 * price_eur_per_tonne
}

/// Yearly emission targets for a linear path from the current total down to
/// `total * (1 - target_reduction)`. Both the baseline and target years are
/// included.
pub fn trajectory(total_co2e: f64, config: &TrajectoryConfig) -> BTreeMap<u16, f64> {
    let span = config.target_year.saturating_sub(config.baseline_year);
    if span == 0 {
        return BTreeMap::from([(config.baseline_year, total_co2e)]);
    }
    let yearly_cut = total_co2e * config.target_reduction / f64::from(span);
    (0..=span)
        .map(|step| {
            (
                config.baseline_year + step,
                total_co2e - yearly_cut * f64::from(step),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cost_of_carbon() {
        assert_eq!(cost_of_carbon(2_500.0, 100.0), 250.0);
        assert_eq!(cost_of_carbon(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_trajectory_endpoints() {
        let config = TrajectoryConfig::default();
        let path = trajectory(10_000.0, &config);
        assert_eq!(path.len(), 7);
        assert_eq!(path[&2024], 10_000.0);
        assert_relative_eq!(path[&2030], 4_500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_trajectory_is_non_increasing() {
        let path = trajectory(1_234.0, &TrajectoryConfig::default());
        let values: Vec<f64> = path.values().copied().collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_degenerate_span() {
        let config = TrajectoryConfig {
            baseline_year: 2030,
            target_year: 2030,
            target_reduction: 0.5,
        };
        assert_eq!(trajectory(100.0, &config).len(), 1);
    }
}
