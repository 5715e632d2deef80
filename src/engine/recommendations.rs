//! Declarative recommendation rules.
//!
//! Each rule is a predicate over the computed figures, an estimated impact in
//! kgCO2e and a message builder. Rules that apply are ordered by impact,
//! highest first; ties keep declaration order.

use crate::core::{ActivityInput, BenchmarkPosition, Category};
use crate::reference::SectorBenchmark;
use std::collections::BTreeMap;

/// Figures a rule can look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub input: &'a ActivityInput,
    pub breakdown: &'a BTreeMap<Category, f64>,
    pub total: f64,
    pub potentials: &'a BTreeMap<Category, f64>,
    pub position: BenchmarkPosition,
    pub benchmark: &'a SectorBenchmark,
    pub headcount: f64,
    pub intensity_per_employee: f64,
}

impl RuleContext<'_> {
    pub fn emissions(&self, category: Category) -> f64 {
        self.breakdown.get(&category).copied().unwrap_or(0.0)
    }

    pub fn share(&self, categories: &[Category]) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        categories.iter().map(|c| self.emissions(*c)).sum::<f64>() / self.total
    }

    pub fn potential(&self, categories: &[Category]) -> f64 {
        categories
            .iter()
            .map(|c| self.potentials.get(c).copied().unwrap_or(0.0))
            .sum()
    }
}

pub struct RecommendationRule {
    pub id: &'static str,
    pub applies: fn(&RuleContext) -> bool,
    pub impact: fn(&RuleContext) -> f64,
    pub message: fn(&RuleContext) -> String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub rule_id: &'static str,
    pub message: String,
    /// Estimated kgCO2e avoided per year
    pub impact_kg: f64,
}

const FLIGHTS: [Category; 2] = [Category::DomesticFlights, Category::InternationalFlights];
const MOBILITY: [Category; 2] = [Category::Fuel, Category::Vehicles];

const ELECTRICITY_SHARE: f64 = 0.30;
const GAS_SHARE: f64 = 0.20;
const MOBILITY_SHARE: f64 = 0.25;
const FLIGHTS_SHARE: f64 = 0.15;
const PURCHASES_SHARE: f64 = 0.40;
const LOCAL_SHARE_PCT: f64 = 30.0;
/// Rail emits roughly a tenth of a domestic flight per passenger.km
const RAIL_SHIFT_SAVING: f64 = 0.9;
/// Share of purchase emissions avoidable by sourcing locally
const LOCAL_SOURCING_SAVING: f64 = 0.05;

pub const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        id: "missing_activity_data",
        applies: |ctx| ctx.total == 0.0,
        impact: |_| f64::INFINITY,
        message: |_| {
            "No activity data was reported: collect energy bills, travel records and \
             purchasing data to establish a first carbon footprint"
                .to_string()
        },
    },
    RecommendationRule {
        id: "missing_energy_data",
        applies: |ctx| {
            ctx.total > 0.0
                && ctx.input.energy.electricity_kwh == 0.0
                && ctx.input.energy.gas_kwh == 0.0
        },
        impact: |_| 0.0,
        message: |_| {
            "No electricity or gas consumption was reported: check energy bills so \
             building emissions are not missing from the footprint"
                .to_string()
        },
    },
    RecommendationRule {
        id: "renewable_electricity",
        applies: |ctx| ctx.share(&[Category::Electricity]) > ELECTRICITY_SHARE,
        impact: |ctx| ctx.potential(&[Category::Electricity]),
        message: |ctx| {
            format!(
                "Electricity is {:.0}% of emissions: switch to a certified renewable supply \
                 and improve efficiency to save about {:.0} kgCO2e per year",
                ctx.share(&[Category::Electricity]) * 100.0,
                ctx.potential(&[Category::Electricity])
            )
        },
    },
    RecommendationRule {
        id: "heating_efficiency",
        applies: |ctx| ctx.share(&[Category::Gas]) > GAS_SHARE,
        impact: |ctx| ctx.potential(&[Category::Gas]),
        message: |ctx| {
            format!(
                "Natural gas is {:.0}% of emissions: insulate buildings and consider a heat \
                 pump to save about {:.0} kgCO2e per year",
                ctx.share(&[Category::Gas]) * 100.0,
                ctx.potential(&[Category::Gas])
            )
        },
    },
    RecommendationRule {
        id: "fleet_electrification",
        applies: |ctx| ctx.share(&MOBILITY) > MOBILITY_SHARE,
        impact: |ctx| ctx.potential(&MOBILITY),
        message: |ctx| {
            format!(
                "Fuel and company vehicles are {:.0}% of emissions: electrify the fleet and \
                 train drivers in eco-driving to save about {:.0} kgCO2e per year",
                ctx.share(&MOBILITY) * 100.0,
                ctx.potential(&MOBILITY)
            )
        },
    },
    RecommendationRule {
        id: "travel_policy",
        applies: |ctx| ctx.share(&FLIGHTS) > FLIGHTS_SHARE,
        impact: |ctx| ctx.potential(&FLIGHTS),
        message: |ctx| {
            format!(
                "Flights are {:.0}% of emissions: favour video conferencing and set a travel \
                 policy to save about {:.0} kgCO2e per year",
                ctx.share(&FLIGHTS) * 100.0,
                ctx.potential(&FLIGHTS)
            )
        },
    },
    RecommendationRule {
        id: "rail_instead_of_domestic_flights",
        applies: |ctx| ctx.emissions(Category::DomesticFlights) > 0.0,
        impact: |ctx| ctx.emissions(Category::DomesticFlights) * RAIL_SHIFT_SAVING,
        message: |ctx| {
            format!(
                "Replace domestic flights with rail where possible to save up to {:.0} \
                 kgCO2e per year",
                ctx.emissions(Category::DomesticFlights) * RAIL_SHIFT_SAVING
            )
        },
    },
    RecommendationRule {
        id: "sustainable_purchasing",
        applies: |ctx| ctx.share(&[Category::Purchases]) > PURCHASES_SHARE,
        impact: |ctx| ctx.potential(&[Category::Purchases]),
        message: |ctx| {
            format!(
                "Purchases are {:.0}% of emissions: add carbon criteria to supplier selection \
                 to save about {:.0} kgCO2e per year",
                ctx.share(&[Category::Purchases]) * 100.0,
                ctx.potential(&[Category::Purchases])
            )
        },
    },
    RecommendationRule {
        id: "local_sourcing",
        applies: |ctx| {
            ctx.emissions(Category::Purchases) > 0.0
                && ctx.input.purchasing.local_share_pct < LOCAL_SHARE_PCT
        },
        impact: |ctx| ctx.emissions(Category::Purchases) * LOCAL_SOURCING_SAVING,
        message: |ctx| {
            format!(
                "Only {:.0}% of purchases are local: sourcing more locally would save about \
                 {:.0} kgCO2e per year",
                ctx.input.purchasing.local_share_pct,
                ctx.emissions(Category::Purchases) * LOCAL_SOURCING_SAVING
            )
        },
    },
    RecommendationRule {
        id: "close_gap_to_sector_average",
        applies: |ctx| ctx.position == BenchmarkPosition::BelowAverage,
        impact: gap_to_average,
        message: |ctx| {
            format!(
                "Emissions per employee are {:.0} kgCO2e against a sector average of {:.0}: \
                 closing the gap would avoid about {:.0} kgCO2e per year",
                ctx.intensity_per_employee,
                ctx.benchmark.average,
                gap_to_average(ctx)
            )
        },
    },
    RecommendationRule {
        id: "certification",
        applies: |ctx| ctx.total > 0.0 && ctx.position == BenchmarkPosition::TopQuartile,
        impact: |_| 0.0,
        message: |_| {
            "Performance is in the top quartile of the sector: consider a low-carbon \
             certification and publish the results"
                .to_string()
        },
    },
    RecommendationRule {
        id: "monitoring",
        applies: |_| true,
        impact: |_| 0.0,
        message: |_| {
            "Track emissions yearly against the same reference data to measure progress"
                .to_string()
        },
    },
];

fn gap_to_average(ctx: &RuleContext) -> f64 {
    ((ctx.intensity_per_employee - ctx.benchmark.average) * ctx.headcount).max(0.0)
}

/// Every applicable rule, highest impact first
pub fn evaluate(ctx: &RuleContext) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| Recommendation {
            rule_id: rule.id,
            message: (rule.message)(ctx),
            impact_kg: (rule.impact)(ctx),
        })
        .collect();

    // sort_by is stable, so equal impacts keep declaration order
    recommendations.sort_by(|a, b| b.impact_kg.total_cmp(&a.impact_kg));
    log::debug!(
        "{} recommendation rule(s) applied: {:?}",
        recommendations.len(),
        recommendations.iter().map(|r| r.rule_id).collect::<Vec<_>>()
    );
    recommendations
}

pub fn recommend(ctx: &RuleContext) -> Vec<String> {
    evaluate(ctx).into_iter().map(|r| r.message).collect()
}
