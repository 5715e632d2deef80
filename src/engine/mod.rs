//! The calculation pipeline.
//!
//! Data flows one way: activity quantities become classified emission lines,
//! lines become totals, totals become intensities, intensities are
//! benchmarked and scored, and the result is completed with reduction
//! potential, recommendations and equivalences.

pub mod benchmark;
pub mod efficiency;
pub mod emissions;
pub mod equivalence;
pub mod finance;
pub mod intensity;
pub mod orchestrator;
pub mod recommendations;
pub mod reduction;

pub use benchmark::{classify, BenchmarkEngine, BenchmarkOutcome};
pub use efficiency::{grade_for, EfficiencyScore, GRADE_THRESHOLDS};
pub use emissions::{aggregate, EmissionCalculator, EmissionTotals};
pub use equivalence::equivalences;
pub use intensity::Intensity;
pub use orchestrator::{calculate_with, Engine};
pub use recommendations::{Recommendation, RecommendationRule, RuleContext, RULES};
