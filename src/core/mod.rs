//! Core data model: activity input and calculation result types.

pub mod input;
pub mod types;

pub use input::{ActivityInput, CompanyProfile, EnergyUse, Purchasing, TransportUse};
pub use types::{
    BenchmarkPosition, BenchmarkSource, Category, CategoryEmission, EmissionResult,
    EquivalenceMetrics, Grade, PeerComparison, Scope, Unit,
};
