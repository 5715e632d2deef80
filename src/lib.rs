//! Greenhouse-gas footprint calculation and sector benchmarking.
//!
//! Activity data for one company ([`ActivityInput`]) goes through the
//! [`Engine`] and comes out as a complete [`EmissionResult`]: totals per GHG
//! Protocol scope, a per-category breakdown, intensities, the sector
//! benchmark position, an efficiency score and grade, reduction potential,
//! ordered recommendations and physical equivalents.
//!
//! ```no_run
//! use carbonscore::{ActivityInput, CompanyProfile, Engine, EngineConfig};
//!
//! let mut input = ActivityInput::new(CompanyProfile::new("Acme", "services", "10-49"));
//! input.energy.electricity_kwh = 42_000.0;
//!
//! let engine = Engine::with_builtin(EngineConfig::default());
//! let result = engine.calculate(&input)?;
//! println!("{:.1} kgCO2e, grade {}", result.total_co2e, result.sustainability_grade);
//! # Ok::<(), carbonscore::CarbonError>(())
//! ```

pub mod advisories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod io;
pub mod reference;

pub use crate::advisories::{review, InputReview};
pub use crate::config::{load_config, load_config_from, EngineConfig, UnknownSectorPolicy};
pub use crate::core::{
    ActivityInput, BenchmarkPosition, Category, CategoryEmission, CompanyProfile, EmissionResult,
    Grade, Scope, Unit,
};
pub use crate::engine::{calculate_with, Engine};
pub use crate::errors::{CarbonError, ErrorCode};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::reference::{ReferenceHandle, ReferenceTables};
