//! Engine configuration.
//!
//! Settings live in `.carbonscore.toml`. Every section is optional; omitted
//! values take the defaults below.
//!
//! ```toml
//! [benchmark]
//! unknown_sector = "reject"      # or "global_default"
//! at_average_tolerance = 0.10
//!
//! [pricing]
//! carbon_price_eur_per_tonne = 100.0
//!
//! [trajectory]
//! baseline_year = 2024
//! target_year = 2030
//! target_reduction = 0.55
//!
//! [reference]
//! dataset = "reference.toml"     # optional, replaces the built-in tables
//! ```

mod core;
mod loader;

pub use core::{
    default_at_average_tolerance, default_carbon_price, BenchmarkConfig, EngineConfig,
    PricingConfig, ReferenceConfig, TrajectoryConfig, UnknownSectorPolicy,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
