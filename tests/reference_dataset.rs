//! Loading reference datasets from TOML, directly and through configuration.

use carbonscore::config::load_config_from;
use carbonscore::reference::{load_dataset, ADEME_V17};
use carbonscore::{ActivityInput, CarbonError, Category, CompanyProfile, Engine, Unit};
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const DATASET: &str = indoc! {r#"
    version = "Internal factors 2025"

    [[factors]]
    category = "electricity"
    unit = "kWh"
    value = 0.1

    [[factors]]
    category = "gas"
    unit = "kWh"
    value = 0.2

    [[factors]]
    category = "fuel"
    unit = "L"
    value = 3.0

    [[factors]]
    category = "vehicles"
    unit = "km"
    value = 0.2

    [[factors]]
    category = "domestic_flights"
    unit = "passenger.km"
    value = 0.25

    [[factors]]
    category = "international_flights"
    unit = "passenger.km"
    value = 0.2
    source = "DEFRA 2024"

    [[factors]]
    category = "purchases"
    unit = "EUR"
    value = 0.5

    [scopes]
    electricity = "scope2"
    gas = "scope1"
    fuel = "scope1"
    vehicles = "scope1"
    domestic_flights = "scope3"
    international_flights = "scope3"
    purchases = "scope3"

    [[sectors]]
    sector = "bakery"
    label = "Bakeries"
    average = 4000.0
    top_quartile = 2500.0

    [global_benchmark]
    average = 8000.0
    top_quartile = 5000.0
"#};

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_complete_dataset() {
    let dir = TempDir::new().unwrap();
    let tables = load_dataset(&write(&dir, "reference.toml", DATASET)).unwrap();

    assert_eq!(tables.version(), "Internal factors 2025");
    assert_eq!(tables.factors().len(), 7);
    let flights = tables
        .factors()
        .factor_for(Category::InternationalFlights, Unit::PassengerKm)
        .unwrap();
    assert_eq!(flights.source, "DEFRA 2024");
    let electricity = tables
        .factors()
        .factor_for(Category::Electricity, Unit::Kwh)
        .unwrap();
    assert_eq!(electricity.source, "Internal factors 2025");
    assert!(tables.benchmarks().get("bakery").is_some());
    assert!(tables.benchmarks().get("services").is_none());
}

#[test]
fn test_incomplete_dataset_is_rejected() {
    let dir = TempDir::new().unwrap();
    let without_purchases = DATASET.replace("purchases = \"scope3\"\n", "");
    let err = load_dataset(&write(&dir, "reference.toml", &without_purchases)).unwrap_err();
    assert!(matches!(err, CarbonError::UnknownCategory { .. }));
    assert!(err.is_reference_defect());
}

#[test]
fn test_inverted_benchmark_is_rejected() {
    let dir = TempDir::new().unwrap();
    let inverted = DATASET.replace("top_quartile = 2500.0", "top_quartile = 4500.0");
    let err = load_dataset(&write(&dir, "reference.toml", &inverted)).unwrap_err();
    assert!(matches!(err, CarbonError::InvalidReferenceData { .. }));
}

#[test]
fn test_config_dataset_path_is_relative_to_config_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "reference.toml", DATASET);
    let config_path = write(
        &dir,
        ".carbonscore.toml",
        indoc! {r#"
            [reference]
            dataset = "reference.toml"
        "#},
    );

    let config = load_config_from(&config_path).unwrap();
    let engine = Engine::from_config(config).unwrap();

    let mut input = ActivityInput::new(CompanyProfile::new("Fournil", "bakery", "1-9"));
    input.energy.electricity_kwh = 10_000.0;
    let result = engine.calculate(&input).unwrap();
    assert_eq!(result.reference_version, "Internal factors 2025");
    assert_eq!(result.total_co2e, 1_000.0);
    assert_eq!(result.peer_comparison.sector_average, 4_000.0);
}

#[test]
fn test_builtin_tables_without_dataset() {
    let engine = Engine::from_config(Default::default()).unwrap();
    assert_eq!(engine.reference().snapshot().version(), ADEME_V17);
}

#[test]
fn test_missing_dataset_file_fails_engine_creation() {
    let dir = TempDir::new().unwrap();
    let mut config = carbonscore::EngineConfig::default();
    config.reference.dataset = Some(dir.path().join("absent.toml"));
    let err = Engine::from_config(config).unwrap_err();
    assert!(matches!(err, CarbonError::Io { .. }));
}
