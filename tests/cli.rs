//! Integration tests for the carbonscore binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INPUT: &str = indoc! {r#"
    {
      "company": {
        "name": "Atelier Durand",
        "sector": "manufacturing",
        "employee_band": "10-49",
        "annual_revenue": 2500000
      },
      "energy": {"electricity_kwh": 180000, "gas_kwh": 95000, "fuel_liters": 4000},
      "transport": {"vehicle_km": 60000, "domestic_flight_km": 8000},
      "purchasing": {"annual_spend_eur": 350000, "local_share_pct": 25}
    }
"#};

fn carbonscore(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_carbonscore"));
    cmd.current_dir(dir).env_remove("CARBONSCORE_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_calculate_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", INPUT);

    let output = carbonscore(dir.path())
        .args(["calculate", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["company_name"], "Atelier Durand");
    assert_eq!(json["reference_version"], "ADEME Base Carbone v17");
    assert!(json["total_co2e"].as_f64().unwrap() > 0.0);
    assert!(json["intensity_per_revenue"].as_f64().is_some());
    assert!(!json["recommendations"].as_array().unwrap().is_empty());
    assert_eq!(json["breakdown"].as_object().unwrap().len(), 7);
}

#[test]
fn test_calculate_terminal_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", INPUT);
    let report = dir.path().join("report.txt");

    carbonscore(dir.path())
        .arg("calculate")
        .arg(&input)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let text = fs::read_to_string(report).unwrap();
    assert!(text.contains("Carbon footprint: Atelier Durand"));
    assert!(text.contains("Recommendations"));
    assert!(!text.contains("\u{1b}["), "file output must not contain colour codes");
}

#[test]
fn test_invalid_input_exits_with_code_2() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", &INPUT.replace("4000", "-4000"));

    let assert = carbonscore(dir.path())
        .arg("calculate")
        .arg(&input)
        .assert()
        .code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("energy.fuel_liters"));
}

#[test]
fn test_malformed_json_exits_with_code_2() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", "{ not json");
    carbonscore(dir.path())
        .arg("calculate")
        .arg(&input)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_sector_exits_with_code_3() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", &INPUT.replace("manufacturing", "mining"));
    carbonscore(dir.path())
        .arg("calculate")
        .arg(&input)
        .assert()
        .code(3);
}

#[test]
fn test_discovered_config_enables_fallback() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", &INPUT.replace("manufacturing", "mining"));
    write(
        &dir,
        ".carbonscore.toml",
        indoc! {r#"
            [benchmark]
            unknown_sector = "global_default"
        "#},
    );

    let output = carbonscore(dir.path())
        .args(["calculate", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["peer_comparison"]["benchmark_source"], "global_default");
}

#[test]
fn test_explicit_invalid_config_exits_with_code_3() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.json", INPUT);
    let config = write(
        &dir,
        "strict.toml",
        indoc! {r#"
            [benchmark]
            at_average_tolerance = 1.5
        "#},
    );
    carbonscore(dir.path())
        .arg("calculate")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3);
}

#[test]
fn test_batch_reports_each_element() {
    let dir = TempDir::new().unwrap();
    let bad = INPUT.replace("10-49", "a few");
    let inputs = write(&dir, "inputs.json", &format!("[{INPUT}, {bad}]"));

    let output = carbonscore(dir.path())
        .arg("batch")
        .arg(&inputs)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["ok"]["company_name"], "Atelier Durand");
    assert_eq!(entries[1]["error"]["code"], "E030");
    assert_eq!(entries[1]["error"]["category"], "Input");
}

#[test]
fn test_validate_prints_review() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "input.json",
        r#"{"company": {"name": "Quiet", "sector": "services", "employee_band": "1-9"}}"#,
    );
    let assert = carbonscore(dir.path())
        .arg("validate")
        .arg(&input)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("is valid"));
    assert!(stdout.contains("warning:"));
}

#[test]
fn test_factors_json_lists_every_category() {
    let dir = TempDir::new().unwrap();
    let output = carbonscore(dir.path())
        .args(["factors", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 7);
}

#[test]
fn test_sectors_table() {
    let dir = TempDir::new().unwrap();
    let assert = carbonscore(dir.path()).arg("sectors").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for sector in ["manufacturing", "services", "technology", "global"] {
        assert!(stdout.contains(sector), "missing {sector}");
    }
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    carbonscore(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".carbonscore.toml").exists());
    carbonscore(dir.path()).arg("init").assert().code(1);
    carbonscore(dir.path()).args(["init", "--force"]).assert().success();
}
