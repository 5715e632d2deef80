use super::build_engine;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, CellAlignment, Table};
use std::path::Path;

pub fn list_factors(config: Option<&Path>, json: bool) -> Result<()> {
    let tables = build_engine(config)?.reference().snapshot();
    let factors: Vec<_> = tables.factors().iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&factors)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Category", "Unit", "kgCO2e / unit", "Source"]);
    for factor in factors {
        table.add_row(vec![
            factor.category.key().to_string(),
            factor.unit.to_string(),
            factor.value.to_string(),
            factor.source.clone(),
        ]);
    }
    align_right(&mut table, 2);
    println!("{}", tables.version());
    println!("{table}");
    Ok(())
}

pub fn list_sectors(config: Option<&Path>, json: bool) -> Result<()> {
    let tables = build_engine(config)?.reference().snapshot();
    let benchmarks = tables.benchmarks();

    if json {
        let mut all: Vec<_> = benchmarks.iter().collect();
        all.push(benchmarks.global_default());
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Sector",
        "Label",
        "Average (kg/employee)",
        "Top quartile (kg/employee)",
    ]);
    for benchmark in benchmarks.iter().chain(std::iter::once(benchmarks.global_default())) {
        table.add_row(vec![
            benchmark.sector.clone(),
            benchmark.label.clone(),
            format!("{:.0}", benchmark.average),
            format!("{:.0}", benchmark.top_quartile),
        ]);
    }
    align_right(&mut table, 2);
    align_right(&mut table, 3);
    println!("{table}");
    Ok(())
}

fn align_right(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}
