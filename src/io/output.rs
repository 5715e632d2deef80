use crate::core::{BenchmarkPosition, EmissionResult, Grade, Scope};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &EmissionResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_summary(result)?;
        self.write_breakdown(result)?;
        self.write_benchmark(result)?;
        self.write_recommendations(result)?;
        self.write_equivalences(result)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        let title = format!("Carbon footprint: {}", result.company_name);
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(
            self.writer,
            "Sector: {}   Reference: {}",
            result.sector, result.reference_version
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Summary".bold())?;
        writeln!(
            self.writer,
            "  Total: {} kgCO2e ({:.2} t)",
            format!("{:.2}", result.total_co2e).bold(),
            result.total_co2e / 1_000.0
        )?;
        for scope in Scope::ALL {
            writeln!(
                self.writer,
                "  {}: {:.2} kgCO2e",
                scope,
                result.scope_total(scope)
            )?;
        }
        writeln!(
            self.writer,
            "  Per employee: {:.1} kgCO2e",
            result.intensity_per_employee
        )?;
        if let Some(per_revenue) = result.intensity_per_revenue {
            writeln!(
                self.writer,
                "  Per euro of revenue: {:.5} kgCO2e",
                per_revenue
            )?;
        }
        writeln!(
            self.writer,
            "  Cost of carbon: {:.2} EUR",
            result.cost_of_carbon_eur
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Category", "Scope", "Quantity", "Factor", "kgCO2e", "Share",
            ]);
        for line in &result.lines {
            table.add_row(vec![
                Cell::new(line.category.label()),
                Cell::new(line.scope.label()),
                Cell::new(format!("{:.0} {}", line.quantity, line.unit))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{}", line.factor)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", line.co2e_kg_rounded))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}%", result.share_of(line.category) * 100.0))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_benchmark(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        let peers = &result.peer_comparison;
        writeln!(self.writer, "{}", "Benchmark".bold())?;
        writeln!(
            self.writer,
            "  Position: {}",
            colorize_position(result.benchmark_position)
        )?;
        writeln!(
            self.writer,
            "  Sector average: {:.0} kgCO2e/employee (top quartile {:.0})",
            peers.sector_average, peers.sector_top_quartile
        )?;
        writeln!(
            self.writer,
            "  Score: {:.1}/100   Grade: {}",
            result.carbon_efficiency_score,
            colorize_grade(result.sustainability_grade)
        )?;
        writeln!(
            self.writer,
            "  Reduction potential: {:.0} kgCO2e",
            result.total_reduction_potential()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Recommendations".bold())?;
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, recommendation)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_equivalences(&mut self, result: &EmissionResult) -> anyhow::Result<()> {
        let metrics = &result.equivalent_metrics;
        writeln!(self.writer, "{}", "Equivalent to".bold())?;
        writeln!(self.writer, "  {} trees absorbing CO2 for a year", metrics.trees)?;
        writeln!(
            self.writer,
            "  {:.1} cars driven for a year",
            metrics.vehicles_off_road
        )?;
        writeln!(
            self.writer,
            "  {:.1} household-years of energy",
            metrics.household_years
        )?;
        writeln!(
            self.writer,
            "  {:.1} Paris-New York flights",
            metrics.flights_paris_ny
        )?;
        Ok(())
    }
}

fn colorize_position(position: BenchmarkPosition) -> ColoredString {
    match position {
        BenchmarkPosition::TopQuartile | BenchmarkPosition::AboveAverage => {
            position.label().green()
        }
        BenchmarkPosition::AtAverage => position.label().yellow(),
        BenchmarkPosition::BelowAverage => position.label().red(),
    }
}

fn colorize_grade(grade: Grade) -> ColoredString {
    let letter = grade.to_string();
    match grade {
        Grade::A | Grade::B => letter.green().bold(),
        Grade::C | Grade::D => letter.yellow().bold(),
        Grade::E | Grade::F => letter.red().bold(),
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::{ActivityInput, CompanyProfile};
    use crate::engine::Engine;

    fn result() -> EmissionResult {
        let mut input = ActivityInput::new(CompanyProfile::new("Acme", "retail", "10-49"));
        input.energy.electricity_kwh = 40_000.0;
        input.transport.domestic_flight_km = 3_000.0;
        Engine::with_builtin(EngineConfig::default())
            .calculate(&input)
            .unwrap()
    }

    #[test]
    fn test_json_writer_emits_contract_fields() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_result(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        for field in [
            "total_co2e",
            "scope_1",
            "scope_2",
            "scope_3",
            "breakdown",
            "benchmark_position",
            "carbon_efficiency_score",
            "sustainability_grade",
            "reduction_potential",
            "recommendations",
            "equivalent_metrics",
            "cost_of_carbon",
            "trajectory",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert!(value.get("intensity_per_revenue").is_none());
        assert!(value.get("cost_of_carbon_eur").is_none());
        assert_eq!(value["benchmark_position"], "top_quartile");
    }

    #[test]
    fn test_terminal_writer_lists_recommendations() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_result(&result())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Carbon footprint: Acme"));
        assert!(text.contains("Domestic flights"));
        assert!(text.contains("Recommendations"));
        assert!(text.contains("1. "));
    }
}
