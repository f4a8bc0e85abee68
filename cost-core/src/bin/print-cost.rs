//! Command-line front end for the print cost calculator.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cost_core::config::{CalculatorConfig, ComponentToggles};
use cost_core::cost::{CostComponent, CostEngine};
use cost_core::input::RawJobForm;
use cost_core::observability::{setup_logging, LogFormat};
use cost_core::reference::{ReferenceData, Voltage};
use cost_core::report::{
    accessory_spec_line, cost_rows, display_name, printer_spec_line, render_table, ExportSummary,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "print-cost", version, about = "Estimate the cost of a 3D print job")]
struct Cli {
    /// Calculator config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Printer/accessory reference table (TOML), overrides the config
    #[arg(long, global = true)]
    reference: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the cost breakdown for one job
    Calculate(CalculateArgs),
    /// List printers and their power figures
    Printers {
        /// Mains voltage used for the rated wattage column
        #[arg(long, value_parser = parse_voltage)]
        voltage: Option<Voltage>,
    },
    /// List accessories and their power figures
    Accessories,
}

#[derive(Args)]
struct CalculateArgs {
    #[arg(long)]
    printer: Option<String>,

    #[arg(long = "accessory")]
    accessories: Vec<String>,

    #[arg(long)]
    filament: Option<String>,

    #[arg(long)]
    hours: Option<String>,

    #[arg(long)]
    minutes: Option<String>,

    /// Material weight in grams
    #[arg(long)]
    weight: Option<String>,

    /// Filament price per kilogram
    #[arg(long)]
    filament_price: Option<String>,

    /// Electricity rate per kWh
    #[arg(long)]
    electricity_rate: Option<String>,

    /// Depreciation per hour; defaults to the printer price over 3000 hours
    #[arg(long)]
    depreciation: Option<String>,

    /// Maintenance per hour
    #[arg(long)]
    maintenance: Option<String>,

    /// Failure/waste rate in percent
    #[arg(long)]
    failure_rate: Option<String>,

    /// Labor rate per hour
    #[arg(long)]
    labor_rate: Option<String>,

    /// Hide a cost row (material, electricity, equipment, maintenance, labor)
    #[arg(long = "hide")]
    hidden: Vec<CostComponent>,

    /// Print the breakdown as JSON
    #[arg(long, conflicts_with = "export")]
    json: bool,

    /// Print the plain-text export summary
    #[arg(long)]
    export: bool,
}

impl CalculateArgs {
    fn into_form(self, config: &CalculatorConfig) -> RawJobForm {
        let or_default = |value: Option<String>, default: f64| {
            value.unwrap_or_else(|| default.to_string())
        };

        RawJobForm {
            printer: self.printer.unwrap_or_default(),
            accessories: self.accessories,
            filament: self.filament.unwrap_or_else(|| config.filament.to_string()),
            hours: self.hours.unwrap_or_default(),
            minutes: self.minutes.unwrap_or_default(),
            weight_grams: self.weight.unwrap_or_default(),
            filament_price_per_kg: or_default(self.filament_price, config.filament_price_per_kg),
            electricity_rate: or_default(self.electricity_rate, config.electricity_rate),
            depreciation_rate: self.depreciation.unwrap_or_default(),
            maintenance_rate: or_default(self.maintenance, config.maintenance_rate),
            failure_rate: or_default(self.failure_rate, config.failure_rate),
            labor_rate: or_default(self.labor_rate, config.labor_rate),
        }
    }
}

fn parse_voltage(value: &str) -> std::result::Result<Voltage, String> {
    match value.trim().to_ascii_uppercase().trim_end_matches('V') {
        "220" => Ok(Voltage::V220),
        "110" => Ok(Voltage::V110),
        _ => Err(format!("unsupported voltage: {}", value)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = if cli.json_logs { LogFormat::Json } else { LogFormat::Text };
    setup_logging("warn", format);

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let reference = match &cli.reference {
        Some(path) => ReferenceData::load(path)
            .with_context(|| format!("failed to load reference table {}", path.display()))?,
        None => config.reference_data().context("failed to load reference table")?,
    };

    match cli.command {
        Command::Calculate(args) => calculate(args, &config, reference),
        Command::Printers { voltage } => {
            let voltage = voltage.unwrap_or(config.voltage);
            for (id, profile) in &reference.printers {
                println!("{:<10} {}", display_name(id), printer_spec_line(Some(profile), voltage));
            }
            Ok(())
        }
        Command::Accessories => {
            for (id, profile) in &reference.accessories {
                println!("{:<10} {}", display_name(id), accessory_spec_line(profile));
            }
            Ok(())
        }
    }
}

/// Configured row visibility with every `--hide` component switched off.
fn display_toggles(config: &CalculatorConfig, hidden: &[CostComponent]) -> ComponentToggles {
    let mut toggles = config.display;
    for component in hidden {
        toggles.set(*component, false);
    }
    toggles
}

fn calculate(args: CalculateArgs, config: &CalculatorConfig, reference: ReferenceData) -> Result<()> {
    let toggles = display_toggles(config, &args.hidden);
    let (json, export) = (args.json, args.export);

    let input = args
        .into_form(config)
        .into_job_input(&reference)
        .context("invalid job parameters")?;
    debug!(?input, "Calculating");

    let engine = CostEngine::new(reference);
    let breakdown = engine.compute(&input);

    if json {
        let output = json!({
            "input": input,
            "rows": cost_rows(&breakdown, &toggles),
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if export {
        println!(
            "{}",
            ExportSummary::generated_today(&input, &breakdown, &config.currency_symbol)
        );
    } else {
        let specs = printer_spec_line(
            input.printer.as_deref().and_then(|id| engine.reference().printer(id)),
            config.voltage,
        );
        println!("{}\n", specs);
        print!("{}", render_table(&breakdown, &toggles, &config.currency_symbol));
    }

    Ok(())
}
