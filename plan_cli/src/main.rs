//! # Floorplan CLI
//!
//! Command-line front end over `plan_core`.
//!
//! Usage:
//!   plan_cli generate <request.json> [--out <dir>] [--building-type <type>] [--verbose]
//!   plan_cli export <plan.json> [--out <file.dxf>] [--verbose]
//!   plan_cli analyze <plan.json> [--building-type <type>] [--verbose]
//!
//! A request file holds `terrain`, `requirements` and optional `regulations`,
//! `building_type` and `settings`. `export` and `analyze` accept either a
//! saved document or a bare plan.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{LevelFilter, Log, Metadata, Record};
use serde::Deserialize;

use plan_core::cad;
use plan_core::document::PlanDocument;
use plan_core::errors::{PlanError, PlanResult};
use plan_core::layout::{LayoutOutcome, LayoutRequest};
use plan_core::settings::Settings;
use plan_core::structural::{self, BuildingType, StructuralReport};

const PLAN_FILE: &str = "plan.json";
const DXF_FILE: &str = "plan.dxf";

/// Minimal stderr sink for the `log` facade
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Generate {
        input: PathBuf,
        out_dir: PathBuf,
        building_type: Option<String>,
    },
    Export {
        input: PathBuf,
        out: Option<PathBuf>,
    },
    Analyze {
        input: PathBuf,
        building_type: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    command: Command,
    verbose: bool,
}

/// Request file: a layout request plus optional analysis and engine settings.
#[derive(Debug, Deserialize)]
struct RequestFile {
    #[serde(flatten)]
    layout: LayoutRequest,
    #[serde(default)]
    building_type: Option<String>,
    #[serde(default)]
    settings: Settings,
}

fn print_usage() {
    eprintln!("Floorplan - plan generation, DXF export and beam pre-sizing");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  plan_cli generate <request.json> [--out <dir>] [--building-type <type>] [--verbose]");
    eprintln!("  plan_cli export <plan.json> [--out <file.dxf>] [--verbose]");
    eprintln!("  plan_cli analyze <plan.json> [--building-type <type>] [--verbose]");
    eprintln!();
    eprintln!("Building types: habitation (default), bureaux, commerce");
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let (subcommand, rest) = args.split_first().ok_or("missing command")?;
    let (input, options) = rest
        .split_first()
        .ok_or_else(|| format!("'{}' needs an input file", subcommand))?;

    let mut out: Option<PathBuf> = None;
    let mut building_type: Option<String> = None;
    let mut verbose = false;

    let mut i = 0;
    while i < options.len() {
        match options[i].as_str() {
            "--out" | "-o" => {
                let value = options.get(i + 1).ok_or("--out needs a value")?;
                out = Some(PathBuf::from(value));
                i += 1;
            }
            "--building-type" => {
                let value = options.get(i + 1).ok_or("--building-type needs a value")?;
                building_type = Some(value.clone());
                i += 1;
            }
            "--verbose" | "-v" => verbose = true,
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let input = PathBuf::from(input);
    let command = match subcommand.as_str() {
        "generate" => Command::Generate {
            input,
            out_dir: out.unwrap_or_else(|| PathBuf::from(".")),
            building_type,
        },
        "export" => Command::Export { input, out },
        "analyze" => Command::Analyze { input, building_type },
        other => return Err(format!("unknown command: {}", other)),
    };

    Ok(CliArgs { command, verbose })
}

fn read_request(path: &Path) -> PlanResult<RequestFile> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PlanError::file_error("read", path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| PlanError::SerializationError {
        reason: format!("Invalid request in {}: {}", path.display(), e),
    })
}

fn run(command: Command) -> PlanResult<()> {
    match command {
        Command::Generate {
            input,
            out_dir,
            building_type,
        } => {
            let request = read_request(&input)?;
            let building_type =
                BuildingType::from_keyword(building_type.as_deref().or(request.building_type.as_deref()));

            let generated =
                plan_core::generate_and_analyze_with(&request.layout, building_type, &request.settings)?;
            print_outcome(&generated.outcome);
            print_report(&generated.analysis);

            fs::create_dir_all(&out_dir).map_err(|e| {
                PlanError::file_error("create directory", out_dir.display().to_string(), e.to_string())
            })?;

            let dxf = cad::encode_with(&generated.outcome.plan, &request.settings.cad);
            plan_core::write_cad(&dxf, &out_dir.join(DXF_FILE))?;

            let mut doc = PlanDocument::new("", "", generated.outcome.plan).with_settings(request.settings);
            doc.set_analysis(generated.analysis);
            plan_core::save_document(&doc, &out_dir.join(PLAN_FILE))?;

            println!();
            println!("Written: {}", out_dir.join(PLAN_FILE).display());
            println!("Written: {}", out_dir.join(DXF_FILE).display());
            Ok(())
        }
        Command::Export { input, out } => {
            let plan = plan_core::read_plan(&input)?;
            let out = out.unwrap_or_else(|| input.with_extension("dxf"));
            plan_core::write_cad(&cad::encode(&plan), &out)?;
            println!("Written: {}", out.display());
            Ok(())
        }
        Command::Analyze { input, building_type } => {
            let plan = plan_core::read_plan(&input)?;
            let report = structural::analyze(&plan, BuildingType::from_keyword(building_type.as_deref()));
            print_report(&report);

            println!();
            println!("JSON Output:");
            let json = serde_json::to_string_pretty(&report).map_err(PlanError::serialization)?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn print_outcome(outcome: &LayoutOutcome) {
    println!("═══════════════════════════════════════");
    println!("  FLOOR PLAN");
    println!("═══════════════════════════════════════");
    println!();
    for room in &outcome.plan.rooms {
        println!(
            "  {:<14} {:>5.1} x {:<5.1} at ({:.1}, {:.1})  {:.1} m²",
            room.name,
            room.width,
            room.height,
            room.x,
            room.y,
            room.area()
        );
    }
    println!();
    println!("  Doors: {}   Windows: {}", outcome.plan.doors.len(), outcome.plan.windows.len());

    if let Some(metrics) = &outcome.plan.metrics {
        println!(
            "  Built area: {:.2} m² (target {:.1})   COS {:.2}   CUF {:.2}   {}",
            metrics.total_area,
            outcome.target_area,
            metrics.cos,
            metrics.cuf,
            status_icon(metrics.compliant)
        );
        if let Some(message) = &metrics.message {
            println!("  {}", message);
        }
    }

    if !outcome.is_complete() {
        println!();
        println!("  Not placed:");
        for request in &outcome.unplaced {
            println!("    {} ({:.1} m²)", request.name, request.area);
        }
    }
    println!();
}

fn print_report(report: &StructuralReport) {
    println!("═══════════════════════════════════════");
    println!(
        "  STRUCTURE ({}, {:.2} kN/m²)",
        report.building_type, report.total_surface_load
    );
    println!("═══════════════════════════════════════");
    println!();
    for element in &report.elements {
        println!(
            "  {:<20} L={:.2}m  M={:.2}kN·m  V={:.2}kN  δ={:.2}/{:.2}mm {}",
            element.element_id,
            element.span_m,
            element.moment_knm,
            element.shear_kn,
            element.deflection_mm,
            element.admissible_deflection_mm,
            status_icon(element.valid)
        );
        println!("    {}", element.message);
    }
    println!();
    println!("  {}", report.summary);
    let failing: Vec<&str> = report.failing().map(|e| e.element_id.as_str()).collect();
    if !failing.is_empty() {
        println!("  Revise: {}", failing.join(", "));
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || matches!(args[0].as_str(), "--help" | "-h") {
        print_usage();
        std::process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
