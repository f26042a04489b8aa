use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutri_advisor_rs::cli::{Cli, ClockArgs, Command};
use nutri_advisor_rs::engine::advice::hydration_advice;
use nutri_advisor_rs::error::{AdvisorError, Result};
use nutri_advisor_rs::interface::{
    collect_request, display_advice_list, display_recommendation, prompt_yes_no,
};
use nutri_advisor_rs::models::AdviceRequest;
use nutri_advisor_rs::storage::{load_request, save_report, write_assessments_csv};
use nutri_advisor_rs::{generate_recommendation, AdviceClock, DailyRecommendation};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise warn, or debug with --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Report { clock, json, csv } => {
            cmd_report(&cli.input, &clock, json.as_deref(), csv.as_deref())
        }
        Command::Interactive { clock } => cmd_interactive(&clock),
        Command::Hydration { weight } => cmd_hydration(weight),
    }
}

/// Local clock with any command-line overrides applied.
fn resolve_clock(args: &ClockArgs) -> Result<AdviceClock> {
    let mut clock = AdviceClock::now();

    if let Some(hour) = args.hour {
        clock.hour = hour;
    }

    if let Some(date) = &args.date {
        clock.date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AdvisorError::InvalidDate(format!("{}: {}", date, e)))?;
    }

    Ok(clock)
}

fn build_report(request: &AdviceRequest, clock: &AdviceClock) -> Result<DailyRecommendation> {
    info!(date = %clock.date, hour = clock.hour, goal = %request.profile.goal, "building report");
    generate_recommendation(&request.actual, &request.target, &request.profile, clock)
}

/// Generate a report from the request file.
fn cmd_report(
    input: &Path,
    clock: &ClockArgs,
    json: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    if !input.exists() {
        eprintln!("Request file not found: {}", input.display());
        eprintln!("Create one with 'actual', 'target' and 'profile' sections, or run 'interactive'.");
        return Ok(());
    }

    let request = load_request(input)?;
    info!(path = %input.display(), "loaded request");

    let clock = resolve_clock(clock)?;
    let report = build_report(&request, &clock)?;

    display_recommendation(&report);

    if let Some(path) = json {
        save_report(path, &report)?;
        println!("Report saved to {}", path.display());
    }

    if let Some(path) = csv {
        write_assessments_csv(path, &report)?;
        println!("Assessments saved to {}", path.display());
    }

    Ok(())
}

/// Prompt for all inputs, then report.
fn cmd_interactive(clock: &ClockArgs) -> Result<()> {
    let clock = resolve_clock(clock)?;
    let request = collect_request()?;
    let report = build_report(&request, &clock)?;

    display_recommendation(&report);

    let save = prompt_yes_no("Save report as JSON?", false)?;
    if save {
        let path = format!("nutrition_report_{}.json", report.date);
        save_report(&path, &report)?;
        println!("Report saved to {}", path);
    }

    Ok(())
}

/// Hydration advice only.
fn cmd_hydration(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AdvisorError::InvalidArgument(format!(
            "weight must be a positive number, got {}",
            weight
        )));
    }

    display_advice_list("Hydration", &hydration_advice(weight));
    Ok(())
}
