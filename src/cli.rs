use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutriAdvisor: daily nutrition scoring and advice from intake, targets and profile.
#[derive(Parser, Debug)]
#[command(name = "nutri_advisor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the request JSON file (actual intake, targets, profile).
    #[arg(short, long, default_value = "nutrition_day.json")]
    pub input: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Overrides for the clock a report is computed at.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ClockArgs {
    /// Hour of day (0-23) to compute advice for; defaults to now.
    #[arg(long)]
    pub hour: Option<u32>,

    /// Report date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a report from the request file.
    Report {
        #[command(flatten)]
        clock: ClockArgs,

        /// Also write the report as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also write the nutrient assessments as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Enter intake, targets and profile interactively.
    Interactive {
        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Show hydration advice for a body weight.
    Hydration {
        /// Body weight in kg.
        #[arg(long)]
        weight: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Report {
            clock: ClockArgs::default(),
            json: None,
            csv: None,
        }
    }
}
