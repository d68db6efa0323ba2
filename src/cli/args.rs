use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::PollutantKind;

#[derive(Parser)]
#[command(name = "airq-processor")]
#[command(about = "Multi-station air-quality aggregation pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,
}

/// Selection shared by every aggregate command. Dates default to the
/// dataset's covered range when omitted.
#[derive(Args)]
pub struct Selection {
    #[arg(short, long, help = "Input measurement CSV file")]
    pub data: PathBuf,

    #[arg(short, long, help = "Pollutant selector (e.g. PM2.5, O3)")]
    pub pollutant: PollutantKind,

    #[arg(long, help = "Inclusive start date (YYYY-MM-DD) [default: dataset start]")]
    pub start: Option<NaiveDate>,

    #[arg(long, help = "Inclusive end date (YYYY-MM-DD) [default: dataset end]")]
    pub end: Option<NaiveDate>,

    #[arg(short, long, help = "Restrict to one station")]
    pub station: Option<String>,

    #[arg(long, help = "Emit JSON instead of text")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the dataset: stations, covered range, pollutant coverage
    Info {
        #[arg(short, long, help = "Input measurement CSV file")]
        data: PathBuf,
    },

    /// Per-station line series for one pollutant over a date range
    Series {
        #[command(flatten)]
        selection: Selection,
    },

    /// Per-time-of-day max/min concentrations with owning station
    Trends {
        #[command(flatten)]
        selection: Selection,
    },

    /// Heatmap points and viewport centroid for one pollutant
    Heatmap {
        #[command(flatten)]
        selection: Selection,
    },
}
