use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Prayer and iqamah time calculator.
#[derive(Parser)]
#[command(name = "praytimes", version, about = "Prayer and iqamah time calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Latitude in degrees, north positive.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Observer elevation in meters.
    #[arg(long, global = true)]
    pub elevation: Option<f64>,

    /// IANA timezone name, e.g. America/Vancouver.
    #[arg(short, long, global = true)]
    pub timezone: Option<String>,

    /// Calculation method (MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari).
    #[arg(short, long, global = true)]
    pub method: Option<String>,

    /// Output format: 24h, 12h or Float.
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print prayer and iqamah times for one day.
    Day(DayArgs),
    /// Print the prayer and iqamah table for a month.
    Month(MonthArgs),
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date as YYYY-MM-DD. Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year. Defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month number 1-12. Defaults to the current month.
    #[arg(long)]
    pub month: Option<u32>,
}
