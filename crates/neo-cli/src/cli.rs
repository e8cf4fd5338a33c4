//! CLI argument definitions for the NEO explorer.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "neo-explorer",
    version,
    about = "Explore close approaches of near-Earth objects",
    long_about = "Load near-Earth objects and their close approaches, inspect\n\
                  individual objects, and query approaches by date, distance,\n\
                  velocity, diameter, and hazard filters.\n\
                  Query results print as a table or write to CSV/JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the CSV file of near-Earth objects.
    #[arg(
        long = "neofile",
        value_name = "PATH",
        default_value = "data/neos.csv",
        global = true
    )]
    pub neofile: PathBuf,

    /// Path to the JSON file of close approaches.
    #[arg(
        long = "cadfile",
        value_name = "PATH",
        default_value = "data/cad.json",
        global = true
    )]
    pub cadfile: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect a single near-Earth object by designation or name.
    Inspect(InspectArgs),

    /// Query close approaches with optional filters.
    Query(QueryArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Primary designation of the object to inspect.
    #[arg(
        long = "pdes",
        value_name = "DESIGNATION",
        required_unless_present = "name",
        conflicts_with = "name"
    )]
    pub pdes: Option<String>,

    /// IAU name of the object to inspect.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Also list every known close approach of the object.
    #[arg(long = "approaches")]
    pub approaches: bool,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Only match approaches on this date (YYYY-MM-DD).
    #[arg(
        long = "date",
        value_name = "DATE",
        conflicts_with_all = ["start_date", "end_date"]
    )]
    pub date: Option<NaiveDate>,

    /// Only match approaches on or after this date (YYYY-MM-DD).
    #[arg(long = "start-date", value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Only match approaches on or before this date (YYYY-MM-DD).
    #[arg(long = "end-date", value_name = "DATE")]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in astronomical units.
    #[arg(long = "min-distance", value_name = "AU")]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in astronomical units.
    #[arg(long = "max-distance", value_name = "AU")]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in kilometers per second.
    #[arg(long = "min-velocity", value_name = "KM_S")]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in kilometers per second.
    #[arg(long = "max-velocity", value_name = "KM_S")]
    pub max_velocity: Option<f64>,

    /// Minimum object diameter in kilometers.
    #[arg(long = "min-diameter", value_name = "KM")]
    pub min_diameter: Option<f64>,

    /// Maximum object diameter in kilometers.
    #[arg(long = "max-diameter", value_name = "KM")]
    pub max_diameter: Option<f64>,

    /// Only match approaches of potentially hazardous objects.
    #[arg(long = "hazardous", conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only match approaches of objects not flagged as hazardous.
    #[arg(long = "not-hazardous")]
    pub not_hazardous: bool,

    /// Maximum number of results (default 10 when printing, unlimited when
    /// writing to a file).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Write results to this file (.csv or .json) instead of printing.
    #[arg(long = "outfile", value_name = "PATH")]
    pub outfile: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
