//! CLI argument definitions for medkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use medkit_model::{ADULT_AGE, DEFAULT_MAX_BMI, DEFAULT_MIN_BMI};

#[derive(Parser)]
#[command(
    name = "medkit",
    version,
    about = "Batch jobs for patient records, medication dosages and BMI cohorts",
    long_about = "Batch jobs over tabular health data.\n\n\
                  clean: normalize, filter and deduplicate patient records (JSON).\n\
                  dosage: compute weight-based medication dosages (JSON).\n\
                  cohort: aggregate glucose and age by BMI range (CSV)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient names in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a JSON file of patient records.
    Clean(CleanArgs),

    /// Calculate medication dosages for a JSON file of patient records.
    Dosage(DosageArgs),

    /// Aggregate glucose and age by BMI range for a CSV table.
    Cohort(CohortArgs),

    /// List supported medications and their dosing factors.
    Medications,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the patient records (JSON array).
    #[arg(value_name = "PATIENTS_JSON")]
    pub input: PathBuf,

    /// Drop patients younger than this.
    #[arg(long = "min-age", default_value_t = ADULT_AGE)]
    pub min_age: u32,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DosageArgs {
    /// Path to the medication records (JSON array).
    #[arg(value_name = "MEDS_JSON")]
    pub input: PathBuf,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CohortArgs {
    /// Path to the patient table (CSV with BMI, Age and Glucose columns).
    #[arg(value_name = "PATIENTS_CSV")]
    pub input: PathBuf,

    /// Lowest plausible BMI (inclusive).
    #[arg(long = "min-bmi", default_value_t = DEFAULT_MIN_BMI)]
    pub min_bmi: f64,

    /// Highest plausible BMI (inclusive).
    #[arg(long = "max-bmi", default_value_t = DEFAULT_MAX_BMI)]
    pub max_bmi: f64,

    /// Write a Parquet snapshot of the input and analyze from it.
    #[arg(long = "snapshot", value_name = "PARQUET")]
    pub snapshot: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
