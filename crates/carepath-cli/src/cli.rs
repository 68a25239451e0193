//! CLI argument definitions for the carepath demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use carepath_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "carepath",
    version,
    about = "Care-pathway demo: patient, family and doctor views of a referral journey",
    long_about = "Drive the care-pathway demo from the terminal.\n\n\
                  Jump to a tour scene, play a script of user actions against the \
                  virtual clock, inspect the routing and journey tables, or ask the \
                  summarizer to explain a medical record."
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

    /// Allow patient names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML configuration file with `[ai]` and `[tour]` sections.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Jump to a demo scene (1-6) and show the resulting screen.
    Tour(TourArgs),

    /// Start logged out and play a script of steps.
    Play(PlayArgs),

    /// Print the screen every persona sees for every tab.
    Routes,

    /// Print the journey transition table.
    Journey,

    /// Explain a medical record in plain language.
    Explain(RecordArgs),

    /// Recommend a community clinic for a record's follow-up treatment.
    Recommend(RecordArgs),

    /// Print the demo data tables.
    Fixtures,
}

#[derive(Parser)]
pub struct TourArgs {
    /// Scene number (1-6) or label, e.g. `3` or `报告`.
    #[arg(value_name = "SCENE")]
    pub scene: String,
}

#[derive(Parser)]
pub struct PlayArgs {
    /// Steps such as `scene:2 bind book confirm checkup pay wait:2000 accept`.
    #[arg(value_name = "STEP", required = true)]
    pub steps: Vec<String>,

    /// Only print the final screen.
    #[arg(long = "quiet-steps")]
    pub quiet_steps: bool,
}

#[derive(Parser)]
pub struct RecordArgs {
    /// Record id, e.g. `rec1`.
    #[arg(value_name = "RECORD_ID")]
    pub record_id: String,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
