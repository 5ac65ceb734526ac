//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "food-db",
    version,
    about = "Build the app's food database from nutrition CSV exports",
    long_about = "Build the app's JSON food database from nutrition CSV exports.\n\n\
                  Reads IFCT2017, Healthy Eating and RDA exports, normalizes them into\n\
                  food records and merges them into the database without duplicates."
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

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build every source with full details and merge into the database.
    Migrate(BuildArgs),

    /// Build a quick database with core nutrients and write it fresh.
    Generate(BuildArgs),

    /// Print statistics for an existing database.
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Source manifest (default: <DATA_DIR>/food-sources.toml if present).
    #[arg(long = "manifest", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Directory holding the CSV exports when no manifest is used.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Database document to write (overrides the manifest).
    #[arg(long = "database", alias = "output", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Date stamped on new records and the document (YYYY-MM-DD, default today).
    #[arg(long = "verified-on", value_name = "DATE")]
    pub verified_on: Option<NaiveDate>,

    /// Counter value of the first new id.
    #[arg(long = "first-id", value_name = "N")]
    pub first_id: Option<u32>,

    /// Build and report without writing the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Database document to summarize.
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
