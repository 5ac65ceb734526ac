//! Food database builder CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use food_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use food_cli::commands::{run_generate, run_migrate, run_stats};
use food_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod summary;

use crate::summary::{print_run_summary, print_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Migrate(args) => report_run(run_migrate(args)),
        Command::Generate(args) => report_run(run_generate(args)),
        Command::Stats(args) => match run_stats(args) {
            Ok(stats) => {
                print_stats(&args.database, &stats);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn report_run(result: anyhow::Result<food_cli::types::RunResult>) -> i32 {
    match result {
        Ok(result) => {
            print_run_summary(&result);
            i32::from(result.has_errors)
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Explicit `--log-level` beats `-v/-q`, which beat `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level(cli.verbosity.tracing_level_filter())
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
