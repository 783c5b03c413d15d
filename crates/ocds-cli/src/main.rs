//! OCDS CSV mapper CLI.

use clap::{ColorChoice, Parser};
use ocds_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_convert, run_export, run_mappings, run_templates};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let data_dir = cli.data_dir.as_deref();
    let exit_code = match &cli.command {
        Command::Convert(args) => match run_convert(args, data_dir) {
            Ok(summary) => {
                print_summary(&summary);
                i32::from(args.deny_warnings && summary.has_warnings())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Export(args) => match run_export(args, data_dir) {
            Ok(summary) => {
                print_summary(&summary);
                i32::from(args.deny_warnings && summary.has_warnings())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Templates(args) => match run_templates(args, data_dir) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Mappings(args) => match run_mappings(args, data_dir) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
