//! Club records CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use klub_cli::logging::{LogConfig, LogFormat, init_logging};
use klub_model::ImportReport;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LegacyCommand, LogFormatArg};
use crate::commands::{
    run_export, run_import, run_legacy_list, run_legacy_migrate, run_legacy_register, run_template,
};
use crate::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Import(args) => match run_import(&cli.store, args) {
            Ok(report) => {
                if args.json {
                    print_json_report(&report)
                } else {
                    print_report(&report);
                    i32::from(!report.is_clean())
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Template(args) => fallible(run_template(args)),
        Command::Export(args) => fallible(run_export(&cli.store, args)),
        Command::Legacy(command) => match command {
            LegacyCommand::List => fallible(run_legacy_list(&cli.store)),
            LegacyCommand::Register(args) => fallible(run_legacy_register(&cli.store, args)),
            LegacyCommand::Migrate(args) => match run_legacy_migrate(&cli.store, args) {
                Ok(Some(report)) => {
                    print_report(&report);
                    i32::from(!report.is_clean())
                }
                Ok(None) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            },
        },
    };
    std::process::exit(exit_code);
}

fn fallible(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn print_json_report(report: &ImportReport) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{json}");
            i32::from(!report.is_clean())
        }
        Err(error) => {
            eprintln!("error: serialize report: {error}");
            1
        }
    }
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
