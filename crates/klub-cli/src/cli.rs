//! CLI argument definitions for the club records tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use klub_reconcile::Entity;

#[derive(Parser)]
#[command(
    name = "klub",
    version,
    about = "Club records import and reconciliation",
    long_about = "Import competition, result, member and attendance spreadsheets\n\
                  into the club's record store, generate fill-in templates and\n\
                  exports, and migrate tables left behind by legacy tools."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the store file (created on first write).
    #[arg(long = "store", value_name = "PATH", default_value = "klub.json", global = true)]
    pub store: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV document and reconcile it against the store.
    Import(ImportArgs),

    /// Print the fill-in template for an entity.
    Template(TemplateArgs),

    /// Export stored records as a canonical CSV document.
    Export(ExportArgs),

    /// Inspect and migrate tables registered from legacy tools.
    #[command(subcommand)]
    Legacy(LegacyCommand),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Entity the document describes.
    #[arg(value_enum)]
    pub entity: EntityArg,

    /// Path of the CSV document.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Classify every row and report, but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Merge competition rows into existing records instead of skipping
    /// them. Blank fields are filled and new image paths appended; stored
    /// data is never overwritten.
    #[arg(long = "merge")]
    pub merge: bool,

    /// Print the import report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Entity to generate the template for.
    #[arg(value_enum)]
    pub entity: EntityArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Entity to export.
    #[arg(value_enum)]
    pub entity: EntityArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum LegacyCommand {
    /// List registered legacy tables and their classification.
    List,

    /// Register a raw legacy table from a CSV export.
    Register(LegacyRegisterArgs),

    /// Propose a column mapping for a legacy table and, once confirmed,
    /// migrate its rows through the normal import path.
    Migrate(LegacyMigrateArgs),
}

#[derive(Parser)]
pub struct LegacyRegisterArgs {
    /// Name the old tool used for the table.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path of the exported CSV.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct LegacyMigrateArgs {
    /// Registered table name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Accept the proposed mapping and migrate. Without this flag the
    /// proposal is printed and nothing is written.
    #[arg(long = "yes")]
    pub yes: bool,

    /// Classify every row and report, but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EntityArg {
    Competitions,
    Results,
    Members,
    Attendance,
}

impl From<EntityArg> for Entity {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::Competitions => Entity::Competitions,
            EntityArg::Results => Entity::Results,
            EntityArg::Members => Entity::Members,
            EntityArg::Attendance => Entity::Attendance,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
