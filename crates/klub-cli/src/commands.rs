use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use klub_export::{
    export_attendance, export_competitions, export_members, export_results, template,
};
use klub_ingest::read_table;
use klub_model::{
    AttendanceField, CompetitionField, ImportReport, MemberField, ResultField,
};
use klub_reconcile::{
    ConflictPolicy, ImportMode, discover_legacy_tables, import_file, migrate, propose_migration,
};
use klub_store::{RawTable, load_store, save_store};

use crate::cli::{
    EntityArg, ExportArgs, ImportArgs, LegacyMigrateArgs, LegacyRegisterArgs, TemplateArgs,
};
use crate::summary::{print_discovered, print_proposal};

pub fn run_import(store_path: &Path, args: &ImportArgs) -> Result<ImportReport> {
    let mut store = load_store(store_path).context("load store")?;
    let mode = if args.dry_run {
        ImportMode::DryRun
    } else {
        ImportMode::Commit
    };
    let policy = if args.merge {
        ConflictPolicy::Merge
    } else {
        ConflictPolicy::Skip
    };
    let report = import_file(&mut store, args.entity.into(), &args.file, mode, policy)?;
    if !args.dry_run {
        save_store(store_path, &store).context("save store")?;
    }
    Ok(report)
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let csv = match args.entity {
        EntityArg::Competitions => template::<CompetitionField>()?,
        EntityArg::Results => template::<ResultField>()?,
        EntityArg::Members => template::<MemberField>()?,
        EntityArg::Attendance => template::<AttendanceField>()?,
    };
    write_document(args.output.as_deref(), &csv)
}

pub fn run_export(store_path: &Path, args: &ExportArgs) -> Result<()> {
    let store = load_store(store_path).context("load store")?;
    let csv = match args.entity {
        EntityArg::Competitions => export_competitions(&store)?,
        EntityArg::Results => export_results(&store)?,
        EntityArg::Members => export_members(&store)?,
        EntityArg::Attendance => export_attendance(&store)?,
    };
    write_document(args.output.as_deref(), &csv)
}

fn write_document(output: Option<&Path>, csv: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, csv).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "document written");
        }
        None => print!("{csv}"),
    }
    Ok(())
}

pub fn run_legacy_list(store_path: &Path) -> Result<()> {
    let store = load_store(store_path).context("load store")?;
    let tables = discover_legacy_tables(&store)?;
    if tables.is_empty() {
        println!("No legacy tables registered.");
        return Ok(());
    }
    print_discovered(&tables);
    Ok(())
}

pub fn run_legacy_register(store_path: &Path, args: &LegacyRegisterArgs) -> Result<()> {
    let mut store = load_store(store_path).context("load store")?;
    let table = read_table(&args.file)?;
    let rows = table.rows.len();
    store.register_legacy_table(RawTable {
        name: args.name.clone(),
        columns: table.headers,
        rows: table.rows,
    });
    save_store(store_path, &store).context("save store")?;
    println!("Registered '{}' ({rows} rows).", args.name);
    Ok(())
}

/// Returns the migration report, or `None` when the proposal was printed
/// but not confirmed.
pub fn run_legacy_migrate(
    store_path: &Path,
    args: &LegacyMigrateArgs,
) -> Result<Option<ImportReport>> {
    let mut store = load_store(store_path).context("load store")?;
    let proposal = propose_migration(&store, &args.name)?;
    print_proposal(&proposal);
    if !proposal.missing_required.is_empty() {
        bail!(
            "table '{}' is missing required columns: {}",
            args.name,
            proposal.missing_required.join(", ")
        );
    }
    if !args.yes {
        println!("Re-run with --yes to migrate with this mapping.");
        return Ok(None);
    }
    let mode = if args.dry_run {
        ImportMode::DryRun
    } else {
        ImportMode::Commit
    };
    let report = migrate(&mut store, &args.name, mode)?;
    if !args.dry_run {
        save_store(store_path, &store).context("save store")?;
    }
    Ok(Some(report))
}
