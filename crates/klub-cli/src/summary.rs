use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use klub_model::{ImportReport, RowStatus};
use klub_reconcile::{DiscoveredTable, ProposalSummary};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

pub fn print_report(report: &ImportReport) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Created"),
        header_cell("Updated"),
        header_cell("Skipped"),
        header_cell("Errors"),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(report.created, Color::Green),
        count_cell(report.updated, Color::Blue),
        count_cell(report.skipped, Color::Yellow),
        count_cell(report.error_count(), Color::Red),
    ]);
    println!("{table}");

    // Rows that did not land as written, with the reason.
    let noteworthy: Vec<_> = report
        .outcomes
        .iter()
        .filter(|outcome| !matches!(outcome.status, RowStatus::Created | RowStatus::Updated))
        .collect();
    if noteworthy.is_empty() {
        return;
    }
    let mut rows = base_table();
    rows.set_header(vec![
        header_cell("Row"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    align_column(&mut rows, 0, CellAlignment::Right);
    for outcome in noteworthy {
        let (status, detail) = match &outcome.status {
            RowStatus::Skipped(reason) => (Cell::new("skipped").fg(Color::Yellow), reason.clone()),
            RowStatus::Error(messages) => {
                (Cell::new("error").fg(Color::Red), messages.join("; "))
            }
            RowStatus::Created | RowStatus::Updated => continue,
        };
        rows.add_row(vec![Cell::new(outcome.row_index), status, Cell::new(detail)]);
    }
    println!("{rows}");
}

pub fn print_proposal(proposal: &ProposalSummary) {
    println!(
        "Proposed mapping for '{}' ({}):",
        proposal.table, proposal.entity
    );
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Canonical column"),
        header_cell("Source column"),
        header_cell("Confidence"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for field in &proposal.fields {
        let percent = (field.confidence * 100.0).round() as u32;
        let confidence = if field.confidence < 0.8 {
            Cell::new(format!("{percent}%")).fg(Color::Yellow)
        } else {
            Cell::new(format!("{percent}%"))
        };
        table.add_row(vec![
            Cell::new(&field.canonical),
            Cell::new(&field.source),
            confidence,
        ]);
    }
    println!("{table}");
    if !proposal.missing_required.is_empty() {
        println!("Missing required columns: {}", proposal.missing_required.join(", "));
    }
    if !proposal.unclaimed.is_empty() {
        println!("Unmapped source columns: {}", proposal.unclaimed.join(", "));
    }
}

pub fn print_discovered(tables: &[DiscoveredTable]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Entity"),
        header_cell("Rows"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for discovered in tables {
        let entity = match discovered.entity {
            Some(entity) => Cell::new(entity.as_str()),
            None => Cell::new("ambiguous").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&discovered.name),
            entity,
            Cell::new(discovered.rows),
        ]);
    }
    println!("{table}");
}
