use std::collections::{BTreeMap, BTreeSet};

use klub_map::ColumnHint;

/// Compute per-column statistics for tabular data, keyed by header text.
///
/// Used by the legacy adapter to lower confidence in mapping guesses that
/// disagree with the shape of the actual data (a "competition number"
/// column full of prose is probably not the competition number). Takes
/// headers and rows directly so raw legacy tables can be profiled too.
pub fn build_column_hints(
    headers: &[String],
    rows: &[Vec<String>],
) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = rows.len();
    for (column, header) in headers.iter().enumerate() {
        let mut filled = 0usize;
        let mut numeric = 0usize;
        let mut distinct = BTreeSet::new();
        for row in rows {
            let value = row.get(column).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                continue;
            }
            filled += 1;
            distinct.insert(value);
            if value.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count - filled) as f64 / row_count as f64
        };
        let unique_ratio = if filled == 0 {
            0.0
        } else {
            distinct.len() as f64 / filled as f64
        };
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric: filled > 0 && numeric == filled,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}
