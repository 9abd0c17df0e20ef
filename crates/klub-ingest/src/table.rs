use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read document {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

/// An ingested tabular document.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    /// Data rows, each padded/truncated to the header width.
    pub rows: Vec<Vec<String>>,
    /// 1-based spreadsheet row number of the header row, so that report
    /// diagnostics point at the rows a user sees in their program.
    pub header_row: usize,
    /// Spreadsheet row number of each data row.
    lines: Vec<usize>,
}

impl Table {
    /// Wrap tabular data already held in memory, e.g. a registered legacy
    /// table. Row numbers start at 2, right below the nominal header row.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let lines = (0..rows.len()).map(|index| index + 2).collect();
        Self {
            headers,
            rows,
            header_row: 1,
            lines,
        }
    }

    /// Spreadsheet row number of data row `index`.
    pub fn row_number(&self, index: usize) -> usize {
        self.lines
            .get(index)
            .copied()
            .unwrap_or(self.header_row + 1 + index)
    }
}

fn clean_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowShape {
    cells: usize,
    filled: usize,
    numeric: usize,
    wordy: usize,
}

impl RowShape {
    fn of(row: &[String]) -> Self {
        let mut shape = RowShape {
            cells: row.len(),
            ..RowShape::default()
        };
        for cell in row {
            if cell.is_empty() {
                continue;
            }
            shape.filled += 1;
            if cell.parse::<f64>().is_ok() {
                shape.numeric += 1;
            }
            if cell.chars().any(|ch| ch.is_alphabetic()) {
                shape.wordy += 1;
            }
        }
        shape
    }

    fn ratio(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    /// A header row is densely filled with mostly non-numeric text.
    fn header_like(self) -> bool {
        Self::ratio(self.filled, self.cells) >= 0.8
            && Self::ratio(self.wordy, self.filled) >= 0.5
            && Self::ratio(self.numeric, self.filled) <= 0.1
    }
}

/// Pick the header row among the first few rows: the first header-like row
/// spanning the table's width. Title banners above the real header are
/// common in club spreadsheets, but they are narrower than the table or
/// sparsely filled, so they never qualify. Scanning stops at the first hit
/// because an all-text data row below the header looks header-like too.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(5);
    let width = rows.iter().take(probe).map(Vec::len).max().unwrap_or(0);
    rows.iter()
        .take(probe)
        .position(|row| row.len() * 5 >= width * 4 && RowShape::of(row).header_like())
        .unwrap_or(0)
}

/// 1-based line number of a byte offset in the raw input. The csv reader's
/// own line counter collapses blank lines, which would shift diagnostics
/// away from the rows a spreadsheet program shows.
fn physical_line(input: &str, offset: u64) -> usize {
    let end = usize::try_from(offset).unwrap_or(input.len()).min(input.len());
    input.as_bytes()[..end].iter().filter(|byte| **byte == b'\n').count() + 1
}

/// Parse a CSV document from any reader.
pub fn parse_table<R: Read>(mut reader: R) -> Result<Table, IngestError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|source| IngestError::Io {
            path: "<input>".to_string(),
            source,
        })?;
    parse_str(&input)
}

fn parse_str(input: &str) -> Result<Table, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());
    let mut raw_rows: Vec<(usize, Vec<String>)> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| physical_line(input, position.byte()))
            .unwrap_or(raw_rows.len() + 1);
        let row: Vec<String> = record.iter().map(clean_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push((line, row));
    }
    if raw_rows.is_empty() {
        return Ok(Table {
            headers: Vec::new(),
            rows: Vec::new(),
            header_row: 1,
            lines: Vec::new(),
        });
    }
    let rows_only: Vec<Vec<String>> = raw_rows.iter().map(|(_, row)| row.clone()).collect();
    let header_index = detect_header_row(&rows_only);
    let (header_row, headers) = {
        let (number, row) = &raw_rows[header_index];
        (*number, row.clone())
    };
    debug!(header_row, columns = headers.len(), "detected header row");
    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(header_index + 1));
    let mut lines = Vec::with_capacity(rows.capacity());
    for (line, record) in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for index in 0..headers.len() {
            row.push(record.get(index).cloned().unwrap_or_default());
        }
        rows.push(row);
        lines.push(*line);
    }
    Ok(Table {
        headers,
        rows,
        header_row,
        lines,
    })
}

/// Read a CSV document from disk. This is the single file read an import
/// performs.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let input = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&input)
}
