//! Tabular document ingestion.
//!
//! Reads an uploaded spreadsheet (CSV) into an in-memory table, locating
//! the header row even when a title banner precedes it, and computes
//! per-column statistics used to sanity-check legacy mapping guesses.
//! File reads happen once, at the start of an import.

mod hints;
mod table;

pub use hints::build_column_hints;
pub use table::{IngestError, Table, parse_table, read_table};
