use serde::{Deserialize, Serialize};

/// Outcome classification for a single imported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RowStatus {
    Created,
    Updated,
    /// Row intentionally not applied, with a human-readable reason.
    Skipped(String),
    /// Row rejected by validation or reconciliation; every problem found
    /// for the row is listed, not just the first.
    Error(Vec<String>),
}

/// A row outcome tagged with its spreadsheet row number (header row = 1,
/// first data row = 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub row_index: usize,
    #[serde(flatten)]
    pub status: RowStatus,
}

/// Accumulated problems for one rejected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row_index: usize,
    pub messages: Vec<String>,
}

/// Structured result of one import run. Produced fresh by every import and
/// never mutated after being returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: Vec<RowError>,
    /// Full per-row audit trail, ordered by row index.
    pub outcomes: Vec<RowOutcome>,
}

impl ImportReport {
    /// Record one row outcome and update the aggregate counts.
    pub fn record(&mut self, row_index: usize, status: RowStatus) {
        match &status {
            RowStatus::Created => self.created += 1,
            RowStatus::Updated => self.updated += 1,
            RowStatus::Skipped(_) => self.skipped += 1,
            RowStatus::Error(messages) => self.errors.push(RowError {
                row_index,
                messages: messages.clone(),
            }),
        }
        self.outcomes.push(RowOutcome { row_index, status });
    }

    /// Restore row order after multi-pass processing.
    pub fn sort_by_row(&mut self) {
        self.outcomes.sort_by_key(|outcome| outcome.row_index);
        self.errors.sort_by_key(|error| error.row_index);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn total_rows(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every row applied cleanly (skips are clean: they mean the
    /// store already agreed with the document).
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
