use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use klub_model::CanonicalField;

use crate::error::MapError;

/// Statistics about a source column, used to sanity-check guessed legacy
/// mappings before they are surfaced for confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnHint {
    /// True if every non-empty cell parses as a number.
    pub is_numeric: bool,
    /// Ratio of distinct values to non-empty cells (0.0 to 1.0).
    pub unique_ratio: f64,
    /// Ratio of empty cells to total rows (0.0 to 1.0).
    pub null_ratio: f64,
}

/// How a header was matched to a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Trimmed, case-folded equality with the canonical header.
    Exact,
    /// Case-insensitive substring hit on a keyword fragment.
    Keyword(&'static str),
}

/// A source column claimed for a canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedColumn {
    /// Header text as it appears in the document.
    pub header: String,
    /// Column position in the document.
    pub index: usize,
    pub via: MatchKind,
}

/// Raw outcome of header matching, before required-field enforcement.
#[derive(Debug, Clone)]
pub struct HeaderMap<F: CanonicalField> {
    pub assignments: BTreeMap<F, MatchedColumn>,
    /// Canonical fields with no matching header, required or not.
    pub missing: Vec<F>,
}

impl<F: CanonicalField> HeaderMap<F> {
    /// Enforce the abort-level contract: every required field must be
    /// mapped, otherwise the whole import is rejected with the full list
    /// of missing canonical headers.
    pub fn confirm(self) -> Result<ConfirmedMapping<F>, MapError> {
        let unmet: Vec<String> = self
            .missing
            .iter()
            .filter(|field| field.required())
            .map(|field| field.header().to_string())
            .collect();
        if !unmet.is_empty() {
            return Err(MapError::MissingFields {
                entity: F::ENTITY,
                fields: unmet,
            });
        }
        let columns = self
            .assignments
            .into_iter()
            .map(|(field, matched)| (field, matched.index))
            .collect();
        Ok(ConfirmedMapping { columns })
    }
}

/// A mapping with all required fields present, ready for row validation.
#[derive(Debug, Clone)]
pub struct ConfirmedMapping<F: CanonicalField> {
    columns: BTreeMap<F, usize>,
}

impl<F: CanonicalField> ConfirmedMapping<F> {
    pub fn column(&self, field: F) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Cell value for a field, or "" when the field is unmapped or the row
    /// is short. Optional fields read as blank, they never fail a row.
    pub fn value<'r>(&self, field: F, row: &'r [String]) -> &'r str {
        self.column(field)
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One guessed field mapping inside a [`MappingProposal`].
#[derive(Debug, Clone)]
pub struct ProposedField<F: CanonicalField> {
    pub field: F,
    pub column: MatchedColumn,
    /// 1.0 for exact matches; keyword matches decay with fragment position
    /// and are penalized when column statistics disagree with the field's
    /// semantic kind.
    pub confidence: f32,
}

/// A guessed legacy mapping, surfaced to the caller for confirmation
/// before any row is validated or written.
#[derive(Debug, Clone)]
pub struct MappingProposal<F: CanonicalField> {
    pub proposals: Vec<ProposedField<F>>,
    pub missing: Vec<F>,
    /// Source columns no canonical field claimed.
    pub unclaimed: Vec<String>,
}

impl<F: CanonicalField> MappingProposal<F> {
    /// Accept the proposal as-is. Fails like any other mapping when a
    /// required field is missing.
    pub fn confirm(self) -> Result<ConfirmedMapping<F>, MapError> {
        let assignments = self
            .proposals
            .into_iter()
            .map(|proposed| (proposed.field, proposed.column))
            .collect();
        HeaderMap {
            assignments,
            missing: self.missing,
        }
        .confirm()
    }

    pub fn min_confidence(&self) -> Option<f32> {
        self.proposals
            .iter()
            .map(|proposed| proposed.confidence)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}
