use std::collections::BTreeMap;
use std::marker::PhantomData;

use klub_model::{CanonicalField, FieldKind, SchemaVersion};

use crate::types::{ColumnHint, HeaderMap, MappingProposal, MatchKind, MatchedColumn, ProposedField};
use crate::utils::normalize_header;

const KEYWORD_BASE_CONFIDENCE: f32 = 0.90;
const KEYWORD_POSITION_DECAY: f32 = 0.05;
const KEYWORD_MIN_CONFIDENCE: f32 = 0.60;
const KIND_MISMATCH_PENALTY: f32 = 0.70;
const SPARSE_COLUMN_PENALTY: f32 = 0.90;
const SPARSE_NULL_RATIO: f64 = 0.5;

/// Maps document headers onto one entity's canonical field set.
///
/// One mapper instance serves both bulk import (`SchemaVersion::Current`)
/// and legacy migration (`SchemaVersion::Legacy`); the keyword vocabulary
/// is the only difference between the two.
#[derive(Debug, Clone)]
pub struct HeaderMapper<F: CanonicalField> {
    version: SchemaVersion,
    _fields: PhantomData<F>,
}

impl<F: CanonicalField> HeaderMapper<F> {
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            _fields: PhantomData,
        }
    }

    /// Match headers to canonical fields.
    ///
    /// Pass 1 takes exact normalized matches; pass 2 walks each still-open
    /// field's keyword fragments in order and claims the first unclaimed
    /// header containing the fragment. One header maps to at most one
    /// field; fields left over are reported missing, never guessed.
    pub fn map(&self, headers: &[String]) -> HeaderMap<F> {
        let normalized: Vec<String> = headers.iter().map(|raw| normalize_header(raw)).collect();
        let mut claimed = vec![false; headers.len()];
        let mut assignments: BTreeMap<F, MatchedColumn> = BTreeMap::new();

        for &field in F::ALL {
            let canonical = normalize_header(field.header());
            let hit = normalized
                .iter()
                .enumerate()
                .find(|(index, header)| !claimed[*index] && **header == canonical);
            if let Some((index, _)) = hit {
                claimed[index] = true;
                assignments.insert(
                    field,
                    MatchedColumn {
                        header: headers[index].trim().to_string(),
                        index,
                        via: MatchKind::Exact,
                    },
                );
            }
        }

        for &field in F::ALL {
            if assignments.contains_key(&field) {
                continue;
            }
            'fragments: for fragment in field.keywords(self.version) {
                let hit = normalized
                    .iter()
                    .enumerate()
                    .find(|(index, header)| !claimed[*index] && header.contains(fragment));
                if let Some((index, _)) = hit {
                    claimed[index] = true;
                    assignments.insert(
                        field,
                        MatchedColumn {
                            header: headers[index].trim().to_string(),
                            index,
                            via: MatchKind::Keyword(fragment),
                        },
                    );
                    break 'fragments;
                }
            }
        }

        let missing = F::ALL
            .iter()
            .copied()
            .filter(|field| !assignments.contains_key(field))
            .collect();
        HeaderMap {
            assignments,
            missing,
        }
    }

    /// Match headers and annotate each guess with a confidence score, for
    /// surfacing a legacy-table mapping to the caller before committing.
    pub fn propose(
        &self,
        headers: &[String],
        hints: &BTreeMap<String, ColumnHint>,
    ) -> MappingProposal<F> {
        let mapped = self.map(headers);
        let mut proposals = Vec::with_capacity(mapped.assignments.len());
        for (field, column) in mapped.assignments {
            let hint = hints.get(&column.header);
            let confidence = self.score(field, &column, hint);
            proposals.push(ProposedField {
                field,
                column,
                confidence,
            });
        }
        let claimed: Vec<usize> = proposals
            .iter()
            .map(|proposed| proposed.column.index)
            .collect();
        let unclaimed = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !claimed.contains(index))
            .map(|(_, header)| header.trim().to_string())
            .collect();
        MappingProposal {
            proposals,
            missing: mapped.missing,
            unclaimed,
        }
    }

    fn score(&self, field: F, column: &MatchedColumn, hint: Option<&ColumnHint>) -> f32 {
        let mut confidence = match column.via {
            MatchKind::Exact => 1.0,
            MatchKind::Keyword(fragment) => {
                let position = field
                    .keywords(self.version)
                    .iter()
                    .position(|candidate| *candidate == fragment)
                    .unwrap_or(0);
                (KEYWORD_BASE_CONFIDENCE - KEYWORD_POSITION_DECAY * position as f32)
                    .max(KEYWORD_MIN_CONFIDENCE)
            }
        };
        if let Some(hint) = hint {
            let expects_numeric = matches!(field.kind(), FieldKind::Integer);
            if expects_numeric && !hint.is_numeric && hint.null_ratio < 1.0 {
                confidence *= KIND_MISMATCH_PENALTY;
            }
            if hint.null_ratio > SPARSE_NULL_RATIO {
                confidence *= SPARSE_COLUMN_PENALTY;
            }
        }
        confidence
    }
}
