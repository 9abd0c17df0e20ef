//! Header mapping: matches human-authored column headers against a typed
//! canonical schema.
//!
//! Matching is deterministic: an exact (trimmed, case-folded) match wins,
//! then ordered keyword fragments, and whatever stays unmatched is reported
//! as missing instead of guessed. The same mapper serves bulk import and
//! legacy-table migration, parameterized only by
//! [`SchemaVersion`](klub_model::SchemaVersion).

mod error;
mod mapper;
mod types;
mod utils;

pub use error::MapError;
pub use mapper::HeaderMapper;
pub use types::{
    ColumnHint, ConfirmedMapping, HeaderMap, MappingProposal, MatchKind, MatchedColumn,
    ProposedField,
};
pub use utils::normalize_header;
