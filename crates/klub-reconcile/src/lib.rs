//! The reconciliation engine and its surrounding import pipeline.
//!
//! One import is one [`ImportRequest`] reconciled against a
//! [`ClubStore`](klub_store::ClubStore): competitions first, then results,
//! members and attendance, each row classified as created, updated,
//! skipped or errored. All writes of a run land in one transactional
//! batch; dry-run performs the same classification and writes nothing.

mod engine;
mod error;
mod legacy;
mod pipeline;
mod request;

pub use engine::{next_competition_number, reconcile};
pub use error::ImportError;
pub use legacy::{
    DiscoveredTable, ProposalSummary, ProposedMapping, classify_table, discover_legacy_tables,
    migrate, propose_migration,
};
pub use pipeline::{Entity, import_file, request_from_table};
pub use request::{ConflictPolicy, ImportMode, ImportRequest};
