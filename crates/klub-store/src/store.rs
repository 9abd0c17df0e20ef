use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use klub_model::{
    Attendance, Competition, CompetitionResult, Member, MemberDocument, MemberId, MemberKey,
};

use crate::batch::WriteBatch;
use crate::error::Result;

/// A raw table as exported by an old tool, held in the store untouched
/// until the legacy adapter migrates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The relational store as the reconciliation core sees it.
///
/// Reads are keyed on natural business keys. All writes of one import go
/// through a single [`apply`](ClubStore::apply) call: either the whole
/// batch becomes visible or none of it does, so concurrent readers never
/// observe a partially-applied import.
pub trait ClubStore {
    fn competition(&self, number: u32) -> Result<Option<Competition>>;
    fn competitions(&self) -> Result<Vec<Competition>>;
    /// Highest assigned competition sequence number, 0 when empty.
    fn max_competition_number(&self) -> Result<u32>;

    /// Results owned by one competition.
    fn results(&self, competition: u32) -> Result<Vec<CompetitionResult>>;
    fn all_results(&self) -> Result<Vec<CompetitionResult>>;
    fn has_result(&self, key: &(u32, String, String)) -> Result<bool>;

    fn member(&self, key: &MemberKey) -> Result<Option<(MemberId, Member)>>;
    fn members(&self) -> Result<Vec<Member>>;
    /// Member whose display name matches, when exactly one does.
    /// Ambiguous names resolve to `None`, never to an arbitrary member.
    fn member_id_by_name(&self, full_name: &str) -> Result<Option<MemberId>>;

    fn attendance(&self) -> Result<Vec<Attendance>>;
    fn has_attendance(&self, key: &(String, NaiveDate)) -> Result<bool>;

    /// Names of raw tables kept from legacy tools.
    fn legacy_table_names(&self) -> Result<Vec<String>>;
    fn legacy_table(&self, name: &str) -> Result<RawTable>;

    /// Apply one import batch transactionally. On error nothing is
    /// written and the caller treats the whole import as failed.
    fn apply(&mut self, batch: WriteBatch) -> Result<()>;

    /// Delete a competition and, by cascading ownership, its results.
    fn delete_competition(&mut self, number: u32) -> Result<()>;

    /// Attach a document to a member. A new document of an existing kind
    /// supersedes the prior one for status display; history is retained.
    fn attach_document(&mut self, member: MemberId, document: MemberDocument) -> Result<()>;
}
