use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use klub_model::{
    Attendance, Competition, CompetitionResult, Member, MemberDocument, MemberId, MemberKey,
};

use crate::batch::WriteBatch;
use crate::error::{Result, StoreError};
use crate::store::{ClubStore, RawTable};

/// In-memory store, serializable as one JSON document.
///
/// Stands in for the club's relational database in tests and behind the
/// CLI's store file. `PartialEq` is derived so dry-run tests can assert
/// the store is bit-for-bit unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    competitions: BTreeMap<u32, Competition>,
    /// Results keyed by owning competition number (cascade delete).
    results: BTreeMap<u32, Vec<CompetitionResult>>,
    members: BTreeMap<u64, Member>,
    next_member_id: u64,
    attendance: Vec<Attendance>,
    legacy_tables: BTreeMap<String, RawTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_member_id: 1,
            ..Self::default()
        }
    }

    /// Stash a raw legacy table for later migration.
    pub fn register_legacy_table(&mut self, table: RawTable) {
        self.legacy_tables.insert(table.name.clone(), table);
    }

    fn check(&self, batch: &WriteBatch) -> Result<()> {
        let mut new_numbers = Vec::new();
        for competition in &batch.create_competitions {
            if self.competitions.contains_key(&competition.number)
                || new_numbers.contains(&competition.number)
            {
                return Err(StoreError::DuplicateCompetition(competition.number));
            }
            new_numbers.push(competition.number);
        }
        for competition in &batch.update_competitions {
            if !self.competitions.contains_key(&competition.number) {
                return Err(StoreError::CompetitionNotFound(competition.number));
            }
        }
        for result in &batch.create_results {
            let owner_known = self.competitions.contains_key(&result.competition_number)
                || new_numbers.contains(&result.competition_number);
            if !owner_known {
                return Err(StoreError::CompetitionNotFound(result.competition_number));
            }
        }
        for member in &batch.create_members {
            if self.member(&member.key())?.is_some() {
                return Err(StoreError::DuplicateMember(member.full_name()));
            }
        }
        Ok(())
    }
}

impl ClubStore for MemoryStore {
    fn competition(&self, number: u32) -> Result<Option<Competition>> {
        Ok(self.competitions.get(&number).cloned())
    }

    fn competitions(&self) -> Result<Vec<Competition>> {
        Ok(self.competitions.values().cloned().collect())
    }

    fn max_competition_number(&self) -> Result<u32> {
        Ok(self.competitions.keys().next_back().copied().unwrap_or(0))
    }

    fn results(&self, competition: u32) -> Result<Vec<CompetitionResult>> {
        Ok(self.results.get(&competition).cloned().unwrap_or_default())
    }

    fn all_results(&self) -> Result<Vec<CompetitionResult>> {
        Ok(self.results.values().flatten().cloned().collect())
    }

    fn has_result(&self, key: &(u32, String, String)) -> Result<bool> {
        Ok(self
            .results
            .get(&key.0)
            .is_some_and(|owned| owned.iter().any(|result| result.dedupe_key() == *key)))
    }

    fn member(&self, key: &MemberKey) -> Result<Option<(MemberId, Member)>> {
        Ok(self
            .members
            .iter()
            .find(|(_, member)| member.key() == *key)
            .map(|(id, member)| (MemberId(*id), member.clone())))
    }

    fn members(&self) -> Result<Vec<Member>> {
        Ok(self.members.values().cloned().collect())
    }

    fn member_id_by_name(&self, full_name: &str) -> Result<Option<MemberId>> {
        let wanted = full_name.trim().to_lowercase();
        let mut matches = self
            .members
            .iter()
            .filter(|(_, member)| member.full_name().to_lowercase() == wanted);
        match (matches.next(), matches.next()) {
            (Some((id, _)), None) => Ok(Some(MemberId(*id))),
            // Zero or ambiguous: the caller must not guess.
            _ => Ok(None),
        }
    }

    fn attendance(&self) -> Result<Vec<Attendance>> {
        Ok(self.attendance.clone())
    }

    fn has_attendance(&self, key: &(String, NaiveDate)) -> Result<bool> {
        Ok(self.attendance.iter().any(|mark| mark.key() == *key))
    }

    fn legacy_table_names(&self) -> Result<Vec<String>> {
        Ok(self.legacy_tables.keys().cloned().collect())
    }

    fn legacy_table(&self, name: &str) -> Result<RawTable> {
        self.legacy_tables
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::LegacyTableNotFound(name.to_string()))
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<()> {
        // Validate everything before touching any table so a failure
        // leaves the store exactly as it was.
        self.check(&batch)?;
        debug!(writes = batch.write_count(), "committing batch");
        for competition in batch.create_competitions {
            self.competitions.insert(competition.number, competition);
        }
        for competition in batch.update_competitions {
            self.competitions.insert(competition.number, competition);
        }
        for result in batch.create_results {
            self.results
                .entry(result.competition_number)
                .or_default()
                .push(result);
        }
        for member in batch.create_members {
            let id = self.next_member_id.max(1);
            self.next_member_id = id + 1;
            self.members.insert(id, member);
        }
        for mark in batch.create_attendance {
            self.attendance.push(mark);
        }
        Ok(())
    }

    fn delete_competition(&mut self, number: u32) -> Result<()> {
        if self.competitions.remove(&number).is_none() {
            return Err(StoreError::CompetitionNotFound(number));
        }
        // Results are owned, not referenced: they go with the owner.
        self.results.remove(&number);
        Ok(())
    }

    fn attach_document(&mut self, member: MemberId, document: MemberDocument) -> Result<()> {
        let record = self
            .members
            .get_mut(&member.0)
            .ok_or(StoreError::MemberNotFound(member.0))?;
        record.documents.push(document);
        Ok(())
    }
}
