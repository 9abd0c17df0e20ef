use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use klub_model::{Competition, ImportReport, MemberKey, RowStatus};
use klub_store::{ClubStore, WriteBatch};

use crate::error::ImportError;
use crate::request::{ConflictPolicy, ImportMode, ImportRequest};

/// Sequence number for the next manually entered competition.
pub fn next_competition_number<S: ClubStore>(store: &S) -> Result<u32, ImportError> {
    Ok(store.max_competition_number()?.saturating_add(1))
}

/// Reconcile one import request against the store.
///
/// Competitions are processed before results regardless of document order,
/// so a result row may reference a competition introduced anywhere in the
/// same document. All writes are staged into one [`WriteBatch`] and applied
/// at the end; in dry-run mode the batch is dropped instead, after the
/// exact same classification.
pub fn reconcile<S: ClubStore>(
    store: &mut S,
    request: ImportRequest,
) -> Result<ImportReport, ImportError> {
    let mut report = ImportReport::default();
    let mut batch = WriteBatch::default();

    for (row, problems) in request.row_errors {
        report.record(row, RowStatus::Error(problems));
    }

    // Pass 1: competitions. The pending set lets later rows (and the
    // results pass) see competitions created earlier in this document.
    let mut pending_competitions: BTreeSet<u32> = BTreeSet::new();
    let mut merged_competitions: BTreeMap<u32, Competition> = BTreeMap::new();
    for (row, competition) in request.competitions {
        let number = competition.number;
        if pending_competitions.contains(&number) {
            report.record(
                row,
                RowStatus::Skipped(format!("competition {number} appears earlier in this document")),
            );
            continue;
        }
        match store.competition(number)? {
            None => {
                pending_competitions.insert(number);
                batch.create_competitions.push(competition);
                report.record(row, RowStatus::Created);
            }
            Some(existing) => match request.policy {
                ConflictPolicy::Skip => {
                    report.record(
                        row,
                        RowStatus::Skipped(format!("competition {number} already exists")),
                    );
                }
                ConflictPolicy::Merge => {
                    // Later rows for the same stored key merge into the copy
                    // staged by an earlier row, so one natural key ends up
                    // with exactly one update record in the batch.
                    let staged = merged_competitions.remove(&number);
                    let was_staged = staged.is_some();
                    let mut target = staged.unwrap_or(existing);
                    if target.merge_from(&competition) {
                        merged_competitions.insert(number, target);
                        report.record(row, RowStatus::Updated);
                    } else {
                        if was_staged {
                            merged_competitions.insert(number, target);
                        }
                        report.record(
                            row,
                            RowStatus::Skipped(format!("competition {number} has no new data")),
                        );
                    }
                }
            },
        }
    }
    batch.update_competitions.extend(merged_competitions.into_values());

    // Pass 2: results, with owners resolved against the pending batch
    // before the store.
    let mut pending_results: BTreeSet<(u32, String, String)> = BTreeSet::new();
    for (row, mut result) in request.results {
        let number = result.competition_number;
        let owner_known =
            pending_competitions.contains(&number) || store.competition(number)?.is_some();
        if !owner_known {
            report.record(
                row,
                RowStatus::Skipped(format!("competition {number} not found")),
            );
            continue;
        }
        let key = result.dedupe_key();
        if pending_results.contains(&key) || store.has_result(&key)? {
            report.record(
                row,
                RowStatus::Skipped(format!(
                    "result for '{}' in '{}' already recorded for competition {number}",
                    result.participant, result.category
                )),
            );
            continue;
        }
        // Link the canonical member record when exactly one matches the
        // written name; an ambiguous name stays unlinked.
        result.member_id = store.member_id_by_name(&result.participant)?;
        pending_results.insert(key);
        batch.create_results.push(result);
        report.record(row, RowStatus::Created);
    }

    let mut pending_members: BTreeSet<MemberKey> = BTreeSet::new();
    for (row, member) in request.members {
        let key = member.key();
        if pending_members.contains(&key) || store.member(&key)?.is_some() {
            report.record(
                row,
                RowStatus::Skipped(format!("member '{}' already exists", member.full_name())),
            );
            continue;
        }
        pending_members.insert(key);
        batch.create_members.push(member);
        report.record(row, RowStatus::Created);
    }

    let mut pending_marks = BTreeSet::new();
    for (row, mark) in request.attendance {
        let key = mark.key();
        if pending_marks.contains(&key) || store.has_attendance(&key)? {
            report.record(
                row,
                RowStatus::Skipped(format!(
                    "attendance for '{}' on {} already recorded",
                    mark.member_name, mark.date
                )),
            );
            continue;
        }
        pending_marks.insert(key);
        batch.create_attendance.push(mark);
        report.record(row, RowStatus::Created);
    }

    match request.mode {
        ImportMode::Commit => {
            if !batch.is_empty() {
                store.apply(batch)?;
            }
            info!(
                created = report.created,
                updated = report.updated,
                skipped = report.skipped,
                errors = report.error_count(),
                "import committed"
            );
        }
        ImportMode::DryRun => {
            debug!(staged = batch.write_count(), "dry run, discarding batch");
        }
    }

    report.sort_by_row();
    Ok(report)
}
