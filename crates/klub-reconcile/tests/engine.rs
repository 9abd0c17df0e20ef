use klub_model::{Competition, CompetitionResult, Member, RowStatus};
use klub_reconcile::{
    ConflictPolicy, ImportMode, ImportRequest, next_competition_number, reconcile,
};
use klub_store::{ClubStore, MemoryStore, WriteBatch};

fn competition(number: u32, place: &str) -> Competition {
    Competition {
        number,
        year: 2024,
        place: place.to_string(),
        ..Competition::default()
    }
}

fn result(number: u32, participant: &str) -> CompetitionResult {
    CompetitionResult {
        competition_number: number,
        participant: participant.to_string(),
        category: "U15 -52kg".to_string(),
        bouts: 2,
        wins: 1,
        losses: 1,
        ..CompetitionResult::default()
    }
}

fn member(first: &str, last: &str) -> Member {
    Member {
        first_name: first.to_string(),
        last_name: last.to_string(),
        ..Member::default()
    }
}

#[test]
fn next_number_continues_the_stored_sequence() {
    let mut store = MemoryStore::new();
    assert_eq!(next_competition_number(&store).unwrap(), 1);
    store
        .apply(WriteBatch {
            create_competitions: vec![competition(3, "Zagreb"), competition(17, "Split")],
            ..WriteBatch::default()
        })
        .expect("seed");
    assert_eq!(next_competition_number(&store).unwrap(), 18);
}

#[test]
fn result_may_reference_a_competition_created_later_in_the_document() {
    let mut store = MemoryStore::new();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    // The result row sits above its competition in the document; the
    // two-pass engine must not care.
    request.results.push((2, result(40, "Ivan Horvat")));
    request.competitions.push((5, competition(40, "Zagreb")));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.created, 2);
    assert_eq!(report.error_count(), 0);
    assert_eq!(store.results(40).unwrap().len(), 1);
}

#[test]
fn reimport_of_the_same_document_is_idempotent() {
    let mut store = MemoryStore::new();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.competitions.push((2, competition(1, "Zagreb")));
    request.results.push((3, result(1, "Ivan Horvat")));
    request.members.push((4, member("Ana", "Kovač")));

    let first = reconcile(&mut store, request.clone()).expect("first run");
    assert_eq!(first.created, 3);

    let snapshot = store.clone();
    let second = reconcile(&mut store, request).expect("second run");
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 3);
    assert_eq!(store, snapshot);
}

#[test]
fn dry_run_classifies_like_a_commit_and_writes_nothing() {
    let seed = {
        let mut store = MemoryStore::new();
        store
            .apply(WriteBatch {
                create_competitions: vec![competition(1, "Osijek")],
                ..WriteBatch::default()
            })
            .expect("seed");
        store
    };
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.competitions.push((2, competition(1, "Osijek")));
    request.competitions.push((3, competition(2, "Rijeka")));
    request.results.push((4, result(2, "Ivan Horvat")));

    let mut committed = seed.clone();
    let live = reconcile(&mut committed, request.clone()).expect("commit");

    let mut dry_store = seed.clone();
    let mut dry_request = request;
    dry_request.mode = ImportMode::DryRun;
    let dry = reconcile(&mut dry_store, dry_request).expect("dry run");

    assert_eq!(dry.created, live.created);
    assert_eq!(dry.updated, live.updated);
    assert_eq!(dry.skipped, live.skipped);
    assert_eq!(dry_store, seed);
    assert_ne!(committed, seed);
}

#[test]
fn result_without_an_owner_is_skipped_not_fatal() {
    let mut store = MemoryStore::new();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.results.push((2, result(77, "Ivan Horvat")));
    request.results.push((3, result(77, "Ana Kovač")));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.skipped, 2);
    assert_eq!(report.error_count(), 0);
    let skipped_reason = report
        .outcomes
        .iter()
        .find_map(|outcome| match &outcome.status {
            RowStatus::Skipped(reason) => Some(reason.clone()),
            _ => None,
        })
        .expect("skip reason");
    assert!(skipped_reason.contains("77"));
}

#[test]
fn merge_policy_fills_blanks_and_reports_updated() {
    let mut store = MemoryStore::new();
    store
        .apply(WriteBatch {
            create_competitions: vec![Competition {
                number: 9,
                year: 2023,
                place: "Koprivnica".to_string(),
                image_paths: vec!["img/a.jpg".to_string()],
                ..Competition::default()
            }],
            ..WriteBatch::default()
        })
        .expect("seed");

    let incoming = Competition {
        number: 9,
        year: 2023,
        place: "NE Koprivnica".to_string(),
        coaches: "I. Novak".to_string(),
        image_paths: vec!["img/b.jpg".to_string()],
        ..Competition::default()
    };
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Merge);
    request.competitions.push((2, incoming));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.updated, 1);
    let merged = store.competition(9).unwrap().expect("competition");
    // Stored non-blank fields win; images append.
    assert_eq!(merged.place, "Koprivnica");
    assert_eq!(merged.coaches, "I. Novak");
    assert_eq!(merged.image_paths, vec!["img/a.jpg", "img/b.jpg"]);

    // Re-running the merged document brings nothing new.
    let mut again = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Merge);
    again.competitions.push((2, merged.clone()));
    let second = reconcile(&mut store, again).expect("second run");
    assert_eq!(second.updated, 0);
    assert_eq!(second.skipped, 1);
}

#[test]
fn duplicate_merge_rows_combine_into_one_update() {
    let mut store = MemoryStore::new();
    store
        .apply(WriteBatch {
            create_competitions: vec![competition(9, "Koprivnica")],
            ..WriteBatch::default()
        })
        .expect("seed");

    let mut coaches_row = competition(9, "");
    coaches_row.coaches = "I. Novak".to_string();
    let mut notes_row = competition(9, "");
    notes_row.notes = "dvorana A".to_string();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Merge);
    request.competitions.push((2, coaches_row));
    request.competitions.push((3, notes_row));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.updated, 2);
    // Neither row's contribution is lost to the other's stale copy of the
    // stored record.
    let stored = store.competition(9).unwrap().expect("competition");
    assert_eq!(stored.coaches, "I. Novak");
    assert_eq!(stored.notes, "dvorana A");
    assert_eq!(stored.place, "Koprivnica");
}

#[test]
fn duplicate_rows_within_one_document_are_skipped() {
    let mut store = MemoryStore::new();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.competitions.push((2, competition(1, "Zagreb")));
    request.competitions.push((3, competition(1, "Zagreb")));
    request.results.push((4, result(1, "Ivan Horvat")));
    request.results.push((5, result(1, "Ivan Horvat")));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.created, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(store.results(1).unwrap().len(), 1);
}

#[test]
fn participant_matching_one_member_gets_linked() {
    let mut store = MemoryStore::new();
    let mut twin = member("Ivan", "Horvat");
    twin.date_of_birth = chrono::NaiveDate::from_ymd_opt(2010, 5, 1);
    store
        .apply(WriteBatch {
            create_competitions: vec![competition(1, "Zagreb")],
            create_members: vec![member("Ana", "Kovač"), member("Ivan", "Horvat"), twin],
            ..WriteBatch::default()
        })
        .expect("seed");

    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.results.push((2, result(1, "Ana Kovač")));
    request.results.push((3, result(1, "Ivan Horvat")));
    reconcile(&mut store, request).expect("reconcile");

    let stored = store.results(1).unwrap();
    let ana = stored
        .iter()
        .find(|entry| entry.participant == "Ana Kovač")
        .expect("ana");
    assert!(ana.member_id.is_some());
    // Two members share the name: no link rather than a wrong link.
    let ivan = stored
        .iter()
        .find(|entry| entry.participant == "Ivan Horvat")
        .expect("ivan");
    assert!(ivan.member_id.is_none());
}

#[test]
fn validation_errors_flow_into_the_report_in_row_order() {
    let mut store = MemoryStore::new();
    let mut request = ImportRequest::new(ImportMode::Commit, ConflictPolicy::Skip);
    request.competitions.push((4, competition(1, "Zagreb")));
    request.row_errors.push((
        2,
        vec!["Redni broj: 'abc' is not a number".to_string()],
    ));

    let report = reconcile(&mut store, request).expect("reconcile");
    assert_eq!(report.created, 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors[0].row_index, 2);
    let rows: Vec<usize> = report.outcomes.iter().map(|outcome| outcome.row_index).collect();
    assert_eq!(rows, vec![2, 4]);
}
