use std::collections::BTreeMap;

use klub_map::{ColumnHint, HeaderMapper, MapError, MatchKind};
use klub_model::{CanonicalField, CompetitionField, MemberField, ResultField, SchemaVersion};

fn headers(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|header| (*header).to_string()).collect()
}

#[test]
fn canonical_template_maps_one_to_one_exact() {
    let template: Vec<String> = CompetitionField::ALL
        .iter()
        .map(|field| field.header().to_string())
        .collect();
    let mapper: HeaderMapper<CompetitionField> = HeaderMapper::new(SchemaVersion::Current);
    let mapped = mapper.map(&template);
    assert!(mapped.missing.is_empty());
    for (field, column) in &mapped.assignments {
        assert_eq!(column.via, MatchKind::Exact, "{field:?} not exact");
        assert_eq!(column.header, field.header());
    }
}

#[test]
fn keyword_fallback_matches_hand_authored_headers() {
    let mapper: HeaderMapper<CompetitionField> = HeaderMapper::new(SchemaVersion::Current);
    let mapped = mapper.map(&headers(&["Rbr.", "God. natjecanja", "Grad", "Trener ekipe"]));
    let index_of = |field: CompetitionField| mapped.assignments.get(&field).map(|c| c.index);
    assert_eq!(index_of(CompetitionField::Number), Some(0));
    assert_eq!(index_of(CompetitionField::Year), Some(1));
    assert_eq!(index_of(CompetitionField::Place), Some(2));
    assert_eq!(index_of(CompetitionField::Coaches), Some(3));
}

#[test]
fn missing_required_field_aborts_with_enumerated_headers() {
    let mapper: HeaderMapper<CompetitionField> = HeaderMapper::new(SchemaVersion::Current);
    let mapped = mapper.map(&headers(&["Godina", "Mjesto", "Napomena"]));
    let error = mapped.confirm().expect_err("number is required");
    match &error {
        MapError::MissingFields { entity, fields } => {
            assert_eq!(*entity, "competition");
            assert_eq!(fields, &vec!["Redni broj".to_string()]);
        }
    }
    assert!(error.to_string().contains("Redni broj"));
}

#[test]
fn optional_fields_may_stay_missing() {
    let mapper: HeaderMapper<MemberField> = HeaderMapper::new(SchemaVersion::Current);
    let mapped = mapper.map(&headers(&["Prezime", "Ime"]));
    assert!(mapped.confirm().is_ok());
}

#[test]
fn legacy_fragments_only_apply_to_legacy_version() {
    let current: HeaderMapper<CompetitionField> = HeaderMapper::new(SchemaVersion::Current);
    let legacy: HeaderMapper<CompetitionField> = HeaderMapper::new(SchemaVersion::Legacy);
    let columns = headers(&["dat_od", "dat_do"]);
    assert!(
        !current
            .map(&columns)
            .assignments
            .contains_key(&CompetitionField::StartDate)
    );
    let mapped = legacy.map(&columns);
    assert_eq!(
        mapped
            .assignments
            .get(&CompetitionField::StartDate)
            .map(|c| c.index),
        Some(0)
    );
    assert_eq!(
        mapped
            .assignments
            .get(&CompetitionField::EndDate)
            .map(|c| c.index),
        Some(1)
    );
}

#[test]
fn proposal_penalizes_numeric_shape_mismatch() {
    let mapper: HeaderMapper<ResultField> = HeaderMapper::new(SchemaVersion::Legacy);
    let columns = headers(&["rbr", "ime i prezime"]);
    let mut hints = BTreeMap::new();
    hints.insert(
        "rbr".to_string(),
        ColumnHint {
            is_numeric: false,
            unique_ratio: 0.2,
            null_ratio: 0.0,
        },
    );
    let with_penalty = mapper.propose(&columns, &hints);
    let without_penalty = mapper.propose(&columns, &BTreeMap::new());
    let confidence = |proposal: &klub_map::MappingProposal<ResultField>| {
        proposal
            .proposals
            .iter()
            .find(|p| p.field == ResultField::CompetitionNumber)
            .map(|p| p.confidence)
            .expect("competition number proposed")
    };
    assert!(confidence(&with_penalty) < confidence(&without_penalty));
}

#[test]
fn confirmed_proposal_reads_rows_like_a_direct_mapping() {
    let mapper: HeaderMapper<ResultField> = HeaderMapper::new(SchemaVersion::Legacy);
    let columns = headers(&["rbr", "imeprez", "kategorija"]);
    let proposal = mapper.propose(&columns, &BTreeMap::new());
    assert!(proposal.min_confidence().expect("scored") <= 1.0);
    let mapping = proposal.confirm().expect("required fields mapped");
    let row = headers(&["4", "Ivan Horvat", "-52kg"]);
    assert_eq!(mapping.value(ResultField::CompetitionNumber, &row), "4");
    assert_eq!(mapping.value(ResultField::Participant, &row), "Ivan Horvat");
    // Unmapped optional fields read as blank.
    assert_eq!(mapping.value(ResultField::Placement, &row), "");
}

#[test]
fn proposal_reports_unclaimed_columns() {
    let mapper: HeaderMapper<ResultField> = HeaderMapper::new(SchemaVersion::Current);
    let columns = headers(&["Ime i prezime", "Redni broj natjecanja", "Omiljena boja"]);
    let proposal = mapper.propose(&columns, &BTreeMap::new());
    assert_eq!(proposal.unclaimed, vec!["Omiljena boja".to_string()]);
}
