use klub_map::{ConfirmedMapping, HeaderMapper};
use klub_model::{
    AttendanceField, CanonicalField, CompetitionField, Medal, MemberField, ResultField,
    SchemaVersion,
};
use klub_validate::{
    validate_attendance, validate_competition, validate_member, validate_result,
};

fn canonical_mapping<F: CanonicalField>() -> ConfirmedMapping<F> {
    let headers: Vec<String> = F::ALL.iter().map(|field| field.header().to_string()).collect();
    HeaderMapper::new(SchemaVersion::Current)
        .map(&headers)
        .confirm()
        .expect("canonical headers confirm")
}

fn result_row(number: &str, bouts: &str, wins: &str, losses: &str) -> Vec<String> {
    let mut row = vec![String::new(); ResultField::ALL.len()];
    row[0] = number.to_string();
    row[1] = "Ivan Horvat".to_string();
    row[2] = "U15 -52kg".to_string();
    row[3] = bouts.to_string();
    row[4] = wins.to_string();
    row[5] = losses.to_string();
    row
}

#[test]
fn accepts_consistent_bout_arithmetic() {
    let mapping = canonical_mapping::<ResultField>();
    let result = validate_result(&mapping, &result_row("3", "3", "2", "1")).expect("valid row");
    assert_eq!(result.competition_number, 3);
    assert_eq!((result.bouts, result.wins, result.losses), (3, 2, 1));
}

#[test]
fn rejects_bout_arithmetic_mismatch() {
    let mapping = canonical_mapping::<ResultField>();
    let problems =
        validate_result(&mapping, &result_row("3", "3", "1", "1")).expect_err("invalid row");
    assert!(
        problems.iter().any(|p| p.contains("do not match")),
        "problems: {problems:?}"
    );
}

#[test]
fn bad_natural_key_rejects_row_instead_of_defaulting() {
    let mapping = canonical_mapping::<ResultField>();
    let problems =
        validate_result(&mapping, &result_row("", "0", "0", "0")).expect_err("missing key");
    assert!(problems.iter().any(|p| p.contains("Redni broj natjecanja")));
}

#[test]
fn all_problems_are_collected_not_just_the_first() {
    let mapping = canonical_mapping::<ResultField>();
    let mut row = result_row("abc", "3", "1", "1");
    row[9] = "drvena".to_string();
    let problems = validate_result(&mapping, &row).expect_err("three problems");
    assert_eq!(problems.len(), 3, "problems: {problems:?}");
}

#[test]
fn multiline_opponents_split_in_order() {
    let mapping = canonical_mapping::<ResultField>();
    let mut row = result_row("1", "2", "2", "0");
    row[6] = "Marko Marić (HK Zagreb)\n\nLuka Babić (HK Split)".to_string();
    let result = validate_result(&mapping, &row).expect("valid row");
    assert_eq!(
        result.wins_against,
        vec!["Marko Marić (HK Zagreb)", "Luka Babić (HK Split)"]
    );
}

#[test]
fn blank_medal_normalizes_to_none() {
    let mapping = canonical_mapping::<ResultField>();
    let result = validate_result(&mapping, &result_row("1", "0", "0", "0")).expect("valid row");
    assert_eq!(result.medal, Medal::None);
}

#[test]
fn competition_dates_and_images_coerce() {
    let mapping = canonical_mapping::<CompetitionField>();
    let mut row = vec![String::new(); CompetitionField::ALL.len()];
    row[0] = "12".to_string();
    row[1] = "2024".to_string();
    row[2] = "7.3.2024".to_string();
    row[3] = "8.3.2024".to_string();
    row[7] = "Koprivnica".to_string();
    row[15] = "img/a.jpg\nimg/b.jpg".to_string();
    let competition = validate_competition(&mapping, &row).expect("valid row");
    assert_eq!(competition.number, 12);
    assert_eq!(competition.year, 2024);
    assert_eq!(competition.image_paths, vec!["img/a.jpg", "img/b.jpg"]);
    assert!(competition.start_date.is_some());
}

#[test]
fn competition_end_before_start_is_a_problem() {
    let mapping = canonical_mapping::<CompetitionField>();
    let mut row = vec![String::new(); CompetitionField::ALL.len()];
    row[0] = "12".to_string();
    row[2] = "8.3.2024".to_string();
    row[3] = "7.3.2024".to_string();
    let problems = validate_competition(&mapping, &row).expect_err("reversed dates");
    assert!(problems.iter().any(|p| p.contains("before")));
}

#[test]
fn member_email_shape_is_checked() {
    let mapping = canonical_mapping::<MemberField>();
    let mut row = vec![String::new(); MemberField::ALL.len()];
    row[0] = "Kovač".to_string();
    row[1] = "Ana".to_string();
    row[4] = "not-an-address".to_string();
    let problems = validate_member(&mapping, &row).expect_err("bad email");
    assert!(problems.iter().any(|p| p.contains("e-mail")));
}

#[test]
fn attendance_requires_a_date() {
    let mapping = canonical_mapping::<AttendanceField>();
    let row = vec![
        "Ana Kovač".to_string(),
        String::new(),
        "da".to_string(),
        String::new(),
    ];
    let problems = validate_attendance(&mapping, &row).expect_err("missing date");
    assert!(problems.iter().any(|p| p.contains("Datum")));
}

mod properties {
    use klub_validate::coerce::{optional_count, required_key, split_lines};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn optional_count_is_total(raw in ".*") {
            let _ = optional_count(&raw);
        }

        #[test]
        fn required_key_round_trips_positive_numbers(value in 1u32..1_000_000) {
            prop_assert_eq!(required_key("k", &value.to_string()), Ok(value));
        }

        #[test]
        fn split_lines_never_yields_empty_entries(raw in ".*") {
            prop_assert!(split_lines(&raw).iter().all(|line| !line.trim().is_empty()));
        }
    }
}
