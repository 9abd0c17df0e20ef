//! Whole-row validation. Each function coerces every mapped cell, checks
//! cross-field invariants after coercion, and returns either a normalized
//! record or the full list of problems found, never just the first one.

use klub_map::ConfirmedMapping;
use klub_model::{
    Attendance, AttendanceField, Competition, CompetitionField, CompetitionResult, Medal, Member,
    MemberField, ResultField,
};

use crate::coerce::{
    check_email, optional_count, optional_year, parse_date, parse_flag, required_key, split_lines,
};

/// Either a normalized record or everything wrong with the row.
pub type RowResult<T> = Result<T, Vec<String>>;

fn finish<T>(record: T, problems: Vec<String>) -> RowResult<T> {
    if problems.is_empty() {
        Ok(record)
    } else {
        Err(problems)
    }
}

pub fn validate_competition(
    mapping: &ConfirmedMapping<CompetitionField>,
    row: &[String],
) -> RowResult<Competition> {
    let mut problems = Vec::new();
    let cell = |field| mapping.value(field, row);

    let number = match required_key("Redni broj", cell(CompetitionField::Number)) {
        Ok(number) => number,
        Err(problem) => {
            problems.push(problem);
            0
        }
    };
    let start_date = parse_date("Datum početka", cell(CompetitionField::StartDate))
        .unwrap_or_else(|problem| {
            problems.push(problem);
            None
        });
    let end_date = parse_date("Datum završetka", cell(CompetitionField::EndDate))
        .unwrap_or_else(|problem| {
            problems.push(problem);
            None
        });
    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        problems.push(format!(
            "Datum završetka ({end}) is before Datum početka ({start})"
        ));
    }
    let name = cell(CompetitionField::Name).trim();
    let competition = Competition {
        number,
        year: optional_year(cell(CompetitionField::Year)),
        start_date,
        end_date,
        kind: cell(CompetitionField::Kind).trim().to_string(),
        name: (!name.is_empty()).then(|| name.to_string()),
        style: cell(CompetitionField::Style).trim().to_string(),
        place: cell(CompetitionField::Place).trim().to_string(),
        country: cell(CompetitionField::Country).trim().to_string(),
        country_code: cell(CompetitionField::CountryCode).trim().to_string(),
        participants: optional_count(cell(CompetitionField::Participants)),
        team_ranking: cell(CompetitionField::TeamRanking).trim().to_string(),
        coaches: cell(CompetitionField::Coaches).trim().to_string(),
        notes: cell(CompetitionField::Notes).trim().to_string(),
        links: cell(CompetitionField::Links).trim().to_string(),
        image_paths: split_lines(cell(CompetitionField::Images)),
        announcement: cell(CompetitionField::Announcement).trim().to_string(),
    };
    finish(competition, problems)
}

pub fn validate_result(
    mapping: &ConfirmedMapping<ResultField>,
    row: &[String],
) -> RowResult<CompetitionResult> {
    let mut problems = Vec::new();
    let cell = |field| mapping.value(field, row);

    let competition_number =
        match required_key("Redni broj natjecanja", cell(ResultField::CompetitionNumber)) {
            Ok(number) => number,
            Err(problem) => {
                problems.push(problem);
                0
            }
        };
    let participant = cell(ResultField::Participant).trim().to_string();
    if participant.is_empty() {
        problems.push("Ime i prezime: value is required".to_string());
    }
    let bouts = optional_count(cell(ResultField::Bouts));
    let wins = optional_count(cell(ResultField::Wins));
    let losses = optional_count(cell(ResultField::Losses));
    // Cross-field arithmetic, checked after coercion. Every bout is either
    // a win or a loss.
    if wins + losses != bouts {
        problems.push(format!(
            "Pobjede ({wins}) + Porazi ({losses}) do not match Broj borbi ({bouts})"
        ));
    }
    let medal = match Medal::parse(cell(ResultField::Medal)) {
        Some(medal) => medal,
        None => {
            problems.push(format!(
                "Medalja: '{}' is not one of zlato/srebro/bronca",
                cell(ResultField::Medal).trim()
            ));
            Medal::None
        }
    };
    let result = CompetitionResult {
        competition_number,
        participant,
        member_id: None,
        category: cell(ResultField::Category).trim().to_string(),
        bouts,
        wins,
        losses,
        wins_against: split_lines(cell(ResultField::WinsAgainst)),
        losses_against: split_lines(cell(ResultField::LossesAgainst)),
        placement: cell(ResultField::Placement).trim().to_string(),
        medal,
    };
    finish(result, problems)
}

pub fn validate_member(
    mapping: &ConfirmedMapping<MemberField>,
    row: &[String],
) -> RowResult<Member> {
    let mut problems = Vec::new();
    let cell = |field| mapping.value(field, row);

    let first_name = cell(MemberField::FirstName).trim().to_string();
    if first_name.is_empty() {
        problems.push("Ime: value is required".to_string());
    }
    let last_name = cell(MemberField::LastName).trim().to_string();
    if last_name.is_empty() {
        problems.push("Prezime: value is required".to_string());
    }
    let date_of_birth = parse_date("Datum rođenja", cell(MemberField::DateOfBirth))
        .unwrap_or_else(|problem| {
            problems.push(problem);
            None
        });
    problems.extend(check_email("E-mail", cell(MemberField::Email)));
    problems.extend(check_email(
        "E-mail roditelja",
        cell(MemberField::GuardianEmail),
    ));
    let member = Member {
        first_name,
        last_name,
        date_of_birth,
        email: cell(MemberField::Email).trim().to_string(),
        phone: cell(MemberField::Phone).trim().to_string(),
        guardian_email: cell(MemberField::GuardianEmail).trim().to_string(),
        guardian_phone: cell(MemberField::GuardianPhone).trim().to_string(),
        group: cell(MemberField::Group).trim().to_string(),
        documents: Vec::new(),
    };
    finish(member, problems)
}

pub fn validate_attendance(
    mapping: &ConfirmedMapping<AttendanceField>,
    row: &[String],
) -> RowResult<Attendance> {
    let mut problems = Vec::new();
    let cell = |field| mapping.value(field, row);

    let member_name = cell(AttendanceField::MemberName).trim().to_string();
    if member_name.is_empty() {
        problems.push("Ime i prezime: value is required".to_string());
    }
    let date = match parse_date("Datum", cell(AttendanceField::Date)) {
        Ok(Some(date)) => date,
        Ok(None) => {
            problems.push("Datum: value is required".to_string());
            Default::default()
        }
        Err(problem) => {
            problems.push(problem);
            Default::default()
        }
    };
    let attendance = Attendance {
        member_name,
        date,
        present: parse_flag(cell(AttendanceField::Present)),
        note: cell(AttendanceField::Note).trim().to_string(),
    };
    finish(attendance, problems)
}
