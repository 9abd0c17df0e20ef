use chrono::NaiveDate;
use csv::Writer;

use klub_model::{AttendanceField, CanonicalField, CompetitionField, MemberField, ResultField};
use klub_store::ClubStore;

use crate::error::ExportError;

/// Date rendering used across every export. The validator accepts this
/// format back unchanged, which is what makes exports round-trip.
const DATE_FORMAT: &str = "%d.%m.%Y";

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Zero-valued optional counts render blank, the way club secretaries
/// leave them in hand-authored sheets.
fn count_cell(count: u32) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

fn lines_cell(lines: &[String]) -> String {
    lines.join("\n")
}

pub(crate) fn finish_csv(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}

fn headers<F: CanonicalField>(writer: &mut Writer<Vec<u8>>) -> Result<(), ExportError> {
    writer.write_record(F::ALL.iter().map(|field| field.header()))?;
    Ok(())
}

/// All stored competitions, every canonical column, ordered by sequence
/// number.
pub fn export_competitions<S: ClubStore>(store: &S) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    headers::<CompetitionField>(&mut writer)?;
    for competition in store.competitions()? {
        writer.write_record([
            competition.number.to_string(),
            competition.year.to_string(),
            date_cell(competition.start_date),
            date_cell(competition.end_date),
            competition.kind.clone(),
            competition.name.clone().unwrap_or_default(),
            competition.style.clone(),
            competition.place.clone(),
            competition.country.clone(),
            competition.country_code.clone(),
            count_cell(competition.participants),
            competition.team_ranking.clone(),
            competition.coaches.clone(),
            competition.notes.clone(),
            competition.links.clone(),
            lines_cell(&competition.image_paths),
            competition.announcement.clone(),
        ])?;
    }
    finish_csv(writer)
}

/// All stored results, grouped by owning competition.
pub fn export_results<S: ClubStore>(store: &S) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    headers::<ResultField>(&mut writer)?;
    for result in store.all_results()? {
        writer.write_record([
            result.competition_number.to_string(),
            result.participant.clone(),
            result.category.clone(),
            count_cell(result.bouts),
            count_cell(result.wins),
            count_cell(result.losses),
            lines_cell(&result.wins_against),
            lines_cell(&result.losses_against),
            result.placement.clone(),
            result.medal.as_str().to_string(),
        ])?;
    }
    finish_csv(writer)
}

/// The member roster. Documents live on the member record, not in the
/// roster schema, so they are not part of this export.
pub fn export_members<S: ClubStore>(store: &S) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    headers::<MemberField>(&mut writer)?;
    for member in store.members()? {
        writer.write_record([
            member.last_name.clone(),
            member.first_name.clone(),
            date_cell(member.date_of_birth),
            member.group.clone(),
            member.email.clone(),
            member.phone.clone(),
            member.guardian_email.clone(),
            member.guardian_phone.clone(),
        ])?;
    }
    finish_csv(writer)
}

pub fn export_attendance<S: ClubStore>(store: &S) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    headers::<AttendanceField>(&mut writer)?;
    for mark in store.attendance()? {
        writer.write_record([
            mark.member_name.clone(),
            date_cell(Some(mark.date)),
            if mark.present { "da" } else { "ne" }.to_string(),
            mark.note.clone(),
        ])?;
    }
    finish_csv(writer)
}
