use std::fmt;
use std::path::Path;

use tracing::info;

use klub_ingest::{Table, read_table};
use klub_map::{ConfirmedMapping, HeaderMapper};
use klub_model::{
    AttendanceField, CanonicalField, CompetitionField, ImportReport, MemberField, ResultField,
    SchemaVersion,
};
use klub_store::ClubStore;
use klub_validate::{
    RowResult, validate_attendance, validate_competition, validate_member, validate_result,
};

use crate::engine::reconcile;
use crate::error::ImportError;
use crate::request::{ConflictPolicy, ImportMode, ImportRequest};

/// The entity an imported document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Competitions,
    Results,
    Members,
    Attendance,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Competitions => "competitions",
            Entity::Results => "results",
            Entity::Members => "members",
            Entity::Attendance => "attendance",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn collect_rows<F, T>(
    mapping: &ConfirmedMapping<F>,
    table: &Table,
    validate: impl Fn(&ConfirmedMapping<F>, &[String]) -> RowResult<T>,
    records: &mut Vec<(usize, T)>,
    row_errors: &mut Vec<(usize, Vec<String>)>,
) where
    F: CanonicalField,
{
    for (index, row) in table.rows.iter().enumerate() {
        let row_number = table.row_number(index);
        match validate(mapping, row) {
            Ok(record) => records.push((row_number, record)),
            Err(problems) => row_errors.push((row_number, problems)),
        }
    }
}

/// Map and validate one ingested table into an import request.
///
/// Header mapping failures abort here with the full list of missing
/// required headers; per-row problems never abort, they become error rows
/// inside the request.
pub fn request_from_table(
    entity: Entity,
    version: SchemaVersion,
    table: &Table,
    mode: ImportMode,
    policy: ConflictPolicy,
) -> Result<ImportRequest, ImportError> {
    let mut request = ImportRequest::new(mode, policy);
    match entity {
        Entity::Competitions => {
            let mapping = HeaderMapper::<CompetitionField>::new(version)
                .map(&table.headers)
                .confirm()?;
            collect_rows(
                &mapping,
                table,
                validate_competition,
                &mut request.competitions,
                &mut request.row_errors,
            );
        }
        Entity::Results => {
            let mapping = HeaderMapper::<ResultField>::new(version)
                .map(&table.headers)
                .confirm()?;
            collect_rows(
                &mapping,
                table,
                validate_result,
                &mut request.results,
                &mut request.row_errors,
            );
        }
        Entity::Members => {
            let mapping = HeaderMapper::<MemberField>::new(version)
                .map(&table.headers)
                .confirm()?;
            collect_rows(
                &mapping,
                table,
                validate_member,
                &mut request.members,
                &mut request.row_errors,
            );
        }
        Entity::Attendance => {
            let mapping = HeaderMapper::<AttendanceField>::new(version)
                .map(&table.headers)
                .confirm()?;
            collect_rows(
                &mapping,
                table,
                validate_attendance,
                &mut request.attendance,
                &mut request.row_errors,
            );
        }
    }
    Ok(request)
}

/// End-to-end bulk import of one CSV document: read, map, validate,
/// reconcile.
pub fn import_file<S: ClubStore>(
    store: &mut S,
    entity: Entity,
    path: &Path,
    mode: ImportMode,
    policy: ConflictPolicy,
) -> Result<ImportReport, ImportError> {
    info!(%entity, path = %path.display(), "importing document");
    let table = read_table(path)?;
    let request = request_from_table(entity, SchemaVersion::Current, &table, mode, policy)?;
    reconcile(store, request)
}
