//! Legacy-table adapter: finds tables exported from the club's old tools
//! inside the store, guesses which entity each one holds, and migrates
//! confirmed tables through the exact same mapping, validation and
//! reconciliation path as a fresh import.

use tracing::info;

use klub_ingest::{Table, build_column_hints};
use klub_map::{HeaderMapper, MappingProposal};
use klub_model::{
    AttendanceField, CanonicalField, CompetitionField, ImportReport, MemberField, ResultField,
    SchemaVersion,
};
use klub_store::ClubStore;

use crate::engine::reconcile;
use crate::error::ImportError;
use crate::pipeline::{Entity, request_from_table};
use crate::request::{ConflictPolicy, ImportMode};

// Table-name fragments the old DOS-era exports used. Diacritics never
// survived those tools, so the member aliases are spelled without them.
const COMPETITION_ALIASES: &[&str] = &["natjecanj", "takmicenj", "natj_"];
const RESULT_ALIASES: &[&str] = &["rezultat", "rez_"];
const MEMBER_ALIASES: &[&str] = &["clanovi", "clanstvo", "clan_"];
const ATTENDANCE_ALIASES: &[&str] = &["prisutnost", "dolas", "evidencija"];

fn matches_any(name: &str, aliases: &[&str]) -> bool {
    aliases.iter().any(|alias| name.contains(alias))
}

/// Guess which entity a legacy table holds from its name.
///
/// A name matching alias lists of more than one entity is reported as
/// ambiguous; the caller decides, this module never picks silently.
pub fn classify_table(name: &str) -> Result<Entity, ImportError> {
    let normalized = name.trim().to_lowercase();
    let mut hits = Vec::new();
    if matches_any(&normalized, COMPETITION_ALIASES) {
        hits.push(Entity::Competitions);
    }
    if matches_any(&normalized, RESULT_ALIASES) {
        hits.push(Entity::Results);
    }
    if matches_any(&normalized, MEMBER_ALIASES) {
        hits.push(Entity::Members);
    }
    if matches_any(&normalized, ATTENDANCE_ALIASES) {
        hits.push(Entity::Attendance);
    }
    match hits.as_slice() {
        [only] => Ok(*only),
        [] => Err(ImportError::UnknownTable(name.to_string())),
        _ => Err(ImportError::AmbiguousTable(name.to_string())),
    }
}

/// One legacy table found in the store.
#[derive(Debug, Clone)]
pub struct DiscoveredTable {
    pub name: String,
    /// Classified entity, or `None` when the name is ambiguous.
    pub entity: Option<Entity>,
    pub rows: usize,
}

/// Enumerate store tables whose names match the known legacy aliases.
pub fn discover_legacy_tables<S: ClubStore>(
    store: &S,
) -> Result<Vec<DiscoveredTable>, ImportError> {
    let mut found = Vec::new();
    for name in store.legacy_table_names()? {
        let entity = match classify_table(&name) {
            Ok(entity) => Some(entity),
            Err(ImportError::AmbiguousTable(_)) => None,
            // Not a legacy export at all; leave it out of the listing.
            Err(_) => continue,
        };
        let table = store.legacy_table(&name)?;
        found.push(DiscoveredTable {
            name,
            entity,
            rows: table.rows.len(),
        });
    }
    Ok(found)
}

/// One guessed column mapping, flattened for display.
#[derive(Debug, Clone)]
pub struct ProposedMapping {
    pub canonical: String,
    pub source: String,
    pub confidence: f32,
}

/// A migration proposal ready for operator confirmation. Nothing is
/// validated or written until the proposal is confirmed.
#[derive(Debug, Clone)]
pub struct ProposalSummary {
    pub table: String,
    pub entity: Entity,
    pub fields: Vec<ProposedMapping>,
    /// Required canonical headers with no matching column. A non-empty
    /// list means the migration would abort.
    pub missing_required: Vec<String>,
    /// Source columns no canonical field claimed.
    pub unclaimed: Vec<String>,
}

fn summarize<F: CanonicalField>(
    table: &str,
    entity: Entity,
    proposal: MappingProposal<F>,
) -> ProposalSummary {
    let fields = proposal
        .proposals
        .iter()
        .map(|proposed| ProposedMapping {
            canonical: proposed.field.header().to_string(),
            source: proposed.column.header.clone(),
            confidence: proposed.confidence,
        })
        .collect();
    let missing_required = proposal
        .missing
        .iter()
        .filter(|field| field.required())
        .map(|field| field.header().to_string())
        .collect();
    ProposalSummary {
        table: table.to_string(),
        entity,
        fields,
        missing_required,
        unclaimed: proposal.unclaimed,
    }
}

/// Guess a column mapping for one legacy table, scored against the shape
/// of its actual data.
pub fn propose_migration<S: ClubStore>(
    store: &S,
    name: &str,
) -> Result<ProposalSummary, ImportError> {
    let entity = classify_table(name)?;
    let raw = store.legacy_table(name)?;
    let hints = build_column_hints(&raw.columns, &raw.rows);
    let summary = match entity {
        Entity::Competitions => {
            let mapper = HeaderMapper::<CompetitionField>::new(SchemaVersion::Legacy);
            summarize(name, entity, mapper.propose(&raw.columns, &hints))
        }
        Entity::Results => {
            let mapper = HeaderMapper::<ResultField>::new(SchemaVersion::Legacy);
            summarize(name, entity, mapper.propose(&raw.columns, &hints))
        }
        Entity::Members => {
            let mapper = HeaderMapper::<MemberField>::new(SchemaVersion::Legacy);
            summarize(name, entity, mapper.propose(&raw.columns, &hints))
        }
        Entity::Attendance => {
            let mapper = HeaderMapper::<AttendanceField>::new(SchemaVersion::Legacy);
            summarize(name, entity, mapper.propose(&raw.columns, &hints))
        }
    };
    Ok(summary)
}

/// Migrate one confirmed legacy table through the normal import path.
///
/// Legacy rows obey every rule fresh imports do: a result row whose owning
/// competition cannot be resolved is skipped, never an abort.
pub fn migrate<S: ClubStore>(
    store: &mut S,
    name: &str,
    mode: ImportMode,
) -> Result<ImportReport, ImportError> {
    let entity = classify_table(name)?;
    let raw = store.legacy_table(name)?;
    info!(table = name, %entity, rows = raw.rows.len(), "migrating legacy table");
    let table = Table::from_rows(raw.columns, raw.rows);
    let request =
        request_from_table(entity, SchemaVersion::Legacy, &table, mode, ConflictPolicy::Skip)?;
    reconcile(store, request)
}
