use klub_model::{Attendance, Competition, CompetitionResult, Member};

/// Whether the engine writes anything at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Full classification, no writes. Counts match what a commit on the
    /// same store state would produce.
    DryRun,
    #[default]
    Commit,
}

/// What to do with a competition row whose natural key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Leave the stored record alone and report the row as skipped.
    #[default]
    Skip,
    /// Fill blank fields and append unseen image paths from the incoming
    /// row. Stored non-blank data always wins.
    Merge,
}

/// Everything one reconciliation run needs, assembled up front.
///
/// The engine holds no state between runs; two imports of the same request
/// against the same store state classify identically. Each record carries
/// the spreadsheet row number it came from so the report points at rows
/// the user can see.
#[derive(Debug, Clone, Default)]
pub struct ImportRequest {
    pub mode: ImportMode,
    pub policy: ConflictPolicy,
    pub competitions: Vec<(usize, Competition)>,
    pub results: Vec<(usize, CompetitionResult)>,
    pub members: Vec<(usize, Member)>,
    pub attendance: Vec<(usize, Attendance)>,
    /// Rows already rejected by validation, carried through so the report
    /// covers every row of the document.
    pub row_errors: Vec<(usize, Vec<String>)>,
}

impl ImportRequest {
    pub fn new(mode: ImportMode, policy: ConflictPolicy) -> Self {
        Self {
            mode,
            policy,
            ..Self::default()
        }
    }
}
