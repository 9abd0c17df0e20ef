use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("competition {0} already exists")]
    DuplicateCompetition(u32),
    #[error("competition {0} not found")]
    CompetitionNotFound(u32),
    #[error("member already exists: {0}")]
    DuplicateMember(String),
    #[error("member {0} not found")]
    MemberNotFound(u64),
    #[error("legacy table '{0}' not found")]
    LegacyTableNotFound(String),
    #[error("store file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("store file {path}: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
