use thiserror::Error;

/// Errors from header mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Required canonical fields could not be matched to any header.
    /// Importing a partially-mapped document silently would be a
    /// correctness bug, so the whole import aborts before any row runs.
    #[error("{entity} import aborted, required columns not found: {}", fields.join(", "))]
    MissingFields {
        entity: &'static str,
        fields: Vec<String>,
    },
}
