use thiserror::Error;

use klub_ingest::IngestError;
use klub_map::MapError;
use klub_store::StoreError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("store rejected the import, nothing was written: {0}")]
    Store(#[from] StoreError),
    #[error("legacy table '{0}' could not be classified; its name matches more than one entity")]
    AmbiguousTable(String),
    #[error("legacy table '{0}' does not look like a known legacy export")]
    UnknownTable(String),
}
