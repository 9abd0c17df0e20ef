use thiserror::Error;

use klub_store::StoreError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("flush csv output: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
