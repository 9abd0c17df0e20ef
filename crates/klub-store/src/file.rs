use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, StoreError};
use crate::memory::MemoryStore;

/// Load a store from its JSON file. A missing file is an empty store,
/// so first runs need no setup step.
pub fn load_store(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        info!(path = %path.display(), "store file not found, starting empty");
        return Ok(MemoryStore::new());
    }
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
        path: path.display().to_string(),
        source,
    })
}

pub fn save_store(path: &Path, store: &MemoryStore) -> Result<()> {
    let text = serde_json::to_string_pretty(store).map_err(|source| StoreError::Corrupt {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}
