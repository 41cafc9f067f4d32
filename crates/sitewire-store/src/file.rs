//! Durable JSON-file-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{PrefKey, PreferenceStore};

/// Errors opening a store file. Write failures never reach here; they are
/// swallowed at `set` time per the host's access contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Preferences persisted as a flat JSON object on disk, the analog of the
/// browser's per-origin key-value storage.
///
/// Reads are served from the in-memory copy loaded at open time; every `set`
/// writes the whole file through immediately. A missing file is a first
/// visit, not an error.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens (or initializes) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let body = match serde_json::to_string_pretty(&self.values) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize preferences");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, body) {
            // Storage denied by the host: keep serving the in-memory copy.
            tracing::warn!(path = %self.path.display(), error = %err, "preference write failed");
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: PrefKey) -> String {
        self.values
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.default_value().to_string())
    }

    fn set(&mut self, key: PrefKey, value: &str) {
        self.values.insert(key.as_str().to_string(), value.to_string());
        self.persist();
    }
}
