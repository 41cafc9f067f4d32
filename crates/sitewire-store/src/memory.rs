//! In-memory preference store.

use std::collections::HashMap;

use crate::{PrefKey, PreferenceStore};

/// Non-durable store for tests and one-shot runs.
///
/// # Example
///
/// ```
/// use sitewire_store::{MemoryStore, PrefKey, PreferenceStore};
///
/// let mut store = MemoryStore::new().with(PrefKey::Theme, "dark");
/// assert_eq!(store.get(PrefKey::Theme), "dark");
/// assert_eq!(store.get(PrefKey::Language), "ro"); // default
/// store.set(PrefKey::Language, "en");
/// assert_eq!(store.get(PrefKey::Language), "en");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<PrefKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, for building test fixtures fluently.
    pub fn with(mut self, key: PrefKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: PrefKey) -> String {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value().to_string())
    }

    fn set(&mut self, key: PrefKey, value: &str) {
        self.values.insert(key, value.to_string());
    }
}
