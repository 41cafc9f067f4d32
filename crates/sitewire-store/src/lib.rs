//! User preference persistence for the sitewire interactivity layer.
//!
//! Two preferences exist: the visual theme and the content language. Both
//! are short strings persisted across page loads in a per-origin key-value
//! store. This crate models that store behind the [`PreferenceStore`] trait
//! so components receive it by injection instead of reaching for ambient
//! global state:
//!
//! - [`MemoryStore`]: in-memory fake for tests and one-shot runs.
//! - [`JsonFileStore`]: durable JSON-file-backed store, the analog of the
//!   browser's per-origin storage.
//!
//! # Write-through, no subscriptions
//!
//! Every `set` is immediately visible to any later `get`, but nothing pushes
//! updates to components holding a cached copy; each consumer re-reads on
//! its own trigger. Writes are last-write-wins, and there is no concurrent
//! writer in this single-user, synchronous-event model.
//!
//! # Silent storage
//!
//! The persistence layer follows the host's access contract: a store that
//! cannot write keeps serving reads and swallows the failure (logged at
//! `warn`, never surfaced to the user). Only opening a corrupt store file
//! reports a typed error, at construction time.

mod file;
mod memory;

pub use file::{JsonFileStore, StoreError};
pub use memory::MemoryStore;

/// The two persisted preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    Theme,
    Language,
}

impl PrefKey {
    pub const ALL: [PrefKey; 2] = [PrefKey::Theme, PrefKey::Language];

    /// Storage key string, shared by every store implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefKey::Theme => "theme",
            PrefKey::Language => "language",
        }
    }

    /// First-visit default: `light` theme, Romanian content.
    pub fn default_value(&self) -> &'static str {
        match self {
            PrefKey::Theme => "light",
            PrefKey::Language => "ro",
        }
    }
}

/// Injected read/write capability for user preferences.
pub trait PreferenceStore {
    /// Returns the stored value, falling back to the key's default when the
    /// key was never written.
    fn get(&self, key: PrefKey) -> String;

    /// Writes through immediately. Persistence failures are swallowed per
    /// the host's access contract.
    fn set(&mut self, key: PrefKey, value: &str);
}
