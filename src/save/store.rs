//! Key-value persistence seam.
//!
//! The engine does not own a storage backend. Front-ends implement
//! [`KeyValueStore`] over whatever they have (preferences file, browser
//! storage, a database); [`MemoryStore`] is the in-process implementation
//! used by tests and headless sessions.

use rustc_hash::FxHashMap;

/// Errors reported by a storage backend.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("storage backend failed to write {key:?}: {message}")]
    Write { key: String, message: String },
    #[error("storage backend failed to read {key:?}: {message}")]
    Read { key: String, message: String },
}

/// Minimal typed key-value store.
///
/// Missing integers read as 0, missing strings as `None`, matching a
/// preferences store with defaults.
pub trait KeyValueStore {
    /// Read an integer, 0 if absent.
    fn get_int(&self, key: &str) -> Result<u64, SaveError>;

    /// Write an integer.
    fn set_int(&mut self, key: &str, value: u64) -> Result<(), SaveError>;

    /// Read a string, `None` if absent.
    fn get_string(&self, key: &str) -> Result<Option<String>, SaveError>;

    /// Write a string.
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ints: FxHashMap<String, u64>,
    strings: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys of both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ints.len() + self.strings.len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_int(&self, key: &str) -> Result<u64, SaveError> {
        Ok(self.ints.get(key).copied().unwrap_or(0))
    }

    fn set_int(&mut self, key: &str, value: u64) -> Result<(), SaveError> {
        self.ints.insert(key.to_string(), value);
        Ok(())
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.strings.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
