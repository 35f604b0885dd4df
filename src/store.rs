//! Persistent key-value store seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage` (see the client crate).
//! [`MemoryStore`] stands in for it in tests and non-browser hosts.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::error::ThemeError;

/// Synchronous origin-scoped key-value store that survives reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when never written.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageRead`] when the backend refuses access.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageWrite`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory [`PreferenceStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, read_only: false }
    }

    /// Store that rejects every write, like storage disabled by policy or
    /// over quota.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: HashMap::new(), read_only: true }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::StorageWrite {
                key: key.to_owned(),
                reason: "store is read-only".to_owned(),
            });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
