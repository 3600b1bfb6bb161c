//! In-memory settings store for tests and dry runs.

use crate::error::SettingsResult;
use crate::store::SettingsStore;

/// A [`SettingsStore`] that never touches the disk.
///
/// Values live for the store's lifetime only. Sets cannot fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: toml::Table,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<toml::Value> {
        self.table.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: toml::Value) -> SettingsResult<()> {
        self.table.insert(key.to_owned(), value);
        Ok(())
    }
}
