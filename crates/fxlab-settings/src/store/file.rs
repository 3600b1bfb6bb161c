//! TOML-file-backed settings store.

use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};
use crate::store::SettingsStore;

/// A settings store persisted as a single TOML document.
///
/// The whole document is read once at [`FileStore::open`] and rewritten on
/// every set, so a crash can lose at most the current mutation. A missing
/// file opens as an empty store (all defaults); a malformed file is an
/// error, left for the caller to surface.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: toml::Table,
}

impl FileStore {
    /// Opens the store backed by the TOML document at `path`.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::StoreParse`] if the file exists but is not valid
    ///   TOML.
    /// - [`SettingsError::Io`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let table = match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| SettingsError::StoreParse(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, table })
    }

    /// The document path this store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialises the document and writes it out, creating parent
    /// directories when needed.
    fn write_through(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.table)
            .map_err(|e| SettingsError::StoreEncode(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get_value(&self, key: &str) -> Option<toml::Value> {
        self.table.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: toml::Value) -> SettingsResult<()> {
        self.table.insert(key.to_owned(), value);
        self.write_through()
    }
}
