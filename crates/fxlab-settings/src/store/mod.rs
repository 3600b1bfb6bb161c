//! Durable key-value storage for user preferences.
//!
//! The coordinator talks to a [`SettingsStore`] trait object, so the
//! backing medium is swappable: [`file::FileStore`] keeps a TOML document
//! on disk and writes it through on every set, [`memory::MemoryStore`] is
//! ephemeral (tests, dry runs). Values are [`toml::Value`]s; the typed
//! [`SettingsStoreExt`] helpers convert through serde at the call site.
//!
//! Absent keys are not an error — every published key has a documented
//! default applied by the reader.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Store key: list of user-added source image paths.
pub const KEY_CUSTOM_SOURCE_IMAGES: &str = "customSourceImages";
/// Store key: ordered recent-project records, most recent first.
pub const KEY_RECENT_PROJECTS: &str = "recentProjects";
/// Store key: boolean legacy-shaders flag.
pub const KEY_LEGACY_SHADERS: &str = "useLegacyShaders";
/// Store key: code-editor font file path.
pub const KEY_CODE_FONT_FILE: &str = "codeFontFile";
/// Store key: code-editor font point size.
pub const KEY_CODE_FONT_SIZE: &str = "codeFontSize";

/// The persisted shape of one recent-project record.
///
/// Fields serialize under the published `projectName` / `projectFile`
/// names; both default to empty so that records with missing fields can be
/// read (and then skipped) rather than failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProjectRecord {
    /// Display name of the project.
    #[serde(rename = "projectName", default)]
    pub name: String,
    /// Path of the project file.
    #[serde(rename = "projectFile", default)]
    pub file: String,
}

impl RecentProjectRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// A persistent key-value store for user preferences.
///
/// Implementations persist each `set_value` before returning (write
/// through); reads are served from memory. All access is single-threaded,
/// matching the rest of the layer.
pub trait SettingsStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get_value(&self, key: &str) -> Option<toml::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: toml::Value) -> SettingsResult<()>;
}

/// Serde-typed convenience layer over [`SettingsStore`].
///
/// A stored value that fails to deserialize as the requested type is
/// treated the same as an absent key, so corrupted or hand-edited entries
/// degrade to the documented defaults instead of wedging the layer.
pub trait SettingsStoreExt: SettingsStore {
    /// Returns the value for `key` deserialized as `T`, or `None`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_value(key).and_then(|value| value.try_into().ok())
    }

    /// Returns the value for `key`, or `default` when absent or untyped.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Serializes `value` and stores it under `key`.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> SettingsResult<()> {
        let value =
            toml::Value::try_from(value).map_err(|e| SettingsError::StoreEncode(e.to_string()))?;
        self.set_value(key, value)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStoreExt for S {}
