//! Settings and persistence layer for the FxLab effect editor.
//!
//! This crate is UI-agnostic: it owns the editor's durable state and hands
//! frontends plain data plus change notifications. It covers three areas:
//!
//! - **Image catalogs** ([`catalog`]): the selectable source images and
//!   preview backgrounds, ordered lists with a current-selection index.
//! - **Recent projects** ([`catalog::MenuCatalog`]): the most-recently-used
//!   project list backing the "Open Recent" menu.
//! - **Preferences** ([`settings::ApplicationSettings`]): the legacy-shaders
//!   flag and the code-editor font, persisted through a pluggable
//!   [`store::SettingsStore`].
//!
//! Everything here is synchronous and single-threaded; observers are plain
//! callbacks invoked before the mutating call returns.
//!
//! # Examples
//!
//! ```no_run
//! use fxlab_settings::{
//!     ApplicationSettings, DataDirResolver, FileProbe, FileStore, NoopShaderManager,
//! };
//!
//! # fn main() -> fxlab_settings::SettingsResult<()> {
//! let store = FileStore::open("/home/user/.config/fxlab/settings.toml")?;
//! let mut settings = ApplicationSettings::new(
//!     Box::new(store),
//!     Box::new(DataDirResolver::new("/usr/share/fxlab")),
//!     Box::new(FileProbe),
//!     Box::new(NoopShaderManager),
//! );
//!
//! settings.add_source_image("/home/user/textures/noise.png", true);
//! settings.update_recent_projects("Neon Glow", "/home/user/projects/neon.fxp");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod event;
pub mod probe;
pub mod resolve;
pub mod settings;
pub mod shader;
pub mod store;

pub use catalog::{Catalog, ImageCatalog, ImageEntry, MenuCatalog, MenuEntry};
pub use error::{SettingsError, SettingsResult};
pub use event::{CatalogEvent, PreferenceEvent};
pub use probe::{FileProbe, ImageProbe};
pub use resolve::{DataDirResolver, ResourceResolver};
pub use settings::ApplicationSettings;
pub use shader::{NoopShaderManager, ShaderManager};
pub use store::{
    FileStore, MemoryStore, RecentProjectRecord, SettingsStore, SettingsStoreExt,
};
