//! The settings coordinator.
//!
//! [`ApplicationSettings`] owns the image catalogs, the recent-projects
//! list, and the scalar editor preferences, and keeps all of them in sync
//! with an injected [`SettingsStore`]. Frontends read catalogs and
//! preferences through it, subscribe for change notifications, and route
//! every mutation through its methods; the catalogs themselves expose no
//! public way to grow or shrink.
//!
//! Persistence is write-through and non-fatal: a store that cannot be
//! written leaves the in-memory state authoritative for the rest of the
//! session, with a warning in the log.

use std::path::Path;

use serde::Serialize;

use crate::catalog::images::{local_path, ImageCatalog, ImageEntry};
use crate::catalog::menus::{MenuCatalog, MenuEntry};
use crate::event::{PreferenceEvent, Subscribers};
use crate::probe::ImageProbe;
use crate::resolve::ResourceResolver;
use crate::shader::ShaderManager;
use crate::store::{
    RecentProjectRecord, SettingsStore, SettingsStoreExt, KEY_CODE_FONT_FILE, KEY_CODE_FONT_SIZE,
    KEY_CUSTOM_SOURCE_IMAGES, KEY_LEGACY_SHADERS, KEY_RECENT_PROJECTS,
};

/// Built-in source images, seeded at the head of the catalog in this order.
const DEFAULT_SOURCE_IMAGES: [&str; 4] = [
    "builtin/images/fxlab_logo.png",
    "builtin/images/checkerboard.png",
    "builtin/images/circle_white.png",
    "builtin/images/circle_black.png",
];

/// Built-in preview backgrounds, kept under their relative names.
const DEFAULT_BACKGROUND_IMAGES: [&str; 3] = [
    "backgrounds/dark.jpg",
    "backgrounds/light.jpg",
    "backgrounds/colorful.jpg",
];

/// Bundled code-editor font, used until the user picks another one.
const DEFAULT_CODE_FONT_FILE: &str = "fonts/JetBrainsMono-Regular.ttf";

/// Default code-editor font size in points.
const DEFAULT_CODE_FONT_SIZE: u32 = 14;

/// The recent-projects list holds at most this many entries.
const MAX_RECENT_PROJECTS: usize = 6;

/// Owner of the editor's persistent settings.
///
/// Constructed once per application run with its four collaborators:
/// the [`SettingsStore`] holding the persisted values, a
/// [`ResourceResolver`] that locates bundled assets, an [`ImageProbe`]
/// for reading image sizes, and the [`ShaderManager`] to poke when the
/// shader profile changes.
pub struct ApplicationSettings {
    store: Box<dyn SettingsStore>,
    resolver: Box<dyn ResourceResolver>,
    probe: Box<dyn ImageProbe>,
    shaders: Box<dyn ShaderManager>,
    source_images: ImageCatalog,
    background_images: ImageCatalog,
    recent_projects: MenuCatalog,
    subscribers: Subscribers<PreferenceEvent>,
    /// Number of built-in entries at the head of `source_images`.
    ///
    /// Invariant: the catalog is always laid out as the built-in prefix
    /// followed by the custom tail, and the persisted custom-sources list
    /// mirrors that tail in order. [`Self::remove_source_image`] relies on
    /// this layout.
    default_source_count: usize,
}

impl ApplicationSettings {
    /// Builds the coordinator and seeds its catalogs.
    ///
    /// Seeding order is fixed: the built-in source images (resolved
    /// through `resolver`), then the persisted custom sources, then the
    /// built-in backgrounds. The recent-projects list stays empty until
    /// the first [`Self::update_recent_projects`] call.
    pub fn new(
        store: Box<dyn SettingsStore>,
        resolver: Box<dyn ResourceResolver>,
        probe: Box<dyn ImageProbe>,
        shaders: Box<dyn ShaderManager>,
    ) -> Self {
        let mut settings = Self {
            store,
            resolver,
            probe,
            shaders,
            source_images: ImageCatalog::new(),
            background_images: ImageCatalog::new(),
            recent_projects: MenuCatalog::new(),
            subscribers: Subscribers::new(),
            default_source_count: 0,
        };

        for relative in DEFAULT_SOURCE_IMAGES {
            let absolute = settings.resolver.resolve(relative);
            settings.add_source_image(&absolute.to_string_lossy(), false);
        }
        settings.default_source_count = settings.source_images.len();

        let customs: Vec<String> = settings
            .store
            .get(KEY_CUSTOM_SOURCE_IMAGES)
            .unwrap_or_default();
        for file in customs {
            settings.add_source_image(&file, true);
        }

        for relative in DEFAULT_BACKGROUND_IMAGES {
            settings
                .background_images
                .push(ImageEntry::new(relative, false));
        }

        settings
    }

    // --- source images ---

    /// Adds a selectable source image to the catalog.
    ///
    /// Returns `false` when `file` is empty or already present (exact
    /// string match). The entry's dimensions come from the probe, with a
    /// `file://` scheme stripped for the filesystem lookup only; a probe
    /// failure is logged and leaves the size at zero. Removable entries
    /// are also appended to the persisted custom-sources list, unless
    /// already recorded there.
    pub fn add_source_image(&mut self, file: &str, can_remove: bool) -> bool {
        if file.is_empty() {
            return false;
        }
        if self.source_images.contains_file(file) {
            tracing::warn!("image already in the catalog, not adding: {file}");
            return false;
        }

        let entry = match self.probe.dimensions(Path::new(local_path(file))) {
            Ok((width, height)) => ImageEntry::new(file, can_remove).with_dimensions(width, height),
            Err(e) => {
                tracing::warn!("cannot read image {file}: {e}");
                ImageEntry::new(file, can_remove)
            }
        };
        self.source_images.push(entry);

        if can_remove {
            let mut customs: Vec<String> = self
                .store
                .get(KEY_CUSTOM_SOURCE_IMAGES)
                .unwrap_or_default();
            if !customs.iter().any(|recorded| recorded == file) {
                customs.push(file.to_owned());
                self.persist(KEY_CUSTOM_SOURCE_IMAGES, &customs);
            }
        }
        true
    }

    /// Removes the source image at `index` from the catalog.
    ///
    /// Returns `false` (no change, no notification) when `index` is out
    /// of bounds. For entries in the custom tail the matching persisted
    /// record is dropped as well; its list position is
    /// `index - default_source_count`, which holds as long as the
    /// built-in prefix is intact.
    pub fn remove_source_image(&mut self, index: usize) -> bool {
        if !self.source_images.remove_at(index) {
            return false;
        }

        if let Some(custom_index) = index.checked_sub(self.default_source_count) {
            let mut customs: Vec<String> = self
                .store
                .get(KEY_CUSTOM_SOURCE_IMAGES)
                .unwrap_or_default();
            if custom_index < customs.len() {
                customs.remove(custom_index);
                self.persist(KEY_CUSTOM_SOURCE_IMAGES, &customs);
            }
        }
        true
    }

    /// Number of built-in entries at the head of the source catalog.
    pub fn default_source_count(&self) -> usize {
        self.default_source_count
    }

    // --- recent projects ---

    /// Promotes the project (`name`, `file`) to the front of the
    /// recent-projects list.
    ///
    /// The persisted list is re-read first (at most six records, with
    /// incomplete ones skipped), so edits from a concurrent editor
    /// instance are picked up. The project is then moved or prepended,
    /// the list truncated to capacity, persisted, and mirrored into the
    /// in-memory catalog.
    ///
    /// Passing an empty `name` or `file` refreshes the in-memory list
    /// from storage without writing anything back. Returns early, with no
    /// notification, when `file` already heads the in-memory list.
    pub fn update_recent_projects(&mut self, name: &str, file: &str) {
        if !file.is_empty() {
            if let Some(first) = self.recent_projects.first() {
                if first.file == file {
                    return;
                }
            }
        }

        let stored: Vec<RecentProjectRecord> =
            self.store.get(KEY_RECENT_PROJECTS).unwrap_or_default();

        let mut list: Vec<MenuEntry> = Vec::new();
        let mut found_at: Option<usize> = None;
        // The capacity cap applies to records read, before incomplete
        // ones are dropped.
        for record in stored.into_iter().take(MAX_RECENT_PROJECTS) {
            if record.name.is_empty() || record.file.is_empty() {
                continue;
            }
            if record.file == file {
                found_at = Some(list.len());
            }
            list.push(MenuEntry::new(record.name, record.file));
        }

        if !name.is_empty() && !file.is_empty() {
            match found_at {
                None => list.insert(0, MenuEntry::new(name, file)),
                Some(0) => {}
                Some(position) => {
                    let entry = list.remove(position);
                    list.insert(0, entry);
                }
            }
            list.truncate(MAX_RECENT_PROJECTS);

            let records: Vec<RecentProjectRecord> = list
                .iter()
                .map(|entry| RecentProjectRecord::new(entry.name.as_str(), entry.file.as_str()))
                .collect();
            self.persist(KEY_RECENT_PROJECTS, &records);
        }

        self.recent_projects.replace_all(list);
    }

    /// Empties the recent-projects list, in storage and in memory.
    pub fn clear_recent_projects(&mut self) {
        self.persist(KEY_RECENT_PROJECTS, &Vec::<RecentProjectRecord>::new());
        self.recent_projects.clear();
    }

    /// Removes the recent project whose record matches `file`.
    ///
    /// The first matching persisted record is dropped, along with the
    /// in-memory entry at the same position. A `file` with no record is a
    /// silent no-op.
    pub fn remove_recent_project(&mut self, file: &str) {
        let mut records: Vec<RecentProjectRecord> =
            self.store.get(KEY_RECENT_PROJECTS).unwrap_or_default();
        if let Some(position) = records.iter().position(|record| record.file == file) {
            records.remove(position);
            self.persist(KEY_RECENT_PROJECTS, &records);
            self.recent_projects.remove_at(position);
        }
    }

    // --- preferences ---

    /// Whether effects are baked with the legacy shading profile.
    pub fn use_legacy_shaders(&self) -> bool {
        self.store.get_or(KEY_LEGACY_SHADERS, false)
    }

    /// Switches the shading profile.
    ///
    /// An actual change is persisted and notified, then the shader
    /// manager re-tags the baked shaders and rebakes the current effect,
    /// in that order. Setting the current value does nothing.
    pub fn set_use_legacy_shaders(&mut self, legacy: bool) {
        if self.use_legacy_shaders() == legacy {
            return;
        }
        self.persist(KEY_LEGACY_SHADERS, &legacy);
        self.subscribers
            .notify(PreferenceEvent::LegacyShadersChanged);
        self.shaders.update_baked_versions();
        self.shaders.rebake();
    }

    /// The code-editor font file.
    pub fn code_font_file(&self) -> String {
        self.store
            .get(KEY_CODE_FONT_FILE)
            .unwrap_or_else(|| DEFAULT_CODE_FONT_FILE.to_owned())
    }

    /// Sets the code-editor font file. Notifies only on an actual change.
    pub fn set_code_font_file(&mut self, file: &str) {
        if self.code_font_file() == file {
            return;
        }
        self.persist(KEY_CODE_FONT_FILE, &file);
        self.subscribers
            .notify(PreferenceEvent::CodeFontFileChanged);
    }

    /// The code-editor font size in points.
    pub fn code_font_size(&self) -> u32 {
        self.store.get_or(KEY_CODE_FONT_SIZE, DEFAULT_CODE_FONT_SIZE)
    }

    /// Sets the code-editor font size. Notifies only on an actual change.
    pub fn set_code_font_size(&mut self, size: u32) {
        if self.code_font_size() == size {
            return;
        }
        self.persist(KEY_CODE_FONT_SIZE, &size);
        self.subscribers
            .notify(PreferenceEvent::CodeFontSizeChanged);
    }

    /// Puts both code-font preferences back to their bundled defaults.
    ///
    /// Each value goes through its own setter, so observers hear one
    /// notification per value that actually changed.
    pub fn reset_code_font(&mut self) {
        self.set_code_font_file(DEFAULT_CODE_FONT_FILE);
        self.set_code_font_size(DEFAULT_CODE_FONT_SIZE);
    }

    // --- access and observation ---

    /// The selectable source-image catalog.
    pub fn source_images(&self) -> &ImageCatalog {
        &self.source_images
    }

    /// Mutable source-image catalog, for moving the selection and
    /// registering observers. Structural edits stay behind
    /// [`Self::add_source_image`] and [`Self::remove_source_image`].
    pub fn source_images_mut(&mut self) -> &mut ImageCatalog {
        &mut self.source_images
    }

    /// The preview-background catalog.
    pub fn background_images(&self) -> &ImageCatalog {
        &self.background_images
    }

    /// Mutable preview-background catalog.
    pub fn background_images_mut(&mut self) -> &mut ImageCatalog {
        &mut self.background_images
    }

    /// The recent-projects catalog, most recent first.
    pub fn recent_projects(&self) -> &MenuCatalog {
        &self.recent_projects
    }

    /// Mutable recent-projects catalog, for registering observers.
    pub fn recent_projects_mut(&mut self) -> &mut MenuCatalog {
        &mut self.recent_projects
    }

    /// Registers an observer for preference-change notifications.
    pub fn subscribe_preferences(&mut self, callback: impl FnMut(PreferenceEvent) + 'static) {
        self.subscribers.subscribe(callback);
    }

    /// Writes a value through to the store, absorbing write failures.
    ///
    /// The in-memory state stays authoritative for the session when the
    /// store cannot be written.
    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!("failed to persist {key}: {e}");
        }
    }
}
