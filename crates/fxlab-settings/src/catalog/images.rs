//! Image catalog: selectable image assets for the effect editor.

use std::path::Path;

use crate::catalog::Catalog;
use crate::event::CatalogEvent;

/// A single selectable image asset.
///
/// `file` is the string handed in by the caller — either a plain path or a
/// `file://` URI — kept verbatim so display bindings can round-trip it.
/// Built-in entries are seeded with `can_remove = false` and survive for the
/// process lifetime; user-added entries are removable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Display label, derived from the file stem.
    pub name: String,
    /// Path or URI of the image file, unique within a catalog.
    pub file: String,
    /// Pixel width, `0` when probing failed or was skipped.
    pub width: u32,
    /// Pixel height, `0` when probing failed or was skipped.
    pub height: u32,
    /// Whether the entry may be removed from the catalog.
    pub can_remove: bool,
}

impl ImageEntry {
    /// Creates an entry for `file` with zero dimensions.
    ///
    /// The display name is the file stem (`"a/b/logo.png"` → `"logo"`),
    /// empty when no stem exists.
    pub fn new(file: impl Into<String>, can_remove: bool) -> Self {
        let file = file.into();
        let name = display_name(&file);
        Self {
            name,
            file,
            width: 0,
            height: 0,
            can_remove,
        }
    }

    /// Returns the entry with the probed pixel dimensions filled in.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Derives the display label for a file string (stem of the local path).
fn display_name(file: &str) -> String {
    Path::new(local_path(file))
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Strips a `file://` scheme, turning a URI into a local path.
///
/// Plain paths pass through unchanged. `file:///home/x.png` becomes
/// `/home/x.png`.
pub(crate) fn local_path(file: &str) -> &str {
    file.strip_prefix("file://").unwrap_or(file)
}

/// An ordered, observable list of [`ImageEntry`] values with a
/// current-selection index.
///
/// The selection index is a free-running pointer: it is not clamped when
/// entries come and go, and [`ImageCatalog::current_file`] simply returns
/// `None` while it points past the end.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    list: Catalog<ImageEntry>,
    current_index: usize,
}

impl ImageCatalog {
    /// Creates an empty catalog with the selection at index `0`.
    pub fn new() -> Self {
        Self {
            list: Catalog::new(),
            current_index: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.list.get(index)
    }

    /// Iterates over the entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageEntry> {
        self.list.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[ImageEntry] {
        self.list.entries()
    }

    /// Returns `true` if an entry with exactly this `file` string exists.
    ///
    /// The comparison is case-sensitive.
    pub fn contains_file(&self, file: &str) -> bool {
        self.list.iter().any(|entry| entry.file == file)
    }

    /// The current-selection index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Moves the selection pointer.
    ///
    /// No-op (and no notification) when `index` equals the current
    /// selection; otherwise emits [`CatalogEvent::SelectionChanged`].
    pub fn set_current_index(&mut self, index: usize) {
        if self.current_index == index {
            return;
        }
        self.current_index = index;
        self.list.notify(CatalogEvent::SelectionChanged);
    }

    /// The `file` of the selected entry, or `None` while the selection
    /// points past the end of the list.
    pub fn current_file(&self) -> Option<&str> {
        self.list
            .get(self.current_index)
            .map(|entry| entry.file.as_str())
    }

    /// Registers an observer for this catalog's change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(CatalogEvent) + 'static) {
        self.list.subscribe(callback);
    }

    /// Appends an entry, emitting the reset pair.
    pub(crate) fn push(&mut self, entry: ImageEntry) {
        self.list.reset_with(|entries| entries.push(entry));
    }

    /// Removes the entry at `index`, emitting the reset pair.
    ///
    /// Returns `false` (no notification, no change) when `index` is out of
    /// bounds.
    pub(crate) fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.list.len() {
            return false;
        }
        self.list.reset_with(|entries| {
            entries.remove(index);
        });
        true
    }
}
