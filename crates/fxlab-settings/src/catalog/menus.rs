//! Menu catalog: (name, file) pairs for the recent-projects menu.

use crate::catalog::Catalog;
use crate::event::CatalogEvent;

/// One recent-project record: display name plus project file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Display label shown in the menu.
    pub name: String,
    /// Project file path, unique within the list.
    pub file: String,
}

impl MenuEntry {
    /// Creates a menu entry.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// An ordered, observable list of [`MenuEntry`] values.
///
/// The recent-projects coordinator replaces the contents wholesale after
/// every most-recently-used update, so the catalog offers replace/clear/
/// remove rather than fine-grained edits.
#[derive(Debug, Default)]
pub struct MenuCatalog {
    list: Catalog<MenuEntry>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            list: Catalog::new(),
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
    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.list.get(index)
    }

    /// Returns the first (most recent) entry, if any.
    pub fn first(&self) -> Option<&MenuEntry> {
        self.list.get(0)
    }

    /// Iterates over the entries, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.list.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[MenuEntry] {
        self.list.entries()
    }

    /// Registers an observer for this catalog's change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(CatalogEvent) + 'static) {
        self.list.subscribe(callback);
    }

    /// Replaces the whole list, emitting the reset pair.
    pub(crate) fn replace_all(&mut self, entries: Vec<MenuEntry>) {
        self.list.reset_with(|current| *current = entries);
    }

    /// Empties the list, emitting the reset pair.
    pub(crate) fn clear(&mut self) {
        self.list.reset_with(Vec::clear);
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
