//! Observable ordered containers backing list views.
//!
//! [`Catalog`] is the shared core: an ordered entry list plus observer
//! registration, with structural mutations bracketed by the
//! [`CatalogEvent::AboutToReset`] / [`CatalogEvent::Reset`] pair. The two
//! display-facing variants are [`images::ImageCatalog`] (adds a
//! current-selection index) and [`menus::MenuCatalog`] (recent projects).
//!
//! Structural mutators are crate-private: outside this crate a catalog is
//! read-only, and all content changes go through the coordinator in
//! [`crate::settings`].

pub mod images;
pub mod menus;

pub use images::{ImageCatalog, ImageEntry};
pub use menus::{MenuCatalog, MenuEntry};

use crate::event::{CatalogEvent, Subscribers};

/// An ordered, observable list of entries.
///
/// Insertion order is meaningful: list views display entries in order, and
/// the recent-projects list relies on it for most-recent-first semantics.
#[derive(Debug)]
pub struct Catalog<T> {
    entries: Vec<T>,
    subscribers: Subscribers<CatalogEvent>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Catalog<T> {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Iterates over the entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Registers an observer for this catalog's change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(CatalogEvent) + 'static) {
        self.subscribers.subscribe(callback);
    }

    /// Runs a structural mutation bracketed by the reset notification pair.
    ///
    /// `AboutToReset` fires while the old contents are still in place,
    /// `Reset` after the mutation completed.
    pub(crate) fn reset_with<R>(&mut self, mutate: impl FnOnce(&mut Vec<T>) -> R) -> R {
        self.subscribers.notify(CatalogEvent::AboutToReset);
        let result = mutate(&mut self.entries);
        self.subscribers.notify(CatalogEvent::Reset);
        result
    }

    /// Emits a non-structural notification (selection movement).
    pub(crate) fn notify(&mut self, event: CatalogEvent) {
        self.subscribers.notify(event);
    }
}
