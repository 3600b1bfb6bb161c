//! Change notifications for display bindings.
//!
//! Notifications flow **settings layer → UI**. Observers register a
//! callback on a catalog (or on the coordinator for preference changes)
//! and are invoked synchronously, before the mutating call returns.
//! Structural catalog mutations are bracketed by an
//! [`CatalogEvent::AboutToReset`] / [`CatalogEvent::Reset`] pair so that
//! bindings can drop and re-read the list wholesale — no incremental
//! diffing is offered.
//!
//! The whole layer is single-threaded by contract, so callbacks are plain
//! `FnMut` closures with no `Send`/`Sync` bounds.

/// A notification emitted by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A structural mutation is about to happen; the list contents are
    /// still the old ones.
    AboutToReset,
    /// A structural mutation finished; re-read the list.
    Reset,
    /// The current-selection index moved (image catalogs only).
    SelectionChanged,
}

/// A notification emitted by the coordinator when a preference actually
/// changes value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceEvent {
    /// The legacy-shaders flag flipped.
    LegacyShadersChanged,
    /// The code-editor font file changed.
    CodeFontFileChanged,
    /// The code-editor font size changed.
    CodeFontSizeChanged,
}

/// A registry of observer callbacks for one event type.
///
/// Delivery is synchronous and in registration order. Observers cannot be
/// unregistered; bindings in this layer live as long as the catalogs they
/// watch.
pub struct Subscribers<E> {
    callbacks: Vec<Box<dyn FnMut(E)>>,
}

impl<E> Subscribers<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Registers an observer callback.
    pub fn subscribe(&mut self, callback: impl FnMut(E) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E: Copy> Subscribers<E> {
    /// Delivers `event` to every observer, in registration order.
    pub fn notify(&mut self, event: E) {
        for callback in &mut self.callbacks {
            callback(event);
        }
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
