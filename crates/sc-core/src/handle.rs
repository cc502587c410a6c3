//! Shared reference handles.
//!
//! A [`Handle<T>`] is a shared, read-only reference to a market object.
//! A [`RelinkableHandle<T>`] additionally allows the contained object to be
//! swapped out at runtime; every relink bumps the handle's version stamp so
//! that consumers caching derived state notice the change.

use crate::versioning::{Version, VersionCounter, Versioned};
use std::sync::{Arc, RwLock};

/// A shared, read-only reference to a value of type `T`.
///
/// Cloning a handle is cheap and yields another reference to the same
/// underlying object.
#[derive(Debug)]
pub struct Handle<T: ?Sized> {
    inner: Arc<T>,
}

impl<T> Handle<T> {
    /// Wrap a value in a new handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl<T: ?Sized> Handle<T> {
    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: arc }
    }

    /// The underlying shared pointer.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.inner
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> std::ops::Deref for Handle<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized + Versioned> Versioned for Handle<T> {
    fn version(&self) -> Version {
        self.inner.version()
    }
}

/// A handle whose contained value can be replaced at runtime.
///
/// All clones of a relinkable handle share the same slot: relinking through
/// one clone is visible through every other. Relinking (or unlinking) bumps
/// the slot's version stamp.
#[derive(Debug)]
pub struct RelinkableHandle<T: ?Sized> {
    slot: Arc<Slot<T>>,
}

#[derive(Debug)]
struct Slot<T: ?Sized> {
    relinks: VersionCounter,
    link: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> RelinkableHandle<T> {
    /// Create a handle that is initially empty.
    pub fn empty() -> Self {
        Self {
            slot: Arc::new(Slot {
                relinks: VersionCounter::new(),
                link: RwLock::new(None),
            }),
        }
    }

    /// Create a handle linked to an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        let handle = Self::empty();
        handle.link_to_arc(arc);
        handle
    }

    /// Replace the contained value with an existing `Arc`.
    pub fn link_to_arc(&self, arc: Arc<T>) {
        *self.slot.link.write().expect("handle slot poisoned") = Some(arc);
        self.slot.relinks.bump();
    }

    /// Detach the handle from any value.
    pub fn unlink(&self) {
        *self.slot.link.write().expect("handle slot poisoned") = None;
        self.slot.relinks.bump();
    }

    /// Whether the handle currently contains no value.
    pub fn is_empty(&self) -> bool {
        self.slot
            .link
            .read()
            .expect("handle slot poisoned")
            .is_none()
    }

    /// A snapshot of the currently linked value, if any.
    pub fn current(&self) -> Option<Arc<T>> {
        self.slot.link.read().expect("handle slot poisoned").clone()
    }
}

impl<T> RelinkableHandle<T> {
    /// Create a handle linked to a freshly wrapped value.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }
}

impl<T: ?Sized> Clone for RelinkableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: ?Sized + Versioned> Versioned for RelinkableHandle<T> {
    fn version(&self) -> Version {
        let target = self.current().map(|t| t.version()).unwrap_or(0);
        self.slot.relinks.current().max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(f64);
    impl Versioned for Flat {
        fn version(&self) -> Version {
            0
        }
    }

    #[test]
    fn relink_is_visible_through_clones() {
        let h = RelinkableHandle::new(Flat(0.02));
        let h2 = h.clone();
        h.link_to_arc(Arc::new(Flat(0.03)));
        assert!((h2.current().unwrap().0 - 0.03).abs() < 1e-15);
    }

    #[test]
    fn relink_bumps_version() {
        let h = RelinkableHandle::new(Flat(0.02));
        let v0 = h.version();
        h.link_to_arc(Arc::new(Flat(0.03)));
        assert!(h.version() > v0);
    }

    #[test]
    fn empty_handle() {
        let h: RelinkableHandle<Flat> = RelinkableHandle::empty();
        assert!(h.is_empty());
        assert!(h.current().is_none());
        h.link_to_arc(Arc::new(Flat(0.01)));
        assert!(!h.is_empty());
    }
}
