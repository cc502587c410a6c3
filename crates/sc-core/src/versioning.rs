//! Monotonic version stamps.
//!
//! Market objects (quotes, fixing stores, relinkable handles) carry a
//! [`VersionCounter`] that is bumped on every mutation. Consumers that cache
//! derived state record the stamps of their inputs and compare them at query
//! time instead of subscribing to change notifications.
//!
//! Stamps are drawn from one process-wide counter, so the stamp of a
//! composite source is simply the maximum over its parts: any mutation
//! anywhere yields a strictly larger stamp.

use std::sync::atomic::{AtomicU64, Ordering};

/// A point-in-time stamp. Larger means more recent.
pub type Version = u64;

static NEXT: AtomicU64 = AtomicU64::new(1);

fn next_version() -> Version {
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// Something whose mutations can be detected by comparing stamps.
pub trait Versioned {
    /// The stamp of the most recent mutation. Immutable objects return 0.
    fn version(&self) -> Version;
}

/// Per-object mutation counter.
///
/// Embed one in any mutable market object and call [`bump`][Self::bump]
/// from every mutating method.
#[derive(Debug, Default)]
pub struct VersionCounter {
    last: AtomicU64,
}

impl VersionCounter {
    /// Create a counter with no recorded mutation (stamp 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation, advancing the stamp.
    pub fn bump(&self) {
        self.last.store(next_version(), Ordering::Relaxed);
    }

    /// The stamp of the last recorded mutation.
    pub fn current(&self) -> Version {
        self.last.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_increase() {
        let c = VersionCounter::new();
        assert_eq!(c.current(), 0);
        c.bump();
        let v1 = c.current();
        assert!(v1 > 0);
        c.bump();
        assert!(c.current() > v1);
    }

    #[test]
    fn stamps_are_globally_ordered() {
        let a = VersionCounter::new();
        let b = VersionCounter::new();
        a.bump();
        b.bump();
        // b mutated after a, so its stamp is larger
        assert!(b.current() > a.current());
    }
}
