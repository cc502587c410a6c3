//! `Quote` trait and the `SimpleQuote` implementation.

use sc_core::{Real, Version, VersionCounter, Versioned};
use std::sync::RwLock;

/// A market-observable value.
///
/// Quotes are shared between consumers, so mutation goes through interior
/// mutability and bumps a version stamp; cached calculations compare stamps
/// to detect a changed quote.
pub trait Quote: Versioned + std::fmt::Debug + Send + Sync {
    /// The current value, or `None` while the quote is unset.
    fn value(&self) -> Option<Real>;

    /// Whether the quote currently holds a value.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

/// A plain, settable market quote.
#[derive(Debug)]
pub struct SimpleQuote {
    value: RwLock<Option<Real>>,
    changes: VersionCounter,
}

impl SimpleQuote {
    /// Create a quote with the given value.
    pub fn new(value: Real) -> Self {
        Self {
            value: RwLock::new(Some(value)),
            changes: VersionCounter::new(),
        }
    }

    /// Create an unset (invalid) quote.
    pub fn empty() -> Self {
        Self {
            value: RwLock::new(None),
            changes: VersionCounter::new(),
        }
    }

    /// Set a new value.
    pub fn set_value(&self, value: Real) {
        *self.value.write().expect("quote lock poisoned") = Some(value);
        self.changes.bump();
    }

    /// Clear the value, making the quote invalid.
    pub fn reset(&self) {
        *self.value.write().expect("quote lock poisoned") = None;
        self.changes.bump();
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        *self.value.read().expect("quote lock poisoned")
    }
}

impl Versioned for SimpleQuote {
    fn version(&self) -> Version {
        self.changes.current()
    }
}
