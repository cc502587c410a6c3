//! Base `Index` trait and the historical fixing store.

use sc_core::{Real, Result, Version, VersionCounter, Versioned};
use sc_time::{Calendar, Date};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Store for historical index fixings.
///
/// Adding or clearing fixings bumps a version stamp so that consumers
/// caching derived state notice the change.
#[derive(Debug, Default)]
pub struct FixingStore {
    data: RwLock<BTreeMap<Date, Real>>,
    changes: VersionCounter,
}

impl FixingStore {
    /// Create a new, empty fixing store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fixing.
    pub fn add(&self, date: Date, value: Real) {
        self.data
            .write()
            .expect("fixing store poisoned")
            .insert(date, value);
        self.changes.bump();
    }

    /// Look up a fixing.
    pub fn get(&self, date: Date) -> Option<Real> {
        self.data
            .read()
            .expect("fixing store poisoned")
            .get(&date)
            .copied()
    }

    /// Number of stored fixings.
    pub fn len(&self) -> usize {
        self.data.read().expect("fixing store poisoned").len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all fixings.
    pub fn clear(&self) {
        self.data.write().expect("fixing store poisoned").clear();
        self.changes.bump();
    }
}

impl Versioned for FixingStore {
    fn version(&self) -> Version {
        self.changes.current()
    }
}

/// Base trait for all market indexes.
///
/// An index's version stamp covers both its fixing store and, for
/// curve-linked indexes, the forwarding-curve handle.
pub trait Index: Versioned + std::fmt::Debug + Send + Sync {
    /// Unique name, e.g. `"EUR-Euribor-6M"`.
    fn name(&self) -> &str;

    /// The calendar fixings are published on.
    fn fixing_calendar(&self) -> &dyn Calendar;

    /// Whether `date` is a valid fixing date.
    fn is_valid_fixing_date(&self, date: Date) -> bool {
        self.fixing_calendar().is_business_day(date)
    }

    /// The fixing for `date`: a stored historical value if present,
    /// otherwise a forecast off the forwarding curve.
    fn fixing(&self, date: Date) -> Result<Real>;

    /// The historical fixing store.
    fn fixing_store(&self) -> &FixingStore;

    /// Record a historical fixing.
    fn add_fixing(&self, date: Date, value: Real) {
        self.fixing_store().add(date, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn store_round_trip() {
        let store = FixingStore::new();
        store.add(date(2025, 1, 15), 0.035);
        assert_eq!(store.get(date(2025, 1, 15)), Some(0.035));
        assert_eq!(store.get(date(2025, 1, 16)), None);
    }

    #[test]
    fn store_mutations_bump_version() {
        let store = FixingStore::new();
        let v0 = store.version();
        store.add(date(2025, 1, 15), 0.035);
        let v1 = store.version();
        assert!(v1 > v0);
        store.clear();
        assert!(store.version() > v1);
        assert!(store.is_empty());
    }
}
