//! Base trait for all term structures.

use sc_core::{Time, Versioned};
use sc_time::{Calendar, Date, DayCounter};

/// Common interface of every term structure: a reference date from which
/// times are measured, a day counter for the date-to-time conversion, and a
/// calendar.
///
/// The `Versioned` supertrait lets handles to term structures participate in
/// stamp-based cache invalidation; immutable curves simply report stamp 0.
pub trait TermStructure: Versioned + std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date-to-time conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// The latest date for which the curve can be queried.
    fn max_date(&self) -> Date {
        Date::MAX
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }
}
