//! `InterestRateIndex` — common interface of rate indexes.

use crate::index::{FixingStore, Index};
use sc_core::{Currency, Natural};
use sc_termstructures::YieldCurveHandle;
use sc_time::{BusinessDayConvention, Calendar, Date, DayCounter, Period};
use std::sync::Arc;

/// Common interface of interest-rate indexes (term-fixing and overnight).
pub trait InterestRateIndex: Index {
    /// The index tenor (3M, 6M, 1D, ...).
    fn tenor(&self) -> Period;

    /// Business days between fixing and value date.
    fn fixing_days(&self) -> Natural;

    /// The currency the index is denominated in.
    fn currency(&self) -> &'static Currency;

    /// Day counter used for the index's accrual.
    fn day_counter(&self) -> &dyn DayCounter;

    /// Shared handle to the index's day counter, for embedding in coupons.
    fn day_counter_arc(&self) -> Arc<dyn DayCounter>;

    /// Business-day convention used when rolling dates.
    fn business_day_convention(&self) -> BusinessDayConvention;

    /// Whether the index rolls on month ends.
    fn end_of_month(&self) -> bool {
        false
    }

    /// The value date for a given fixing date.
    fn value_date(&self, fixing_date: Date) -> Date {
        self.fixing_calendar()
            .advance_business_days(fixing_date, self.fixing_days() as i32)
    }

    /// The fixing date for a given value date.
    fn fixing_date(&self, value_date: Date) -> Date {
        self.fixing_calendar()
            .advance_business_days(value_date, -(self.fixing_days() as i32))
    }

    /// The maturity date of a deposit starting on `value_date`.
    fn maturity_date(&self, value_date: Date) -> Date;

    /// The forwarding curve the index forecasts future fixings from.
    fn forwarding_curve(&self) -> &YieldCurveHandle;
}

/// Data shared by the concrete index implementations.
#[derive(Debug)]
pub(crate) struct IndexData {
    pub name: String,
    pub tenor: Period,
    pub fixing_days: Natural,
    pub currency: &'static Currency,
    pub calendar: Box<dyn Calendar>,
    pub day_counter: Arc<dyn DayCounter>,
    pub convention: BusinessDayConvention,
    pub end_of_month: bool,
    pub fixings: FixingStore,
    pub forwarding: YieldCurveHandle,
}
