//! `OvernightIndex` — daily-fixing index.

use crate::index::{FixingStore, Index};
use crate::interest_rate_index::{IndexData, InterestRateIndex};
use sc_core::{
    ensure,
    errors::{Error, Result},
    Currency, Natural, Real, Version, Versioned,
};
use sc_termstructures::{TermStructure, YieldCurveHandle, YieldTermStructure};
use sc_time::{BusinessDayConvention, Calendar, Date, DayCounter, Period};
use std::sync::Arc;

/// An overnight rate index (SOFR, ESTR, SONIA, ...).
///
/// The tenor is one business day: a deposit fixed on date *d* matures on the
/// next business day. Future fixings are forecast from the forwarding curve.
#[derive(Debug)]
pub struct OvernightIndex {
    data: IndexData,
}

impl OvernightIndex {
    /// Create a new overnight index.
    pub fn new(
        name: impl Into<String>,
        fixing_days: Natural,
        currency: &'static Currency,
        calendar: impl Calendar + 'static,
        day_counter: Arc<dyn DayCounter>,
        forwarding: YieldCurveHandle,
    ) -> Self {
        Self {
            data: IndexData {
                name: name.into(),
                tenor: Period::days(1),
                fixing_days,
                currency,
                calendar: Box::new(calendar),
                day_counter,
                convention: BusinessDayConvention::Following,
                end_of_month: false,
                fixings: FixingStore::new(),
                forwarding,
            },
        }
    }

    /// Forecast the overnight fixing for a (future) fixing date.
    pub fn forecast_fixing(&self, fixing_date: Date) -> Result<Real> {
        let curve = self.linked_curve()?;
        let d1 = self.value_date(fixing_date);
        let d2 = self.maturity_date(d1);
        let t = self.data.day_counter.year_fraction(d1, d2);
        ensure!(
            t > 0.0,
            "{}: empty overnight period [{d1}, {d2}]",
            self.data.name
        );
        let compound = curve.discount_date(d1) / curve.discount_date(d2);
        Ok((compound - 1.0) / t)
    }

    fn linked_curve(&self) -> Result<Arc<dyn YieldTermStructure>> {
        self.data.forwarding.current().ok_or_else(|| {
            Error::Precondition(format!(
                "{}: no forwarding curve linked to the index",
                self.data.name
            ))
        })
    }
}

impl Versioned for OvernightIndex {
    fn version(&self) -> Version {
        self.data
            .fixings
            .version()
            .max(self.data.forwarding.version())
    }
}

impl Index for OvernightIndex {
    fn name(&self) -> &str {
        &self.data.name
    }

    fn fixing_calendar(&self) -> &dyn Calendar {
        &*self.data.calendar
    }

    fn fixing(&self, fixing_date: Date) -> Result<Real> {
        ensure!(
            self.is_valid_fixing_date(fixing_date),
            "{}: {fixing_date} is not a valid fixing date",
            self.data.name
        );
        if let Some(v) = self.data.fixings.get(fixing_date) {
            return Ok(v);
        }
        let curve = self.linked_curve()?;
        if fixing_date < curve.reference_date() {
            return Err(Error::Runtime(format!(
                "{}: missing historical fixing for {fixing_date}",
                self.data.name
            )));
        }
        self.forecast_fixing(fixing_date)
    }

    fn fixing_store(&self) -> &FixingStore {
        &self.data.fixings
    }
}

impl InterestRateIndex for OvernightIndex {
    fn tenor(&self) -> Period {
        self.data.tenor
    }

    fn fixing_days(&self) -> Natural {
        self.data.fixing_days
    }

    fn currency(&self) -> &'static Currency {
        self.data.currency
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn day_counter_arc(&self) -> Arc<dyn DayCounter> {
        self.data.day_counter.clone()
    }

    fn business_day_convention(&self) -> BusinessDayConvention {
        self.data.convention
    }

    fn maturity_date(&self, value_date: Date) -> Date {
        self.data.calendar.advance_business_days(value_date, 1)
    }

    fn forwarding_curve(&self) -> &YieldCurveHandle {
        &self.data.forwarding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sc_core::currency::USD;
    use sc_termstructures::FlatForward;
    use sc_time::{Actual360, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn make_index(curve: YieldCurveHandle) -> OvernightIndex {
        OvernightIndex::new(
            "USD-TEST-ON",
            0,
            &USD,
            WeekendsOnly,
            Arc::new(Actual360),
            curve,
        )
    }

    #[test]
    fn overnight_dates() {
        let index = make_index(YieldCurveHandle::empty());
        // Monday fixes for Monday (0 fixing days), maturing Tuesday
        assert_eq!(index.value_date(date(2025, 6, 16)), date(2025, 6, 16));
        assert_eq!(index.maturity_date(date(2025, 6, 16)), date(2025, 6, 17));
        // Friday's deposit spans the weekend
        assert_eq!(index.maturity_date(date(2025, 6, 13)), date(2025, 6, 16));
    }

    #[test]
    fn weekend_fixing_date_rejected() {
        let index = make_index(YieldCurveHandle::empty());
        assert!(index.fixing(date(2025, 6, 14)).is_err());
    }

    #[test]
    fn forecast_over_a_weekend() {
        let handle = YieldCurveHandle::from_arc(Arc::new(FlatForward::continuous(
            date(2025, 1, 2),
            0.03,
        )));
        let index = make_index(handle);
        // Friday to Monday: 3 calendar days of accrual on Act/360
        let fixing = index.fixing(date(2025, 6, 13)).unwrap();
        let t = 3.0 / 360.0;
        let expected = ((0.03_f64 * (3.0 / 365.0)).exp() - 1.0) / t;
        assert_abs_diff_eq!(fixing, expected, epsilon = 1e-12);
    }
}
