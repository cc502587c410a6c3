//! `IborIndex` — term-fixing interbank index.

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

/// A term-fixing interbank offered-rate index (Euribor-style).
///
/// Future fixings are forecast from the forwarding curve as the simple
/// forward rate over the index's value-to-maturity period; past fixings
/// must be present in the fixing store.
#[derive(Debug)]
pub struct IborIndex {
    data: IndexData,
}

impl IborIndex {
    /// Create a new term-fixing index.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        tenor: Period,
        fixing_days: Natural,
        currency: &'static Currency,
        calendar: impl Calendar + 'static,
        convention: BusinessDayConvention,
        end_of_month: bool,
        day_counter: Arc<dyn DayCounter>,
        forwarding: YieldCurveHandle,
    ) -> Self {
        Self {
            data: IndexData {
                name: name.into(),
                tenor,
                fixing_days,
                currency,
                calendar: Box::new(calendar),
                day_counter,
                convention,
                end_of_month,
                fixings: FixingStore::new(),
                forwarding,
            },
        }
    }

    /// Forecast the fixing for a (future) fixing date off the forwarding
    /// curve.
    pub fn forecast_fixing(&self, fixing_date: Date) -> Result<Real> {
        let curve = self.linked_curve()?;
        let d1 = self.value_date(fixing_date);
        let d2 = self.maturity_date(d1);
        let t = self.data.day_counter.year_fraction(d1, d2);
        ensure!(
            t > 0.0,
            "{}: empty accrual period [{d1}, {d2}]",
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

impl Versioned for IborIndex {
    fn version(&self) -> Version {
        self.data
            .fixings
            .version()
            .max(self.data.forwarding.version())
    }
}

impl Index for IborIndex {
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

impl InterestRateIndex for IborIndex {
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

    fn end_of_month(&self) -> bool {
        self.data.end_of_month
    }

    fn maturity_date(&self, value_date: Date) -> Date {
        self.data
            .calendar
            .advance(
                value_date,
                self.data.tenor,
                self.data.convention,
                self.data.end_of_month,
            )
            .expect("index maturity within date range")
    }

    fn forwarding_curve(&self) -> &YieldCurveHandle {
        &self.data.forwarding
    }
}
