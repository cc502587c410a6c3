//! Floating coupons on a term-fixing index.

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use sc_core::{Rate, Real, Result, Spread};
use sc_indexes::{IborIndex, Index, InterestRateIndex};
use sc_time::{Date, DayCounter, Schedule};
use std::sync::Arc;

/// A floating coupon whose rate is `gearing × fixing + spread`, with the
/// fixing taken from a term-fixing index.
#[derive(Debug)]
pub struct IborCoupon {
    nominal: Real,
    payment_date: Date,
    accrual_start: Date,
    accrual_end: Date,
    fixing_date: Date,
    index: Arc<IborIndex>,
    gearing: Real,
    spread: Spread,
    day_counter: Arc<dyn DayCounter>,
    accrual_period: Real,
}

impl IborCoupon {
    /// Create a new floating coupon. The fixing date is derived from the
    /// accrual start through the index's fixing-day rule.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payment_date: Date,
        nominal: Real,
        accrual_start: Date,
        accrual_end: Date,
        index: Arc<IborIndex>,
        gearing: Real,
        spread: Spread,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        let fixing_date = index.fixing_date(accrual_start);
        let accrual_period = day_counter.year_fraction(accrual_start, accrual_end);
        Self {
            nominal,
            payment_date,
            accrual_start,
            accrual_end,
            fixing_date,
            index,
            gearing,
            spread,
            day_counter,
            accrual_period,
        }
    }

    /// The fixing date.
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// The index the coupon fixes on.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// The spread over the fixing.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl CashFlow for IborCoupon {
    fn date(&self) -> Date {
        self.payment_date
    }

    fn amount(&self) -> Result<Real> {
        Ok(self.nominal * self.rate()? * self.accrual_period)
    }

    fn as_coupon(&self) -> Option<&dyn Coupon> {
        Some(self)
    }
}

impl Coupon for IborCoupon {
    fn nominal(&self) -> Real {
        self.nominal
    }

    fn accrual_start_date(&self) -> Date {
        self.accrual_start
    }

    fn accrual_end_date(&self) -> Date {
        self.accrual_end
    }

    fn accrual_period(&self) -> Real {
        self.accrual_period
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn rate(&self) -> Result<Rate> {
        let fixing = self.index.fixing(self.fixing_date)?;
        Ok(self.gearing * fixing + self.spread)
    }
}

/// Build a floating leg over a schedule.
pub struct IborLegBuilder<'a> {
    schedule: &'a Schedule,
    index: Arc<IborIndex>,
    notional: Real,
    gearing: Real,
    spread: Spread,
    day_counter: Arc<dyn DayCounter>,
}

impl<'a> IborLegBuilder<'a> {
    /// Create a builder from a schedule and an index.
    pub fn new(schedule: &'a Schedule, index: Arc<IborIndex>) -> Self {
        let day_counter = index.day_counter_arc();
        Self {
            schedule,
            index,
            notional: 1.0,
            gearing: 1.0,
            spread: 0.0,
            day_counter,
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Set the gearing.
    pub fn with_gearing(mut self, gearing: Real) -> Self {
        self.gearing = gearing;
        self
    }

    /// Set the spread.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spread = spread;
        self
    }

    /// Override the day counter (defaults to the index's).
    pub fn with_day_counter(mut self, dc: Arc<dyn DayCounter>) -> Self {
        self.day_counter = dc;
        self
    }

    /// Build the leg; coupons pay on their accrual end date.
    pub fn build(self) -> crate::cashflow::Leg {
        let dates = self.schedule.dates();
        let mut leg: crate::cashflow::Leg = Vec::with_capacity(dates.len().saturating_sub(1));
        for window in dates.windows(2) {
            let (start, end) = (window[0], window[1]);
            leg.push(Box::new(IborCoupon::new(
                end,
                self.notional,
                start,
                end,
                Arc::clone(&self.index),
                self.gearing,
                self.spread,
                self.day_counter.clone(),
            )));
        }
        leg
    }
}
