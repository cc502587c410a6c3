//! Overnight-compounded coupons and legs.

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use sc_core::{ensure, Natural, Rate, Real, Result, Spread};
use sc_indexes::{Index, InterestRateIndex, OvernightIndex};
use sc_time::{BusinessDayConvention, Calendar, Date, DayCounter, Schedule};
use std::sync::Arc;

/// How daily overnight fixings aggregate into a coupon rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateAveraging {
    /// Geometric linking of the daily accrual factors.
    Compound,
    /// Arithmetic average of the daily fixings.
    Simple,
}

/// A coupon accruing an overnight index over its period.
///
/// The daily value dates are frozen at construction; the rate aggregates
/// the daily fixings (stored or forecast) under the configured averaging
/// method, plus a spread.
#[derive(Debug)]
pub struct OvernightIndexedCoupon {
    nominal: Real,
    payment_date: Date,
    accrual_start: Date,
    accrual_end: Date,
    index: Arc<OvernightIndex>,
    spread: Spread,
    averaging: RateAveraging,
    day_counter: Arc<dyn DayCounter>,
    accrual_period: Real,
    /// Business-day grid from accrual start to accrual end, inclusive.
    value_dates: Vec<Date>,
}

impl OvernightIndexedCoupon {
    /// Create a new overnight coupon.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payment_date: Date,
        nominal: Real,
        accrual_start: Date,
        accrual_end: Date,
        index: Arc<OvernightIndex>,
        spread: Spread,
        averaging: RateAveraging,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        ensure!(
            accrual_start < accrual_end,
            "overnight coupon with empty accrual period [{accrual_start}, {accrual_end}]"
        );
        let calendar = index.fixing_calendar();
        let mut value_dates =
            vec![calendar.adjust(accrual_start, BusinessDayConvention::Following)];
        loop {
            let last = *value_dates.last().expect("at least the start date");
            if last >= accrual_end {
                break;
            }
            value_dates.push(calendar.advance_business_days(last, 1));
        }
        ensure!(
            value_dates.len() >= 2,
            "overnight coupon needs at least one fixing between {accrual_start} and {accrual_end}"
        );
        let accrual_period = day_counter.year_fraction(accrual_start, accrual_end);
        Ok(Self {
            nominal,
            payment_date,
            accrual_start,
            accrual_end,
            index,
            spread,
            averaging,
            day_counter,
            accrual_period,
            value_dates,
        })
    }

    /// The daily value-date grid.
    pub fn value_dates(&self) -> &[Date] {
        &self.value_dates
    }

    /// The averaging method.
    pub fn averaging(&self) -> RateAveraging {
        self.averaging
    }

    /// The index the coupon compounds.
    pub fn index(&self) -> &OvernightIndex {
        &self.index
    }

    /// The spread over the aggregated rate.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl CashFlow for OvernightIndexedCoupon {
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

impl Coupon for OvernightIndexedCoupon {
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
        let index_dc = self.index.day_counter();
        let mut compound = 1.0;
        let mut weighted_sum = 0.0;
        let mut total = 0.0;
        for window in self.value_dates.windows(2) {
            let (d1, d2) = (window[0], window[1]);
            let tau = index_dc.year_fraction(d1, d2);
            let fixing = self.index.fixing(self.index.fixing_date(d1))?;
            match self.averaging {
                RateAveraging::Compound => compound *= 1.0 + fixing * tau,
                RateAveraging::Simple => weighted_sum += fixing * tau,
            }
            total += tau;
        }
        let aggregated = match self.averaging {
            RateAveraging::Compound => (compound - 1.0) / total,
            RateAveraging::Simple => weighted_sum / total,
        };
        Ok(aggregated + self.spread)
    }
}

/// Build an overnight-compounded leg over a schedule.
pub struct OvernightLegBuilder<'a> {
    schedule: &'a Schedule,
    index: Arc<OvernightIndex>,
    notional: Real,
    spread: Spread,
    averaging: RateAveraging,
    payment_lag: Natural,
    payment_convention: BusinessDayConvention,
    day_counter: Arc<dyn DayCounter>,
}

impl<'a> OvernightLegBuilder<'a> {
    /// Create a builder from a schedule and an index.
    pub fn new(schedule: &'a Schedule, index: Arc<OvernightIndex>) -> Self {
        let day_counter = index.day_counter_arc();
        Self {
            schedule,
            index,
            notional: 1.0,
            spread: 0.0,
            averaging: RateAveraging::Compound,
            payment_lag: 0,
            payment_convention: BusinessDayConvention::Following,
            day_counter,
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Set the spread.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spread = spread;
        self
    }

    /// Set the averaging method.
    pub fn with_averaging(mut self, averaging: RateAveraging) -> Self {
        self.averaging = averaging;
        self
    }

    /// Set the payment lag in business days.
    pub fn with_payment_lag(mut self, lag: Natural) -> Self {
        self.payment_lag = lag;
        self
    }

    /// Set the payment business-day convention.
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// Override the day counter (defaults to the index's).
    pub fn with_day_counter(mut self, dc: Arc<dyn DayCounter>) -> Self {
        self.day_counter = dc;
        self
    }

    /// Build the leg.
    pub fn build(self) -> Result<crate::cashflow::Leg> {
        let calendar = self.index.fixing_calendar();
        let dates = self.schedule.dates();
        let mut leg: crate::cashflow::Leg = Vec::with_capacity(dates.len().saturating_sub(1));
        for window in dates.windows(2) {
            let (start, end) = (window[0], window[1]);
            let payment = if self.payment_lag > 0 {
                calendar.advance_business_days(end, self.payment_lag as i32)
            } else {
                calendar.adjust(end, self.payment_convention)
            };
            leg.push(Box::new(OvernightIndexedCoupon::new(
                payment,
                self.notional,
                start,
                end,
                Arc::clone(&self.index),
                self.spread,
                self.averaging,
                self.day_counter.clone(),
            )?));
        }
        Ok(leg)
    }
}
