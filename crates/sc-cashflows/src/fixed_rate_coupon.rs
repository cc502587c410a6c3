//! Fixed-rate coupons and the fixed-leg builder.

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use sc_core::{Rate, Real, Result};
use sc_time::{Actual365Fixed, Date, DayCounter, Schedule};
use std::sync::Arc;

/// A coupon paying a fixed, simply-accrued rate.
#[derive(Debug, Clone)]
pub struct FixedRateCoupon {
    nominal: Real,
    payment_date: Date,
    rate: Rate,
    accrual_start: Date,
    accrual_end: Date,
    day_counter: Arc<dyn DayCounter>,
    accrual_period: Real,
}

impl FixedRateCoupon {
    /// Create a new fixed-rate coupon.
    pub fn new(
        payment_date: Date,
        nominal: Real,
        rate: Rate,
        accrual_start: Date,
        accrual_end: Date,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        let accrual_period = day_counter.year_fraction(accrual_start, accrual_end);
        Self {
            nominal,
            payment_date,
            rate,
            accrual_start,
            accrual_end,
            day_counter,
            accrual_period,
        }
    }
}

impl CashFlow for FixedRateCoupon {
    fn date(&self) -> Date {
        self.payment_date
    }

    fn amount(&self) -> Result<Real> {
        Ok(self.nominal * self.rate * self.accrual_period)
    }

    fn as_coupon(&self) -> Option<&dyn Coupon> {
        Some(self)
    }
}

impl Coupon for FixedRateCoupon {
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
        Ok(self.rate)
    }
}

/// Build a fixed-rate leg over a schedule.
pub struct FixedRateLegBuilder<'a> {
    schedule: &'a Schedule,
    notional: Real,
    coupon_rate: Rate,
    day_counter: Arc<dyn DayCounter>,
}

impl<'a> FixedRateLegBuilder<'a> {
    /// Create a new builder from a schedule.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            notional: 1.0,
            coupon_rate: 0.0,
            day_counter: Arc::new(Actual365Fixed),
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Set the coupon rate.
    pub fn with_coupon_rate(mut self, rate: Rate) -> Self {
        self.coupon_rate = rate;
        self
    }

    /// Set the day counter.
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
            leg.push(Box::new(FixedRateCoupon::new(
                end,
                self.notional,
                self.coupon_rate,
                start,
                end,
                self.day_counter.clone(),
            )));
        }
        leg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sc_time::{DateGeneration, NullCalendar, Period, ScheduleBuilder, Thirty360, TimeUnit};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn coupon_amount_is_simple_accrual() {
        let c = FixedRateCoupon::new(
            date(2025, 7, 15),
            1_000_000.0,
            0.05,
            date(2025, 1, 15),
            date(2025, 7, 15),
            Arc::new(Actual365Fixed),
        );
        let t = Actual365Fixed.year_fraction(date(2025, 1, 15), date(2025, 7, 15));
        assert_abs_diff_eq!(c.amount().unwrap(), 1_000_000.0 * 0.05 * t, epsilon = 1e-9);
        assert_eq!(c.rate().unwrap(), 0.05);
    }

    #[test]
    fn leg_has_one_coupon_per_period() {
        let schedule = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Period::new(1, TimeUnit::Years),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Forward)
        .build()
        .unwrap();

        let leg = FixedRateLegBuilder::new(&schedule)
            .with_notional(100.0)
            .with_coupon_rate(0.03)
            .with_day_counter(Arc::new(Thirty360))
            .build();

        assert_eq!(leg.len(), 5);
        for cf in &leg {
            assert_abs_diff_eq!(cf.amount().unwrap(), 3.0, epsilon = 1e-12);
        }
        for w in leg.windows(2) {
            assert!(w[0].date() < w[1].date());
        }
    }
}
