//! `FlatForward` — a yield curve with a single constant forward rate.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use sc_core::{Compounding, Rate, Time, Version, Versioned};
use sc_time::{Actual365Fixed, Calendar, Date, DayCounter, Frequency, InterestRate, NullCalendar};
use std::sync::Arc;

/// A flat (constant) forward-rate yield curve.
///
/// Discount factors are `P(t) = exp(-r t)` with `r` the continuously
/// compounded equivalent of the supplied rate. The curve is immutable;
/// replacing it goes through a [`YieldCurveHandle`][crate::YieldCurveHandle]
/// relink.
#[derive(Debug)]
pub struct FlatForward {
    reference_date: Date,
    calendar: Box<dyn Calendar>,
    day_counter: Arc<dyn DayCounter>,
    /// Continuously-compounded flat rate.
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve from a rate under any quoting convention.
    pub fn new(
        reference_date: Date,
        rate: Rate,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        let continuous = match compounding {
            Compounding::Continuous => rate,
            _ => {
                let ir = InterestRate::new(rate, day_counter.clone(), compounding, frequency);
                ir.compound_factor(1.0).ln()
            }
        };
        Self {
            reference_date,
            calendar: Box::new(NullCalendar),
            day_counter,
            rate: continuous,
        }
    }

    /// Create a flat curve from a continuously-compounded rate.
    pub fn continuous(reference_date: Date, rate: Rate) -> Self {
        Self::new(
            reference_date,
            rate,
            Arc::new(Actual365Fixed),
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Box::new(calendar);
        self
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl Versioned for FlatForward {
    fn version(&self) -> Version {
        0
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn calendar(&self) -> &dyn Calendar {
        &*self.calendar
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> f64 {
        (-self.rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn discount_factors() {
        let curve = FlatForward::continuous(date(2025, 1, 2), 0.05);
        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(1.0), (-0.05_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(curve.discount(10.0), (-0.5_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn discount_by_date_uses_day_counter() {
        let reference = date(2025, 1, 2);
        let curve = FlatForward::continuous(reference, 0.05);
        let d = date(2026, 1, 2);
        let t = Actual365Fixed.year_fraction(reference, d);
        assert_abs_diff_eq!(curve.discount_date(d), (-0.05 * t).exp(), epsilon = 1e-12);
    }

    #[test]
    fn annual_rate_is_converted() {
        let curve = FlatForward::new(
            date(2025, 1, 2),
            0.05,
            Arc::new(Actual365Fixed),
            Compounding::Compounded,
            Frequency::Annual,
        );
        assert_abs_diff_eq!(curve.rate(), 1.05_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn zero_rate_is_flat() {
        let curve = FlatForward::continuous(date(2025, 1, 2), 0.03);
        assert_abs_diff_eq!(curve.zero_rate(0.5), 0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.zero_rate(7.0), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn forward_rate_between_dates() {
        let curve = FlatForward::continuous(date(2025, 1, 2), 0.04);
        let fwd = curve.forward_rate(
            date(2026, 1, 2),
            date(2027, 1, 2),
            Arc::new(Actual365Fixed),
            Compounding::Continuous,
            Frequency::NoFrequency,
        );
        assert_abs_diff_eq!(fwd.rate(), 0.04, epsilon = 1e-10);
    }
}
