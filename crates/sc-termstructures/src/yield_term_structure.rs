//! Yield (discounting) term structures.

use crate::term_structure::TermStructure;
use sc_core::{Compounding, DiscountFactor, Rate, RelinkableHandle, Time};
use sc_time::{Date, DayCounter, Frequency, InterestRate};
use std::sync::Arc;

/// A relinkable handle to a yield curve.
///
/// Relinking the handle bumps its version stamp, which is how downstream
/// caches (calibration helpers, indexes) notice that the curve changed.
pub type YieldCurveHandle = RelinkableHandle<dyn YieldTermStructure>;

/// A yield (interest-rate) term structure.
///
/// Implementors provide [`discount_impl`](Self::discount_impl); zero and
/// forward rates are derived from it.
pub trait YieldTermStructure: TermStructure {
    /// The discount factor for a time `t` measured from the reference date.
    fn discount_impl(&self, t: Time) -> DiscountFactor;

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }

    /// The continuously-compounded zero rate for maturity `t`.
    fn zero_rate(&self, t: Time) -> Rate {
        if t <= 0.0 {
            // limit from the right
            let dt = 1.0e-4;
            return -self.discount_impl(dt).ln() / dt;
        }
        -self.discount_impl(t).ln() / t
    }

    /// The forward rate between two dates under the given conventions.
    fn forward_rate(
        &self,
        d1: Date,
        d2: Date,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> InterestRate {
        let compound = self.discount_date(d1) / self.discount_date(d2);
        let t = day_counter.year_fraction(d1, d2);
        InterestRate::implied_rate(compound, day_counter, compounding, frequency, t)
    }
}
