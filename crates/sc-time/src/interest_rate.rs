//! An interest rate together with its quoting conventions.

use crate::day_counter::DayCounter;
use crate::frequency::Frequency;
use sc_core::{Compounding, Rate, Real, Time};
use std::sync::Arc;

/// A concrete interest rate: value, day counter, compounding, frequency.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Rate,
    day_counter: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    pub fn new(
        rate: Rate,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        Self {
            rate,
            day_counter,
            compounding,
            frequency,
        }
    }

    /// The rate value.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compound factor over `t` years: the value of one unit invested at
    /// this rate for time `t`.
    pub fn compound_factor(&self, t: Time) -> Real {
        debug_assert!(t >= 0.0, "negative time");
        match self.compounding {
            Compounding::Simple => 1.0 + self.rate * t,
            Compounding::Compounded => {
                let f = self
                    .frequency
                    .periods_per_year()
                    .expect("compounded rate needs a concrete frequency")
                    as Real;
                (1.0 + self.rate / f).powf(f * t)
            }
            Compounding::Continuous => (self.rate * t).exp(),
        }
    }

    /// Discount factor over `t` years: the reciprocal of the compound factor.
    pub fn discount_factor(&self, t: Time) -> Real {
        1.0 / self.compound_factor(t)
    }

    /// The rate that yields `compound` over `t` years under the given
    /// conventions.
    pub fn implied_rate(
        compound: Real,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
        t: Time,
    ) -> Self {
        debug_assert!(compound > 0.0, "non-positive compound factor");
        debug_assert!(t > 0.0, "non-positive time");
        let rate = match compounding {
            Compounding::Simple => (compound - 1.0) / t,
            Compounding::Compounded => {
                let f = frequency
                    .periods_per_year()
                    .expect("compounded rate needs a concrete frequency")
                    as Real;
                (compound.powf(1.0 / (f * t)) - 1.0) * f
            }
            Compounding::Continuous => compound.ln() / t,
        };
        Self::new(rate, day_counter, compounding, frequency)
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4} % {} {}",
            self.rate * 100.0,
            self.day_counter.name(),
            self.compounding
        )
    }
}
