//! European swaption on a fixed-vs-floating swap.

use crate::exercise::{Exercise, ExerciseType};
use crate::instrument::{Instrument, PricingResults};
use crate::swap::FixedVsFloatingSwap;
use sc_core::{ensure, Real, Result};
use sc_time::Date;
use std::sync::Arc;

/// A pricing engine for swaptions.
///
/// Engines are passed to [`Swaption::npv`] by reference rather than stored
/// in the instrument, so pricing under a temporary engine can never leave
/// the instrument in a different state than before.
pub trait SwaptionPricingEngine: std::fmt::Debug + Send + Sync {
    /// Price the swaption.
    fn calculate(&self, swaption: &Swaption) -> Result<PricingResults>;
}

/// An option to enter a fixed-vs-floating swap at a future date.
#[derive(Debug, Clone)]
pub struct Swaption {
    swap: Arc<dyn FixedVsFloatingSwap>,
    exercise: Exercise,
}

impl Swaption {
    /// Wrap a swap with a (European) exercise.
    pub fn new(swap: Arc<dyn FixedVsFloatingSwap>, exercise: Exercise) -> Result<Self> {
        ensure!(
            exercise.exercise_type() == ExerciseType::European,
            "only European exercise is supported, got {exercise}"
        );
        Ok(Self { swap, exercise })
    }

    /// The underlying swap.
    pub fn underlying_swap(&self) -> &Arc<dyn FixedVsFloatingSwap> {
        &self.swap
    }

    /// The exercise.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// The (single) exercise date.
    pub fn exercise_date(&self) -> Date {
        self.exercise.last_date()
    }

    /// Present value under the given engine.
    pub fn npv(&self, engine: &dyn SwaptionPricingEngine) -> Result<Real> {
        Ok(engine.calculate(self)?.npv)
    }
}

impl Instrument for Swaption {
    fn maturity_date(&self) -> Option<Date> {
        Some(self.exercise.last_date())
    }
}
