//! # sc-instruments
//!
//! Financial instruments: fixed-vs-floating swaps and the European
//! swaption, together with the pricing-engine interfaces.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Option exercise rights.
pub mod exercise;

/// `Instrument` base trait and pricing results.
pub mod instrument;

/// Fixed-vs-floating swaps.
pub mod swap;

/// European swaption.
pub mod swaption;

pub use exercise::{Exercise, ExerciseType};
pub use instrument::{Instrument, PricingResults};
pub use swap::{FixedVsFloatingSwap, OvernightIndexedSwap, SwapType, VanillaSwap};
pub use swaption::{Swaption, SwaptionPricingEngine};
