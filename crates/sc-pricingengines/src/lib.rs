//! # sc-pricingengines
//!
//! Pricing engines: cash-flow discounting for swaps, Black and Bachelier
//! engines for European swaptions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Undiscounted-forward option formulas.
pub mod black_formula;

/// Black and Bachelier swaption engines.
pub mod black_swaption_engine;

/// Discounting swap engine.
pub mod discounting_swap_engine;

pub use black_formula::{bachelier_formula, black_formula, OptionType};
pub use black_swaption_engine::{BachelierSwaptionEngine, BlackSwaptionEngine};
pub use discounting_swap_engine::{DiscountingSwapEngine, SwapResults};
