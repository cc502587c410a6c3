//! # sc-termstructures
//!
//! Yield term structures and the volatility-quoting-convention enum.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `FlatForward` — constant-rate yield curve.
pub mod flat_forward;

/// Base trait for all term structures.
pub mod term_structure;

/// Volatility quoting conventions.
pub mod volatility_type;

/// Yield (discounting) term structures.
pub mod yield_term_structure;

pub use flat_forward::FlatForward;
pub use term_structure::TermStructure;
pub use volatility_type::VolatilityType;
pub use yield_term_structure::{YieldCurveHandle, YieldTermStructure};
