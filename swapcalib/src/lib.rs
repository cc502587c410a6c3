//! # swapcalib
//!
//! Swaption calibration helpers and the rates infrastructure they stand
//! on: dates and schedules, indexes with curve-based fixing forecasts,
//! fixed-vs-floating swaps, Black/Bachelier swaption engines, and the
//! calibration-helper layer consumed by model-fitting loops.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `sc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use swapcalib::indexes::euribor;
//! use swapcalib::models::{BlackCalibrationHelper, SwaptionHelper, SwaptionHelperConfig};
//! use swapcalib::quotes::SimpleQuote;
//! use swapcalib::termstructures::{FlatForward, YieldCurveHandle};
//! use swapcalib::time::{Actual360, Date, Period, Thirty360};
//!
//! let curve = YieldCurveHandle::from_arc(Arc::new(FlatForward::continuous(
//!     Date::from_ymd(2025, 1, 2).unwrap(),
//!     0.03,
//! )));
//! let index = Arc::new(euribor(Period::months(6), curve.clone()));
//! let config = SwaptionHelperConfig::new(
//!     Arc::new(SimpleQuote::new(0.20)),
//!     curve,
//!     Period::years(1),
//!     Arc::new(Thirty360),
//!     Arc::new(Actual360),
//! );
//! let helper =
//!     SwaptionHelper::from_maturity(Period::years(5), Period::years(10), index, config)
//!         .unwrap();
//! assert!(helper.black_price(0.20).unwrap() > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, errors, handles, and version stamps.
pub use sc_core as core;

/// Normal distribution and root finding.
pub use sc_math as math;

/// Dates, calendars, day counters, and schedules.
pub use sc_time as time;

/// Market quotes.
pub use sc_quotes as quotes;

/// Yield term structures.
pub use sc_termstructures as termstructures;

/// Interest-rate indexes.
pub use sc_indexes as indexes;

/// Coupons and legs.
pub use sc_cashflows as cashflows;

/// Swaps and swaptions.
pub use sc_instruments as instruments;

/// Pricing engines.
pub use sc_pricingengines as pricingengines;

/// Calibration helpers.
pub use sc_models as models;
