//! # sc-models
//!
//! Calibration helpers: adapters that turn a quoted swaption volatility
//! into a price comparable with a model's implied price, for use by an
//! external parameter-fitting loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Black calibration-helper interface (market value, calibration error,
/// implied volatility).
pub mod calibration_helper;

/// Swaption calibration helpers.
pub mod swaption_helper;

pub use calibration_helper::{BlackCalibrationHelper, CalibrationErrorType};
pub use swaption_helper::{
    exercise_date_from_maturity, FixedVsFloatingSwaptionHelper, IborSwapConstructor,
    OvernightIndexedSwaptionHelper, OvernightSwapConstructor, SwapConstructor, SwapTerms,
    SwaptionHelper, SwaptionHelperConfig,
};
