//! # sc-cashflows
//!
//! Cash flows, coupons, and leg builders: fixed-rate, term-fixing
//! floating, and overnight-compounded legs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `CashFlow` trait and the `Leg` alias.
pub mod cashflow;

/// `Coupon` trait.
pub mod coupon;

/// Fixed-rate coupons and legs.
pub mod fixed_rate_coupon;

/// Term-fixing floating coupons and legs.
pub mod ibor_coupon;

/// Overnight-compounded coupons and legs.
pub mod overnight_coupon;

pub use cashflow::{CashFlow, Leg};
pub use coupon::Coupon;
pub use fixed_rate_coupon::{FixedRateCoupon, FixedRateLegBuilder};
pub use ibor_coupon::{IborCoupon, IborLegBuilder};
pub use overnight_coupon::{OvernightIndexedCoupon, OvernightLegBuilder, RateAveraging};
