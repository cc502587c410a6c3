//! # sc-core
//!
//! Foundational building blocks shared across the swapcalib workspace:
//! primitive type aliases, the error type, shared handles, and the
//! version-stamp machinery used for cache invalidation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Compounding conventions.
pub mod compounding;

/// Currency value type and common instances.
pub mod currency;

/// Error type and the `ensure!` / `fail!` macros.
pub mod errors;

/// Shared reference handles (`Handle<T>`, `RelinkableHandle<T>`).
pub mod handle;

/// Monotonic version stamps for change detection.
pub mod versioning;

// ── Primitive type aliases ───────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Non-negative integer type (settlement days, fixing days, ...).
pub type Natural = u32;

/// A rate expressed as a decimal (0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use compounding::Compounding;
pub use currency::Currency;
pub use errors::{Error, Result};
pub use handle::{Handle, RelinkableHandle};
pub use versioning::{Version, VersionCounter, Versioned};
