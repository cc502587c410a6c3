//! # sc-indexes
//!
//! Interest-rate indexes: the generic interfaces, the term-fixing
//! (ibor-style) and overnight implementations, and factory functions for
//! common market indexes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Factory functions for common market indexes.
pub mod factories;

/// `IborIndex` — term-fixing index.
pub mod ibor_index;

/// Base `Index` trait and the fixing store.
pub mod index;

/// `InterestRateIndex` trait.
pub mod interest_rate_index;

/// `OvernightIndex`.
pub mod overnight_index;

pub use factories::{estr, euribor, sofr};
pub use ibor_index::IborIndex;
pub use index::{FixingStore, Index};
pub use interest_rate_index::InterestRateIndex;
pub use overnight_index::OvernightIndex;
