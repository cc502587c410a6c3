//! # sc-quotes
//!
//! Market-observable values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Quote` trait and `SimpleQuote`.
pub mod quote;

pub use quote::{Quote, SimpleQuote};
