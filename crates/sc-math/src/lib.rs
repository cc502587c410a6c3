//! # sc-math
//!
//! The small mathematical toolbox the pricing layer needs: the standard
//! normal distribution and 1-D root-finding solvers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Standard normal distribution functions.
pub mod normal;

/// 1-D root-finding solvers.
pub mod solvers;

pub use normal::{normal_cdf, normal_pdf};
pub use solvers::{bisection, brent};
