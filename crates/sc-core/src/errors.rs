//! The workspace-wide error type.
//!
//! A single `thiserror`-derived enum covers every failure mode; the
//! `ensure!` and `fail!` macros are the usual shorthands for guarding
//! preconditions and bailing out of a computation.

use thiserror::Error;

/// The top-level error type used throughout swapcalib.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated by the caller.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range arithmetic, invalid components).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout swapcalib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a precondition, returning `Err(Error::Precondition(..))` when the
/// condition does not hold.
///
/// # Example
/// ```
/// use sc_core::ensure;
/// fn positive(x: f64) -> sc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with `Err(Error::Runtime(..))` immediately.
///
/// # Example
/// ```
/// use sc_core::fail;
/// fn unsupported() -> sc_core::errors::Result<()> {
///     fail!("unsupported configuration");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
