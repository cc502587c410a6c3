//! `CashFlow` trait and the `Leg` alias.

use crate::coupon::Coupon;
use sc_core::{Real, Result};
use sc_time::Date;

/// A single future payment.
///
/// `amount` is fallible: floating amounts are forecast off a curve and the
/// lookup can fail (missing curve, missing historical fixing). Such errors
/// propagate unmodified to the pricing layer.
pub trait CashFlow: std::fmt::Debug + Send + Sync {
    /// The payment date.
    fn date(&self) -> Date;

    /// The payment amount.
    fn amount(&self) -> Result<Real>;

    /// Downcast to a coupon, when this cash flow is one.
    fn as_coupon(&self) -> Option<&dyn Coupon> {
        None
    }

    /// Whether the payment occurs strictly after `date`.
    fn occurs_after(&self, date: Date) -> bool {
        self.date() > date
    }
}

/// A sequence of cash flows, ordered by payment date.
pub type Leg = Vec<Box<dyn CashFlow>>;
