//! `Coupon` trait.

use crate::cashflow::CashFlow;
use sc_core::{Rate, Real, Result};
use sc_time::{Date, DayCounter};

/// A cash flow that accrues interest on a notional over a period.
pub trait Coupon: CashFlow {
    /// The notional amount.
    fn nominal(&self) -> Real;

    /// Start of the accrual period.
    fn accrual_start_date(&self) -> Date;

    /// End of the accrual period.
    fn accrual_end_date(&self) -> Date;

    /// Accrual period as a year fraction.
    fn accrual_period(&self) -> Real;

    /// Day counter used for the accrual.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The accrual rate over the period.
    fn rate(&self) -> Result<Rate>;
}
