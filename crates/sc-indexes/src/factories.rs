//! Factory functions for common market indexes.
//!
//! These wire up the published conventions (calendar, day count, fixing
//! days, rolling rules) so that call sites only supply the forwarding
//! curve.

use crate::ibor_index::IborIndex;
use crate::overnight_index::OvernightIndex;
use sc_core::currency::{EUR, USD};
use sc_termstructures::YieldCurveHandle;
use sc_time::{Actual360, BusinessDayConvention, Period, Target, UnitedStatesSettlement};
use std::sync::Arc;

/// Euribor with the given tenor.
///
/// TARGET calendar, Act/360, 2 fixing days, modified following, end of
/// month.
pub fn euribor(tenor: Period, forwarding: YieldCurveHandle) -> IborIndex {
    IborIndex::new(
        format!("EUR-Euribor-{tenor}"),
        tenor,
        2,
        &EUR,
        Target,
        BusinessDayConvention::ModifiedFollowing,
        true,
        Arc::new(Actual360),
        forwarding,
    )
}

/// SOFR (Secured Overnight Financing Rate).
///
/// US settlement calendar, Act/360, same-day fixing.
pub fn sofr(forwarding: YieldCurveHandle) -> OvernightIndex {
    OvernightIndex::new(
        "USD-SOFR",
        0,
        &USD,
        UnitedStatesSettlement,
        Arc::new(Actual360),
        forwarding,
    )
}

/// ESTR (Euro Short-Term Rate).
///
/// TARGET calendar, Act/360, same-day fixing.
pub fn estr(forwarding: YieldCurveHandle) -> OvernightIndex {
    OvernightIndex::new(
        "EUR-ESTR",
        0,
        &EUR,
        Target,
        Arc::new(Actual360),
        forwarding,
    )
}
