//! Fixed-vs-floating interest-rate swaps.

use crate::instrument::Instrument;
use sc_cashflows::{
    CashFlow, FixedRateLegBuilder, IborLegBuilder, Leg, OvernightLegBuilder, RateAveraging,
};
use sc_core::{Natural, Rate, Real, Result, Spread};
use sc_indexes::{IborIndex, OvernightIndex};
use sc_time::{BusinessDayConvention, Date, DayCounter, Schedule};
use std::sync::Arc;

/// Which side of the fixed leg the holder is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapType {
    /// Pay fixed, receive floating.
    Payer,
    /// Receive fixed, pay floating.
    Receiver,
}

impl SwapType {
    /// +1 for a payer swap, -1 for a receiver swap.
    pub fn sign(self) -> Real {
        match self {
            SwapType::Payer => 1.0,
            SwapType::Receiver => -1.0,
        }
    }
}

impl std::fmt::Display for SwapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapType::Payer => write!(f, "Payer"),
            SwapType::Receiver => write!(f, "Receiver"),
        }
    }
}

/// A swap exchanging a fixed leg against a floating leg.
///
/// The pricing layer and the calibration helpers only need this view; the
/// concrete types differ in how the floating leg is built.
pub trait FixedVsFloatingSwap: Instrument {
    /// Payer or receiver (of the fixed leg's counterparty view).
    fn swap_type(&self) -> SwapType;

    /// The notional.
    fn nominal(&self) -> Real;

    /// The fixed leg's coupon rate.
    fn fixed_rate(&self) -> Rate;

    /// The fixed leg's cash flows.
    fn fixed_leg(&self) -> &Leg;

    /// The floating leg's cash flows.
    fn floating_leg(&self) -> &Leg;

    /// The fixed leg's date grid.
    fn fixed_schedule(&self) -> &Schedule;

    /// The floating leg's date grid.
    fn floating_schedule(&self) -> &Schedule;
}

fn last_payment_date(legs: [&Leg; 2]) -> Option<Date> {
    legs.iter()
        .flat_map(|leg| leg.iter().map(|cf| cf.date()))
        .max()
}

// ────────────────────────────────────────────────────────────────────────────
// VanillaSwap
// ────────────────────────────────────────────────────────────────────────────

/// A standard fixed-for-floating swap on a term-fixing index.
#[derive(Debug)]
pub struct VanillaSwap {
    swap_type: SwapType,
    nominal: Real,
    fixed_rate: Rate,
    fixed_schedule: Schedule,
    float_schedule: Schedule,
    fixed_leg: Leg,
    floating_leg: Leg,
    maturity: Option<Date>,
}

impl VanillaSwap {
    /// Create a new vanilla swap from its two schedules.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        swap_type: SwapType,
        nominal: Real,
        fixed_schedule: Schedule,
        fixed_rate: Rate,
        fixed_day_counter: Arc<dyn DayCounter>,
        float_schedule: Schedule,
        index: Arc<IborIndex>,
        spread: Spread,
        floating_day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        let fixed_leg = FixedRateLegBuilder::new(&fixed_schedule)
            .with_notional(nominal)
            .with_coupon_rate(fixed_rate)
            .with_day_counter(fixed_day_counter)
            .build();

        let floating_leg = IborLegBuilder::new(&float_schedule, index)
            .with_notional(nominal)
            .with_spread(spread)
            .with_day_counter(floating_day_counter)
            .build();

        let maturity = last_payment_date([&fixed_leg, &floating_leg]);
        Self {
            swap_type,
            nominal,
            fixed_rate,
            fixed_schedule,
            float_schedule,
            fixed_leg,
            floating_leg,
            maturity,
        }
    }
}

impl Instrument for VanillaSwap {
    fn maturity_date(&self) -> Option<Date> {
        self.maturity
    }
}

impl FixedVsFloatingSwap for VanillaSwap {
    fn swap_type(&self) -> SwapType {
        self.swap_type
    }

    fn nominal(&self) -> Real {
        self.nominal
    }

    fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    fn fixed_leg(&self) -> &Leg {
        &self.fixed_leg
    }

    fn floating_leg(&self) -> &Leg {
        &self.floating_leg
    }

    fn fixed_schedule(&self) -> &Schedule {
        &self.fixed_schedule
    }

    fn floating_schedule(&self) -> &Schedule {
        &self.float_schedule
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OvernightIndexedSwap
// ────────────────────────────────────────────────────────────────────────────

/// A fixed-vs-overnight swap; the floating leg compounds (or averages) the
/// daily fixings within each payment period.
#[derive(Debug)]
pub struct OvernightIndexedSwap {
    swap_type: SwapType,
    nominal: Real,
    fixed_rate: Rate,
    fixed_schedule: Schedule,
    overnight_schedule: Schedule,
    fixed_leg: Leg,
    overnight_leg: Leg,
    averaging: RateAveraging,
    maturity: Option<Date>,
}

impl OvernightIndexedSwap {
    /// Create a new overnight-indexed swap.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        swap_type: SwapType,
        nominal: Real,
        fixed_schedule: Schedule,
        fixed_rate: Rate,
        fixed_day_counter: Arc<dyn DayCounter>,
        overnight_schedule: Schedule,
        index: Arc<OvernightIndex>,
        spread: Spread,
        payment_lag: Natural,
        payment_convention: BusinessDayConvention,
        averaging: RateAveraging,
    ) -> Result<Self> {
        let fixed_leg = FixedRateLegBuilder::new(&fixed_schedule)
            .with_notional(nominal)
            .with_coupon_rate(fixed_rate)
            .with_day_counter(fixed_day_counter)
            .build();

        let overnight_leg = OvernightLegBuilder::new(&overnight_schedule, index)
            .with_notional(nominal)
            .with_spread(spread)
            .with_averaging(averaging)
            .with_payment_lag(payment_lag)
            .with_payment_convention(payment_convention)
            .build()?;

        let maturity = last_payment_date([&fixed_leg, &overnight_leg]);
        Ok(Self {
            swap_type,
            nominal,
            fixed_rate,
            fixed_schedule,
            overnight_schedule,
            fixed_leg,
            overnight_leg,
            averaging,
            maturity,
        })
    }

    /// The rate-averaging method of the overnight leg.
    pub fn averaging(&self) -> RateAveraging {
        self.averaging
    }
}

impl Instrument for OvernightIndexedSwap {
    fn maturity_date(&self) -> Option<Date> {
        self.maturity
    }
}

impl FixedVsFloatingSwap for OvernightIndexedSwap {
    fn swap_type(&self) -> SwapType {
        self.swap_type
    }

    fn nominal(&self) -> Real {
        self.nominal
    }

    fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    fn fixed_leg(&self) -> &Leg {
        &self.fixed_leg
    }

    fn floating_leg(&self) -> &Leg {
        &self.overnight_leg
    }

    fn fixed_schedule(&self) -> &Schedule {
        &self.fixed_schedule
    }

    fn floating_schedule(&self) -> &Schedule {
        &self.overnight_schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::currency::EUR;
    use sc_termstructures::{FlatForward, YieldCurveHandle};
    use sc_time::{
        Actual360, DateGeneration, Period, ScheduleBuilder, Thirty360, TimeUnit, WeekendsOnly,
    };

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curve() -> YieldCurveHandle {
        YieldCurveHandle::from_arc(Arc::new(FlatForward::continuous(date(2025, 1, 2), 0.03)))
    }

    fn make_schedule(tenor: Period) -> Schedule {
        ScheduleBuilder::new(date(2025, 1, 15), date(2030, 1, 15), tenor, &WeekendsOnly)
            .with_rule(DateGeneration::Forward)
            .build()
            .unwrap()
    }

    fn make_ibor() -> Arc<IborIndex> {
        Arc::new(IborIndex::new(
            "EUR-TEST-6M",
            Period::new(6, TimeUnit::Months),
            2,
            &EUR,
            WeekendsOnly,
            BusinessDayConvention::ModifiedFollowing,
            false,
            Arc::new(Actual360),
            flat_curve(),
        ))
    }

    #[test]
    fn vanilla_swap_legs() {
        let swap = VanillaSwap::new(
            SwapType::Payer,
            1_000_000.0,
            make_schedule(Period::new(1, TimeUnit::Years)),
            0.03,
            Arc::new(Thirty360),
            make_schedule(Period::new(6, TimeUnit::Months)),
            make_ibor(),
            0.0,
            Arc::new(Actual360),
        );
        assert_eq!(swap.fixed_leg().len(), 5);
        assert_eq!(swap.floating_leg().len(), 10);
        assert_eq!(swap.fixed_rate(), 0.03);
        assert!(swap.maturity_date().is_some());
        assert!(!swap.is_expired(date(2025, 1, 15)));
        assert!(swap.is_expired(date(2031, 1, 15)));
    }

    #[test]
    fn swap_type_sign() {
        assert_eq!(SwapType::Payer.sign(), 1.0);
        assert_eq!(SwapType::Receiver.sign(), -1.0);
    }

    #[test]
    fn overnight_swap_legs() {
        let index = Arc::new(OvernightIndex::new(
            "EUR-TEST-ON",
            0,
            &EUR,
            WeekendsOnly,
            Arc::new(Actual360),
            flat_curve(),
        ));
        let swap = OvernightIndexedSwap::new(
            SwapType::Receiver,
            1_000_000.0,
            make_schedule(Period::new(1, TimeUnit::Years)),
            0.03,
            Arc::new(Thirty360),
            make_schedule(Period::new(1, TimeUnit::Years)),
            index,
            0.0,
            0,
            BusinessDayConvention::Following,
            RateAveraging::Compound,
        )
        .unwrap();
        assert_eq!(swap.fixed_leg().len(), 5);
        assert_eq!(swap.floating_leg().len(), 5);
        assert_eq!(swap.averaging(), RateAveraging::Compound);
    }
}
