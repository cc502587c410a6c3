//! Discounting swap engine.
//!
//! Prices a fixed-vs-floating swap by discounting each leg's cash flows
//! after the curve's reference date. Premium settlement is not adjusted
//! for: values are as seen from the reference date itself.

use sc_core::{
    errors::{Error, Result},
    Rate, Real,
};
use sc_cashflows::{CashFlow, Coupon, Leg};
use sc_instruments::{FixedVsFloatingSwap, SwapType};
use sc_termstructures::{TermStructure, YieldCurveHandle, YieldTermStructure};
use std::sync::Arc;

/// Results of discounting a swap.
#[derive(Debug, Clone)]
pub struct SwapResults {
    /// Net present value from the holder's perspective.
    pub npv: Real,
    /// Present value of the fixed leg.
    pub fixed_leg_npv: Real,
    /// Present value of the floating leg.
    pub floating_leg_npv: Real,
    /// Fixed-leg annuity: Σ nominal · accrual · discount.
    pub fixed_leg_annuity: Real,
    /// The fixed rate that would make the swap worth zero.
    pub fair_rate: Option<Rate>,
}

/// Swap pricing engine discounting on a yield curve.
#[derive(Debug, Clone)]
pub struct DiscountingSwapEngine {
    curve: YieldCurveHandle,
}

impl DiscountingSwapEngine {
    /// Create an engine on a discount-curve handle.
    pub fn new(curve: YieldCurveHandle) -> Self {
        Self { curve }
    }

    fn linked_curve(&self) -> Result<Arc<dyn YieldTermStructure>> {
        self.curve
            .current()
            .ok_or_else(|| Error::Precondition("no discount curve linked to the engine".into()))
    }

    fn leg_npv(leg: &Leg, curve: &dyn YieldTermStructure) -> Result<Real> {
        let reference = curve.reference_date();
        let mut npv = 0.0;
        for cf in leg {
            if cf.occurs_after(reference) {
                npv += cf.amount()? * curve.discount_date(cf.date());
            }
        }
        Ok(npv)
    }

    fn fixed_leg_annuity(leg: &Leg, curve: &dyn YieldTermStructure) -> Real {
        let reference = curve.reference_date();
        leg.iter()
            .filter(|cf| cf.occurs_after(reference))
            .filter_map(|cf| cf.as_coupon())
            .map(|c| c.nominal() * c.accrual_period() * curve.discount_date(c.date()))
            .sum()
    }

    /// Price a swap.
    pub fn calculate(&self, swap: &dyn FixedVsFloatingSwap) -> Result<SwapResults> {
        let curve = self.linked_curve()?;
        let fixed_leg_npv = Self::leg_npv(swap.fixed_leg(), &*curve)?;
        let floating_leg_npv = Self::leg_npv(swap.floating_leg(), &*curve)?;
        let fixed_leg_annuity = Self::fixed_leg_annuity(swap.fixed_leg(), &*curve);

        let npv = swap.swap_type().sign() * (floating_leg_npv - fixed_leg_npv);
        let fair_rate = if fixed_leg_annuity.abs() > Real::EPSILON {
            Some(floating_leg_npv / fixed_leg_annuity)
        } else {
            None
        };

        Ok(SwapResults {
            npv,
            fixed_leg_npv,
            floating_leg_npv,
            fixed_leg_annuity,
            fair_rate,
        })
    }

    /// Convenience: the fair fixed rate of a swap.
    pub fn fair_rate(&self, swap: &dyn FixedVsFloatingSwap) -> Result<Rate> {
        self.calculate(swap)?.fair_rate.ok_or_else(|| {
            Error::Runtime("fair rate undefined: swap has no remaining fixed coupons".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sc_core::currency::EUR;
    use sc_indexes::IborIndex;
    use sc_instruments::VanillaSwap;
    use sc_termstructures::FlatForward;
    use sc_time::{
        Actual360, BusinessDayConvention, Date, DateGeneration, Period, Schedule,
        ScheduleBuilder, Thirty360, TimeUnit, WeekendsOnly,
    };

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curve(rate: f64) -> YieldCurveHandle {
        YieldCurveHandle::from_arc(Arc::new(FlatForward::continuous(date(2025, 1, 2), rate)))
    }

    fn make_schedule(tenor: Period) -> Schedule {
        ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2030, 1, 15),
            tenor,
            &WeekendsOnly,
        )
        .with_rule(DateGeneration::Forward)
        .build()
        .unwrap()
    }

    fn make_swap(swap_type: SwapType, fixed_rate: f64, curve: YieldCurveHandle) -> VanillaSwap {
        let index = Arc::new(IborIndex::new(
            "EUR-TEST-6M",
            Period::new(6, TimeUnit::Months),
            2,
            &EUR,
            WeekendsOnly,
            BusinessDayConvention::ModifiedFollowing,
            false,
            Arc::new(Actual360),
            curve,
        ));
        VanillaSwap::new(
            swap_type,
            1_000_000.0,
            make_schedule(Period::new(1, TimeUnit::Years)),
            fixed_rate,
            Arc::new(Thirty360),
            make_schedule(Period::new(6, TimeUnit::Months)),
            index,
            0.0,
            Arc::new(Actual360),
        )
    }

    #[test]
    fn swap_at_fair_rate_is_worthless() {
        let curve = flat_curve(0.03);
        let engine = DiscountingSwapEngine::new(curve.clone());
        let trial = make_swap(SwapType::Receiver, 0.0, curve.clone());
        let fair = engine.fair_rate(&trial).unwrap();
        let swap = make_swap(SwapType::Payer, fair, curve);
        let results = engine.calculate(&swap).unwrap();
        assert_abs_diff_eq!(results.npv, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn payer_and_receiver_npvs_mirror() {
        let curve = flat_curve(0.03);
        let engine = DiscountingSwapEngine::new(curve.clone());
        let payer = make_swap(SwapType::Payer, 0.02, curve.clone());
        let receiver = make_swap(SwapType::Receiver, 0.02, curve);
        let p = engine.calculate(&payer).unwrap();
        let r = engine.calculate(&receiver).unwrap();
        assert_abs_diff_eq!(p.npv + r.npv, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_rate_receiver_swap_pays_the_floating_leg() {
        let curve = flat_curve(0.03);
        let engine = DiscountingSwapEngine::new(curve.clone());
        let trial = make_swap(SwapType::Receiver, 0.0, curve);
        let results = engine.calculate(&trial).unwrap();
        assert_abs_diff_eq!(results.fixed_leg_npv, 0.0, epsilon = 1e-12);
        assert!(results.floating_leg_npv > 0.0);
        assert!(results.npv < 0.0);
        let fair = results.fair_rate.unwrap();
        assert_abs_diff_eq!(
            fair,
            results.floating_leg_npv / results.fixed_leg_annuity,
            epsilon = 1e-15
        );
    }

    #[test]
    fn fair_rate_near_flat_curve_level() {
        let curve = flat_curve(0.03);
        let engine = DiscountingSwapEngine::new(curve.clone());
        let trial = make_swap(SwapType::Receiver, 0.0, curve);
        let fair = engine.fair_rate(&trial).unwrap();
        // a flat 3% continuous curve implies a par rate close to 3%
        assert!((fair - 0.03).abs() < 0.005, "fair = {fair}");
    }

    #[test]
    fn missing_curve_is_an_error() {
        let engine = DiscountingSwapEngine::new(YieldCurveHandle::empty());
        let swap = make_swap(SwapType::Payer, 0.02, flat_curve(0.03));
        assert!(engine.calculate(&swap).is_err());
    }
}
