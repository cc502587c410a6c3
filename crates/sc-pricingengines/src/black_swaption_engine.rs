//! Black and Bachelier swaption engines.
//!
//! Both engines price a European swaption as
//! `annuity × formula(forward, strike, σ√T)`, with the forward and annuity
//! read off the underlying swap on the discount curve. They differ only in
//! the formula and in the displacement shift the Black engine applies.

use crate::black_formula::{bachelier_formula, black_formula, OptionType};
use crate::discounting_swap_engine::DiscountingSwapEngine;
use sc_core::{
    errors::{Error, Result},
    Real,
};
use sc_instruments::{
    FixedVsFloatingSwap, PricingResults, SwapType, Swaption, SwaptionPricingEngine,
};
use sc_quotes::Quote;
use sc_termstructures::{TermStructure, YieldCurveHandle, YieldTermStructure};
use sc_time::{Actual365Fixed, DayCounter};
use std::sync::Arc;

fn option_type(swap_type: SwapType) -> OptionType {
    match swap_type {
        SwapType::Payer => OptionType::Call,
        SwapType::Receiver => OptionType::Put,
    }
}

/// Forward, annuity, strike, and time to exercise shared by both engines.
struct SwaptionInputs {
    forward: Real,
    annuity: Real,
    strike: Real,
    std_dev_time: Real,
    option_type: OptionType,
}

fn gather_inputs(
    swaption: &Swaption,
    curve_handle: &YieldCurveHandle,
    vol_day_counter: &dyn DayCounter,
) -> Result<SwaptionInputs> {
    let curve: Arc<dyn YieldTermStructure> = curve_handle
        .current()
        .ok_or_else(|| Error::Precondition("no discount curve linked to the engine".into()))?;
    let swap = swaption.underlying_swap();
    let results = DiscountingSwapEngine::new(curve_handle.clone()).calculate(&**swap)?;
    let forward = results.fair_rate.ok_or_else(|| {
        Error::Runtime("swaption forward undefined: no remaining fixed coupons".into())
    })?;
    let t = vol_day_counter.year_fraction(curve.reference_date(), swaption.exercise_date());
    Ok(SwaptionInputs {
        forward,
        annuity: results.fixed_leg_annuity,
        strike: swap.fixed_rate(),
        std_dev_time: t.max(0.0),
        option_type: option_type(swap.swap_type()),
    })
}

/// Shifted-lognormal (Black) swaption engine.
#[derive(Debug)]
pub struct BlackSwaptionEngine {
    curve: YieldCurveHandle,
    volatility: Arc<dyn Quote>,
    day_counter: Arc<dyn DayCounter>,
    shift: Real,
}

impl BlackSwaptionEngine {
    /// Create an engine with an Actual/365-Fixed volatility day counter and
    /// no shift.
    pub fn new(curve: YieldCurveHandle, volatility: Arc<dyn Quote>) -> Self {
        Self {
            curve,
            volatility,
            day_counter: Arc::new(Actual365Fixed),
            shift: 0.0,
        }
    }

    /// Set the displacement shift.
    pub fn with_shift(mut self, shift: Real) -> Self {
        self.shift = shift;
        self
    }

    /// Set the volatility day counter.
    pub fn with_day_counter(mut self, dc: Arc<dyn DayCounter>) -> Self {
        self.day_counter = dc;
        self
    }
}

impl SwaptionPricingEngine for BlackSwaptionEngine {
    fn calculate(&self, swaption: &Swaption) -> Result<PricingResults> {
        let inputs = gather_inputs(swaption, &self.curve, &*self.day_counter)?;
        let sigma = self
            .volatility
            .value()
            .ok_or_else(|| Error::Precondition("volatility quote is not set".into()))?;
        let std_dev = sigma * inputs.std_dev_time.sqrt();
        let npv = black_formula(
            inputs.option_type,
            inputs.forward + self.shift,
            inputs.strike + self.shift,
            std_dev,
            inputs.annuity,
        );
        Ok(PricingResults::from_npv(npv)
            .with_result("annuity", inputs.annuity)
            .with_result("atm_forward", inputs.forward)
            .with_result("std_dev", std_dev))
    }
}

/// Normal (Bachelier) swaption engine.
#[derive(Debug)]
pub struct BachelierSwaptionEngine {
    curve: YieldCurveHandle,
    volatility: Arc<dyn Quote>,
    day_counter: Arc<dyn DayCounter>,
}

impl BachelierSwaptionEngine {
    /// Create an engine with an Actual/365-Fixed volatility day counter.
    pub fn new(curve: YieldCurveHandle, volatility: Arc<dyn Quote>) -> Self {
        Self {
            curve,
            volatility,
            day_counter: Arc::new(Actual365Fixed),
        }
    }

    /// Set the volatility day counter.
    pub fn with_day_counter(mut self, dc: Arc<dyn DayCounter>) -> Self {
        self.day_counter = dc;
        self
    }
}

impl SwaptionPricingEngine for BachelierSwaptionEngine {
    fn calculate(&self, swaption: &Swaption) -> Result<PricingResults> {
        let inputs = gather_inputs(swaption, &self.curve, &*self.day_counter)?;
        let sigma = self
            .volatility
            .value()
            .ok_or_else(|| Error::Precondition("volatility quote is not set".into()))?;
        let std_dev = sigma * inputs.std_dev_time.sqrt();
        let npv = bachelier_formula(
            inputs.option_type,
            inputs.forward,
            inputs.strike,
            std_dev,
            inputs.annuity,
        );
        Ok(PricingResults::from_npv(npv)
            .with_result("annuity", inputs.annuity)
            .with_result("atm_forward", inputs.forward)
            .with_result("std_dev", std_dev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sc_core::currency::EUR;
    use sc_indexes::IborIndex;
    use sc_instruments::{Exercise, FixedVsFloatingSwap, VanillaSwap};
    use sc_math::normal_pdf;
    use sc_quotes::SimpleQuote;
    use sc_termstructures::FlatForward;
    use sc_time::{
        Actual360, Actual365Fixed, BusinessDayConvention, Date, DateGeneration, Period,
        ScheduleBuilder, Thirty360, TimeUnit, WeekendsOnly,
    };

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn setup(strike_offset: f64) -> (YieldCurveHandle, Swaption, f64, f64) {
        let curve =
            YieldCurveHandle::from_arc(Arc::new(FlatForward::continuous(date(2025, 1, 2), 0.03)));
        let index = Arc::new(IborIndex::new(
            "EUR-TEST-6M",
            Period::new(6, TimeUnit::Months),
            2,
            &EUR,
            WeekendsOnly,
            BusinessDayConvention::ModifiedFollowing,
            false,
            Arc::new(Actual360),
            curve.clone(),
        ));
        let schedule = |tenor| {
            ScheduleBuilder::new(date(2030, 1, 15), date(2035, 1, 15), tenor, &WeekendsOnly)
                .with_rule(DateGeneration::Forward)
                .build()
                .unwrap()
        };
        let make = |rate: f64, swap_type| {
            Arc::new(VanillaSwap::new(
                swap_type,
                1_000_000.0,
                schedule(Period::new(1, TimeUnit::Years)),
                rate,
                Arc::new(Thirty360),
                schedule(Period::new(6, TimeUnit::Months)),
                Arc::clone(&index),
                0.0,
                Arc::new(Actual360),
            )) as Arc<dyn FixedVsFloatingSwap>
        };
        let engine = DiscountingSwapEngine::new(curve.clone());
        let trial = make(0.0, SwapType::Receiver);
        let results = engine.calculate(&*trial).unwrap();
        let forward = results.fair_rate.unwrap();
        let annuity = results.fixed_leg_annuity;
        let swap = make(forward + strike_offset, SwapType::Payer);
        let swaption = Swaption::new(swap, Exercise::european(date(2030, 1, 13))).unwrap();
        (curve, swaption, forward, annuity)
    }

    #[test]
    fn black_atm_value_matches_closed_form() {
        let (curve, swaption, forward, annuity) = setup(0.0);
        let vol = Arc::new(SimpleQuote::new(0.20));
        let engine = BlackSwaptionEngine::new(curve.clone(), vol);
        let npv = swaption.npv(&engine).unwrap();

        let t = Actual365Fixed.year_fraction(date(2025, 1, 2), date(2030, 1, 13));
        let std_dev = 0.20 * t.sqrt();
        let expected = annuity * forward * (2.0 * sc_math::normal_cdf(std_dev / 2.0) - 1.0);
        assert_relative_eq!(npv, expected, max_relative = 1e-10);
    }

    #[test]
    fn bachelier_atm_value_matches_closed_form() {
        let (curve, swaption, _forward, annuity) = setup(0.0);
        let vol = Arc::new(SimpleQuote::new(0.0060));
        let engine = BachelierSwaptionEngine::new(curve.clone(), vol);
        let npv = swaption.npv(&engine).unwrap();

        let t = Actual365Fixed.year_fraction(date(2025, 1, 2), date(2030, 1, 13));
        let std_dev = 0.0060 * t.sqrt();
        let expected = annuity * std_dev * normal_pdf(0.0);
        assert_relative_eq!(npv, expected, max_relative = 1e-10);
    }

    #[test]
    fn shift_changes_the_black_value() {
        let (curve, swaption, _, _) = setup(0.005);
        let vol = Arc::new(SimpleQuote::new(0.20));
        let plain = BlackSwaptionEngine::new(curve.clone(), Arc::clone(&vol) as Arc<dyn Quote>);
        let shifted =
            BlackSwaptionEngine::new(curve, Arc::clone(&vol) as Arc<dyn Quote>).with_shift(0.02);
        let v1 = swaption.npv(&plain).unwrap();
        let v2 = swaption.npv(&shifted).unwrap();
        assert!((v1 - v2).abs() > 1e-10);
    }

    #[test]
    fn unset_quote_is_an_error() {
        let (curve, swaption, _, _) = setup(0.0);
        let engine = BlackSwaptionEngine::new(curve, Arc::new(SimpleQuote::empty()));
        assert!(swaption.npv(&engine).is_err());
    }
}
