//! Swaption calibration helpers.
//!
//! [`FixedVsFloatingSwaptionHelper`] owns the date resolution, the lazy
//! rebuild of the synthetic swap and swaption, and the pricing entry
//! points; building the swap itself is delegated to a [`SwapConstructor`]
//! chosen at construction time. [`SwaptionHelper`] uses a term-fixing
//! index, [`OvernightIndexedSwaptionHelper`] an overnight index.

use crate::calibration_helper::{BlackCalibrationHelper, CalibrationErrorType};
use sc_core::{
    ensure,
    errors::{Error, Result},
    Natural, Rate, Real, Time, Version, Versioned, Volatility,
};
use sc_cashflows::{CashFlow, Coupon, RateAveraging};
use sc_indexes::{IborIndex, Index, InterestRateIndex, OvernightIndex};
use sc_instruments::{
    Exercise, FixedVsFloatingSwap, OvernightIndexedSwap, SwapType, Swaption,
    SwaptionPricingEngine, VanillaSwap,
};
use sc_pricingengines::{BachelierSwaptionEngine, BlackSwaptionEngine, DiscountingSwapEngine};
use sc_quotes::{Quote, SimpleQuote};
use sc_termstructures::{TermStructure, VolatilityType, YieldCurveHandle, YieldTermStructure};
use sc_time::{Calendar, Date, DateGeneration, DayCounter, Period, Schedule, ScheduleBuilder};
use std::cell::RefCell;
use std::sync::Arc;

// ────────────────────────────────────────────────────────────────────────────
// Configuration and date resolution
// ────────────────────────────────────────────────────────────────────────────

/// Fully resolved configuration of a swaption helper.
///
/// Everything except the dates and the index: the quote, the discount
/// curve, the fixed-leg conventions, and the optional settings with their
/// market defaults.
#[derive(Debug, Clone)]
pub struct SwaptionHelperConfig {
    /// The market volatility quote.
    pub volatility: Arc<SimpleQuote>,
    /// The discount curve; also supplies the reference date.
    pub discount_curve: YieldCurveHandle,
    /// Fixed-leg payment tenor.
    pub fixed_leg_tenor: Period,
    /// Fixed-leg day counter.
    pub fixed_leg_day_counter: Arc<dyn DayCounter>,
    /// Floating-leg day counter.
    pub floating_leg_day_counter: Arc<dyn DayCounter>,
    /// How the calibration error is measured.
    pub error_type: CalibrationErrorType,
    /// Strike; `None` means at the money.
    pub strike: Option<Rate>,
    /// Notional.
    pub nominal: Real,
    /// Quoting convention of the volatility.
    pub volatility_type: VolatilityType,
    /// Displacement shift for shifted-lognormal quotes.
    pub shift: Real,
    /// Settlement days between exercise and swap start; `None` uses the
    /// index's own value-date rule.
    pub settlement_days: Option<Natural>,
}

impl SwaptionHelperConfig {
    /// Create a configuration with market defaults: relative price error,
    /// ATM strike, unit nominal, shifted-lognormal quoting with zero
    /// shift, and the index's settlement rule.
    pub fn new(
        volatility: Arc<SimpleQuote>,
        discount_curve: YieldCurveHandle,
        fixed_leg_tenor: Period,
        fixed_leg_day_counter: Arc<dyn DayCounter>,
        floating_leg_day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        Self {
            volatility,
            discount_curve,
            fixed_leg_tenor,
            fixed_leg_day_counter,
            floating_leg_day_counter,
            error_type: CalibrationErrorType::RelativePriceError,
            strike: None,
            nominal: 1.0,
            volatility_type: VolatilityType::ShiftedLognormal,
            shift: 0.0,
            settlement_days: None,
        }
    }

    /// Set the error measure.
    pub fn with_error_type(mut self, error_type: CalibrationErrorType) -> Self {
        self.error_type = error_type;
        self
    }

    /// Set an explicit strike.
    pub fn with_strike(mut self, strike: Rate) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Set the notional.
    pub fn with_nominal(mut self, nominal: Real) -> Self {
        self.nominal = nominal;
        self
    }

    /// Set the volatility quoting convention.
    pub fn with_volatility_type(mut self, volatility_type: VolatilityType) -> Self {
        self.volatility_type = volatility_type;
        self
    }

    /// Set the displacement shift.
    pub fn with_shift(mut self, shift: Real) -> Self {
        self.shift = shift;
        self
    }

    /// Set an explicit settlement-day count.
    pub fn with_settlement_days(mut self, settlement_days: Natural) -> Self {
        self.settlement_days = Some(settlement_days);
        self
    }

    fn linked_curve(&self) -> Result<Arc<dyn YieldTermStructure>> {
        self.discount_curve
            .current()
            .ok_or_else(|| Error::Precondition("no discount curve linked to the helper".into()))
    }
}

/// The exercise date implied by a market maturity tenor: the curve's
/// reference date advanced on the index's fixing calendar under the
/// index's business-day convention.
pub fn exercise_date_from_maturity(
    index: &dyn InterestRateIndex,
    curve: &dyn YieldTermStructure,
    maturity: Period,
) -> Result<Date> {
    index.fixing_calendar().advance(
        curve.reference_date(),
        maturity,
        index.business_day_convention(),
        false,
    )
}

/// The swap start date for an exercise date: the index's value date, or a
/// calendar advance by an explicit settlement-day count.
fn start_date_for(
    index: &dyn InterestRateIndex,
    settlement_days: Option<Natural>,
    exercise_date: Date,
) -> Result<Date> {
    match settlement_days {
        None => Ok(index.value_date(exercise_date)),
        Some(days) => index.fixing_calendar().advance(
            exercise_date,
            Period::days(days as i32),
            index.business_day_convention(),
            false,
        ),
    }
}

/// The swap end date for a start date and a swap length.
fn end_date_from_length(
    index: &dyn InterestRateIndex,
    start_date: Date,
    length: Period,
) -> Result<Date> {
    index.fixing_calendar().advance(
        start_date,
        length,
        index.business_day_convention(),
        false,
    )
}

/// How the swap end date is obtained on each rebuild.
#[derive(Debug, Clone, Copy)]
enum EndDateRule {
    Explicit(Date),
    FromLength(Period),
}

// ────────────────────────────────────────────────────────────────────────────
// Swap-construction strategies
// ────────────────────────────────────────────────────────────────────────────

/// The resolved inputs a [`SwapConstructor`] builds a swap from.
#[derive(Debug)]
pub struct SwapTerms<'a> {
    /// Swap start date.
    pub start_date: Date,
    /// Swap end date.
    pub end_date: Date,
    /// Notional.
    pub nominal: Real,
    /// Fixed-leg payment tenor.
    pub fixed_leg_tenor: Period,
    /// Fixed-leg day counter.
    pub fixed_leg_day_counter: &'a Arc<dyn DayCounter>,
    /// Floating-leg day counter.
    pub floating_leg_day_counter: &'a Arc<dyn DayCounter>,
}

/// Builds the helper's underlying swap.
///
/// The two implementations differ in the floating leg: a term-fixing leg
/// on the index's own tenor, or an annually-paying overnight leg. Static
/// dispatch through the helper's type parameter keeps the template-method
/// shape without virtual calls.
pub trait SwapConstructor: std::fmt::Debug {
    /// The index supplying calendar, conventions, and date rules.
    fn index(&self) -> &dyn InterestRateIndex;

    /// Build a swap over the given terms at the given fixed rate.
    fn make_swap(
        &self,
        terms: &SwapTerms<'_>,
        swap_type: SwapType,
        fixed_rate: Rate,
    ) -> Result<Arc<dyn FixedVsFloatingSwap>>;
}

fn leg_schedule(
    index: &dyn InterestRateIndex,
    start_date: Date,
    end_date: Date,
    tenor: Period,
) -> Result<Schedule> {
    ScheduleBuilder::new(start_date, end_date, tenor, index.fixing_calendar())
        .with_convention(index.business_day_convention())
        .with_termination_convention(index.business_day_convention())
        .with_rule(DateGeneration::Forward)
        .end_of_month(false)
        .build()
}

/// Strategy for term-fixing floating legs: the floating schedule runs on
/// the index's own tenor.
#[derive(Debug)]
pub struct IborSwapConstructor {
    index: Arc<IborIndex>,
}

impl IborSwapConstructor {
    /// Create a constructor on a term-fixing index.
    pub fn new(index: Arc<IborIndex>) -> Self {
        Self { index }
    }

    /// The index.
    pub fn ibor_index(&self) -> &Arc<IborIndex> {
        &self.index
    }
}

impl SwapConstructor for IborSwapConstructor {
    fn index(&self) -> &dyn InterestRateIndex {
        &*self.index
    }

    fn make_swap(
        &self,
        terms: &SwapTerms<'_>,
        swap_type: SwapType,
        fixed_rate: Rate,
    ) -> Result<Arc<dyn FixedVsFloatingSwap>> {
        let fixed_schedule = leg_schedule(
            &*self.index,
            terms.start_date,
            terms.end_date,
            terms.fixed_leg_tenor,
        )?;
        let float_schedule = leg_schedule(
            &*self.index,
            terms.start_date,
            terms.end_date,
            self.index.tenor(),
        )?;
        Ok(Arc::new(VanillaSwap::new(
            swap_type,
            terms.nominal,
            fixed_schedule,
            fixed_rate,
            terms.fixed_leg_day_counter.clone(),
            float_schedule,
            Arc::clone(&self.index),
            0.0,
            terms.floating_leg_day_counter.clone(),
        )))
    }
}

/// Strategy for overnight floating legs: the overnight leg pays annually
/// regardless of the index's daily fixing frequency, and aggregates the
/// daily fixings under a configurable averaging method.
#[derive(Debug)]
pub struct OvernightSwapConstructor {
    index: Arc<OvernightIndex>,
    averaging: RateAveraging,
}

impl OvernightSwapConstructor {
    /// Create a constructor on an overnight index.
    pub fn new(index: Arc<OvernightIndex>, averaging: RateAveraging) -> Self {
        Self { index, averaging }
    }

    /// The index.
    pub fn overnight_index(&self) -> &Arc<OvernightIndex> {
        &self.index
    }

    /// The averaging method.
    pub fn averaging(&self) -> RateAveraging {
        self.averaging
    }
}

impl SwapConstructor for OvernightSwapConstructor {
    fn index(&self) -> &dyn InterestRateIndex {
        &*self.index
    }

    fn make_swap(
        &self,
        terms: &SwapTerms<'_>,
        swap_type: SwapType,
        fixed_rate: Rate,
    ) -> Result<Arc<dyn FixedVsFloatingSwap>> {
        let fixed_schedule = leg_schedule(
            &*self.index,
            terms.start_date,
            terms.end_date,
            terms.fixed_leg_tenor,
        )?;
        let overnight_schedule = leg_schedule(
            &*self.index,
            terms.start_date,
            terms.end_date,
            Period::years(1),
        )?;
        Ok(Arc::new(OvernightIndexedSwap::new(
            swap_type,
            terms.nominal,
            fixed_schedule,
            fixed_rate,
            terms.fixed_leg_day_counter.clone(),
            overnight_schedule,
            Arc::clone(&self.index),
            0.0,
            0,
            sc_time::BusinessDayConvention::Following,
            self.averaging,
        )?))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The helper core
// ────────────────────────────────────────────────────────────────────────────

/// Everything derived from the shared market state, rebuilt whenever the
/// observed version stamps change.
#[derive(Debug)]
struct HelperCache {
    observed: (Version, Version),
    start_date: Date,
    end_date: Date,
    exercise_rate: Rate,
    swap: Arc<dyn FixedVsFloatingSwap>,
    swaption: Swaption,
}

/// Calibration helper for a European swaption on a fixed-vs-floating swap.
///
/// The helper resolves its dates, discovers the ATM forward by pricing a
/// zero-rate trial swap, decides strike and direction, and caches the
/// resulting swap and swaption together with the version stamps of the
/// index and the discount curve. Any query rebuilds the cache when the
/// stamps moved; [`invalidate`][Self::invalidate] forces the next query to
/// rebuild.
#[derive(Debug)]
pub struct FixedVsFloatingSwaptionHelper<S: SwapConstructor> {
    constructor: S,
    exercise_date: Date,
    end_date_rule: EndDateRule,
    config: SwaptionHelperConfig,
    pricing_engine: RefCell<Option<Arc<dyn SwaptionPricingEngine>>>,
    cache: RefCell<Option<HelperCache>>,
}

impl<S: SwapConstructor> FixedVsFloatingSwaptionHelper<S> {
    /// The canonical constructor: strategy, resolved exercise date, end
    /// date rule, configuration. Explicit end dates are validated against
    /// the settlement-resolved start date here.
    fn with_dates(
        constructor: S,
        exercise_date: Date,
        end_date_rule: EndDateRule,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        if let EndDateRule::Explicit(end_date) = end_date_rule {
            let start_date =
                start_date_for(constructor.index(), config.settlement_days, exercise_date)?;
            ensure!(
                start_date <= end_date,
                "swap end date {end_date} precedes its start date {start_date}"
            );
        }
        Ok(Self {
            constructor,
            exercise_date,
            end_date_rule,
            config,
            pricing_engine: RefCell::new(None),
            cache: RefCell::new(None),
        })
    }

    /// Set the model pricing engine used by
    /// [`model_value`][Self::model_value].
    pub fn set_pricing_engine(&self, engine: Arc<dyn SwaptionPricingEngine>) {
        *self.pricing_engine.borrow_mut() = Some(engine);
    }

    /// Drop the cached swap and swaption; the next query rebuilds them.
    pub fn invalidate(&self) {
        *self.cache.borrow_mut() = None;
    }

    /// The helper's configuration.
    pub fn config(&self) -> &SwaptionHelperConfig {
        &self.config
    }

    /// The swap-construction strategy.
    pub fn constructor(&self) -> &S {
        &self.constructor
    }

    /// The exercise date (fixed at construction).
    pub fn exercise_date(&self) -> Date {
        self.exercise_date
    }

    /// The swap start date under the settlement rule.
    pub fn start_date(&self) -> Result<Date> {
        self.with_cache(|cache| Ok(cache.start_date))
    }

    /// The swap end date.
    pub fn end_date(&self) -> Result<Date> {
        self.with_cache(|cache| Ok(cache.end_date))
    }

    /// The strike actually used: the supplied strike, or the ATM forward.
    pub fn exercise_rate(&self) -> Result<Rate> {
        self.with_cache(|cache| Ok(cache.exercise_rate))
    }

    /// The cached swaption.
    pub fn swaption(&self) -> Result<Swaption> {
        self.with_cache(|cache| Ok(cache.swaption.clone()))
    }

    /// The cached underlying swap.
    pub fn underlying_swap(&self) -> Result<Arc<dyn FixedVsFloatingSwap>> {
        self.with_cache(|cache| Ok(Arc::clone(&cache.swap)))
    }

    // ── Lazy rebuild ─────────────────────────────────────────────────────

    fn observed_versions(&self) -> (Version, Version) {
        (
            self.constructor.index().version(),
            self.config.discount_curve.version(),
        )
    }

    fn ensure_calculated(&self) -> Result<()> {
        let current = self.observed_versions();
        let stale = match &*self.cache.borrow() {
            None => true,
            Some(cache) => cache.observed != current,
        };
        if stale {
            let rebuilt = self.rebuild(current)?;
            *self.cache.borrow_mut() = Some(rebuilt);
        }
        Ok(())
    }

    fn with_cache<R>(&self, f: impl FnOnce(&HelperCache) -> Result<R>) -> Result<R> {
        self.ensure_calculated()?;
        let cache = self.cache.borrow();
        f(cache.as_ref().expect("cache populated by ensure_calculated"))
    }

    fn rebuild(&self, observed: (Version, Version)) -> Result<HelperCache> {
        let index = self.constructor.index();
        let start_date = start_date_for(index, self.config.settlement_days, self.exercise_date)?;
        let end_date = match self.end_date_rule {
            EndDateRule::Explicit(date) => date,
            EndDateRule::FromLength(length) => end_date_from_length(index, start_date, length)?,
        };
        ensure!(
            start_date <= end_date,
            "swap end date {end_date} precedes its start date {start_date}"
        );

        let terms = SwapTerms {
            start_date,
            end_date,
            nominal: self.config.nominal,
            fixed_leg_tenor: self.config.fixed_leg_tenor,
            fixed_leg_day_counter: &self.config.fixed_leg_day_counter,
            floating_leg_day_counter: &self.config.floating_leg_day_counter,
        };

        // discounting only, values as of the curve's reference date
        let swap_engine = DiscountingSwapEngine::new(self.config.discount_curve.clone());
        let trial = self
            .constructor
            .make_swap(&terms, SwapType::Receiver, 0.0)?;
        let forward = swap_engine.fair_rate(&*trial)?;

        // non-strict comparison on purpose: at-the-money stays a receiver
        let (exercise_rate, swap_type) = match self.config.strike {
            None => (forward, SwapType::Receiver),
            Some(strike) if strike <= forward => (strike, SwapType::Receiver),
            Some(strike) => (strike, SwapType::Payer),
        };

        let swap = self.constructor.make_swap(&terms, swap_type, exercise_rate)?;
        let swaption = Swaption::new(
            Arc::clone(&swap),
            Exercise::european(self.exercise_date),
        )?;

        Ok(HelperCache {
            observed,
            start_date,
            end_date,
            exercise_rate,
            swap,
            swaption,
        })
    }
}

impl<S: SwapConstructor> BlackCalibrationHelper for FixedVsFloatingSwaptionHelper<S> {
    fn volatility(&self) -> &Arc<SimpleQuote> {
        &self.config.volatility
    }

    fn error_type(&self) -> CalibrationErrorType {
        self.config.error_type
    }

    /// Price the cached swaption with the externally supplied engine.
    fn model_value(&self) -> Result<Real> {
        let engine = self
            .pricing_engine
            .borrow()
            .clone()
            .ok_or_else(|| Error::Precondition("no pricing engine set on the helper".into()))?;
        self.with_cache(|cache| cache.swaption.npv(&*engine))
    }

    /// Price the cached swaption at the volatility `sigma` under the
    /// configured quoting convention.
    ///
    /// The engine is built on the fly and passed by reference, so the
    /// engine configured through
    /// [`set_pricing_engine`][Self::set_pricing_engine] is untouched on
    /// every exit path.
    fn black_price(&self, sigma: Volatility) -> Result<Real> {
        let vol: Arc<dyn Quote> = Arc::new(SimpleQuote::new(sigma));
        let engine: Arc<dyn SwaptionPricingEngine> = match self.config.volatility_type {
            VolatilityType::ShiftedLognormal => Arc::new(
                BlackSwaptionEngine::new(self.config.discount_curve.clone(), vol)
                    .with_shift(self.config.shift),
            ),
            VolatilityType::Normal => Arc::new(BachelierSwaptionEngine::new(
                self.config.discount_curve.clone(),
                vol,
            )),
        };
        self.with_cache(|cache| cache.swaption.npv(&*engine))
    }

    /// Append the times a lattice must include to represent the swaption:
    /// the exercise time plus each coupon's accrual start and payment
    /// times, measured on the curve's day counter. The contribution is
    /// sorted and deduplicated before appending.
    fn add_times_to(&self, times: &mut Vec<Time>) -> Result<()> {
        let curve = self.config.linked_curve()?;
        let reference = curve.reference_date();
        self.with_cache(|cache| {
            let mut contribution: Vec<Time> = Vec::new();
            {
                let mut push = |date: Date| {
                    if date > reference {
                        contribution.push(curve.time_from_reference(date));
                    }
                };
                push(cache.swaption.exercise_date());
                for leg in [cache.swap.fixed_leg(), cache.swap.floating_leg()] {
                    for cash_flow in leg {
                        if let Some(coupon) = cash_flow.as_coupon() {
                            push(coupon.accrual_start_date());
                        }
                        push(cash_flow.date());
                    }
                }
            }
            contribution.sort_by(|a, b| a.partial_cmp(b).expect("times are finite"));
            contribution.dedup_by(|a, b| (*a - *b).abs() < 1.0e-12);
            times.extend(contribution);
            Ok(())
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Concrete helpers
// ────────────────────────────────────────────────────────────────────────────

/// Calibration helper on a term-fixing (ibor-style) index.
pub type SwaptionHelper = FixedVsFloatingSwaptionHelper<IborSwapConstructor>;

impl SwaptionHelper {
    /// Helper for a (maturity, length) market quote: the exercise date is
    /// the curve's reference date advanced by `maturity` on the index's
    /// fixing calendar.
    pub fn from_maturity(
        maturity: Period,
        length: Period,
        index: Arc<IborIndex>,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        let curve = config.linked_curve()?;
        let exercise_date = exercise_date_from_maturity(&*index, &*curve, maturity)?;
        Self::with_dates(
            IborSwapConstructor::new(index),
            exercise_date,
            EndDateRule::FromLength(length),
            config,
        )
    }

    /// Helper for an explicit exercise date and a swap length.
    pub fn from_exercise_date(
        exercise_date: Date,
        length: Period,
        index: Arc<IborIndex>,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        Self::with_dates(
            IborSwapConstructor::new(index),
            exercise_date,
            EndDateRule::FromLength(length),
            config,
        )
    }

    /// Helper for explicit exercise and end dates.
    pub fn from_dates(
        exercise_date: Date,
        end_date: Date,
        index: Arc<IborIndex>,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        Self::with_dates(
            IborSwapConstructor::new(index),
            exercise_date,
            EndDateRule::Explicit(end_date),
            config,
        )
    }
}

/// Calibration helper on an overnight index.
pub type OvernightIndexedSwaptionHelper =
    FixedVsFloatingSwaptionHelper<OvernightSwapConstructor>;

impl OvernightIndexedSwaptionHelper {
    /// Helper for a (maturity, length) market quote.
    pub fn from_maturity(
        maturity: Period,
        length: Period,
        index: Arc<OvernightIndex>,
        averaging: RateAveraging,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        let curve = config.linked_curve()?;
        let exercise_date = exercise_date_from_maturity(&*index, &*curve, maturity)?;
        Self::with_dates(
            OvernightSwapConstructor::new(index, averaging),
            exercise_date,
            EndDateRule::FromLength(length),
            config,
        )
    }

    /// Helper for an explicit exercise date and a swap length.
    pub fn from_exercise_date(
        exercise_date: Date,
        length: Period,
        index: Arc<OvernightIndex>,
        averaging: RateAveraging,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        Self::with_dates(
            OvernightSwapConstructor::new(index, averaging),
            exercise_date,
            EndDateRule::FromLength(length),
            config,
        )
    }

    /// Helper for explicit exercise and end dates.
    pub fn from_dates(
        exercise_date: Date,
        end_date: Date,
        index: Arc<OvernightIndex>,
        averaging: RateAveraging,
        config: SwaptionHelperConfig,
    ) -> Result<Self> {
        Self::with_dates(
            OvernightSwapConstructor::new(index, averaging),
            exercise_date,
            EndDateRule::Explicit(end_date),
            config,
        )
    }
}
