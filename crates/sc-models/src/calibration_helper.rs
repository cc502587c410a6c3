//! Black calibration-helper interface.
//!
//! A calibration helper compares a market-quoted volatility, turned into a
//! price under the right quoting convention, with a model's implied price.
//! The external optimization loop drives the model parameters; the helper
//! only supplies values and errors.

use sc_core::{
    errors::{Error, Result},
    Real, Time, Volatility,
};
use sc_math::brent;
use sc_quotes::{Quote, SimpleQuote};
use std::sync::Arc;

/// How the calibration error is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationErrorType {
    /// |market − model| / market.
    RelativePriceError,
    /// market − model.
    PriceError,
    /// |implied volatility of the model value − quoted volatility|.
    ImpliedVolError,
}

/// Volatility bracket used when inverting a price into an implied
/// volatility.
const MIN_VOLATILITY: Volatility = 0.001;
const MAX_VOLATILITY: Volatility = 10.0;

/// A calibration instrument quoted in Black (or normal) volatility.
///
/// Implementors supply the model price, the quoted-volatility price, and
/// the discretization times; market value, calibration error, and implied
/// volatility are derived.
pub trait BlackCalibrationHelper {
    /// The market volatility quote.
    fn volatility(&self) -> &Arc<SimpleQuote>;

    /// The configured error measure.
    fn error_type(&self) -> CalibrationErrorType;

    /// The model-implied price. The pricing engine must have been set.
    fn model_value(&self) -> Result<Real>;

    /// The price of the instrument under a volatility of `sigma`, using
    /// the quoting convention the helper was configured with.
    fn black_price(&self, sigma: Volatility) -> Result<Real>;

    /// Append the discretization times a lattice method must include.
    fn add_times_to(&self, times: &mut Vec<Time>) -> Result<()>;

    /// The price at the quoted volatility.
    fn market_value(&self) -> Result<Real> {
        let sigma = self
            .volatility()
            .value()
            .ok_or_else(|| Error::Precondition("volatility quote is not set".into()))?;
        self.black_price(sigma)
    }

    /// The volatility that reproduces `target_value` through
    /// [`black_price`][Self::black_price].
    fn implied_volatility(
        &self,
        target_value: Real,
        accuracy: Real,
        min_vol: Volatility,
        max_vol: Volatility,
    ) -> Result<Volatility> {
        // Price the endpoints fallibly up front; inside the bracket the
        // same code path cannot fail, so the solver closure stays total.
        let low = self.black_price(min_vol)? - target_value;
        let high = self.black_price(max_vol)? - target_value;
        if low == 0.0 {
            return Ok(min_vol);
        }
        if high == 0.0 {
            return Ok(max_vol);
        }
        brent(
            |sigma| match self.black_price(sigma) {
                Ok(value) => value - target_value,
                Err(_) => Real::NAN,
            },
            min_vol,
            max_vol,
            accuracy,
        )
    }

    /// The calibration error under the configured measure.
    fn calibration_error(&self) -> Result<Real> {
        match self.error_type() {
            CalibrationErrorType::RelativePriceError => {
                let market = self.market_value()?;
                Ok(((market - self.model_value()?) / market).abs())
            }
            CalibrationErrorType::PriceError => Ok(self.market_value()? - self.model_value()?),
            CalibrationErrorType::ImpliedVolError => {
                let lower = self.black_price(MIN_VOLATILITY)?;
                let upper = self.black_price(MAX_VOLATILITY)?;
                let model = self.model_value()?;
                let implied = if model <= lower {
                    MIN_VOLATILITY
                } else if model >= upper {
                    MAX_VOLATILITY
                } else {
                    self.implied_volatility(model, 1.0e-12, MIN_VOLATILITY, MAX_VOLATILITY)?
                };
                let quoted = self
                    .volatility()
                    .value()
                    .ok_or_else(|| Error::Precondition("volatility quote is not set".into()))?;
                Ok((implied - quoted).abs())
            }
        }
    }
}
