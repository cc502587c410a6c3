//! Closed-form option values on a forward.
//!
//! Both formulas price a European option on a forward `F` with strike `K`
//! and total standard deviation `σ√T`, times a discount factor. For
//! swaptions the "discount factor" slot carries the annuity.

use sc_core::Real;
use sc_math::{normal_cdf, normal_pdf};

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy (payer side for swaptions).
    Call,
    /// Right to sell (receiver side for swaptions).
    Put,
}

fn intrinsic(option_type: OptionType, forward: Real, strike: Real) -> Real {
    match option_type {
        OptionType::Call => (forward - strike).max(0.0),
        OptionType::Put => (strike - forward).max(0.0),
    }
}

/// Black (log-normal) formula.
///
/// Degenerate inputs (zero standard deviation, non-positive forward or
/// strike) collapse to the discounted intrinsic value.
pub fn black_formula(
    option_type: OptionType,
    forward: Real,
    strike: Real,
    std_dev: Real,
    discount: Real,
) -> Real {
    if std_dev <= 0.0 || forward <= 0.0 || strike <= 0.0 {
        return discount * intrinsic(option_type, forward, strike);
    }
    let d1 = ((forward / strike).ln() + 0.5 * std_dev * std_dev) / std_dev;
    let d2 = d1 - std_dev;
    match option_type {
        OptionType::Call => discount * (forward * normal_cdf(d1) - strike * normal_cdf(d2)),
        OptionType::Put => discount * (strike * normal_cdf(-d2) - forward * normal_cdf(-d1)),
    }
}

/// Bachelier (normal) formula.
pub fn bachelier_formula(
    option_type: OptionType,
    forward: Real,
    strike: Real,
    std_dev: Real,
    discount: Real,
) -> Real {
    if std_dev <= 0.0 {
        return discount * intrinsic(option_type, forward, strike);
    }
    let d = (forward - strike) / std_dev;
    let value = match option_type {
        OptionType::Call => (forward - strike) * normal_cdf(d) + std_dev * normal_pdf(d),
        OptionType::Put => (strike - forward) * normal_cdf(-d) + std_dev * normal_pdf(d),
    };
    discount * value
}
