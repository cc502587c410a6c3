//! `Instrument` base trait and pricing results.

use sc_core::Real;
use sc_time::Date;
use std::collections::HashMap;

/// Results of pricing an instrument: the NPV plus optional named extras
/// (annuity, forward, ...).
#[derive(Debug, Clone, Default)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Additional named results.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            additional_results: HashMap::new(),
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// Base trait for all financial instruments.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// The maturity or last relevant date.
    fn maturity_date(&self) -> Option<Date>;

    /// Whether the instrument is past its maturity as of `date`.
    fn is_expired(&self, date: Date) -> bool {
        matches!(self.maturity_date(), Some(m) if m < date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_builder() {
        let r = PricingResults::from_npv(42.0)
            .with_result("annuity", 8.1)
            .with_result("forward", 0.031);
        assert!((r.npv - 42.0).abs() < 1e-15);
        assert_eq!(r.result("annuity"), Some(8.1));
        assert_eq!(r.result("missing"), None);
    }
}
