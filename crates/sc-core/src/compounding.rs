//! Interest-rate compounding conventions.

/// How interest accrues over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compounding {
    /// `1 + r t`
    Simple,
    /// `(1 + r / f)^(f t)`
    Compounded,
    /// `e^(r t)`
    Continuous,
}

impl std::fmt::Display for Compounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Compounding::Simple => "Simple",
            Compounding::Compounded => "Compounded",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{s}")
    }
}
