//! Volatility quoting conventions.

/// How an option volatility quote is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolatilityType {
    /// Shifted log-normal (Black) volatility.
    ShiftedLognormal,
    /// Normal (Bachelier) volatility.
    Normal,
}

impl std::fmt::Display for VolatilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VolatilityType::ShiftedLognormal => "ShiftedLognormal",
            VolatilityType::Normal => "Normal",
        };
        write!(f, "{s}")
    }
}
