//! Units of time used in `Period`.

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeUnit::Days => "Day(s)",
            TimeUnit::Weeks => "Week(s)",
            TimeUnit::Months => "Month(s)",
            TimeUnit::Years => "Year(s)",
        };
        write!(f, "{s}")
    }
}
