//! Business-day adjustment conventions.

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// The first business day after the holiday.
    Following,
    /// The first business day after the holiday, unless it falls in the next
    /// month; in that case the first business day before the holiday.
    ModifiedFollowing,
    /// The first business day before the holiday.
    Preceding,
    /// The first business day before the holiday, unless it falls in the
    /// previous month; in that case the first business day after the holiday.
    ModifiedPreceding,
    /// No adjustment.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}
