//! `Calendar` trait and the always-open calendars.
//!
//! A calendar knows which dates are business days, adjusts dates according
//! to a [`BusinessDayConvention`], and advances dates by business days or by
//! calendar periods.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use sc_core::errors::Result;

/// A financial market calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Whether `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Whether `date` is a holiday (non-business day).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Whether `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        date.month() != self.adjust(date + 1, BusinessDayConvention::Following).month()
    }

    /// The last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Date {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d + 1;
                }
                d
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    adjusted
                }
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d - 1;
                }
                d
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    adjusted
                }
            }
        }
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, date: Date, n: i32) -> Date {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        let mut d = date;
        while remaining > 0 {
            d = d + step;
            if self.is_business_day(d) {
                remaining -= 1;
            }
        }
        d
    }

    /// Advance `date` by a period and adjust the result.
    ///
    /// A period in days moves by business days; weeks, months, and years
    /// move on the calendar and are then adjusted by `convention`. When
    /// `end_of_month` is set and `date` is the last business day of its
    /// month, month and year steps land on the last business day of the
    /// target month.
    fn advance(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        match period.unit {
            _ if period.length == 0 => Ok(self.adjust(date, convention)),
            TimeUnit::Days => Ok(self.advance_business_days(date, period.length)),
            TimeUnit::Weeks => {
                let raw = date.advance(period.length, TimeUnit::Weeks)?;
                Ok(self.adjust(raw, convention))
            }
            TimeUnit::Months | TimeUnit::Years => {
                let raw = date.advance(period.length, period.unit)?;
                if end_of_month && self.is_end_of_month(date) {
                    Ok(self.end_of_month(raw))
                } else {
                    Ok(self.adjust(raw, convention))
                }
            }
        }
    }
}

/// A calendar in which every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

/// A calendar whose only holidays are Saturdays and Sundays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.weekday().is_weekend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn following_skips_weekend() {
        let cal = WeekendsOnly;
        // 2025-06-14 is a Saturday
        assert_eq!(
            cal.adjust(date(2025, 6, 14), BusinessDayConvention::Following),
            date(2025, 6, 16)
        );
    }

    #[test]
    fn modified_following_stays_in_month() {
        let cal = WeekendsOnly;
        // 2025-05-31 is a Saturday; Following would land in June
        assert_eq!(
            cal.adjust(date(2025, 5, 31), BusinessDayConvention::ModifiedFollowing),
            date(2025, 5, 30)
        );
    }

    #[test]
    fn unadjusted_is_identity() {
        let cal = WeekendsOnly;
        assert_eq!(
            cal.adjust(date(2025, 6, 14), BusinessDayConvention::Unadjusted),
            date(2025, 6, 14)
        );
    }

    #[test]
    fn business_day_stepping() {
        let cal = WeekendsOnly;
        // Friday + 1 business day = Monday
        assert_eq!(
            cal.advance_business_days(date(2025, 6, 13), 1),
            date(2025, 6, 16)
        );
        // Monday - 1 business day = Friday
        assert_eq!(
            cal.advance_business_days(date(2025, 6, 16), -1),
            date(2025, 6, 13)
        );
    }

    #[test]
    fn advance_by_period() {
        let cal = WeekendsOnly;
        // 2025-06-16 + 2D = two business days later
        assert_eq!(
            cal.advance(
                date(2025, 6, 16),
                Period::days(2),
                BusinessDayConvention::Following,
                false
            )
            .unwrap(),
            date(2025, 6, 18)
        );
        // 2025-03-15 + 3M = 2025-06-15 (Sunday) -> adjusted to Monday the 16th
        assert_eq!(
            cal.advance(
                date(2025, 3, 15),
                Period::months(3),
                BusinessDayConvention::Following,
                false
            )
            .unwrap(),
            date(2025, 6, 16)
        );
    }

    #[test]
    fn zero_length_period_only_adjusts() {
        let cal = WeekendsOnly;
        assert_eq!(
            cal.advance(
                date(2025, 6, 14),
                Period::months(0),
                BusinessDayConvention::Following,
                false
            )
            .unwrap(),
            date(2025, 6, 16)
        );
    }
}
