//! TARGET (Trans-European Automated Real-time Gross settlement) calendar.

use super::easter::easter_monday;
use crate::calendar::Calendar;
use crate::date::Date;

/// The ECB's TARGET settlement calendar.
///
/// Closed on weekends and on:
/// * New Year's Day (January 1st)
/// * Good Friday and Easter Monday (from 2000)
/// * Labour Day (May 1st, from 2000)
/// * Christmas Day (December 25th)
/// * Boxing Day (December 26th)
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.weekday().is_weekend() {
            return false;
        }
        let y = date.year();
        let m = date.month();
        let d = date.day_of_month();
        let doy = date.day_of_year();
        let em = easter_monday(y);

        let holiday = (d == 1 && m == 1)
            || (doy == em - 3 && y >= 2000)
            || (doy == em && y >= 2000)
            || (d == 1 && m == 5 && y >= 2000)
            || (d == 25 && m == 12)
            || (d == 26 && m == 12)
            // year-end closing days around the euro introduction
            || (d == 31 && m == 12 && (y == 1998 || y == 1999 || y == 2001));
        !holiday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_holidays() {
        let cal = Target;
        assert!(!cal.is_business_day(date(2025, 1, 1)));
        assert!(!cal.is_business_day(date(2025, 5, 1)));
        assert!(!cal.is_business_day(date(2025, 12, 25)));
        assert!(!cal.is_business_day(date(2025, 12, 26)));
    }

    #[test]
    fn easter_2025() {
        let cal = Target;
        assert!(!cal.is_business_day(date(2025, 4, 18))); // Good Friday
        assert!(!cal.is_business_day(date(2025, 4, 21))); // Easter Monday
        assert!(cal.is_business_day(date(2025, 4, 22)));
    }

    #[test]
    fn plain_weekday_is_open() {
        assert!(Target.is_business_day(date(2025, 6, 17)));
    }

    #[test]
    fn weekend_is_closed() {
        assert!(!Target.is_business_day(date(2025, 6, 14)));
        assert!(!Target.is_business_day(date(2025, 6, 15)));
    }
}
