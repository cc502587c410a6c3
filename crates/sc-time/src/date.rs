//! `Date` — a calendar date stored as a serial number of days.
//!
//! Serial 1 corresponds to January 1st, 1900, following the spreadsheet
//! convention used across the fixed-income world (1900 is treated as a leap
//! year so that serial numbers line up with Excel's). The supported range is
//! 1901-01-01 to 2199-12-31.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use sc_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum supported date: January 1st, 1901.
    pub const MIN: Date = Date(367);

    /// Maximum supported date: December 31st, 2199.
    pub const MAX: Date = Date(109_574);

    // ── Constructors ─────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day of month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1900, 2199]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Whether this is the null sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The year.
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// The month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// The day of the month.
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// The day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - year_start_serial(self.year()) + 1) as u16
    }

    /// The weekday.
    ///
    /// The mapping is anchored so that modern dates come out right; like the
    /// serial numbers themselves, weekdays before March 1900 inherit the
    /// spreadsheet convention's off-by-one.
    pub fn weekday(&self) -> Weekday {
        let ordinal = ((self.0 + 5).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(ordinal).expect("ordinal always in 1..=7")
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Advance by `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by `n` units of time.
    ///
    /// Month and year arithmetic clips the day of month to the end of the
    /// target month (Jan 31 + 1M = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = ymd_from_serial(self.0);
                let months = (y as i32) * 12 + (m as i32 - 1) + n;
                let new_y = months.div_euclid(12);
                let new_m = (months.rem_euclid(12) + 1) as u8;
                if !(1900..=2199).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Calendar days from `self` to `other` (positive when `other` is later).
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Whether this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Operators ────────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Formatting ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        write!(f, "Date({self})")
    }
}

// ── Serial arithmetic ────────────────────────────────────────────────────────

/// Whether `year` is a leap year under the serial-number convention.
///
/// 1900 is reported as leap to stay aligned with spreadsheet serials.
pub fn is_leap_year(year: u16) -> bool {
    if year == 1900 {
        return true;
    }
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month out of range"),
    }
}

/// Cumulative days before each month in a non-leap year.
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap years (under the serial convention) in `[1900, year)`.
fn leap_years_before(year: u16) -> i32 {
    if year <= 1900 {
        return 0;
    }
    let y = year as i32 - 1;
    // Gregorian count relative to 1900, plus 1900 itself
    (y / 4 - 474) - (y / 100 - 18) + (y / 400 - 4) + 1
}

fn year_start_serial(year: u16) -> i32 {
    (year as i32 - 1900) * 365 + leap_years_before(year) + 1
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = (year as i32 - 1900) * 365 + leap_years_before(year);
    serial += MONTH_OFFSET[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    debug_assert!(serial > 0, "ymd_from_serial on null date");
    // The estimate never overshoots: a year has at most 366 days.
    let mut year = 1900 + (serial / 366) as u16;
    while year_start_serial(year + 1) <= serial {
        year += 1;
    }
    let mut remaining = serial - year_start_serial(year) + 1;
    let mut month = 1u8;
    loop {
        let len = days_in_month(year, month) as i32;
        if remaining <= len {
            return (year, month, remaining as u8);
        }
        remaining -= len;
        month += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_round_trip() {
        for &(y, m, d) in &[
            (1901u16, 1u8, 1u8),
            (1999, 12, 31),
            (2000, 2, 29),
            (2025, 1, 15),
            (2100, 3, 1),
            (2199, 12, 31),
        ] {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!((date.year(), date.month(), date.day_of_month()), (y, m, d));
            assert_eq!(Date::from_serial(date.serial()).unwrap(), date);
        }
    }

    #[test]
    fn known_serials() {
        // Spreadsheet-compatible anchors
        assert_eq!(Date::from_ymd(1901, 1, 1).unwrap().serial(), 367);
        assert_eq!(Date::from_ymd(2025, 1, 15).unwrap().serial(), 45_672);
    }

    #[test]
    fn weekday_anchor() {
        // 2025-01-15 was a Wednesday
        assert_eq!(
            Date::from_ymd(2025, 1, 15).unwrap().weekday(),
            Weekday::Wednesday
        );
    }

    #[test]
    fn month_arithmetic_clips() {
        let d = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(
            d.advance(1, TimeUnit::Months).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(
            d.advance(1, TimeUnit::Months).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn year_arithmetic() {
        let d = Date::from_ymd(2025, 6, 16).unwrap();
        assert_eq!(
            d.advance(5, TimeUnit::Years).unwrap(),
            Date::from_ymd(2030, 6, 16).unwrap()
        );
        assert_eq!(
            d.advance(-2, TimeUnit::Years).unwrap(),
            Date::from_ymd(2023, 6, 16).unwrap()
        );
    }

    #[test]
    fn negative_month_arithmetic() {
        let d = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(
            d.advance(-1, TimeUnit::Months).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn invalid_components_rejected() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2300, 1, 1).is_err());
        assert!(Date::from_serial(0).is_err());
    }

    #[test]
    fn end_of_month() {
        let d = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(d.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(Date::from_ymd(2024, 2, 29).unwrap().is_end_of_month());
    }

    #[test]
    fn day_of_year() {
        assert_eq!(Date::from_ymd(2023, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
    }
}
