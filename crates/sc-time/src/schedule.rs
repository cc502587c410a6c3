//! `Schedule` — the payment/accrual date grid of an instrument.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use sc_core::errors::{Error, Result};

/// Date generation rule for schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateGeneration {
    /// Dates generated backward from the termination date.
    Backward,
    /// Dates generated forward from the effective date.
    Forward,
    /// Only the effective and termination dates.
    Zero,
}

/// An ordered sequence of coupon/payment dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
    is_regular: Vec<bool>,
}

impl Schedule {
    /// All dates in the schedule.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn size(&self) -> usize {
        self.dates.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The `i`-th date.
    pub fn date(&self, i: usize) -> Date {
        self.dates[i]
    }

    /// The effective (start) date.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// The termination (end) date.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Whether the `i`-th period is a full-length (regular) period.
    pub fn is_regular(&self, i: usize) -> bool {
        self.is_regular.get(i).copied().unwrap_or(true)
    }

    /// Build a schedule from an explicit list of dates.
    pub fn from_dates(dates: Vec<Date>) -> Self {
        let periods = dates.len().saturating_sub(1);
        Self {
            is_regular: vec![true; periods],
            dates,
        }
    }
}

/// Builder for [`Schedule`].
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    effective_date: Date,
    termination_date: Date,
    tenor: Period,
    calendar: &'a dyn Calendar,
    convention: BusinessDayConvention,
    termination_convention: BusinessDayConvention,
    rule: DateGeneration,
    end_of_month: bool,
}

impl<'a> ScheduleBuilder<'a> {
    /// Begin building a schedule.
    pub fn new(
        effective_date: Date,
        termination_date: Date,
        tenor: Period,
        calendar: &'a dyn Calendar,
    ) -> Self {
        Self {
            effective_date,
            termination_date,
            tenor,
            calendar,
            convention: BusinessDayConvention::ModifiedFollowing,
            termination_convention: BusinessDayConvention::ModifiedFollowing,
            rule: DateGeneration::Backward,
            end_of_month: false,
        }
    }

    /// Set the business-day convention for intermediate dates.
    pub fn with_convention(mut self, c: BusinessDayConvention) -> Self {
        self.convention = c;
        self
    }

    /// Set the business-day convention for the termination date.
    pub fn with_termination_convention(mut self, c: BusinessDayConvention) -> Self {
        self.termination_convention = c;
        self
    }

    /// Set the date-generation rule.
    pub fn with_rule(mut self, rule: DateGeneration) -> Self {
        self.rule = rule;
        self
    }

    /// Snap month-end seed dates to the end of each generated month.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    /// Build the `Schedule`.
    pub fn build(self) -> Result<Schedule> {
        let start = self.effective_date;
        let end = self.termination_date;
        if start >= end {
            return Err(Error::InvalidArgument(format!(
                "effective date {start} must precede termination date {end}"
            )));
        }

        if self.rule == DateGeneration::Zero || self.tenor.length == 0 {
            return Ok(Schedule {
                dates: vec![
                    self.calendar.adjust(start, self.convention),
                    self.calendar.adjust(end, self.termination_convention),
                ],
                is_regular: vec![false],
            });
        }

        // Generate the raw (unadjusted) grid first, then adjust.
        let mut raw: Vec<Date> = Vec::new();
        let mut is_regular: Vec<bool> = Vec::new();

        match self.rule {
            DateGeneration::Forward => {
                raw.push(start);
                let mut n = 1i32;
                let boundary_regular = loop {
                    let next = start
                        .advance(n * self.tenor.length, self.tenor.unit)
                        .map_err(|e| Error::Date(e.to_string()))?;
                    if next >= end {
                        break next == end;
                    }
                    raw.push(next);
                    is_regular.push(true);
                    n += 1;
                };
                raw.push(end);
                is_regular.push(boundary_regular);
            }
            DateGeneration::Backward => {
                raw.push(end);
                let mut n = 1i32;
                let boundary_regular = loop {
                    let prev = end
                        .advance(-n * self.tenor.length, self.tenor.unit)
                        .map_err(|e| Error::Date(e.to_string()))?;
                    if prev <= start {
                        break prev == start;
                    }
                    raw.push(prev);
                    is_regular.push(true);
                    n += 1;
                };
                raw.push(start);
                is_regular.push(boundary_regular);
                raw.reverse();
                is_regular.reverse();
            }
            DateGeneration::Zero => unreachable!("handled above"),
        }

        let last = raw.len() - 1;
        let dates: Vec<Date> = raw
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if i == last {
                    self.calendar.adjust(d, self.termination_convention)
                } else if self.end_of_month && self.calendar.is_end_of_month(d) {
                    self.calendar.end_of_month(d)
                } else {
                    self.calendar.adjust(d, self.convention)
                }
            })
            .collect();

        Ok(Schedule { dates, is_regular })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{NullCalendar, WeekendsOnly};
    use crate::time_unit::TimeUnit;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn forward_generation_counts() {
        let s = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Period::new(1, TimeUnit::Years),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Forward)
        .build()
        .unwrap();
        assert_eq!(s.size(), 6);
        assert_eq!(s.start_date(), Some(date(2025, 1, 15)));
        assert_eq!(s.end_date(), Some(date(2030, 1, 15)));
        assert!((0..5).all(|i| s.is_regular(i)));
    }

    #[test]
    fn forward_and_backward_agree_on_even_grids() {
        let fwd = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2027, 1, 15),
            Period::new(6, TimeUnit::Months),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Forward)
        .build()
        .unwrap();
        let bwd = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2027, 1, 15),
            Period::new(6, TimeUnit::Months),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Backward)
        .build()
        .unwrap();
        assert_eq!(fwd, bwd);
    }

    #[test]
    fn stub_period_marked_irregular() {
        // 2Y3M span with annual tenor leaves a 3M stub at the end
        let s = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2027, 4, 15),
            Period::new(1, TimeUnit::Years),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Forward)
        .build()
        .unwrap();
        assert_eq!(s.size(), 4);
        assert!(s.is_regular(0));
        assert!(s.is_regular(1));
        assert!(!s.is_regular(2));
    }

    #[test]
    fn zero_rule() {
        let s = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Period::new(1, TimeUnit::Years),
            &NullCalendar,
        )
        .with_rule(DateGeneration::Zero)
        .build()
        .unwrap();
        assert_eq!(s.size(), 2);
        assert!(!s.is_regular(0));
    }

    #[test]
    fn weekend_dates_are_adjusted() {
        // 2025-06-15 is a Sunday
        let s = ScheduleBuilder::new(
            date(2025, 3, 15),
            date(2025, 9, 15),
            Period::new(3, TimeUnit::Months),
            &WeekendsOnly,
        )
        .with_rule(DateGeneration::Forward)
        .with_convention(BusinessDayConvention::Following)
        .with_termination_convention(BusinessDayConvention::Following)
        .build()
        .unwrap();
        assert_eq!(s.date(1), date(2025, 6, 16));
        assert_eq!(s.date(2), date(2025, 9, 15)); // Monday, no adjustment
    }

    #[test]
    fn identical_inputs_build_identical_schedules() {
        let build = || {
            ScheduleBuilder::new(
                date(2025, 1, 15),
                date(2035, 1, 15),
                Period::new(3, TimeUnit::Months),
                &WeekendsOnly,
            )
            .with_rule(DateGeneration::Forward)
            .build()
            .unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn degenerate_span_rejected() {
        assert!(ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2025, 1, 15),
            Period::new(1, TimeUnit::Years),
            &NullCalendar,
        )
        .build()
        .is_err());
    }
}
