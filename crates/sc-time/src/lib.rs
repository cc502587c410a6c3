//! # sc-time
//!
//! Date arithmetic, calendars, business-day conventions, day counters,
//! interest rates, and schedule generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `Calendar` trait and built-in implementations.
pub mod calendar;

/// Holiday calendars for specific markets.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Payment / event frequency.
pub mod frequency;

/// An interest rate with its quoting conventions.
pub mod interest_rate;

/// `Period` — a time span in a `TimeUnit`.
pub mod period;

/// `Schedule` — an ordered sequence of coupon dates.
pub mod schedule;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::target::Target;
pub use calendars::united_states::UnitedStatesSettlement;
pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, DayCounter, Thirty360};
pub use frequency::Frequency;
pub use interest_rate::InterestRate;
pub use period::Period;
pub use schedule::{DateGeneration, Schedule, ScheduleBuilder};
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
