//! Holiday calendars for specific markets.

/// TARGET (euro settlement) calendar.
pub mod target;

/// United States settlement calendar.
pub mod united_states;

pub(crate) mod easter;
