//! United States settlement calendar.

use crate::calendar::Calendar;
use crate::date::{days_in_month, Date};
use crate::weekday::Weekday;

/// The US settlement (government bond market) calendar.
///
/// Closed on weekends and on:
/// * New Year's Day (January 1st, moved to Monday when on Sunday)
/// * Martin Luther King's birthday (third Monday in January, from 1983)
/// * Washington's birthday (third Monday in February)
/// * Memorial Day (last Monday in May)
/// * Juneteenth (June 19th, moved if on a weekend, from 2022)
/// * Independence Day (July 4th, moved if on a weekend)
/// * Labor Day (first Monday in September)
/// * Columbus Day (second Monday in October)
/// * Veterans Day (November 11th, moved if on a weekend)
/// * Thanksgiving (fourth Thursday in November)
/// * Christmas (December 25th, moved if on a weekend)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesSettlement;

/// Whether day `d` (falling on weekday `w`) is the observed date of a
/// holiday nominally on `nominal`: the day itself, the preceding Friday when
/// the holiday is a Saturday, or the following Monday when it is a Sunday.
fn observed(d: u8, w: Weekday, nominal: u8) -> bool {
    (d == nominal && !w.is_weekend())
        || (d == nominal + 1 && w == Weekday::Monday)
        || (d + 1 == nominal && w == Weekday::Friday)
}

impl Calendar for UnitedStatesSettlement {
    fn name(&self) -> &str {
        "US settlement"
    }

    fn is_business_day(&self, date: Date) -> bool {
        let w = date.weekday();
        if w.is_weekend() {
            return false;
        }
        let y = date.year();
        let m = date.month();
        let d = date.day_of_month();
        // nth occurrence of this weekday within the month
        let nth = (d - 1) / 7 + 1;
        let last_of_kind = d + 7 > days_in_month(y, m);

        let holiday = match m {
            1 => {
                // New Year's Day; a Dec 31 Friday observation belongs to December
                (d == 1 || (d == 2 && w == Weekday::Monday))
                    || (w == Weekday::Monday && nth == 3 && y >= 1983)
            }
            2 => w == Weekday::Monday && nth == 3,
            5 => w == Weekday::Monday && last_of_kind,
            6 => y >= 2022 && observed(d, w, 19),
            7 => observed(d, w, 4),
            9 => w == Weekday::Monday && nth == 1,
            10 => w == Weekday::Monday && nth == 2,
            11 => observed(d, w, 11) || (w == Weekday::Thursday && nth == 4),
            12 => observed(d, w, 25) || (d == 31 && w == Weekday::Friday),
            _ => false,
        };
        !holiday
    }
}
