//! Property tests for date arithmetic and calendar adjustment.

use proptest::prelude::*;
use sc_time::{BusinessDayConvention, Calendar, Date, TimeUnit, WeekendsOnly};

fn arb_date() -> impl Strategy<Value = Date> {
    // stay well inside the supported range so month/year steps cannot overflow
    (Date::from_ymd(1950, 1, 1).unwrap().serial()..Date::from_ymd(2150, 1, 1).unwrap().serial())
        .prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn serial_ymd_round_trip(date in arb_date()) {
        let rebuilt = Date::from_ymd(date.year(), date.month(), date.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, date);
    }

    #[test]
    fn day_addition_is_invertible(date in arb_date(), n in -10_000i32..10_000) {
        let there = date.add_days(n).unwrap();
        prop_assert_eq!(there.add_days(-n).unwrap(), date);
        prop_assert_eq!(date.days_until(there), n);
    }

    #[test]
    fn month_steps_preserve_ordering(date in arb_date(), n in 1i32..480) {
        let later = date.advance(n, TimeUnit::Months).unwrap();
        prop_assert!(later > date);
    }

    #[test]
    fn adjustment_is_idempotent(date in arb_date()) {
        let cal = WeekendsOnly;
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
        ] {
            let once = cal.adjust(date, convention);
            prop_assert!(cal.is_business_day(once));
            prop_assert_eq!(cal.adjust(once, convention), once);
        }
    }

    #[test]
    fn business_day_stepping_round_trip(date in arb_date(), n in 1i32..500) {
        let cal = WeekendsOnly;
        let start = cal.adjust(date, BusinessDayConvention::Following);
        let there = cal.advance_business_days(start, n);
        prop_assert_eq!(cal.advance_business_days(there, -n), start);
    }
}
