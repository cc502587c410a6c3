//! Schedule generation against hand-checked grids.

use sc_time::{
    BusinessDayConvention, Date, DateGeneration, Period, ScheduleBuilder, Target, TimeUnit,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn quarterly_grid_on_target() {
    let schedule = ScheduleBuilder::new(
        date(2025, 1, 15),
        date(2026, 1, 15),
        Period::new(3, TimeUnit::Months),
        &Target,
    )
    .with_rule(DateGeneration::Forward)
    .with_convention(BusinessDayConvention::ModifiedFollowing)
    .with_termination_convention(BusinessDayConvention::ModifiedFollowing)
    .build()
    .unwrap();

    // every raw grid date already falls on a TARGET business day
    let expected = [
        date(2025, 1, 15),
        date(2025, 4, 15),
        date(2025, 7, 15),
        date(2025, 10, 15),
        date(2026, 1, 15),
    ];
    assert_eq!(schedule.dates(), &expected);
    assert!((0..4).all(|i| schedule.is_regular(i)));
}

#[test]
fn holiday_landing_is_pushed() {
    // 2025-04-21 is Easter Monday on TARGET
    let schedule = ScheduleBuilder::new(
        date(2025, 1, 21),
        date(2025, 7, 21),
        Period::new(3, TimeUnit::Months),
        &Target,
    )
    .with_rule(DateGeneration::Forward)
    .with_convention(BusinessDayConvention::Following)
    .with_termination_convention(BusinessDayConvention::Following)
    .build()
    .unwrap();
    assert_eq!(schedule.date(1), date(2025, 4, 22));
}

#[test]
fn all_dates_strictly_increasing() {
    let schedule = ScheduleBuilder::new(
        date(2025, 2, 28),
        date(2035, 2, 28),
        Period::new(6, TimeUnit::Months),
        &Target,
    )
    .with_rule(DateGeneration::Backward)
    .build()
    .unwrap();
    for w in schedule.dates().windows(2) {
        assert!(w[0] < w[1]);
    }
}
