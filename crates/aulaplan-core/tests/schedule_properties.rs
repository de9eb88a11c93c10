//! Property tests for the scheduling engine.

use aulaplan_core::{
    CalendarSimulator, DurationCalculator, ScheduleInput, ScheduleMode, ScheduleModeResolver,
    SchedulePayloadBuilder, SessionCounts, TimeWindow, WeekdayPattern, WeekdaySet,
};
use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use proptest::prelude::*;

fn weekday_sets() -> impl Strategy<Value = WeekdaySet> {
    proptest::collection::vec(1u8..=7, 0..=7)
        .prop_map(|codes| WeekdaySet::from_codes(&codes).unwrap())
}

fn no_saturday_sets() -> impl Strategy<Value = WeekdaySet> {
    proptest::collection::vec(prop_oneof![1u8..=5, Just(7u8)], 0..=7)
        .prop_map(|codes| WeekdaySet::from_codes(&codes).unwrap())
}

fn windows() -> impl Strategy<Value = TimeWindow> {
    (0u32..22, 1i64..=120).prop_map(|(hour, minutes)| {
        let start = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        TimeWindow::new(start, start + Duration::minutes(minutes)).unwrap()
    })
}

fn dates() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=365)
        .prop_map(|(year, ordinal)| NaiveDate::from_yo_opt(year, ordinal).unwrap())
}

fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

proptest! {
    // P1: without a distinct Saturday window the total is the closed form.
    #[test]
    fn simple_case_equals_closed_form(
        days in no_saturday_sets(),
        window in windows(),
        start in dates(),
        sync in 1u32..40,
    ) {
        let input = ScheduleInput {
            start_date: Some(start),
            pattern: WeekdayPattern {
                days,
                weekday_window: Some(window),
                saturday_window: None,
            },
            counts: SessionCounts::new(sync, 0),
            async_window: None,
        };
        let schedule = DurationCalculator::new().compute(&input);
        prop_assert_eq!(
            schedule.total_duration_hours,
            round2(window.duration_hours() * sync as f64)
        );
    }

    // P1, Saturday variant: an identical Saturday window changes nothing.
    #[test]
    fn identical_saturday_window_stays_simple(
        days in weekday_sets(),
        window in windows(),
        start in dates(),
        sync in 1u32..40,
    ) {
        let mut days = days;
        days.insert(Weekday::Sat);
        let input = ScheduleInput {
            start_date: Some(start),
            pattern: WeekdayPattern {
                days,
                weekday_window: Some(window),
                saturday_window: Some(window),
            },
            counts: SessionCounts::new(sync, 0),
            async_window: None,
        };
        let schedule = DurationCalculator::new().compute(&input);
        prop_assert_eq!(
            schedule.total_duration_hours,
            round2(window.duration_hours() * sync as f64)
        );
    }

    // P2: recomputation is bit-identical.
    #[test]
    fn recomputation_is_idempotent(
        days in weekday_sets(),
        window in proptest::option::of(windows()),
        saturday in proptest::option::of(windows()),
        start in proptest::option::of(dates()),
        sync in 0u32..40,
        asynchronous in 0u32..10,
    ) {
        let input = ScheduleInput {
            start_date: start,
            pattern: WeekdayPattern {
                days,
                weekday_window: window,
                saturday_window: saturday,
            },
            counts: SessionCounts::new(sync, asynchronous),
            async_window: None,
        };
        let calc = DurationCalculator::new();
        prop_assert_eq!(calc.compute(&input), calc.compute(&input));
    }

    // P3: preserve is a verbatim pass-through for any stored schedule.
    #[test]
    fn preserve_passes_stored_through(
        days in weekday_sets(),
        window in windows(),
        start in dates(),
        sync in 0u32..40,
        asynchronous in 0u32..10,
    ) {
        let input = ScheduleInput {
            start_date: Some(start),
            pattern: WeekdayPattern {
                days,
                weekday_window: Some(window),
                saturday_window: None,
            },
            counts: SessionCounts::new(sync, asynchronous),
            async_window: None,
        };
        let resolver = ScheduleModeResolver::new();
        let stored = resolver
            .resolve(ScheduleMode::Regenerate, Some(&input), None)
            .unwrap();

        let unrelated = ScheduleInput::default();
        let resolved = resolver
            .resolve(ScheduleMode::Preserve, Some(&unrelated), Some(&stored))
            .unwrap();
        prop_assert_eq!(resolved, stored);
    }

    // P4: the walk is bounded and never overshoots the target.
    #[test]
    fn simulator_is_bounded_and_ordered(
        days in weekday_sets(),
        start in dates(),
        target in 0u32..200,
    ) {
        let placement = CalendarSimulator::new().simulate(start, days, target);
        prop_assert!(placement.placed_dates.len() as u32 <= target);
        prop_assert!(placement
            .placed_dates
            .windows(2)
            .all(|pair| pair[0] < pair[1]));

        // Any non-empty pattern supplies at least one session per week,
        // so modest targets are always reachable within the cap.
        if !days.is_empty() && target <= 100 {
            prop_assert!(placement.reached(target));
        }
    }

    // P5: the payload total is always the sum of the two counts.
    #[test]
    fn payload_total_is_sum_of_counts(
        days in weekday_sets(),
        window in proptest::option::of(windows()),
        start in proptest::option::of(dates()),
        sync in 0u32..1000,
        asynchronous in 0u32..1000,
    ) {
        let input = ScheduleInput {
            start_date: start,
            pattern: WeekdayPattern {
                days,
                weekday_window: window,
                saturday_window: None,
            },
            counts: SessionCounts::new(sync, asynchronous),
            async_window: None,
        };
        let schedule = DurationCalculator::new().compute(&input);
        let payload = SchedulePayloadBuilder::build(&schedule, &input.pattern);
        prop_assert_eq!(payload.session_count_total, sync + asynchronous);
    }
}
