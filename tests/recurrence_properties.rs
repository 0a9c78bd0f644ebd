//! End-to-end behaviour of the public engine API.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use recurrence_engine::{
    EngineError, OccurrenceResult, RecurrencePattern, RecurrenceRule, RuleEvaluator,
    ValidationError, compute_next, describe, parse_weekday_list, validate,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn next(anchor: NaiveDate, rule: &RecurrenceRule) -> OccurrenceResult {
    compute_next(anchor, rule).unwrap()
}

/// A spread of anchors covering month ends, leap days and year ends
fn sample_anchors() -> Vec<NaiveDate> {
    vec![
        date(2023, 2, 28),
        date(2024, 1, 1),
        date(2024, 1, 31),
        date(2024, 2, 28),
        date(2024, 2, 29),
        date(2024, 6, 30),
        date(2024, 12, 31),
        date(2100, 2, 28),
    ]
}

#[test]
fn daily_is_plus_one_day() {
    for anchor in sample_anchors() {
        assert_eq!(
            next(anchor, &RecurrenceRule::daily()),
            OccurrenceResult::Occurrence(anchor + Days::new(1))
        );
    }
}

#[test]
fn weekly_is_plus_seven_days() {
    for anchor in sample_anchors() {
        assert_eq!(
            next(anchor, &RecurrenceRule::weekly()),
            OccurrenceResult::Occurrence(anchor + Days::new(7))
        );
    }
}

#[test]
fn custom_interval_adds_the_interval() {
    for anchor in sample_anchors() {
        assert_eq!(
            next(anchor, &RecurrenceRule::every_n_days(3)),
            OccurrenceResult::Occurrence(anchor + Days::new(3))
        );
    }
    assert_eq!(
        validate(&RecurrenceRule::every_n_days(0)),
        Err(ValidationError::InvalidInterval { interval_days: 0 })
    );
}

#[test]
fn specific_weekdays_from_monday() {
    let rule = RecurrenceRule::on_weekdays(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    assert_eq!(next(date(2024, 1, 1), &rule), OccurrenceResult::Occurrence(date(2024, 1, 3)));
}

#[test]
fn specific_weekdays_result_is_earliest_member() {
    let weekdays = parse_weekday_list("tue,sat").unwrap();
    let rule = RecurrenceRule::new(RecurrencePattern::SpecificWeekdays { weekdays });

    for anchor in sample_anchors() {
        let found = next(anchor, &rule).date().unwrap();
        assert!(matches!(found.weekday(), Weekday::Tue | Weekday::Sat));

        let gap = (found - anchor).num_days();
        assert!((1..=7).contains(&gap));
        for skipped in 1..gap {
            let day = anchor + Days::new(skipped as u64);
            assert!(!matches!(day.weekday(), Weekday::Tue | Weekday::Sat));
        }
    }
}

#[test]
fn second_tuesday_of_february() {
    let rule = RecurrenceRule::nth_weekday_of_month(2, Weekday::Tue);
    assert_eq!(next(date(2024, 1, 15), &rule), OccurrenceResult::Occurrence(date(2024, 2, 13)));
}

#[test]
fn last_friday_of_leap_february() {
    let rule = RecurrenceRule::nth_weekday_of_month(-1, Weekday::Fri);
    assert_eq!(next(date(2024, 1, 31), &rule), OccurrenceResult::Occurrence(date(2024, 2, 23)));
}

#[test]
fn weekly_candidate_past_end_date_stops() {
    let rule = RecurrenceRule::weekly().until(date(2024, 2, 1));
    assert_eq!(next(date(2024, 1, 29), &rule), OccurrenceResult::NoMoreOccurrences);
}

#[test]
fn end_date_applies_to_every_kind() {
    let anchor = date(2024, 1, 15);
    let end = date(2024, 1, 16);
    let rules = [
        RecurrenceRule::weekly(),
        RecurrenceRule::monthly(),
        RecurrenceRule::monthly_on_day(31),
        RecurrenceRule::yearly(),
        RecurrenceRule::every_n_days(2),
        RecurrenceRule::nth_weekday_of_month(1, Weekday::Mon),
        RecurrenceRule::on_weekdays(&[Weekday::Thu]),
    ];

    for rule in rules {
        let rule = rule.until(end);
        assert_eq!(next(anchor, &rule), OccurrenceResult::NoMoreOccurrences, "{:?}", rule);
    }
}

#[test]
fn validation_rejects_out_of_range_fields() {
    let nth_zero = RecurrenceRule::new(RecurrencePattern::NthWeekday { n: 0, weekday: 2 });
    let weekday_seven = RecurrenceRule::new(RecurrencePattern::NthWeekday { n: 1, weekday: 7 });
    let empty_set = RecurrenceRule::new(RecurrencePattern::SpecificWeekdays { weekdays: vec![] });
    let day_32 = RecurrenceRule::monthly_on_day(32);

    assert_eq!(validate(&nth_zero), Err(ValidationError::InvalidNthRange { n: 0 }));
    assert_eq!(validate(&weekday_seven), Err(ValidationError::InvalidWeekday { weekday: 7 }));
    assert_eq!(validate(&empty_set), Err(ValidationError::EmptyWeekdaySet));
    assert_eq!(validate(&day_32), Err(ValidationError::InvalidDayOfMonth { day_of_month: 32 }));

    for rule in [nth_zero, weekday_seven, empty_set, day_32] {
        assert!(matches!(
            compute_next(date(2024, 1, 1), &rule),
            Err(EngineError::MalformedRule(_))
        ));
    }
}

#[test]
fn describe_is_stable_and_ordered() {
    let shuffled = RecurrenceRule::new(RecurrencePattern::SpecificWeekdays {
        weekdays: vec![6, 3, 0],
    });
    let first = describe(&shuffled);

    assert_eq!(first, describe(&shuffled));
    assert_eq!(first, "Every week on Sunday, Wednesday, Saturday");
}

#[test]
fn fixed_interval_chains_are_evenly_spaced() {
    let evaluator = RuleEvaluator::new();
    let anchor = date(2024, 2, 20);

    for (rule, step) in [
        (RecurrenceRule::daily(), 1),
        (RecurrenceRule::weekly(), 7),
        (RecurrenceRule::every_n_days(3), 3),
        (RecurrenceRule::every_n_days(45), 45),
    ] {
        let dates: Vec<NaiveDate> = evaluator
            .occurrences(anchor, &rule)
            .take(20)
            .map(|r| r.unwrap().date().unwrap())
            .collect();

        assert_eq!(dates.len(), 20);
        let mut previous = anchor;
        for d in dates {
            assert_eq!((d - previous).num_days(), step);
            previous = d;
        }
    }
}

#[test]
fn monthly_day_31_walks_month_ends_without_overflow() {
    let evaluator = RuleEvaluator::new();
    let rule = RecurrenceRule::monthly_on_day(31);

    let dates: Vec<NaiveDate> = evaluator
        .occurrences(date(2024, 1, 31), &rule)
        .take(4)
        .map(|r| r.unwrap().date().unwrap())
        .collect();

    assert_eq!(
        dates,
        vec![date(2024, 2, 29), date(2024, 3, 31), date(2024, 4, 30), date(2024, 5, 31)]
    );
}

#[test]
fn rule_from_json_runs_end_to_end() {
    let rule: RecurrenceRule =
        serde_json::from_str(r#"{"kind":"nth_weekday","n":-1,"weekday":5,"end_date":"2024-04-01"}"#)
            .unwrap();

    assert_eq!(validate(&rule), Ok(()));
    assert_eq!(describe(&rule), "Every last Friday of the month until 2024-04-01");

    let results: Vec<OccurrenceResult> = RuleEvaluator::new()
        .occurrences(date(2024, 1, 10), &rule)
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        results,
        vec![
            OccurrenceResult::Occurrence(date(2024, 2, 23)),
            OccurrenceResult::Occurrence(date(2024, 3, 29)),
            OccurrenceResult::NoMoreOccurrences,
        ]
    );
}
