use chrono::Weekday;

use crate::domain::entities::recurrence_rule::{RecurrencePattern, RecurrenceRule};
use crate::domain::value_objects::weekday_format::{WeekdayFormat, ordinal_en};

/// Human readable phrase for a rule, e.g. "Every 2nd Tuesday of the month".
///
/// Depends on the rule alone. Weekday lists are rendered Sunday to Saturday
/// whatever order they were given in. Out-of-range values render literally
/// instead of failing, so this is safe to call on unvalidated input.
pub fn describe(rule: &RecurrenceRule) -> String {
    let phrase = describe_pattern(&rule.pattern);

    match rule.end_date {
        Some(end) if rule.is_recurring() => format!("{} until {}", phrase, end.format("%Y-%m-%d")),
        _ => phrase,
    }
}

fn describe_pattern(pattern: &RecurrencePattern) -> String {
    match pattern {
        RecurrencePattern::None => "Does not repeat".to_string(),
        RecurrencePattern::Daily => "Every day".to_string(),
        RecurrencePattern::Weekly => "Every week".to_string(),
        RecurrencePattern::Monthly { day_of_month: None } => "Every month".to_string(),
        RecurrencePattern::Monthly {
            day_of_month: Some(day),
        } => format!("Monthly on day {}", day),
        RecurrencePattern::Yearly => "Every year".to_string(),
        RecurrencePattern::CustomIntervalDays { interval_days: 1 } => "Every day".to_string(),
        RecurrencePattern::CustomIntervalDays { interval_days } => {
            format!("Every {} days", interval_days)
        }
        RecurrencePattern::NthWeekday { n, weekday } => {
            format!("Every {} {} of the month", ordinal_en(*n), weekday_name(*weekday))
        }
        RecurrencePattern::SpecificWeekdays { weekdays } if weekdays.is_empty() => {
            "Every week on no days".to_string()
        }
        RecurrencePattern::SpecificWeekdays { weekdays } => {
            format!("Every week on {}", weekday_list(weekdays))
        }
    }
}

fn weekday_name(index: u8) -> String {
    match Weekday::from_index(index) {
        Some(day) => day.to_long_en().to_string(),
        None => format!("weekday {}", index),
    }
}

/// Sunday -> Saturday, duplicates dropped
fn weekday_list(weekdays: &[u8]) -> String {
    let mut sorted = weekdays.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .into_iter()
        .map(weekday_name)
        .collect::<Vec<_>>()
        .join(", ")
}
