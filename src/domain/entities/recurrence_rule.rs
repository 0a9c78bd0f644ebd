use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::weekday_format::WeekdayFormat;

/// How a task repeats, plus an optional exclusive end date.
///
/// Only the fields of the active pattern exist, so a rule can never carry
/// e.g. a weekday set on a daily recurrence. Raw numeric values (weekday
/// indices, nth positions, day of month) are range-checked by
/// [`validate`](crate::application::services::rule_validator::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(flatten)]
    pub pattern: RecurrencePattern,
    /// No occurrence may fall on or after this date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrencePattern {
    None,
    Daily,
    Weekly,
    Monthly {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_of_month: Option<u8>,
    },
    Yearly,
    CustomIntervalDays {
        interval_days: u32,
    },
    /// `n` is 1..=5, or -1 for the last occurrence in the month
    NthWeekday {
        n: i8,
        weekday: u8,
    },
    /// Sunday=0 .. Saturday=6, in any order
    SpecificWeekdays {
        weekdays: Vec<u8>,
    },
}

/// Discriminant of [`RecurrencePattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    CustomIntervalDays,
    NthWeekday,
    SpecificWeekdays,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::None => "none",
            RuleKind::Daily => "daily",
            RuleKind::Weekly => "weekly",
            RuleKind::Monthly => "monthly",
            RuleKind::Yearly => "yearly",
            RuleKind::CustomIntervalDays => "custom_interval_days",
            RuleKind::NthWeekday => "nth_weekday",
            RuleKind::SpecificWeekdays => "specific_weekdays",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RecurrencePattern {
    pub fn kind(&self) -> RuleKind {
        match self {
            RecurrencePattern::None => RuleKind::None,
            RecurrencePattern::Daily => RuleKind::Daily,
            RecurrencePattern::Weekly => RuleKind::Weekly,
            RecurrencePattern::Monthly { .. } => RuleKind::Monthly,
            RecurrencePattern::Yearly => RuleKind::Yearly,
            RecurrencePattern::CustomIntervalDays { .. } => RuleKind::CustomIntervalDays,
            RecurrencePattern::NthWeekday { .. } => RuleKind::NthWeekday,
            RecurrencePattern::SpecificWeekdays { .. } => RuleKind::SpecificWeekdays,
        }
    }
}

impl RecurrenceRule {
    pub fn new(pattern: RecurrencePattern) -> Self {
        Self {
            pattern,
            end_date: None,
        }
    }

    pub fn none() -> Self {
        Self::new(RecurrencePattern::None)
    }

    pub fn daily() -> Self {
        Self::new(RecurrencePattern::Daily)
    }

    pub fn weekly() -> Self {
        Self::new(RecurrencePattern::Weekly)
    }

    /// Same day as the anchor, one month later
    pub fn monthly() -> Self {
        Self::new(RecurrencePattern::Monthly { day_of_month: None })
    }

    pub fn monthly_on_day(day_of_month: u8) -> Self {
        Self::new(RecurrencePattern::Monthly {
            day_of_month: Some(day_of_month),
        })
    }

    pub fn yearly() -> Self {
        Self::new(RecurrencePattern::Yearly)
    }

    pub fn every_n_days(interval_days: u32) -> Self {
        Self::new(RecurrencePattern::CustomIntervalDays { interval_days })
    }

    pub fn nth_weekday_of_month(n: i8, weekday: Weekday) -> Self {
        Self::new(RecurrencePattern::NthWeekday {
            n,
            weekday: weekday.to_index(),
        })
    }

    pub fn on_weekdays(days: &[Weekday]) -> Self {
        Self::new(RecurrencePattern::SpecificWeekdays {
            weekdays: days.iter().map(|d| d.to_index()).collect(),
        })
    }

    /// Sets the exclusive end date
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.pattern.kind()
    }

    pub fn is_recurring(&self) -> bool {
        self.kind() != RuleKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_store_sunday_based_indices() {
        let rule = RecurrenceRule::on_weekdays(&[Weekday::Sun, Weekday::Wed, Weekday::Sat]);
        assert_eq!(
            rule.pattern,
            RecurrencePattern::SpecificWeekdays {
                weekdays: vec![0, 3, 6]
            }
        );

        let rule = RecurrenceRule::nth_weekday_of_month(-1, Weekday::Fri);
        assert_eq!(rule.pattern, RecurrencePattern::NthWeekday { n: -1, weekday: 5 });
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(RecurrenceRule::every_n_days(3).kind().to_string(), "custom_interval_days");
        assert_eq!(RecurrenceRule::none().kind().as_str(), "none");
        assert!(!RecurrenceRule::none().is_recurring());
        assert!(RecurrenceRule::yearly().is_recurring());
    }

    #[test]
    fn serializes_with_kind_tag_and_iso_end_date() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let rule = RecurrenceRule::nth_weekday_of_month(-1, Weekday::Fri).until(end);

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({"kind": "nth_weekday", "n": -1, "weekday": 5, "end_date": "2024-06-01"})
        );
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let rule: RecurrenceRule = serde_json::from_str(r#"{"kind":"monthly"}"#).unwrap();
        assert_eq!(rule, RecurrenceRule::monthly());

        let rule: RecurrenceRule =
            serde_json::from_str(r#"{"kind":"specific_weekdays","weekdays":[5,1]}"#).unwrap();
        assert_eq!(
            rule.pattern,
            RecurrencePattern::SpecificWeekdays {
                weekdays: vec![5, 1]
            }
        );
        assert_eq!(rule.end_date, None);
    }

    #[test]
    fn deserialization_keeps_out_of_range_values_for_validation() {
        let rule: RecurrenceRule =
            serde_json::from_str(r#"{"kind":"nth_weekday","n":0,"weekday":7}"#).unwrap();
        assert_eq!(rule.pattern, RecurrencePattern::NthWeekday { n: 0, weekday: 7 });
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<RecurrenceRule>(r#"{"kind":"hourly"}"#).is_err());
    }
}
