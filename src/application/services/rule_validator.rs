use crate::application::services::nth_weekday_resolver::LAST;
use crate::domain::entities::recurrence_rule::{RecurrencePattern, RecurrenceRule};
use crate::domain::errors::ValidationError;

const MAX_WEEKDAY: u8 = 6;
const MAX_NTH: i8 = 5;

/// Checks the fields of the rule's own kind; other kinds have nothing to check
pub fn validate(rule: &RecurrenceRule) -> Result<(), ValidationError> {
    match &rule.pattern {
        RecurrencePattern::CustomIntervalDays { interval_days } => {
            if *interval_days < 1 {
                return Err(ValidationError::InvalidInterval {
                    interval_days: *interval_days,
                });
            }
        }
        RecurrencePattern::NthWeekday { n, weekday } => {
            if *n != LAST && !(1..=MAX_NTH).contains(n) {
                return Err(ValidationError::InvalidNthRange { n: *n });
            }
            check_weekday(*weekday)?;
        }
        RecurrencePattern::SpecificWeekdays { weekdays } => {
            if weekdays.is_empty() {
                return Err(ValidationError::EmptyWeekdaySet);
            }
            for weekday in weekdays {
                check_weekday(*weekday)?;
            }
        }
        RecurrencePattern::Monthly {
            day_of_month: Some(day_of_month),
        } => {
            if !(1..=31).contains(day_of_month) {
                return Err(ValidationError::InvalidDayOfMonth {
                    day_of_month: *day_of_month,
                });
            }
        }
        RecurrencePattern::None
        | RecurrencePattern::Daily
        | RecurrencePattern::Weekly
        | RecurrencePattern::Monthly { day_of_month: None }
        | RecurrencePattern::Yearly => {}
    }
    Ok(())
}

fn check_weekday(weekday: u8) -> Result<(), ValidationError> {
    if weekday > MAX_WEEKDAY {
        return Err(ValidationError::InvalidWeekday { weekday });
    }
    Ok(())
}
