use chrono::Weekday;

use crate::domain::errors::WeekdayParseError;
use crate::domain::value_objects::weekday_format::WeekdayFormat;

/// Parse a comma separated weekday list ("mon, Wed,friday") into Sunday-based indices.
///
/// The result is deduplicated and ordered Sunday to Saturday, ready for a
/// `specific_weekdays` rule.
pub fn parse_weekday_list(input: &str) -> Result<Vec<u8>, WeekdayParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(WeekdayParseError::Empty);
    }

    let mut weekdays: Vec<u8> = Vec::new();

    // parse days
    for day in input.split(',') {
        let weekday = <Weekday as WeekdayFormat>::from_str(day)
            .ok_or_else(|| WeekdayParseError::UnknownWeekday(day.trim().to_string()))?;
        weekdays.push(weekday.to_index());
    }

    // order days from Sunday to Saturday
    weekdays.sort_unstable();
    weekdays.dedup();

    Ok(weekdays)
}
