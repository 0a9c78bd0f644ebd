use chrono::{Datelike, Days, NaiveDate};

use crate::domain::value_objects::weekday_format::WeekdayFormat;

/// Earliest date strictly after `anchor` whose weekday index is in `weekdays`.
///
/// A non-empty set always matches within 7 days; `None` means the set was
/// empty or had no valid index, or the calendar range ran out.
pub fn next_matching_weekday(anchor: NaiveDate, weekdays: &[u8]) -> Option<NaiveDate> {
    // check next 7 days for the first matching day
    for i in 1..=7 {
        let candidate = anchor.checked_add_days(Days::new(i))?;
        if weekdays.contains(&candidate.weekday().to_index()) {
            return Some(candidate);
        }
    }
    None
}
