//! "Kth weekday of the month" resolution.
//!
//! The target month is always the one after the anchor's month. Positions
//! 1..=5 scan forward from the 1st counting matches; -1 scans backward from
//! the last day. A 5th occurrence that the month does not have resolves to
//! `None`, and the dispatcher reports it as the end of the cycle.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::domain::value_objects::calendar::{first_of_next_month, last_of_month};

pub const LAST: i8 = -1;

/// Resolves position `n` of `weekday` in the month following `anchor`'s month
pub fn resolve(anchor: NaiveDate, n: i8, weekday: Weekday) -> Option<NaiveDate> {
    let month_start = first_of_next_month(anchor)?;

    if n == LAST {
        last_weekday_in_month(month_start, weekday)
    } else {
        let position = u32::try_from(n).ok().filter(|p| *p >= 1)?;
        nth_weekday_in_month(month_start, position, weekday)
    }
}

/// `position`-th `weekday` counting from the 1st of `month_start`'s month
fn nth_weekday_in_month(
    month_start: NaiveDate,
    position: u32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let month_end = last_of_month(month_start)?;
    let mut seen = 0;

    for day in month_start.iter_days().take_while(|d| *d <= month_end) {
        if day.weekday() == weekday {
            seen += 1;
            if seen == position {
                return Some(day);
            }
        }
    }
    None
}

/// Last `weekday` of `month_start`'s month, walking back from the month's end
fn last_weekday_in_month(month_start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut day = last_of_month(month_start)?;

    while day >= month_start {
        if day.weekday() == weekday {
            return Some(day);
        }
        day = day.checked_sub_days(Days::new(1))?;
    }
    None
}
