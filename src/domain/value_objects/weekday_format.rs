use chrono::Weekday;

/// Weekdays in the Sunday-first order used by rule indices and descriptions
pub const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub trait WeekdayFormat {
    fn to_short_en(&self) -> &'static str;
    fn to_long_en(&self) -> &'static str;
    fn to_index(&self) -> u8;
    fn from_index(index: u8) -> Option<Weekday>;
    fn from_str(s: &str) -> Option<Weekday>;
}

impl WeekdayFormat for Weekday {
    /// Converts weekday to short english abbreviation
    fn to_short_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    fn to_long_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Sunday=0 .. Saturday=6
    fn to_index(&self) -> u8 {
        self.num_days_from_sunday() as u8
    }

    /// Inverse of `to_index`; `None` for anything outside 0..=6
    fn from_index(index: u8) -> Option<Weekday> {
        SUNDAY_FIRST.get(usize::from(index)).copied()
    }

    /// Parses string representation into Weekday enum
    fn from_str(s: &str) -> Option<Weekday> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Mon),
            "tuesday" | "tue" => Some(Weekday::Tue),
            "wednesday" | "wed" => Some(Weekday::Wed),
            "thursday" | "thu" => Some(Weekday::Thu),
            "friday" | "fri" => Some(Weekday::Fri),
            "saturday" | "sat" => Some(Weekday::Sat),
            "sunday" | "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }
}

/// English ordinal for an nth-weekday position ("1st", "2nd", "last")
pub fn ordinal_en(n: i8) -> String {
    if n == -1 {
        return "last".to_string();
    }

    let suffix = match (n.unsigned_abs() % 100, n.unsigned_abs() % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
