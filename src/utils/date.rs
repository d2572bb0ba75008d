use chrono::{Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's weekday index, 0=Sunday .. 6=Saturday.
pub fn today_weekday() -> u32 {
    Local::now().weekday().num_days_from_sunday()
}

/// Parse a CLI weekday argument: a bare index ("0".."6") or an English
/// name, full or three-letter ("mon", "Monday"). 0=Sunday .. 6=Saturday.
pub fn parse_weekday(s: &str) -> Option<u8> {
    if let Ok(n) = s.parse::<u8>() {
        return (n <= 6).then_some(n);
    }

    match s.to_lowercase().as_str() {
        "sun" | "sunday" => Some(0),
        "mon" | "monday" => Some(1),
        "tue" | "tuesday" => Some(2),
        "wed" | "wednesday" => Some(3),
        "thu" | "thursday" => Some(4),
        "fri" | "friday" => Some(5),
        "sat" | "saturday" => Some(6),
        _ => None,
    }
}

/// Parse a comma-separated weekday list ("1,2,3" or "mon,tue,fri").
/// `None` if any element fails to parse.
pub fn parse_weekday_list(s: &str) -> Option<Vec<u8>> {
    s.split(',').map(|part| parse_weekday(part.trim())).collect()
}
