//! Time utilities: parsing HH:MM, minute arithmetic, clock formatting, etc.

use crate::models::preferences::TimeFormat;
use chrono::NaiveTime;

/// Parse "HH:MM" into minutes from midnight.
///
/// Deliberately lax: no range check on either component, and a missing or
/// non-numeric component yields `None`. The analyzer treats `None` as a
/// value that fails every comparison, so a period with a broken time simply
/// drops out of matching instead of aborting the whole classification.
pub fn time_to_minutes(t: &str) -> Option<i64> {
    let mut parts = t.split(':');
    let hours = parts.next()?.parse::<i64>().ok()?;
    let minutes = parts.next()?.parse::<i64>().ok()?;
    Some(hours * 60 + minutes)
}

/// Render a minute offset as zero-padded "HH:MM", wrapping on the day.
pub fn minutes_to_time(total: i64) -> String {
    let wrapped = total.rem_euclid(24 * 60);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Shift an "HH:MM" time by a minute delta, wrapping around midnight in
/// both directions ("23:50" + 20 → "00:10"). `None` when the input itself
/// does not parse.
pub fn add_minutes(t: &str, minutes: i64) -> Option<String> {
    Some(minutes_to_time(time_to_minutes(t)? + minutes))
}

/// Format an "HH:MM" value for display. 24h is the identity; 12h maps
/// hour 0 to 12 and leaves the hour unpadded ("13:05" → "1:05 PM").
/// Unparseable input comes back unchanged.
pub fn format_time_value(t: &str, format: TimeFormat) -> String {
    if format == TimeFormat::H24 {
        return t.to_string();
    }

    let mut parts = t.split(':');
    let (Some(hours), Some(minutes)) = (
        parts.next().and_then(|p| p.parse::<i64>().ok()),
        parts.next().and_then(|p| p.parse::<i64>().ok()),
    ) else {
        return t.to_string();
    };

    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = if hours % 12 == 0 { 12 } else { hours % 12 };
    format!("{}:{:02} {}", display_hours, minutes, suffix)
}

/// Countdown rendering: minutes unpadded, seconds always two digits.
pub fn format_seconds(secs: i64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Weekday names indexed 0=Sunday .. 6=Saturday; out of range gives "".
pub fn day_name(weekday: u32) -> String {
    const DAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    DAYS.get(weekday as usize).copied().unwrap_or("").to_string()
}

/// Normalize loose CLI time input into strict "HH:MM".
///
/// Mirrors what a forgiving form field would do: strip everything outside
/// `[0-9:]`, expand bare digits ("9" → "09:00", "930" → "09:30",
/// "0930" → "09:30"), then clamp hours to 0..=23 and minutes to 0..=59.
/// `None` when nothing usable is left.
pub fn normalize_time_input(input: &str) -> Option<String> {
    let re = regex::Regex::new(r"[^0-9:]").unwrap();
    let mut clean = re.replace_all(input, "").into_owned();

    if !clean.contains(':') {
        clean = match clean.len() {
            1 | 2 => format!("{:0>2}:00", clean),
            3 => format!("0{}:{}", &clean[..1], &clean[1..]),
            4 => format!("{}:{}", &clean[..2], &clean[2..]),
            _ => clean,
        };
    }

    let parts: Vec<&str> = clean.split(':').collect();
    if parts.len() < 2 {
        return None;
    }

    let h = parts[0].parse::<i64>().unwrap_or(0).clamp(0, 23);
    let m = parts[1].parse::<i64>().unwrap_or(0).clamp(0, 59);

    Some(format!("{:02}:{:02}", h, m))
}

/// Strict "%H:%M" parse used at the import/CLI boundary, where bad times
/// are rejected instead of tolerated.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}
