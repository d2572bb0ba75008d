//! Builders for the stock timetable and for continuing a day that
//! already has periods in it.

use crate::models::period::Period;
use crate::models::period_type::PeriodType;
use crate::models::preferences::SchoolLevel;
use crate::utils::time::{minutes_to_time, time_to_minutes};

/// Build the stock timetable for one day: a homeroom block, then
/// `classes` class blocks of the level's length separated by
/// 10-minute breaks.
///
/// Ids are assigned sequentially starting from "1".
pub fn default_schedule(level: SchoolLevel, classes: u32) -> Vec<Period> {
    let class_len = level.class_minutes();
    let mut periods = Vec::new();

    periods.push(Period::new(
        "1",
        "Homeroom",
        "08:40",
        "09:00",
        PeriodType::Other,
    ));

    let mut id = 2;
    let mut cursor = 9 * 60; // class blocks chain from 09:00

    for n in 1..=classes {
        if n > 1 {
            let end = cursor + 10;
            periods.push(Period::new(
                &id.to_string(),
                "Break",
                &minutes_to_time(cursor),
                &minutes_to_time(end),
                PeriodType::Break,
            ));
            id += 1;
            cursor = end;
        }

        let end = cursor + class_len;
        periods.push(Period::new(
            &id.to_string(),
            &format!("Period {}", n),
            &minutes_to_time(cursor),
            &minutes_to_time(end),
            PeriodType::Class,
        ));
        id += 1;
        cursor = end;
    }

    periods
}

/// Derive the next period for a day from what is already stored:
/// start where the last period ended, alternate classes and breaks,
/// and number new classes from the highest "Period N" present.
///
/// An empty day yields "Period 1" at 09:00. The caller supplies the id.
pub fn continue_day(existing: &[Period], level: SchoolLevel, id: &str) -> Period {
    let (kind, name) = match existing.last() {
        None => (PeriodType::Class, "Period 1".to_string()),
        Some(last) if last.kind.is_class() => (PeriodType::Break, "Break".to_string()),
        Some(_) => (
            PeriodType::Class,
            format!("Period {}", next_class_number(existing)),
        ),
    };

    let duration = if kind.is_class() {
        level.class_minutes()
    } else {
        10
    };

    let start_minutes = existing
        .last()
        .and_then(|p| time_to_minutes(&p.end_time))
        .unwrap_or(9 * 60);

    Period::new(
        id,
        &name,
        &minutes_to_time(start_minutes),
        &minutes_to_time(start_minutes + duration),
        kind,
    )
}

/// Highest class number already in the day, plus one.
///
/// Accepts both "Period N" names and plain numeric names like "3".
fn next_class_number(existing: &[Period]) -> i64 {
    let re = regex::Regex::new(r"Period (\d+)").unwrap();
    let mut max = 0;

    for p in existing.iter().filter(|p| p.kind.is_class()) {
        let n = re
            .captures(&p.name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .or_else(|| leading_number(&p.name));

        if let Some(n) = n
            && n > max
        {
            max = n;
        }
    }

    max + 1
}

fn leading_number(name: &str) -> Option<i64> {
    let digits: String = name
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}
