//! The schedule analyzer: classifies an instant against one day's periods.
//!
//! This is a pure function over its inputs. It performs no I/O, holds no
//! state between calls and never fails: broken period data degrades into
//! the gap/after_school/no_schedule branches instead of raising an error.
//! Interval matching runs on minute granularity while the elapsed and
//! remaining figures use second granularity, so a period flips active at
//! second 0 of its start minute. That boundary rounding is intentional and
//! pinned by the tests.

use crate::models::period::Period;
use crate::models::status::{CurrentStatus, Status};
use crate::utils::time::day_name;
use chrono::{Datelike, Local, NaiveTime, Timelike};

/// Classify the current wall-clock instant against `periods`.
pub fn analyze(periods: &[Period]) -> CurrentStatus {
    let now = Local::now();
    analyze_at(
        periods,
        now.time(),
        now.date_naive().weekday().num_days_from_sunday(),
    )
}

/// Classify an explicit instant. `weekday` (0=Sunday .. 6=Saturday) only
/// feeds the `day_name` field; the classification depends on `now` alone.
pub fn analyze_at(periods: &[Period], now: NaiveTime, weekday: u32) -> CurrentStatus {
    let day = day_name(weekday);

    if periods.is_empty() {
        return CurrentStatus {
            current_period: None,
            next_period: None,
            status: Status::NoSchedule,
            remaining_seconds: 0,
            total_duration_seconds: 1,
            elapsed_seconds: 0,
            day_name: day,
        };
    }

    let now_minutes = now.hour() as i64 * 60 + now.minute() as i64;
    let now_seconds = now_minutes * 60 + now.second() as i64;

    // -----------------------------
    // Sort by start minute
    // -----------------------------
    // Stable, so periods sharing a start minute keep their stored order.
    // Unparseable starts sort last, keeping them out of the first-period
    // probe below.
    let mut sorted = periods.to_vec();
    sorted.sort_by_key(|p| p.start_minutes().unwrap_or(i64::MAX));

    // -----------------------------
    // Before the first period
    // -----------------------------
    let first = &sorted[0];
    if let Some(first_start) = first.start_minutes()
        && now_minutes < first_start
    {
        let start_seconds = first_start * 60;
        return CurrentStatus {
            current_period: None,
            next_period: Some(first.clone()),
            status: Status::BeforeSchool,
            remaining_seconds: start_seconds - now_seconds,
            // Not a real duration: the start-of-day offset doubles as the
            // progress denominator here.
            total_duration_seconds: start_seconds,
            elapsed_seconds: 0,
            day_name: day,
        };
    }

    // -----------------------------
    // After the last period
    // -----------------------------
    let last = &sorted[sorted.len() - 1];
    if last.end_minutes().is_some_and(|end| now_minutes >= end) {
        return after_school(day);
    }

    // -----------------------------
    // Active period scan
    // -----------------------------
    // First interval containing the current minute wins; overlapping
    // periods resolve to the earliest start.
    for (i, period) in sorted.iter().enumerate() {
        let (Some(start), Some(end)) = (period.start_minutes(), period.end_minutes()) else {
            continue;
        };

        if now_minutes >= start && now_minutes < end {
            let next = sorted[i + 1..]
                .iter()
                .find(|p| p.start_minutes().is_some())
                .cloned();

            return CurrentStatus {
                current_period: Some(period.clone()),
                next_period: next,
                status: Status::Active,
                remaining_seconds: end * 60 - now_seconds,
                total_duration_seconds: (end - start) * 60,
                elapsed_seconds: now_seconds - start * 60,
                day_name: day,
            };
        }
    }

    // -----------------------------
    // Gap between periods
    // -----------------------------
    // No interval matched: wait for the earliest period starting after the
    // current minute. The +60/60 figures are placeholders so a progress
    // display still has something to draw.
    let upcoming = sorted.iter().find_map(|p| {
        p.start_minutes()
            .filter(|start| *start > now_minutes)
            .map(|start| (p.clone(), start))
    });

    if let Some((next, next_start)) = upcoming {
        let remaining = next_start * 60 - now_seconds;
        return CurrentStatus {
            current_period: None,
            next_period: Some(next),
            status: Status::Gap,
            remaining_seconds: remaining,
            total_duration_seconds: remaining + 60,
            elapsed_seconds: 60,
            day_name: day,
        };
    }

    // Inconsistent data (nothing matched, nothing upcoming): treat the day
    // as over.
    after_school(day)
}

fn after_school(day_name: String) -> CurrentStatus {
    CurrentStatus {
        current_period: None,
        next_period: None,
        status: Status::AfterSchool,
        remaining_seconds: 0,
        total_duration_seconds: 1,
        elapsed_seconds: 1,
        day_name,
    }
}
