/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::period_type::PeriodType;

/// Per-kind row color used by the timetable listing:
/// classes blue, breaks green, lunch yellow, everything else magenta.
pub fn color_for_kind(kind: &PeriodType) -> &'static str {
    match kind {
        PeriodType::Class => BLUE,
        PeriodType::Break => GREEN,
        PeriodType::Lunch => YELLOW,
        PeriodType::Other => MAGENTA,
    }
}

/// Returns GREY for empty placeholder values ("" or "--:--"),
/// and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--:--" => RESET,
        _ => GREY,
    }
}
