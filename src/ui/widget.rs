//! Terminal rendering of the status panel.
//!
//! One frame is always exactly [`PANEL_LINES`] lines, so the watch
//! loop can move the cursor back up and redraw in place.

use crate::models::preferences::TimeFormat;
use crate::models::status::{CurrentStatus, Status};
use crate::utils::formatting::{progress_bar, progress_percent};
use crate::utils::time::{format_seconds, format_time_value};
use ansi_term::{Colour, Style};

pub const PANEL_LINES: usize = 5;

/// Width of the textual progress bar.
const BAR_WIDTH: usize = 24;

fn icon(status: &CurrentStatus) -> &'static str {
    if status.status == Status::NoSchedule {
        return "📅";
    }

    match &status.current_period {
        Some(p) => p.kind.icon(),
        None => "🕐",
    }
}

fn main_text(status: &CurrentStatus) -> String {
    match status.status {
        Status::NoSchedule => "No schedule for today".to_string(),
        Status::BeforeSchool => "School hasn't started".to_string(),
        Status::AfterSchool => "School's over for today!".to_string(),
        Status::Gap => "Break time".to_string(),
        Status::Active => status
            .current_period
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

fn sub_text(status: &CurrentStatus, fmt: TimeFormat) -> String {
    match status.status {
        Status::NoSchedule => "Holiday / nothing planned".to_string(),
        Status::BeforeSchool => match &status.next_period {
            Some(next) => format!("First class: {}", format_time_value(&next.start_time, fmt)),
            None => String::new(),
        },
        Status::AfterSchool => "Good work today!".to_string(),
        Status::Gap => match &status.next_period {
            Some(next) => format!("Next: {}", next.name),
            None => String::new(),
        },
        Status::Active => match &status.current_period {
            Some(p) => format!(
                "{} - {}",
                format_time_value(&p.start_time, fmt),
                format_time_value(&p.end_time, fmt)
            ),
            None => String::new(),
        },
    }
}

/// The countdown line. Only states with something to count down to
/// show digits; the last minute turns red.
fn countdown(status: &CurrentStatus) -> String {
    let counting = matches!(
        status.status,
        Status::Active | Status::BeforeSchool | Status::Gap
    );

    if !counting {
        return format!("⏳ {}", Style::new().bold().paint("--:--"));
    }

    let text = format_seconds(status.remaining_seconds);

    if status.remaining_seconds < 60 {
        format!("⏳ {}", Colour::Red.bold().paint(text))
    } else {
        format!("⏳ {}", Style::new().bold().paint(text))
    }
}

/// Render one status frame.
pub fn render_panel(status: &CurrentStatus, fmt: TimeFormat, clock: &str) -> String {
    let mut lines = Vec::with_capacity(PANEL_LINES);

    let mut header = format!("📅 {}", status.day_name);
    if !clock.is_empty() {
        header.push_str(&format!(" · {}", format_time_value(clock, fmt)));
    }
    lines.push(header);

    let mut title = format!(
        "{} {}",
        icon(status),
        Style::new().bold().paint(main_text(status))
    );
    if status.status == Status::Active {
        title.push_str(&format!("  {}", Colour::Red.bold().paint("LIVE")));
    }
    lines.push(title);

    let sub = sub_text(status, fmt);
    if sub.is_empty() {
        lines.push(String::new());
    } else {
        lines.push(format!("   {}", sub));
    }

    lines.push(format!("   {}", countdown(status)));

    if status.status == Status::Active {
        let pct = progress_percent(status.elapsed_seconds, status.total_duration_seconds);
        lines.push(format!("   {} {:>3.0}%", progress_bar(pct, BAR_WIDTH), pct));
    } else {
        lines.push(String::new());
    }

    lines.join("\n")
}
