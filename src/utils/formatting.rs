//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Progress of the current block as a 0..=100 percentage.
/// The analyzer keeps totals at 1 or more, but the gap placeholder can put
/// `elapsed` above `total`, hence the clamp.
pub fn progress_percent(elapsed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = elapsed as f64 / total as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Fixed-width textual progress bar for the status panel.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0 * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
