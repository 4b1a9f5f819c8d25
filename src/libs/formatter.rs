//! Display formatting for task data.
//!
//! Used by the table views and by status messages so that rates, day labels
//! and timestamps read the same everywhere.
//!
//! ## Format Specifications
//!
//! - Completion rate: one decimal place and a percent sign, `50.0%`
//! - Histogram day label: abbreviated month and zero-padded day, `Jan 01`
//! - Creation timestamp: local time, `2024-01-01 09:30`
//! - Long text is cut to a character budget and ends with `…`

use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Cuts `text` to at most `max_chars` characters.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Horizontal bar of `count` blocks, capped at `width`.
pub fn format_bar(count: usize, width: usize) -> String {
    let blocks = count.min(width);
    let mut bar = "█".repeat(blocks);
    if count > width {
        bar.push('+');
    }
    bar
}
