//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Format a modification time as "YYYY-MM-DD HH:MM" in local time
///
/// Returns an empty string when the time is unknown.
pub fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(time) => {
            let local: DateTime<Local> = time.into();
            local.format("%Y-%m-%d %H:%M").to_string()
        }
        None => String::new(),
    }
}

/// Format bytes into human-readable string (e.g., "1.20 KB", "5.30 MB")
///
/// # Examples
/// ```
/// use picstash::logic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1023), "1023 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Truncate a name to fit `max_width` display columns, adding "…"
///
/// # Examples
/// ```
/// use picstash::logic::formatting::truncate_name;
///
/// assert_eq!(truncate_name("short.png", 20), "short.png");
/// assert_eq!(truncate_name("a_very_long_name.png", 8), "a_very_…");
/// assert_eq!(truncate_name("abc", 0), "");
/// ```
pub fn truncate_name(name: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max_width == 0 {
        return String::new();
    }
    if unicode_width::UnicodeWidthStr::width(name) <= max_width {
        return name.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
