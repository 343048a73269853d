//! Formatting utilities used for CLI output.

use crate::models::estimate::total_minutes;
use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strikethrough(s: &str) -> String {
    format!("\x1b[9m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal column width of `s`, ignoring colour codes. CJK titles take two
/// columns per character.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad `s` on the right to `width` terminal columns.
pub fn pad_display(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut plain text to at most `max` characters, ending with "..." when cut.
pub fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. 02:15
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 02h 15m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Estimate as shown in lists: "--" when no estimate was set.
pub fn format_estimate(hours: u8, minutes: u8) -> String {
    if hours == 0 && minutes == 0 {
        "--".to_string()
    } else {
        mins2readable(total_minutes(hours, minutes), false, false)
    }
}

/// Due date with the configured format; the time is appended when it is not
/// midnight.
pub fn format_due(due: &DateTime<Local>, date_format: &str) -> String {
    let date = due.format(date_format).to_string();
    if due.format("%H:%M").to_string() == "00:00" {
        date
    } else {
        format!("{} {}", date, due.format("%H:%M"))
    }
}
