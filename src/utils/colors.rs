/// ANSI color helper utilities for terminal output.
use chrono::{DateTime, Local};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Due date colour:
/// done → grey
/// past due → red
/// due later today → yellow
/// otherwise → reset
pub fn color_for_due(due: &DateTime<Local>, now: &DateTime<Local>, done: bool) -> &'static str {
    if done {
        GREY
    } else if due < now {
        RED
    } else if due.date_naive() == now.date_naive() {
        YELLOW
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Check mark column of the task list.
pub fn done_marker(done: bool) -> String {
    if done {
        colorize("✔", GREEN)
    } else {
        colorize("○", GREY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn due_colours() {
        let now = Local.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(color_for_due(&(now - Duration::hours(1)), &now, false), RED);
        assert_eq!(color_for_due(&(now + Duration::hours(1)), &now, false), YELLOW);
        assert_eq!(color_for_due(&(now + Duration::days(2)), &now, false), RESET);
        assert_eq!(color_for_due(&(now - Duration::days(2)), &now, true), GREY);
    }
}
