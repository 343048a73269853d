use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local midnight of `date` (the earliest instant if DST makes it ambiguous).
pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a due date given on the command line:
/// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, `today` or `tomorrow`.
/// Dates without a time are due at local midnight.
pub fn parse_due(s: &str) -> Option<DateTime<Local>> {
    parse_due_from(s, today())
}

pub fn parse_due_from(s: &str, today: NaiveDate) -> Option<DateTime<Local>> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "today" => return start_of_day(today),
        "tomorrow" => return start_of_day(today + Duration::days(1)),
        _ => {}
    }

    if let Some(d) = parse_date(s) {
        return start_of_day(d);
    }

    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()?;
    Local.from_local_datetime(&dt).earliest()
}
