//! Estimated duration of a task, kept as the two picker values the forms
//! offer: whole hours and quarter hours.

/// Largest selectable hour value.
pub const MAX_HOURS: u8 = 12;

/// Selectable minute values.
pub const MINUTE_OPTIONS: [u8; 4] = [0, 15, 30, 45];

/// Clamp an hour value into `0..=MAX_HOURS`.
pub fn clamp_hours(hours: u32) -> u8 {
    hours.min(MAX_HOURS as u32) as u8
}

/// Snap a minute value to the nearest option; anything past 45 becomes 45.
pub fn snap_minutes(minutes: u32) -> u8 {
    MINUTE_OPTIONS
        .iter()
        .copied()
        .min_by_key(|opt| (*opt as i64 - minutes as i64).abs())
        .unwrap_or(0)
}

/// Whole, non-negative count from a stored number. Negative and
/// non-finite values read as 0, fractions are rounded.
pub fn stored_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Total estimate in minutes.
pub fn total_minutes(hours: u8, minutes: u8) -> i64 {
    hours as i64 * 60 + minutes as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_clamped() {
        assert_eq!(clamp_hours(0), 0);
        assert_eq!(clamp_hours(7), 7);
        assert_eq!(clamp_hours(12), 12);
        assert_eq!(clamp_hours(40), 12);
    }

    #[test]
    fn minutes_snap_to_quarters() {
        assert_eq!(snap_minutes(0), 0);
        assert_eq!(snap_minutes(7), 0);
        assert_eq!(snap_minutes(8), 15);
        assert_eq!(snap_minutes(30), 30);
        assert_eq!(snap_minutes(44), 45);
        assert_eq!(snap_minutes(59), 45);
        assert_eq!(snap_minutes(500), 45);
    }

    #[test]
    fn stored_values_become_counts() {
        assert_eq!(stored_count(3.0), 3);
        assert_eq!(stored_count(2.6), 3);
        assert_eq!(stored_count(-4.0), 0);
        assert_eq!(stored_count(f64::NAN), 0);
        assert_eq!(stored_count(1e20), u32::MAX);
    }

    #[test]
    fn total() {
        assert_eq!(total_minutes(1, 30), 90);
        assert_eq!(total_minutes(0, 0), 0);
    }
}
