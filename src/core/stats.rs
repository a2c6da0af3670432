//! Pure helpers for progress math and human-readable time rendering.

pub const DAY_MS: i64 = 86_400_000;

/// Completion percentage, rounded. Zero chapters means zero progress.
pub fn calculate_study_progress(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

/// Renders a duration given in hours: sub-hour values as minutes,
/// whole and fractional hours with the unit spelled out.
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        return format!("{} min", (hours * 60.0).round() as i64);
    }
    if hours == 1.0 {
        return "1 hour".to_string();
    }
    if hours.fract() == 0.0 {
        format!("{} hours", hours as i64)
    } else {
        format!("{:.1} hours", hours)
    }
}

/// Whole days between `now` and `then`, truncating toward zero.
/// Positive for past timestamps, negative for future ones.
pub fn day_difference(now_ms: i64, then_ms: i64) -> i64 {
    (now_ms - then_ms) / DAY_MS
}

/// Relative label for a day difference as produced by [`day_difference`].
/// Future timestamps keep the `In {n} days` form even at n = 1.
pub fn relative_day_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n if n > 1 => format!("{} days ago", n),
        n => format!("In {} days", -n),
    }
}

/// Countdown label for an exam deadline.
pub fn get_time_until_deadline(deadline_ms: i64, now_ms: i64) -> String {
    if deadline_ms < now_ms {
        return "Past due".to_string();
    }
    match (deadline_ms - now_ms) / DAY_MS {
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{} days left", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_rounded_percentage() {
        assert_eq!(calculate_study_progress(0, 0), 0);
        assert_eq!(calculate_study_progress(0, 4), 0);
        assert_eq!(calculate_study_progress(1, 3), 33);
        assert_eq!(calculate_study_progress(2, 3), 67);
        assert_eq!(calculate_study_progress(5, 5), 100);
    }

    #[test]
    fn durations_render_with_units() {
        assert_eq!(format_duration(0.5), "30 min");
        assert_eq!(format_duration(1.0), "1 hour");
        assert_eq!(format_duration(2.0), "2 hours");
        assert_eq!(format_duration(1.5), "1.5 hours");
        assert_eq!(format_duration(0.25), "15 min");
    }

    #[test]
    fn relative_labels_cover_past_and_future() {
        assert_eq!(relative_day_label(0), "Today");
        assert_eq!(relative_day_label(1), "Yesterday");
        assert_eq!(relative_day_label(3), "3 days ago");
        assert_eq!(relative_day_label(-1), "In 1 days");
        assert_eq!(relative_day_label(-5), "In 5 days");
    }

    #[test]
    fn day_difference_truncates_toward_zero() {
        let now = 10 * DAY_MS;
        assert_eq!(day_difference(now, now - DAY_MS), 1);
        assert_eq!(day_difference(now, now + DAY_MS), -1);
        // 36 hours either way still truncates to one day
        assert_eq!(day_difference(now, now - DAY_MS * 3 / 2), 1);
        assert_eq!(day_difference(now, now + DAY_MS * 3 / 2), -1);
    }

    #[test]
    fn exactly_one_day_old_is_yesterday() {
        let now = 100 * DAY_MS;
        assert_eq!(relative_day_label(day_difference(now, now - DAY_MS)), "Yesterday");
        assert_eq!(relative_day_label(day_difference(now, now + DAY_MS)), "In 1 days");
    }

    #[test]
    fn deadline_countdown() {
        let now = 50 * DAY_MS;
        assert_eq!(get_time_until_deadline(now + 2 * DAY_MS, now), "2 days left");
        assert_eq!(get_time_until_deadline(now + DAY_MS, now), "1 day left");
        assert_eq!(get_time_until_deadline(now + DAY_MS / 2, now), "Due today");
        assert_eq!(get_time_until_deadline(now - 1, now), "Past due");
    }
}
