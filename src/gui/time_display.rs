use std::{
    collections::{
        HashMap,
        HashSet,
    },
    time::{
        Duration,
        Instant,
    },
};

use chrono::{
    Local,
    NaiveDate,
    NaiveTime,
    Utc,
};
use eframe::egui;

use crate::core::{
    models::StudySession,
    stats,
};

pub const LABEL_REFRESH: Duration = Duration::from_secs(60);
pub const BADGE_REFRESH: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBadge {
    Today,
    Overdue,
}

impl DateBadge {
    pub fn text(&self) -> &'static str {
        match self {
            DateBadge::Today => "Today",
            DateBadge::Overdue => "Overdue",
        }
    }
}

/// Lexical ISO comparison: dated exactly today is `Today`, strictly before
/// today is `Overdue`, future dates carry no badge.
pub fn date_badge(scheduled_date: &str, today: &str) -> Option<DateBadge> {
    if scheduled_date == today {
        Some(DateBadge::Today)
    } else if scheduled_date < today {
        Some(DateBadge::Overdue)
    } else {
        None
    }
}

/// Cached relative-time labels and date badges for session cards, plus the
/// once-per-bar progress reveal animation. Labels refresh every minute,
/// badges every five.
pub struct TimeDisplay {
    labels: HashMap<String, String>,
    badges: HashMap<String, DateBadge>,
    last_label_refresh: Option<Instant>,
    last_badge_refresh: Option<Instant>,
    revealed: HashSet<egui::Id>,
}

impl TimeDisplay {
    pub fn new() -> Self {
        Self {
            labels: HashMap::new(),
            badges: HashMap::new(),
            last_label_refresh: None,
            last_badge_refresh: None,
            revealed: HashSet::new(),
        }
    }

    pub fn refresh(&mut self, sessions: &[StudySession], now: Instant) {
        let labels_due =
            self.last_label_refresh.map_or(true, |t| now.duration_since(t) >= LABEL_REFRESH);

        if labels_due {
            let now_ms = Utc::now().timestamp_millis();
            self.labels = sessions
                .iter()
                .filter_map(|session| {
                    session_timestamp_ms(session).map(|ts| {
                        let days = stats::day_difference(now_ms, ts);
                        (session.id.clone(), stats::relative_day_label(days))
                    })
                })
                .collect();
            self.last_label_refresh = Some(now);
        }

        let badges_due =
            self.last_badge_refresh.map_or(true, |t| now.duration_since(t) >= BADGE_REFRESH);

        if badges_due {
            let today = Local::now().date_naive().to_string();
            self.badges = sessions
                .iter()
                .filter_map(|session| {
                    date_badge(&session.scheduled_date, &today)
                        .map(|badge| (session.id.clone(), badge))
                })
                .collect();
            self.last_badge_refresh = Some(now);
        }
    }

    /// Recompute on the next frame, used after a dashboard reload.
    pub fn force_refresh(&mut self) {
        self.last_label_refresh = None;
        self.last_badge_refresh = None;
    }

    pub fn label(&self, session_id: &str) -> Option<&str> {
        self.labels.get(session_id).map(String::as_str)
    }

    pub fn badge(&self, session_id: &str) -> Option<DateBadge> {
        self.badges.get(session_id).copied()
    }

    /// Animates a progress bar from zero to `target` the first time it is
    /// drawn; afterwards the settled value comes straight back.
    pub fn reveal_fraction(&mut self, ctx: &egui::Context, id: egui::Id, target: f32) -> f32 {
        if self.revealed.insert(id) {
            // Pin the start of the animation at zero.
            ctx.animate_value_with_time(id, 0.0, 0.0);
        }
        ctx.animate_value_with_time(id, target, 0.6)
    }
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self::new()
    }
}

fn session_timestamp_ms(session: &StudySession) -> Option<i64> {
    let date = NaiveDate::parse_from_str(&session.scheduled_date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&session.start_time, "%H:%M")
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    Some(date.and_time(time).and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SessionStatus;

    #[test]
    fn badge_classification_is_lexical() {
        let today = "2026-08-30";
        assert_eq!(date_badge("2026-08-30", today), Some(DateBadge::Today));
        assert_eq!(date_badge("2026-08-29", today), Some(DateBadge::Overdue));
        assert_eq!(date_badge("2025-12-31", today), Some(DateBadge::Overdue));
        assert_eq!(date_badge("2026-08-31", today), None);
    }

    #[test]
    fn session_timestamps_parse_date_and_time() {
        let session = StudySession {
            id: "1".into(),
            chapter_title: "Optics".into(),
            subject_name: "Physics".into(),
            scheduled_date: "2026-08-30".into(),
            start_time: "09:30".into(),
            duration_hours: 1.0,
            status: SessionStatus::Scheduled,
            difficulty: "medium".into(),
        };

        let ts = session_timestamp_ms(&session).unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(ts, expected);

        // Missing start time falls back to midnight; bad dates are skipped.
        let mut midnight = session.clone();
        midnight.start_time = String::new();
        assert!(session_timestamp_ms(&midnight).is_some());

        let mut bad = session;
        bad.scheduled_date = "tomorrow".into();
        assert!(session_timestamp_ms(&bad).is_none());
    }
}
