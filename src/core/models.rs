use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

use super::errors::StudydeskError;

/// Session ids arrive as JSON numbers from the backend but are routed as
/// strings on the client (endpoint paths are built by interpolation).
fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom("expected a string or numeric id")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Missed,
    Rescheduled,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "Scheduled",
            SessionStatus::Completed => "Completed",
            SessionStatus::Missed => "Missed",
            SessionStatus::Rescheduled => "Rescheduled",
        }
    }
}

/// A scheduled study unit. Lifecycle transitions (complete/miss) are
/// server-authoritative; the client only triggers them and reloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    pub chapter_title: String,
    pub subject_name: String,
    /// ISO date, `YYYY-MM-DD`.
    pub scheduled_date: String,
    #[serde(default)]
    pub start_time: String,
    pub duration_hours: f64,
    pub status: SessionStatus,
    #[serde(default)]
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i64,
    pub title: String,
    pub subject_name: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub wikipedia_content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_chapters: u32,
    #[serde(default)]
    pub difficulty_level: String,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub exam_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub name: String,
    pub completed: u32,
    pub total: u32,
    #[serde(default)]
    pub rate: Option<f64>,
}

/// Body of `GET /api/progress-chart`. The backend also sends `overall` and
/// `daily` series; only the per-subject breakdown is charted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressChart {
    #[serde(default)]
    pub by_subject: Vec<SubjectProgress>,
}

/// Body of `GET /api/dashboard`, the bootstrap payload the server otherwise
/// renders into its dashboard and progress pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub sessions: Vec<StudySession>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

pub fn chapter_by_id(chapters: &[Chapter], id: i64) -> Option<&Chapter> {
    chapters.iter().find(|chapter| chapter.id == id)
}

/// Lookup for action handlers that need to surface a missing chapter.
pub fn require_chapter(chapters: &[Chapter], id: i64) -> Result<&Chapter, StudydeskError> {
    chapter_by_id(chapters, id).ok_or(StudydeskError::UnknownChapter(id))
}

/// The two fully implemented session-lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionActionKind {
    Complete,
    Miss,
}

impl SessionActionKind {
    pub fn endpoint(&self, session_id: &str) -> String {
        match self {
            SessionActionKind::Complete => format!("/complete-session/{}", session_id),
            SessionActionKind::Miss => format!("/miss-session/{}", session_id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Complete Session",
            SessionActionKind::Miss => "Miss Session",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Mark this study session as completed?",
            SessionActionKind::Miss => "Mark this study session as missed?",
        }
    }

    /// Optional form field posted alongside the transition.
    pub fn field_name(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "notes",
            SessionActionKind::Miss => "reason",
        }
    }

    pub fn field_label(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Notes (optional)",
            SessionActionKind::Miss => "Reason (optional)",
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Complete",
            SessionActionKind::Miss => "Mark Missed",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Session marked as completed!",
            SessionActionKind::Miss => "Session marked as missed.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            SessionActionKind::Complete => "Error completing session.",
            SessionActionKind::Miss => "Error processing missed session.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_chart_tolerates_extra_fields() {
        let body = r#"{
            "overall": {"completion_rate": 40.0},
            "by_subject": [
                {"name": "Physics", "completed": 2, "total": 5, "rate": 40.0},
                {"name": "History", "completed": 0, "total": 3}
            ],
            "daily": [{"date": "08/29", "sessions": 1}]
        }"#;

        let chart: ProgressChart = serde_json::from_str(body).unwrap();
        assert_eq!(chart.by_subject.len(), 2);
        assert_eq!(chart.by_subject[0].rate, Some(40.0));
        assert_eq!(chart.by_subject[1].completed, 0);
        assert_eq!(chart.by_subject[1].rate, None);
    }

    #[test]
    fn session_id_accepts_numbers_and_strings() {
        let numeric = r#"{
            "id": 17,
            "chapter_title": "Thermodynamics",
            "subject_name": "Physics",
            "scheduled_date": "2026-08-30",
            "start_time": "09:00",
            "duration_hours": 1.5,
            "status": "scheduled",
            "difficulty": "medium"
        }"#;
        let session: StudySession = serde_json::from_str(numeric).unwrap();
        assert_eq!(session.id, "17");
        assert_eq!(session.status, SessionStatus::Scheduled);

        let stringy = numeric.replace("17", "\"17\"");
        let session: StudySession = serde_json::from_str(&stringy).unwrap();
        assert_eq!(session.id, "17");
    }

    #[test]
    fn chapter_lookup_is_by_integer_id() {
        let chapters = vec![
            Chapter {
                id: 1,
                title: "Optics".into(),
                subject_name: "Physics".into(),
                is_completed: false,
                difficulty: "medium".into(),
                estimated_hours: 2.0,
                summary: None,
                wikipedia_content: None,
            },
            Chapter {
                id: 2,
                title: "Waves".into(),
                subject_name: "Physics".into(),
                is_completed: true,
                difficulty: "hard".into(),
                estimated_hours: 3.0,
                summary: Some("short".into()),
                wikipedia_content: None,
            },
        ];

        assert_eq!(chapter_by_id(&chapters, 2).map(|c| c.title.as_str()), Some("Waves"));
        assert!(chapter_by_id(&chapters, 99).is_none());

        let err = require_chapter(&chapters, 99).unwrap_err();
        assert_eq!(err.to_string(), "Unknown chapter: 99");
        assert!(require_chapter(&chapters, 1).is_ok());
    }

    #[test]
    fn session_action_endpoints() {
        assert_eq!(SessionActionKind::Complete.endpoint("42"), "/complete-session/42");
        assert_eq!(SessionActionKind::Miss.endpoint("42"), "/miss-session/42");
    }
}
