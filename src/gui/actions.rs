// A simple ui action queue system so widgets can declare intents without
// holding mutable references to the app while they draw.

/// Every user intent a widget can declare, with its payload validated at
/// the parse boundary. Chapter ids are numeric; session and subject ids
/// stay opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    CompleteSession { session_id: String },
    MissSession { session_id: String },
    RescheduleSession { session_id: String },
    FetchContent { chapter_id: i64 },
    ViewSummary { chapter_id: i64 },
    ViewWikipedia { chapter_id: i64 },
    ToggleSubject { subject_id: String },
    ReorderSessions,
    ReloadDashboard,
}

impl UiAction {
    /// Maps a declared action name and entity id to a typed action.
    /// Unknown names and malformed chapter ids are dropped with a warning.
    pub fn parse(name: &str, id: &str) -> Option<UiAction> {
        match name {
            "complete-session" => Some(UiAction::CompleteSession { session_id: id.to_string() }),
            "miss-session" => Some(UiAction::MissSession { session_id: id.to_string() }),
            "reschedule-session" => {
                Some(UiAction::RescheduleSession { session_id: id.to_string() })
            }
            "fetch-content" => parse_chapter_id(name, id).map(|chapter_id| UiAction::FetchContent { chapter_id }),
            "view-summary" => parse_chapter_id(name, id).map(|chapter_id| UiAction::ViewSummary { chapter_id }),
            "view-wikipedia" => {
                parse_chapter_id(name, id).map(|chapter_id| UiAction::ViewWikipedia { chapter_id })
            }
            "toggle-subject" => Some(UiAction::ToggleSubject { subject_id: id.to_string() }),
            _ => {
                eprintln!("Unknown action: {}", name);
                None
            }
        }
    }
}

fn parse_chapter_id(action: &str, id: &str) -> Option<i64> {
    match id.parse() {
        Ok(chapter_id) => Some(chapter_id),
        Err(_) => {
            eprintln!("Invalid chapter id {:?} for action {}", id, action);
            None
        }
    }
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    /// Routes a declared action name + id through [`UiAction::parse`];
    /// unrecognized declarations are dropped there.
    pub fn push_named(&mut self, name: &str, id: &str) {
        if let Some(action) = UiAction::parse(name, id) {
            self.push(action);
        }
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_typed_actions() {
        assert_eq!(
            UiAction::parse("complete-session", "12"),
            Some(UiAction::CompleteSession { session_id: "12".into() })
        );
        assert_eq!(
            UiAction::parse("miss-session", "12"),
            Some(UiAction::MissSession { session_id: "12".into() })
        );
        assert_eq!(
            UiAction::parse("fetch-content", "7"),
            Some(UiAction::FetchContent { chapter_id: 7 })
        );
        assert_eq!(
            UiAction::parse("view-summary", "7"),
            Some(UiAction::ViewSummary { chapter_id: 7 })
        );
        assert_eq!(
            UiAction::parse("view-wikipedia", "7"),
            Some(UiAction::ViewWikipedia { chapter_id: 7 })
        );
        assert_eq!(
            UiAction::parse("toggle-subject", "3"),
            Some(UiAction::ToggleSubject { subject_id: "3".into() })
        );
    }

    #[test]
    fn unknown_names_are_dropped() {
        assert_eq!(UiAction::parse("explode-session", "12"), None);
        assert_eq!(UiAction::parse("", "12"), None);
    }

    #[test]
    fn malformed_chapter_ids_are_dropped() {
        assert_eq!(UiAction::parse("fetch-content", "seven"), None);
        assert_eq!(UiAction::parse("view-summary", ""), None);
    }

    #[test]
    fn blank_session_ids_still_parse() {
        // The session controller rejects blank ids with a notification;
        // the parse boundary passes them through.
        assert_eq!(
            UiAction::parse("complete-session", ""),
            Some(UiAction::CompleteSession { session_id: String::new() })
        );
    }

    #[test]
    fn queue_drains_in_order() {
        let mut queue = ActionQueue::new();
        queue.push_named("fetch-content", "1");
        queue.push_named("not-a-thing", "1");
        queue.push_named("miss-session", "9");

        let drained: Vec<UiAction> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                UiAction::FetchContent { chapter_id: 1 },
                UiAction::MissSession { session_id: "9".into() },
            ]
        );
        assert!(queue.is_empty());
    }
}
