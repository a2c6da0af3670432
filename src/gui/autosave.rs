use std::{
    collections::BTreeMap,
    time::{
        Duration,
        Instant,
    },
};

use chrono::Utc;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    gui::forms::FormState,
    persistence,
};

/// Quiet period after the last edit before a draft is written out.
pub const DEBOUNCE: Duration = Duration::from_millis(1000);

/// On-disk draft of a form, overwritten on every save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutosaveRecord {
    pub data: BTreeMap<String, String>,
    /// Capture time, epoch milliseconds.
    pub timestamp: i64,
}

pub fn file_name(form_id: &str) -> String {
    format!("autosave_{}.json", form_id)
}

/// Debounced local drafts for auto-save-flagged forms. Records never expire;
/// they are only ever overwritten.
pub struct AutoSaveStore;

impl AutoSaveStore {
    /// Called once per frame; flushes the form when its debounce window has
    /// elapsed.
    pub fn tick(form: &mut FormState, now: Instant) {
        if form.autosave_due(now) {
            Self::save(form);
        }
    }

    /// Writes the entire form, including blank fields.
    pub fn save(form: &mut FormState) {
        let record =
            AutosaveRecord { data: form.values().clone(), timestamp: Utc::now().timestamp_millis() };

        if let Err(e) = persistence::save_json(&record, &file_name(form.id)) {
            eprintln!("Auto-save failed for {}: {}", form.id, e);
        }
        form.clear_dirty();
    }

    /// Builds the quick-save record, keeping only non-empty fields. `None`
    /// when nothing has been typed in.
    fn quick_save_record(form: &FormState) -> Option<AutosaveRecord> {
        if !form.has_content() {
            return None;
        }

        Some(AutosaveRecord {
            data: form.non_empty_values(),
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    /// Keyboard quick-save: force-saves immediately, bypassing the debounce
    /// window, and skips forms with nothing typed in.
    pub fn quick_save(form: &mut FormState) -> bool {
        let Some(record) = Self::quick_save_record(form) else {
            return false;
        };

        if let Err(e) = persistence::save_json(&record, &file_name(form.id)) {
            eprintln!("Quick-save failed for {}: {}", form.id, e);
        }
        form.clear_dirty();
        true
    }

    /// Restores a prior draft into blank fields at startup.
    pub fn restore(form: &mut FormState) {
        let record: AutosaveRecord = persistence::load_json_or_default(&file_name(form.id));
        form.prefill_missing(&record.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::forms::{
        FieldKind,
        FieldSpec,
    };

    #[test]
    fn record_round_trips_through_json() {
        let mut data = BTreeMap::new();
        data.insert("plan_name".to_string(), "Finals prep".to_string());
        let record = AutosaveRecord { data, timestamp: 1_756_500_000_000 };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"timestamp\":1756500000000"));

        let back: AutosaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data.get("plan_name").unwrap(), "Finals prep");
        assert_eq!(back.timestamp, record.timestamp);
    }

    #[test]
    fn records_are_keyed_by_form_identity() {
        assert_eq!(file_name("create_schedule"), "autosave_create_schedule.json");
    }

    #[test]
    fn quick_save_records_skip_empty_forms_and_blank_fields() {
        let mut form = FormState::new(
            "scratch",
            vec![
                FieldSpec::optional("notes", "Notes", FieldKind::Text),
                FieldSpec::optional("tags", "Tags", FieldKind::Text),
            ],
        );

        assert!(AutoSaveStore::quick_save_record(&form).is_none());

        form.set_value("notes", "remember the thing");
        form.set_value("tags", "   ");
        form.mark_edited(Instant::now());

        let record = AutoSaveStore::quick_save_record(&form).unwrap();
        assert_eq!(record.data.len(), 1);
        assert_eq!(record.data.get("notes").unwrap(), "remember the thing");
    }
}
