use std::{
    collections::BTreeMap,
    time::Instant,
};

use chrono::NaiveDate;

use crate::gui::autosave::DEBOUNCE;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const DATE_FORMAT_MESSAGE: &str = "Enter a date as YYYY-MM-DD";
pub const DATE_ORDER_MESSAGE: &str = "End date must be after start date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }
}

/// Field values plus validation state for one form. Edits are tracked for
/// the auto-save debounce window.
pub struct FormState {
    pub id: &'static str,
    pub fields: Vec<FieldSpec>,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    last_edit: Option<Instant>,
    dirty: bool,
}

impl FormState {
    pub fn new(id: &'static str, fields: Vec<FieldSpec>) -> Self {
        let values = fields.iter().map(|spec| (spec.name.to_string(), String::new())).collect();

        Self { id, fields, values, errors: BTreeMap::new(), last_edit: None, dirty: false }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Mutable handle for text widgets. Callers must `mark_edited` when the
    /// widget reports a change.
    pub fn value_entry(&mut self, name: &str) -> &mut String {
        self.values.entry(name.to_string()).or_default()
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn non_empty_values(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn has_content(&self) -> bool {
        self.values.values().any(|value| !value.trim().is_empty())
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn mark_edited(&mut self, now: Instant) {
        self.dirty = true;
        self.last_edit = Some(now);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// True once the debounce window has elapsed since the last edit.
    pub fn autosave_due(&self, now: Instant) -> bool {
        self.dirty
            && self.last_edit.map_or(false, |edited| now.duration_since(edited) >= DEBOUNCE)
    }

    /// Fills only blank fields from a restored record; typed-in values win.
    pub fn prefill_missing(&mut self, data: &BTreeMap<String, String>) {
        for (name, value) in data {
            let current = self.values.entry(name.clone()).or_default();
            if current.trim().is_empty() {
                *current = value.clone();
            }
        }
    }

    /// Validates required fields and date-range ordering. Each field keeps
    /// at most one inline message; passing fields have theirs cleared.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;

        for spec in &self.fields {
            let value = self.values.get(spec.name).map(String::as_str).unwrap_or("");
            let blank = value.trim().is_empty();

            if spec.required && blank {
                self.errors.insert(spec.name.to_string(), REQUIRED_MESSAGE.to_string());
                valid = false;
            } else if !blank && spec.kind == FieldKind::Date && parse_date(value).is_none() {
                self.errors.insert(spec.name.to_string(), DATE_FORMAT_MESSAGE.to_string());
                valid = false;
            } else {
                self.errors.remove(spec.name);
            }
        }

        // Only the first two date fields are ever compared: first is the
        // start, second is the end.
        let date_fields: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|spec| spec.kind == FieldKind::Date)
            .map(|spec| spec.name)
            .take(2)
            .collect();

        if let [start_name, end_name] = date_fields[..] {
            let start = parse_date(self.value(start_name));
            let end = parse_date(self.value(end_name));

            if let (Some(start), Some(end)) = (start, end) {
                if end <= start {
                    self.errors.insert(end_name.to_string(), DATE_ORDER_MESSAGE.to_string());
                    valid = false;
                }
            }
        }

        valid
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_form() -> FormState {
        FormState::new(
            "create_schedule",
            vec![
                FieldSpec::required("plan_name", "Plan name", FieldKind::Text),
                FieldSpec::required("start_date", "Start date", FieldKind::Date),
                FieldSpec::required("end_date", "End date", FieldKind::Date),
                FieldSpec::optional("daily_hours", "Daily hours", FieldKind::Number),
            ],
        )
    }

    #[test]
    fn required_blank_field_fails_with_one_message() {
        let mut form = plan_form();
        form.set_value("start_date", "2026-09-01");
        form.set_value("end_date", "2026-09-20");

        assert!(!form.validate());
        assert_eq!(form.error("plan_name"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error("start_date"), None);

        // Whitespace-only still counts as blank.
        form.set_value("plan_name", "   ");
        assert!(!form.validate());
        assert_eq!(form.error("plan_name"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn filling_the_field_clears_the_message() {
        let mut form = plan_form();
        form.set_value("start_date", "2026-09-01");
        form.set_value("end_date", "2026-09-20");

        assert!(!form.validate());
        form.set_value("plan_name", "Finals prep");
        assert!(form.validate());
        assert_eq!(form.error("plan_name"), None);
    }

    #[test]
    fn end_before_or_equal_start_marks_the_end_field() {
        let pairs = [
            ("2026-09-10", "2026-09-10"),
            ("2026-09-10", "2026-09-09"),
            ("2026-09-10", "2026-01-01"),
        ];

        for (start, end) in pairs {
            let mut form = plan_form();
            form.set_value("plan_name", "Plan");
            form.set_value("start_date", start);
            form.set_value("end_date", end);

            assert!(!form.validate(), "{start}..{end} should fail");
            assert_eq!(form.error("end_date"), Some(DATE_ORDER_MESSAGE));
            assert_eq!(form.error("start_date"), None);
        }
    }

    #[test]
    fn malformed_dates_fail_with_a_format_message() {
        let mut form = plan_form();
        form.set_value("plan_name", "Plan");
        form.set_value("start_date", "9/1/2026");
        form.set_value("end_date", "2026-09-20");

        assert!(!form.validate());
        assert_eq!(form.error("start_date"), Some(DATE_FORMAT_MESSAGE));
        assert_eq!(form.error("end_date"), None);

        // A well-formed value clears the message and restores the range check.
        form.set_value("start_date", "2026-10-01");
        assert!(!form.validate());
        assert_eq!(form.error("start_date"), None);
        assert_eq!(form.error("end_date"), Some(DATE_ORDER_MESSAGE));
    }

    #[test]
    fn valid_date_range_passes() {
        let mut form = plan_form();
        form.set_value("plan_name", "Plan");
        form.set_value("start_date", "2026-09-01");
        form.set_value("end_date", "2026-09-02");

        assert!(form.validate());
        assert_eq!(form.error("end_date"), None);
    }

    #[test]
    fn prefill_only_touches_blank_fields() {
        let mut form = plan_form();
        form.set_value("plan_name", "Typed already");

        let mut record = BTreeMap::new();
        record.insert("plan_name".to_string(), "Restored".to_string());
        record.insert("start_date".to_string(), "2026-09-01".to_string());
        form.prefill_missing(&record);

        assert_eq!(form.value("plan_name"), "Typed already");
        assert_eq!(form.value("start_date"), "2026-09-01");
    }

    #[test]
    fn autosave_due_after_quiet_period() {
        let mut form = plan_form();
        let edited = Instant::now();

        assert!(!form.autosave_due(edited));
        form.mark_edited(edited);
        assert!(!form.autosave_due(edited));
        assert!(form.autosave_due(edited + DEBOUNCE));

        form.clear_dirty();
        assert!(!form.autosave_due(edited + DEBOUNCE));
    }
}
