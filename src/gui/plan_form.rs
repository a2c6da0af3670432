use std::time::Instant;

use eframe::egui;

use crate::gui::{
    forms::{
        FieldKind,
        FieldSpec,
        FormState,
    },
    theme::Theme,
};

/// The create-schedule form: validated on submit, auto-saved while typing.
pub struct PlanForm {
    pub form: FormState,
}

impl PlanForm {
    pub fn new() -> Self {
        let form = FormState::new(
            "create_schedule",
            vec![
                FieldSpec::required("plan_name", "Plan name", FieldKind::Text),
                FieldSpec::required("start_date", "Start date", FieldKind::Date),
                FieldSpec::required("end_date", "End date", FieldKind::Date),
                FieldSpec::optional("daily_hours", "Daily study hours", FieldKind::Number),
            ],
        );

        Self { form }
    }

    /// Returns the field values when the form was submitted and passed
    /// validation; an invalid submit never reaches the network.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<Vec<(String, String)>> {
        let mut submitted = None;

        for index in 0..self.form.fields.len() {
            let spec = self.form.fields[index].clone();

            ui.label(spec.label);
            let response = ui.add(
                egui::TextEdit::singleline(self.form.value_entry(spec.name))
                    .hint_text(match spec.kind {
                        FieldKind::Date => "YYYY-MM-DD",
                        FieldKind::Number => "e.g. 6",
                        FieldKind::Text => "",
                    })
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.form.mark_edited(Instant::now());
            }

            if let Some(message) = self.form.error(spec.name) {
                ui.colored_label(theme.error(), message);
            }
            ui.add_space(4.0);
        }

        ui.add_space(6.0);
        if ui.button("Create Schedule").clicked() && self.form.validate() {
            submitted = Some(
                self.form
                    .values()
                    .iter()
                    .map(|(name, value)| (name.clone(), value.trim().to_string()))
                    .collect(),
            );
        }

        submitted
    }
}

impl Default for PlanForm {
    fn default() -> Self {
        Self::new()
    }
}
