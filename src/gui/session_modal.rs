use eframe::egui;

use crate::core::{
    models::SessionActionKind,
    StudydeskError,
};

/// What the user confirmed: posted as form fields to the embedded target.
/// The session id lives inside `target` only.
#[derive(Debug, Clone)]
pub struct SessionSubmission {
    pub kind: SessionActionKind,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

/// Confirmation dialog for the complete/miss transitions. The submit target
/// is rewritten to embed the session id before the dialog opens; the server
/// owns the actual state change.
pub struct SessionActionModal {
    open: bool,
    kind: SessionActionKind,
    target: String,
    input: String,
}

impl SessionActionModal {
    pub fn new() -> Self {
        Self {
            open: false,
            kind: SessionActionKind::Complete,
            target: String::new(),
            input: String::new(),
        }
    }

    /// Arms the dialog for one session. A blank id aborts before any state
    /// is touched.
    pub fn begin(
        &mut self,
        kind: SessionActionKind,
        session_id: &str,
    ) -> Result<(), StudydeskError> {
        if session_id.trim().is_empty() {
            return Err(StudydeskError::MissingSessionId);
        }

        self.kind = kind;
        self.target = kind.endpoint(session_id);
        self.input.clear();
        self.open = true;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SessionSubmission> {
        if !self.open {
            return None;
        }

        let mut submission = None;

        let modal = egui::Modal::new(egui::Id::new("session_action_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.heading(self.kind.title());
            ui.add_space(10.0);
            ui.label(self.kind.prompt());

            ui.add_space(8.0);
            ui.label(self.kind.field_label());
            ui.add(
                egui::TextEdit::multiline(&mut self.input)
                    .desired_width(f32::INFINITY)
                    .desired_rows(3),
            );

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.kind.confirm_text()).clicked() {
                        submission = Some(SessionSubmission {
                            kind: self.kind,
                            target: self.target.clone(),
                            fields: vec![(
                                self.kind.field_name().to_string(),
                                self.input.trim().to_string(),
                            )],
                        });
                        ui.close();
                    }

                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        submission
    }
}

impl Default for SessionActionModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_never_open_the_dialog() {
        let mut modal = SessionActionModal::new();

        assert!(modal.begin(SessionActionKind::Complete, "").is_err());
        assert!(!modal.is_open());
        assert_eq!(modal.target(), "");

        assert!(modal.begin(SessionActionKind::Miss, "   ").is_err());
        assert!(!modal.is_open());
    }

    #[test]
    fn begin_rewrites_the_submit_target() {
        let mut modal = SessionActionModal::new();

        modal.begin(SessionActionKind::Complete, "31").unwrap();
        assert!(modal.is_open());
        assert_eq!(modal.target(), "/complete-session/31");

        // A second click re-targets the same dialog instance.
        modal.begin(SessionActionKind::Miss, "8").unwrap();
        assert_eq!(modal.target(), "/miss-session/8");
    }
}
