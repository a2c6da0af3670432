use eframe::egui;

use crate::{
    core::{
        models::{
            SessionStatus,
            StudySession,
        },
        stats,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
        time_display::TimeDisplay,
    },
};

/// Upcoming-session cards: schedule details, relative time, date badges and
/// the lifecycle buttons. Buttons declare their action by name + entity id
/// and go through the central parse/dispatch path.
pub fn session_cards(
    ui: &mut egui::Ui,
    sessions: &[StudySession],
    time: &TimeDisplay,
    queue: &mut ActionQueue,
    theme: &Theme,
) {
    if sessions.is_empty() {
        ui.weak("No upcoming sessions. Create a study plan to get started.");
        return;
    }

    for session in sessions {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                // Drag handle for the planned reorder feature; dropping a
                // card currently only reports the stub.
                let handle = ui.add(egui::Label::new("⠿").sense(egui::Sense::drag()));
                if handle.drag_stopped() {
                    queue.push(UiAction::ReorderSessions);
                }

                ui.strong(&session.chapter_title);
                ui.weak(&session.subject_name);

                if let Some(badge) = time.badge(&session.id) {
                    ui.label(
                        egui::RichText::new(badge.text())
                            .small()
                            .color(egui::Color32::BLACK)
                            .background_color(theme.badge_color(badge)),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        theme.status_color(session.status),
                        session.status.label(),
                    );
                });
            });

            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} {} · {}",
                    session.scheduled_date,
                    session.start_time,
                    stats::format_duration(session.duration_hours)
                ));

                if let Some(label) = time.label(&session.id) {
                    ui.weak(label);
                }

                if !session.difficulty.is_empty() {
                    ui.weak(&session.difficulty);
                }
            });

            if matches!(session.status, SessionStatus::Scheduled | SessionStatus::Rescheduled) {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Complete").clicked() {
                        queue.push_named("complete-session", &session.id);
                    }
                    if ui.button("Miss").clicked() {
                        queue.push_named("miss-session", &session.id);
                    }
                    if ui.button("Reschedule").clicked() {
                        queue.push_named("reschedule-session", &session.id);
                    }
                });
            }
        });

        ui.add_space(6.0);
    }
}
