use std::collections::{
    BTreeMap,
    HashSet,
};

use chrono::{
    NaiveDate,
    Utc,
};
use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        models::{
            Chapter,
            Subject,
        },
        stats,
    },
    gui::{
        actions::ActionQueue,
        theme::Theme,
        time_display::TimeDisplay,
    },
};

/// Per-subject progress bars (animated on first reveal) with exam
/// countdowns, followed by the chapter table with its content actions.
pub fn chapter_section(
    ui: &mut egui::Ui,
    chapters: &[Chapter],
    subjects: &[Subject],
    fetching: &HashSet<i64>,
    time: &mut TimeDisplay,
    queue: &mut ActionQueue,
    theme: &Theme,
) {
    subject_progress(ui, chapters, subjects, time, queue, theme);

    ui.add_space(10.0);
    ui.label(theme.heading("Chapters"));
    ui.add_space(4.0);

    if chapters.is_empty() {
        ui.weak("No chapters yet. Add subjects first.");
        return;
    }

    chapter_table(ui, chapters, fetching, queue, theme);
}

fn subject_progress(
    ui: &mut egui::Ui,
    chapters: &[Chapter],
    subjects: &[Subject],
    time: &mut TimeDisplay,
    queue: &mut ActionQueue,
    theme: &Theme,
) {
    ui.label(theme.heading("Subjects"));
    ui.add_space(4.0);

    if subjects.is_empty() {
        ui.weak("No subjects yet.");
        return;
    }

    let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for chapter in chapters {
        let entry = counts.entry(chapter.subject_name.as_str()).or_default();
        entry.1 += 1;
        if chapter.is_completed {
            entry.0 += 1;
        }
    }

    let now_ms = Utc::now().timestamp_millis();

    for subject in subjects {
        let (completed, total) =
            counts.get(subject.name.as_str()).copied().unwrap_or((0, 0));
        let percent = stats::calculate_study_progress(completed, total);

        ui.horizontal(|ui| {
            ui.strong(&subject.name);
            if let Some(deadline) = exam_deadline_ms(&subject.exam_date) {
                ui.weak(stats::get_time_until_deadline(deadline, now_ms));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Toggle").clicked() {
                    queue.push_named("toggle-subject", &subject.id);
                }
            });
        });

        let id = egui::Id::new(("subject_progress", subject.name.as_str()));
        let fraction = time.reveal_fraction(ui.ctx(), id, percent as f32 / 100.0);
        ui.add(egui::ProgressBar::new(fraction).text(format!("{}%", percent)));
        ui.add_space(6.0);
    }
}

fn chapter_table(
    ui: &mut egui::Ui,
    chapters: &[Chapter],
    fetching: &HashSet<i64>,
    queue: &mut ActionQueue,
    theme: &Theme,
) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size.max(26.0);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(240.0))
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading("Title"));
            });
            header.col(|ui| {
                ui.label(theme.heading("Subject"));
            });
            header.col(|ui| {
                ui.label(theme.heading("Hours"));
            });
            header.col(|ui| {
                ui.label(theme.heading("Done"));
            });
            header.col(|ui| {
                ui.label(theme.heading("Content"));
            });
        })
        .body(|mut body| {
            body.rows(text_height, chapters.len(), |mut row| {
                let chapter = &chapters[row.index()];
                let id = chapter.id.to_string();

                row.col(|ui| {
                    ui.label(&chapter.title);
                });
                row.col(|ui| {
                    ui.weak(&chapter.subject_name);
                });
                row.col(|ui| {
                    ui.label(stats::format_duration(chapter.estimated_hours));
                });
                row.col(|ui| {
                    if chapter.is_completed {
                        ui.colored_label(theme.success(), "✔");
                    } else {
                        ui.weak("—");
                    }
                });
                row.col(|ui| {
                    let in_flight = fetching.contains(&chapter.id);
                    let fetch_label = if in_flight { "Fetching…" } else { "Fetch Content" };

                    if ui.add_enabled(!in_flight, egui::Button::new(fetch_label)).clicked() {
                        queue.push_named("fetch-content", &id);
                    }
                    if in_flight {
                        ui.add(egui::Spinner::new().size(12.0));
                    }

                    if ui
                        .add_enabled(
                            chapter.summary.is_some(),
                            egui::Button::new("Summary"),
                        )
                        .clicked()
                    {
                        queue.push_named("view-summary", &id);
                    }
                    if ui
                        .add_enabled(
                            chapter.wikipedia_content.is_some(),
                            egui::Button::new("Wikipedia"),
                        )
                        .clicked()
                    {
                        queue.push_named("view-wikipedia", &id);
                    }
                });
            });
        });
}

fn exam_deadline_ms(exam_date: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(exam_date, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}
