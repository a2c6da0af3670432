use eframe::egui;

use crate::{
    core::models::ProgressChart,
    gui::theme::Theme,
};

const CHART_HEIGHT: f32 = 180.0;
const BAR_GAP: f32 = 4.0;
const LABEL_BAND: f32 = 18.0;

/// Grouped bar chart of completed vs total chapters per subject, fed by one
/// fetch of `/api/progress-chart`. A failed fetch leaves a placeholder; the
/// chart never retries on its own.
pub struct ChartPanel {
    data: Option<ProgressChart>,
    failed: bool,
    loading: bool,
}

impl ChartPanel {
    pub fn new() -> Self {
        Self { data: None, failed: false, loading: false }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.failed = false;
    }

    pub fn set_data(&mut self, chart: ProgressChart) {
        self.data = Some(chart);
        self.failed = false;
        self.loading = false;
    }

    pub fn set_failed(&mut self) {
        self.failed = true;
        self.loading = false;
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: &Theme) {
        ui.label(theme.heading("Progress by Subject"));
        ui.add_space(4.0);

        if self.failed {
            ui.colored_label(theme.error(), "Couldn't load chart data.");
            return;
        }

        if self.loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.weak("Loading chart...");
            });
            return;
        }

        let Some(chart) = &self.data else {
            ui.weak("No chart data.");
            return;
        };

        if chart.by_subject.is_empty() {
            ui.weak("No subjects yet.");
            return;
        }

        self.legend(ui, theme);
        ui.add_space(6.0);
        self.draw_bars(ui, theme, chart);
    }

    fn legend(&self, ui: &mut egui::Ui, theme: &Theme) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("■").color(theme.bar_completed()));
            ui.weak("Completed");
            ui.add_space(10.0);
            ui.label(egui::RichText::new("■").color(theme.bar_total()));
            ui.weak("Total chapters");
        });
    }

    fn draw_bars(&self, ui: &mut egui::Ui, theme: &Theme, chart: &ProgressChart) {
        let width = ui.available_width();
        let (rect, _) = ui
            .allocate_exact_size(egui::Vec2::new(width, CHART_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let max_total = chart.by_subject.iter().map(|s| s.total).max().unwrap_or(0).max(1) as f32;
        let plot_bottom = rect.bottom() - LABEL_BAND;
        let plot_height = rect.height() - 2.0 * LABEL_BAND;
        let group_width = rect.width() / chart.by_subject.len() as f32;
        let bar_width = (group_width * 0.3).min(28.0);

        for (index, subject) in chart.by_subject.iter().enumerate() {
            let center_x = rect.left() + group_width * (index as f32 + 0.5);

            let pairs = [
                (subject.completed, theme.bar_completed(), center_x - bar_width / 2.0 - BAR_GAP / 2.0),
                (subject.total, theme.bar_total(), center_x + bar_width / 2.0 + BAR_GAP / 2.0),
            ];

            for (value, color, bar_center) in pairs {
                let height = plot_height * value as f32 / max_total;
                let bar = egui::Rect::from_min_max(
                    egui::Pos2::new(bar_center - bar_width / 2.0, plot_bottom - height),
                    egui::Pos2::new(bar_center + bar_width / 2.0, plot_bottom),
                );
                painter.rect_filled(bar, 2.0, color);
                painter.text(
                    egui::Pos2::new(bar_center, bar.top() - 2.0),
                    egui::Align2::CENTER_BOTTOM,
                    value.to_string(),
                    egui::FontId::proportional(11.0),
                    theme.muted(),
                );
            }

            let name = match subject.rate {
                Some(rate) => format!("{} ({:.0}%)", subject.name, rate),
                None => subject.name.clone(),
            };
            painter.text(
                egui::Pos2::new(center_x, rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                name,
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
        }
    }
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new()
    }
}
