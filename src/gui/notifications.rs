use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);
const STACK_WIDTH: f32 = 320.0;
const STACK_SPACING: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Unrecognized values fall back to `Info`.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity, created: Instant::now() }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= DISMISS_AFTER
    }
}

/// Transient status banners, stacked top-right, auto-dismissed after five
/// seconds or on click. No de-duplication and no queue limit.
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.items.push(Notification::new(message, severity));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|item| !item.expired(now));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.prune(Instant::now());

        if self.items.is_empty() {
            return;
        }

        let mut dismissed = None;

        egui::Area::new(egui::Id::new("notification_stack"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-12.0, 12.0))
            .show(ctx, |ui| {
                ui.set_max_width(STACK_WIDTH);

                // Newest banner on top.
                for (index, item) in self.items.iter().enumerate().rev() {
                    let color = theme.severity_color(item.severity);

                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.5, color))
                        .show(ui, |ui| {
                            ui.set_width(STACK_WIDTH);
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(item.severity.icon())
                                        .size(16.0)
                                        .color(color),
                                );
                                ui.add(
                                    egui::Label::new(&item.message)
                                        .wrap(),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("✖").clicked() {
                                            dismissed = Some(index);
                                        }
                                    },
                                );
                            });
                        });

                    ui.add_space(STACK_SPACING);
                }
            });

        if let Some(index) = dismissed {
            self.items.remove(index);
        }

        // Keep repainting so banners disappear without further input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_falls_back_to_info() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("fatal"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn banners_expire_after_the_dismiss_window() {
        let item = Notification::new("saved", Severity::Success);
        let now = Instant::now();

        assert!(!item.expired(now));
        assert!(item.expired(now + DISMISS_AFTER));
        assert!(item.expired(now + Duration::from_secs(6)));
    }

    #[test]
    fn prune_drops_only_expired_banners() {
        let mut center = NotificationCenter::new();
        center.error("boom");
        center.info("hello");
        assert_eq!(center.len(), 2);

        center.prune(Instant::now());
        assert_eq!(center.len(), 2);

        center.prune(Instant::now() + Duration::from_secs(6));
        assert!(center.is_empty());
    }
}
