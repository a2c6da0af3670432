use eframe::egui::{
    self,
    RichText,
};
use egui::{
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::{
    core::models::SessionStatus,
    gui::{
        notifications::Severity,
        time_display::DateBadge,
    },
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::nord()
    }
}

impl Theme {
    pub fn nord() -> Self {
        Theme { dark: Palette::nord_dark(), light: Palette::nord_light() }
    }

    fn palette(&self) -> &Palette {
        // The shipped default is the dark variant; the light palette is
        // registered with egui for users who switch their preference.
        &self.dark
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.palette().cyan).strong()
    }

    pub fn accent(&self) -> Color32 {
        self.palette().cyan
    }

    pub fn muted(&self) -> Color32 {
        self.palette().muted
    }

    pub fn success(&self) -> Color32 {
        self.palette().green
    }

    pub fn warning(&self) -> Color32 {
        self.palette().orange
    }

    pub fn error(&self) -> Color32 {
        self.palette().red
    }

    pub fn severity_color(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Info => self.palette().cyan,
            Severity::Success => self.palette().green,
            Severity::Warning => self.palette().orange,
            Severity::Error => self.palette().red,
        }
    }

    pub fn status_color(&self, status: SessionStatus) -> Color32 {
        match status {
            SessionStatus::Scheduled => self.palette().cyan,
            SessionStatus::Completed => self.palette().green,
            SessionStatus::Missed => self.palette().red,
            SessionStatus::Rescheduled => self.palette().yellow,
        }
    }

    pub fn badge_color(&self, badge: DateBadge) -> Color32 {
        match badge {
            DateBadge::Today => self.palette().orange,
            DateBadge::Overdue => self.palette().red,
        }
    }

    pub fn bar_completed(&self) -> Color32 {
        self.palette().green
    }

    pub fn bar_total(&self) -> Color32 {
        self.palette().selection
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    muted: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    cyan: Color32,
    surface: Color32,
    surface_raised: Color32,
}

impl Palette {
    fn nord_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x2e, 0x34, 0x40),
            foreground: Color32::from_rgb(0xd8, 0xde, 0xe9),
            selection: Color32::from_rgb(0x4c, 0x56, 0x6a),
            muted: Color32::from_rgb(0x61, 0x6e, 0x88),
            red: Color32::from_rgb(0xbf, 0x61, 0x6a),
            orange: Color32::from_rgb(0xd0, 0x87, 0x70),
            yellow: Color32::from_rgb(0xeb, 0xcb, 0x8b),
            green: Color32::from_rgb(0xa3, 0xbe, 0x8c),
            cyan: Color32::from_rgb(0x88, 0xc0, 0xd0),
            surface: Color32::from_rgb(0x3b, 0x42, 0x52),
            surface_raised: Color32::from_rgb(0x43, 0x4c, 0x5e),
        }
    }

    fn nord_light() -> Self {
        Self {
            background: Color32::from_rgb(0xec, 0xef, 0xf4),
            foreground: Color32::from_rgb(0x2e, 0x34, 0x40),
            selection: Color32::from_rgb(0xc2, 0xc9, 0xd6),
            muted: Color32::from_rgb(0x7b, 0x88, 0xa1),
            red: Color32::from_rgb(0xb7, 0x4e, 0x58),
            orange: Color32::from_rgb(0xc5, 0x72, 0x48),
            yellow: Color32::from_rgb(0xc9, 0xa4, 0x4e),
            green: Color32::from_rgb(0x7d, 0x9c, 0x68),
            cyan: Color32::from_rgb(0x4e, 0x8f, 0xa2),
            surface: Color32::from_rgb(0xe5, 0xe9, 0xf0),
            surface_raised: Color32::from_rgb(0xd8, 0xde, 0xe9),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.background,
                    weak_bg_fill: palette.surface,
                    bg_stroke: Stroke {
                        color: palette.surface_raised,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.surface,
                    weak_bg_fill: palette.surface,
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.surface_raised,
                    bg_stroke: Stroke { color: palette.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.selection,
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.cyan, ..default.selection.stroke },
            },
            window_fill: palette.surface,
            panel_fill: palette.background,
            extreme_bg_color: palette.surface,
            hyperlink_color: palette.cyan,
            ..default
        },
    );
}
