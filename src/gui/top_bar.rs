use eframe::egui;

use crate::gui::settings::SettingsData;

pub enum TopBarAction {
    Reload,
    ApplyServer,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings: &mut SettingsData,
        loading: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Studydesk");
                ui.separator();

                if ui.button("⟳ Reload").clicked() {
                    action = Some(TopBarAction::Reload);
                }

                if loading {
                    ui.add(egui::Spinner::new().size(14.0));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Apply").clicked() {
                        action = Some(TopBarAction::ApplyServer);
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut settings.base_url)
                            .desired_width(220.0),
                    );
                    ui.weak("Server:");
                    ui.separator();
                    ui.weak("Ctrl+S saves form drafts");
                });
            });
        });

        action
    }
}
