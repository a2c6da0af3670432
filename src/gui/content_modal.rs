use eframe::egui;

use crate::core::models::Chapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Summary,
    Wikipedia,
}

impl ContentKind {
    fn heading(&self) -> &'static str {
        match self {
            ContentKind::Summary => "Study Summary",
            ContentKind::Wikipedia => "Wikipedia Content",
        }
    }

    fn empty_notice(&self) -> &'static str {
        match self {
            ContentKind::Summary => "No summary available yet. Fetch content first.",
            ContentKind::Wikipedia => "No Wikipedia content available yet. Fetch content first.",
        }
    }
}

/// Read-only viewer for a chapter's stored summary or Wikipedia text.
pub struct ContentModal {
    open: bool,
    kind: ContentKind,
    title: String,
    body: Option<String>,
}

impl ContentModal {
    pub fn new() -> Self {
        Self { open: false, kind: ContentKind::Summary, title: String::new(), body: None }
    }

    pub fn open_for(&mut self, chapter: &Chapter, kind: ContentKind) {
        self.kind = kind;
        self.title = chapter.title.clone();
        self.body = match kind {
            ContentKind::Summary => chapter.summary.clone(),
            ContentKind::Wikipedia => chapter.wikipedia_content.clone(),
        }
        .filter(|text| !text.trim().is_empty());
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("chapter_content_modal")).show(ctx, |ui| {
            ui.set_width(520.0);

            ui.heading(&self.title);
            ui.weak(self.kind.heading());
            ui.add_space(10.0);

            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                match &self.body {
                    Some(text) => {
                        ui.label(text);
                    }
                    None => {
                        ui.label(egui::RichText::new(self.kind.empty_notice()).italics());
                    }
                }
            });

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for ContentModal {
    fn default() -> Self {
        Self::new()
    }
}
