//! Document editor panel

use eframe::egui;

use super::api::{DocEditor, Feature};
use crate::ui::card;

/// Plain-text editor seeded from the loaded document
#[derive(Debug, Default)]
pub struct DocEditorPanel {
    /// Snapshot the buffer was seeded from
    seeded_from: Option<String>,
    buffer: String,
    modified: bool,
}

impl DocEditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed the buffer when a different snapshot arrives
    fn sync(&mut self, initial_content: &str) {
        if self.seeded_from.as_deref() != Some(initial_content) {
            self.seeded_from = Some(initial_content.to_string());
            self.buffer = initial_content.to_string();
            self.modified = false;
        }
    }

    fn word_count(&self) -> usize {
        self.buffer.split_whitespace().count()
    }
}

impl Feature for DocEditorPanel {
    fn name(&self) -> &str {
        "DocEditor"
    }

    fn on_unmount(&mut self) {
        *self = Self::default();
    }
}

impl DocEditor for DocEditorPanel {
    fn show(&mut self, ui: &mut egui::Ui, initial_content: &str) {
        self.sync(initial_content);

        card(ui, "Editor", |ui| {
            egui::ScrollArea::vertical()
                .id_salt("doc_editor_scroll")
                .max_height(360.0)
                .show(ui, |ui| {
                    let response = egui::TextEdit::multiline(&mut self.buffer)
                        .desired_width(f32::INFINITY)
                        .desired_rows(12)
                        .show(ui);

                    if response.response.changed() {
                        self.modified = true;
                    }
                });

            ui.horizontal(|ui| {
                ui.weak(format!("{} words", self.word_count()));
                if self.modified {
                    ui.weak("\u{2022} edited");
                    if ui.small_button("Revert").clicked() {
                        if let Some(ref original) = self.seeded_from {
                            self.buffer = original.clone();
                        }
                        self.modified = false;
                    }
                }
            });
        });
    }
}
