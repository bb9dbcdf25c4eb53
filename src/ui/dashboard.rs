//! The home view: header plus the feature panel grid

use eframe::egui;

use super::theme_toggle::ThemeToggle;
use crate::core::document::{GateChange, LoadedDocument};
use crate::core::shell::{ShellLayout, ShellState, SlotKind};
use crate::core::theme::ThemeProvider;
use crate::features::{FeatureSlots, SlotEnv};

pub const TITLE: &str = "Google Docs + AI";
pub const TAGLINE: &str =
    "Load your Google Docs, edit them, add comments, and get AI assistance - all in one place.";

/// Seconds the dashboard takes to fade in
pub const FADE_IN_SECONDS: f64 = 0.5;

/// Opacity `elapsed` seconds into a fade of `duration` seconds
pub fn fade_in_opacity(elapsed: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0) as f32
}

/// Everything the dashboard needs for one frame
pub struct Dashboard<'a> {
    pub shell: &'a mut ShellState,
    pub slots: &'a mut FeatureSlots,
    pub env: &'a SlotEnv,
    pub theme: &'a mut ThemeProvider,
    pub layout: ShellLayout,
}

impl Dashboard<'_> {
    pub fn show(mut self, ui: &mut egui::Ui) {
        self.show_header(ui);
        ui.add_space(24.0);

        if self.layout.columns >= 2 {
            ui.columns(2, |columns| {
                self.show_left(&mut columns[0]);
                self.show_right(&mut columns[1]);
            });
        } else {
            self.show_left(ui);
            ui.add_space(16.0);
            self.show_right(ui);
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        let palette = self.theme.palette();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(28.0)
                        .strong()
                        .color(palette.text),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(TAGLINE).color(palette.muted_text));
            });
            if self.layout.compact {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ThemeToggle::show(ui, self.theme);
                });
            }
        });
    }

    /// Viewer first, then the panels gated on a loaded document
    fn show_left(&mut self, ui: &mut egui::Ui) {
        let mut loaded: Option<LoadedDocument> = None;
        self.slots
            .viewer
            .show(ui, &mut |doc| loaded = Some(doc));

        if let Some(doc) = loaded {
            if self.shell.handle_document_loaded(doc) == GateChange::Closed {
                self.slots.unmount_gated();
            }
        }

        for kind in self.shell.visible_slots() {
            if !kind.is_gated() {
                continue;
            }
            ui.add_space(16.0);
            let content = self.shell.doc_content();
            match kind {
                SlotKind::DocEditor => self.slots.editor.show(ui, content),
                SlotKind::Comments => self.slots.comments.show(ui),
                SlotKind::Flashcards => self.slots.flashcards.show(ui, content),
                SlotKind::DocViewer | SlotKind::Assistant => {}
            }
        }
    }

    fn show_right(&mut self, ui: &mut egui::Ui) {
        self.slots
            .assistant
            .show(ui, self.shell.doc_content(), self.env);
    }
}
