//! View for paths without a page

use eframe::egui;

use crate::core::theme::Palette;

pub struct NotFoundView;

impl NotFoundView {
    /// Show the 404 page. Returns true when "Back to Home" was clicked.
    pub fn show(ui: &mut egui::Ui, path: &str, palette: &Palette) -> bool {
        let mut home = false;
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new("404").size(48.0).strong().color(palette.text));
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("There is no page at {path}"))
                    .color(palette.muted_text),
            );
            ui.add_space(24.0);
            if ui.button("Back to Home").clicked() {
                home = true;
            }
        });
        home
    }
}
