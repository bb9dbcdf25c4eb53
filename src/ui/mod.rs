//! UI components for DocsGPT

pub mod dashboard;
pub mod not_found;
pub mod sidebar;
pub mod theme_toggle;

use eframe::egui;

/// Titled panel frame shared by the feature panels
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().window_fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}
