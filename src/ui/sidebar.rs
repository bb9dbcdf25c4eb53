//! Sidebar with branding, theme toggle and navigation

use chrono::Datelike;
use eframe::egui;

use super::theme_toggle::ThemeToggle;
use crate::core::route::Route;
use crate::core::theme::ThemeProvider;

pub const APP_NAME: &str = "DocsGPT";
pub const MENU_ICON: &str = "\u{2630}";
pub const CLOSE_ICON: &str = "\u{2715}";

/// Navigation entries: label, icon, path
pub const NAV_LINKS: &[(&str, &str, &str)] = &[("Home", "\u{1F3E0}", Route::HOME_PATH)];

/// Year shown in the footer, in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Sidebar
pub struct Sidebar;

impl Sidebar {
    /// Show the sidebar contents. Returns the path of a clicked navigation link.
    pub fn show(ui: &mut egui::Ui, theme: &mut ThemeProvider) -> Option<&'static str> {
        let palette = theme.palette();
        let mut clicked = None;

        ui.visuals_mut().override_text_color = Some(palette.sidebar_text);

        ui.vertical(|ui| {
            // Brand
            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(palette.brand_badge)
                    .corner_radius(egui::CornerRadius::same(20))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("\u{1F4C4}").size(18.0));
                    });
                ui.label(egui::RichText::new(APP_NAME).size(20.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ThemeToggle::show(ui, theme);
                });
            });

            ui.add_space(32.0);

            // Navigation
            ui.visuals_mut().widgets.hovered.weak_bg_fill = palette.sidebar_hover;
            for (label, icon, path) in NAV_LINKS {
                let text = egui::RichText::new(format!("{icon}  {label}")).size(15.0);
                let link = egui::Button::new(text)
                    .frame(false)
                    .min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add(link).clicked() {
                    clicked = Some(*path);
                }
            }

            // Footer pinned to the bottom
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                let muted = |text: String| egui::RichText::new(text).size(12.0).color(palette.sidebar_muted);
                ui.label(muted(format!("Version {}", env!("CARGO_PKG_VERSION"))));
                ui.label(muted(format!("\u{00A9} {} {}", current_year(), APP_NAME)));
            });
        });

        clicked
    }
}
