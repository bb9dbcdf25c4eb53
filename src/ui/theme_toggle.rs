//! Button flipping between light and dark mode

use eframe::egui;

use crate::core::theme::{Theme, ThemeProvider};

pub const MOON_ICON: &str = "\u{1F319}";
pub const SUN_ICON: &str = "\u{2600}";

pub struct ThemeToggle;

impl ThemeToggle {
    /// Icon for the mode the button switches to
    pub fn icon(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => MOON_ICON,
            Theme::Dark => SUN_ICON,
        }
    }

    pub fn hover_text(theme: Theme) -> String {
        format!("Switch to {} mode", theme.flipped().as_str())
    }

    /// Show the toggle. Returns true when it flipped the theme.
    pub fn show(ui: &mut egui::Ui, theme: &mut ThemeProvider) -> bool {
        let current = theme.theme();
        let palette = theme.palette();
        let button = egui::Button::new(
            egui::RichText::new(Self::icon(current))
                .size(18.0)
                .color(palette.toggle_foreground),
        )
        .fill(palette.toggle_background)
        .corner_radius(egui::CornerRadius::same(16));

        if ui.add(button).on_hover_text(Self::hover_text(current)).clicked() {
            theme.toggle_theme();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_shows_target_mode() {
        assert_eq!(ThemeToggle::icon(Theme::Light), MOON_ICON);
        assert_eq!(ThemeToggle::icon(Theme::Dark), SUN_ICON);
    }

    #[test]
    fn test_hover_text() {
        assert_eq!(ThemeToggle::hover_text(Theme::Light), "Switch to dark mode");
        assert_eq!(ThemeToggle::hover_text(Theme::Dark), "Switch to light mode");
    }

    #[test]
    fn test_icon_after_first_toggle_is_sun() {
        let mut provider = ThemeProvider::new(Theme::Light);
        provider.toggle_theme();
        assert_eq!(ThemeToggle::icon(provider.theme()), SUN_ICON);
        provider.toggle_theme();
        assert_eq!(provider.theme(), Theme::Light);
        assert_eq!(ThemeToggle::icon(provider.theme()), MOON_ICON);
    }
}
