//! Light/dark theme state shared by every view

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

/// Display mode for the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Colors used by the shell for a given theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub sidebar_background: Color32,
    pub sidebar_text: Color32,
    pub sidebar_muted: Color32,
    pub sidebar_hover: Color32,
    pub brand_badge: Color32,
    pub toggle_background: Color32,
    pub toggle_foreground: Color32,
    pub card_background: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color32::from_rgb(243, 244, 246),
                text: Color32::from_rgb(31, 41, 55),
                muted_text: Color32::from_rgb(75, 85, 99),
                sidebar_background: Color32::from_rgb(55, 48, 163),
                sidebar_text: Color32::WHITE,
                sidebar_muted: Color32::from_rgb(165, 180, 252),
                sidebar_hover: Color32::from_rgb(67, 56, 202),
                brand_badge: Color32::from_white_alpha(51),
                toggle_background: Color32::from_rgb(224, 231, 255),
                toggle_foreground: Color32::from_rgb(79, 70, 229),
                card_background: Color32::WHITE,
            },
            Theme::Dark => Self {
                background: Color32::from_rgb(17, 24, 39),
                text: Color32::WHITE,
                muted_text: Color32::from_rgb(209, 213, 219),
                sidebar_background: Color32::from_rgb(31, 41, 55),
                sidebar_text: Color32::WHITE,
                sidebar_muted: Color32::from_rgb(156, 163, 175),
                sidebar_hover: Color32::from_rgb(55, 65, 81),
                brand_badge: Color32::from_rgb(55, 65, 81),
                toggle_background: Color32::from_rgb(55, 65, 81),
                toggle_foreground: Color32::from_rgb(253, 224, 71),
                card_background: Color32::from_rgb(31, 41, 55),
            },
        }
    }
}

/// Owner of the current theme.
///
/// Created once by the application root and lent to every view that needs to
/// read or flip the theme. There is no global accessor.
#[derive(Debug)]
pub struct ThemeProvider {
    theme: Theme,
    /// Set whenever the theme changes until the visuals are re-applied
    dirty: bool,
}

impl ThemeProvider {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: initial,
            dirty: true,
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Palette of the current theme
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.dirty = true;
        tracing::info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }

    /// Push the theme into egui visuals if it changed since the last call
    pub fn apply(&mut self, ctx: &egui::Context) {
        if !self.dirty {
            return;
        }
        let mut visuals = if self.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let palette = self.palette();
        visuals.panel_fill = palette.background;
        visuals.window_fill = palette.card_background;
        ctx.set_theme(if self.theme.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_visuals(visuals);
        self.dirty = false;
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
