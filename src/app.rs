//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::{AppConfig, PublicEnv};
use crate::core::route::{Route, Router};
use crate::core::shell::{ShellState, SidebarMode};
use crate::core::theme::ThemeProvider;
use crate::features::{FeatureSlots, SlotEnv};
use crate::ui::dashboard::{fade_in_opacity, Dashboard, FADE_IN_SECONDS};
use crate::ui::not_found::NotFoundView;
use crate::ui::sidebar::{Sidebar, CLOSE_ICON, MENU_ICON};

/// Seconds the off-canvas sidebar takes to slide
const SIDEBAR_SLIDE_SECONDS: f32 = 0.3;

/// Main application state
pub struct DocsApp {
    /// Application configuration
    pub config: AppConfig,
    /// Theme shared with every view
    pub theme: ThemeProvider,
    /// Current route
    pub router: Router,
    /// Loaded document and sidebar state
    pub shell: ShellState,
    /// Feature panels
    pub slots: FeatureSlots,
    /// Runtime surface visible to panels
    pub env: SlotEnv,
    /// Whether theme changes are written to the config file
    persist_config: bool,
    /// Time the current route was entered, for the fade-in
    route_entered_at: Option<f64>,
}

impl DocsApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, start_path: &str) -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let mut app = Self::with_slots(
            config,
            FeatureSlots::default(),
            PublicEnv::from_process(),
            start_path,
        );
        app.persist_config = true;
        app
    }

    /// Create an application with the given panels. Nothing is persisted.
    pub fn with_slots(
        config: AppConfig,
        slots: FeatureSlots,
        public_env: PublicEnv,
        start_path: &str,
    ) -> Self {
        tracing::info!("Theme: {}", config.ui.theme.as_str());
        if public_env.is_empty() {
            tracing::debug!("No public environment variables set");
        } else {
            tracing::info!("{} public environment variables", public_env.len());
        }
        Self {
            theme: ThemeProvider::new(config.ui.theme),
            router: Router::new(start_path),
            shell: ShellState::new(),
            slots,
            env: SlotEnv::new(public_env, config.api.clone()),
            config,
            persist_config: false,
            route_entered_at: None,
        }
    }

    /// Follow a navigation link. Links always close the sidebar.
    pub fn navigate(&mut self, path: &str) {
        self.shell.close_sidebar();
        let before = self.router.current().clone();
        if *self.router.navigate(path) != before {
            self.route_entered_at = None;
        }
    }

    /// Flip the theme and remember it
    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
        self.persist_theme();
    }

    fn persist_theme(&mut self) {
        self.config.ui.theme = self.theme.theme();
        if self.persist_config {
            if let Err(e) = self.config.save() {
                tracing::error!("Failed to save config: {}", e);
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (toggle_sidebar, toggle_theme, go_back) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
                i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::D),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if toggle_sidebar {
            self.shell.toggle_sidebar();
        }
        if toggle_theme {
            self.toggle_theme();
        }
        if go_back && self.router.back() {
            self.shell.close_sidebar();
            self.route_entered_at = None;
        }
    }

    /// Render one frame
    pub fn render(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        let theme_before = self.theme.theme();
        self.theme.apply(ctx);

        let palette = self.theme.palette();
        let screen = ctx.screen_rect();
        let layout = self.shell.layout(screen.width());
        let mut navigate_to: Option<&str> = None;

        let sidebar_frame = egui::Frame::new()
            .fill(palette.sidebar_background)
            .inner_margin(egui::Margin::same(24));
        let sidebar_width = self.config.ui.sidebar_width;

        match layout.sidebar {
            SidebarMode::Docked => {
                egui::SidePanel::left("sidebar")
                    .resizable(false)
                    .exact_width(sidebar_width)
                    .frame(sidebar_frame)
                    .show(ctx, |ui| {
                        navigate_to = Sidebar::show(ui, &mut self.theme);
                    });
            }
            SidebarMode::OffCanvas { open } => {
                let shown = ctx.animate_bool_with_time(
                    egui::Id::new("sidebar_slide"),
                    open,
                    SIDEBAR_SLIDE_SECONDS,
                );
                if shown > 0.0 {
                    egui::Area::new(egui::Id::new("sidebar_overlay"))
                        .order(egui::Order::Foreground)
                        .fixed_pos(egui::pos2(-(1.0 - shown) * sidebar_width, 0.0))
                        .show(ctx, |ui| {
                            sidebar_frame.show(ui, |ui| {
                                ui.set_width(sidebar_width - 48.0);
                                ui.set_min_height(screen.height() - 48.0);
                                navigate_to = Sidebar::show(ui, &mut self.theme);
                            });
                        });
                }

                egui::Area::new(egui::Id::new("menu_button"))
                    .order(egui::Order::Tooltip)
                    .fixed_pos(egui::pos2(16.0, 16.0))
                    .show(ctx, |ui| {
                        let icon = if open { CLOSE_ICON } else { MENU_ICON };
                        let button = egui::Button::new(egui::RichText::new(icon).size(20.0))
                            .fill(palette.card_background);
                        if ui.add(button).clicked() {
                            self.shell.toggle_sidebar();
                        }
                    });
            }
        }

        let now = ctx.input(|i| i.time);
        let entered_at = *self.route_entered_at.get_or_insert(now);
        let opacity = fade_in_opacity(now - entered_at, FADE_IN_SECONDS);
        if opacity < 1.0 {
            ctx.request_repaint();
        }

        let margin = if layout.compact { 24 } else { 32 };
        let central_frame = egui::Frame::new()
            .fill(palette.background)
            .inner_margin(egui::Margin {
                top: if layout.compact { 64 } else { margin },
                ..egui::Margin::same(margin)
            });

        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .show(ui, |ui| {
                        ui.multiply_opacity(opacity);
                        match self.router.current().clone() {
                            Route::Home => {
                                Dashboard {
                                    shell: &mut self.shell,
                                    slots: &mut self.slots,
                                    env: &self.env,
                                    theme: &mut self.theme,
                                    layout,
                                }
                                .show(ui);
                            }
                            Route::NotFound(path) => {
                                if NotFoundView::show(ui, &path, &palette) {
                                    navigate_to = Some(Route::HOME_PATH);
                                }
                            }
                        }
                    });
            });

        if let Some(path) = navigate_to {
            self.navigate(path);
        }
        if self.theme.theme() != theme_before {
            self.theme.apply(ctx);
            ctx.request_repaint();
            self.persist_theme();
        }
    }
}

impl eframe::App for DocsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::core::document::LoadedDocument;
    use crate::core::theme::Theme;
    use crate::ui::theme_toggle::{ThemeToggle, SUN_ICON};
    use crate::features::{AIAssistant, CommentingSystem, DocEditor, DocViewer, Feature, FlashcardStudy};

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeViewer {
        log: Log,
        pending: Rc<RefCell<Option<LoadedDocument>>>,
    }

    impl Feature for FakeViewer {
        fn name(&self) -> &str {
            "FakeViewer"
        }
    }

    impl DocViewer for FakeViewer {
        fn show(&mut self, _ui: &mut egui::Ui, on_loaded: &mut dyn FnMut(LoadedDocument)) {
            self.log.borrow_mut().push("viewer".to_string());
            if let Some(doc) = self.pending.borrow_mut().take() {
                on_loaded(doc);
            }
        }
    }

    struct FakeEditor(Log);

    impl Feature for FakeEditor {
        fn name(&self) -> &str {
            "FakeEditor"
        }
    }

    impl DocEditor for FakeEditor {
        fn show(&mut self, _ui: &mut egui::Ui, initial_content: &str) {
            self.0.borrow_mut().push(format!("editor:{initial_content}"));
        }
    }

    struct FakeComments(Log, Rc<Cell<usize>>);

    impl Feature for FakeComments {
        fn name(&self) -> &str {
            "FakeComments"
        }

        fn on_unmount(&mut self) {
            self.1.set(self.1.get() + 1);
        }
    }

    impl CommentingSystem for FakeComments {
        fn show(&mut self, _ui: &mut egui::Ui) {
            self.0.borrow_mut().push("comments".to_string());
        }
    }

    struct FakeFlashcards(Log);

    impl Feature for FakeFlashcards {
        fn name(&self) -> &str {
            "FakeFlashcards"
        }
    }

    impl FlashcardStudy for FakeFlashcards {
        fn show(&mut self, _ui: &mut egui::Ui, document_content: &str) {
            self.0.borrow_mut().push(format!("flashcards:{document_content}"));
        }
    }

    struct FakeAssistant(Log);

    impl Feature for FakeAssistant {
        fn name(&self) -> &str {
            "FakeAssistant"
        }
    }

    impl AIAssistant for FakeAssistant {
        fn show(&mut self, _ui: &mut egui::Ui, document_content: &str, _env: &SlotEnv) {
            self.0.borrow_mut().push(format!("assistant:{document_content}"));
        }
    }

    struct Harness {
        app: DocsApp,
        ctx: egui::Context,
        log: Log,
        unmounts: Rc<Cell<usize>>,
        pending: Rc<RefCell<Option<LoadedDocument>>>,
    }

    impl Harness {
        fn new(start_path: &str) -> Self {
            let log: Log = Rc::default();
            let pending = Rc::new(RefCell::new(None));
            let unmounts = Rc::new(Cell::new(0));
            let slots = FeatureSlots {
                viewer: Box::new(FakeViewer {
                    log: log.clone(),
                    pending: pending.clone(),
                }),
                editor: Box::new(FakeEditor(log.clone())),
                comments: Box::new(FakeComments(log.clone(), unmounts.clone())),
                flashcards: Box::new(FakeFlashcards(log.clone())),
                assistant: Box::new(FakeAssistant(log.clone())),
            };
            Self {
                app: DocsApp::with_slots(AppConfig::default(), slots, PublicEnv::default(), start_path),
                ctx: egui::Context::default(),
                log,
                unmounts,
                pending,
            }
        }

        /// Run one frame and return what the panels recorded during its last pass
        fn frame(&mut self, width: f32) -> Vec<String> {
            self.frame_with_events(width, Vec::new())
        }

        fn frame_with_events(&mut self, width: f32, events: Vec<egui::Event>) -> Vec<String> {
            self.frame_with_input(width, events, egui::Modifiers::NONE)
        }

        fn frame_with_input(
            &mut self,
            width: f32,
            events: Vec<egui::Event>,
            modifiers: egui::Modifiers,
        ) -> Vec<String> {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(width, 800.0),
                )),
                events,
                modifiers,
                ..Default::default()
            };
            let (app, log) = (&mut self.app, &self.log);
            let _ = self.ctx.run(input, |ctx| {
                log.borrow_mut().clear();
                app.render(ctx);
            });
            self.log.borrow().clone()
        }

        /// Let animations finish
        fn settle(&mut self, width: f32) {
            for _ in 0..40 {
                self.frame(width);
            }
        }

        /// Press and release the primary button at `pos`
        fn click(&mut self, width: f32, pos: egui::Pos2) {
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            self.frame_with_events(width, vec![egui::Event::PointerMoved(pos), button(true)]);
            self.frame_with_events(width, vec![button(false)]);
            self.frame_with_events(width, vec![egui::Event::PointerGone]);
        }

        fn press_key(&mut self, width: f32, key: egui::Key, modifiers: egui::Modifiers) {
            let event = egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            };
            self.frame_with_input(width, vec![event], modifiers);
        }

        /// Click each point in turn until `done` holds. Returns the point that did it.
        fn click_until(
            &mut self,
            width: f32,
            points: impl IntoIterator<Item = egui::Pos2>,
            done: impl Fn(&DocsApp) -> bool,
        ) -> Option<egui::Pos2> {
            for pos in points {
                self.click(width, pos);
                if done(&self.app) {
                    return Some(pos);
                }
            }
            None
        }

        fn load(&mut self, content: &str) {
            *self.pending.borrow_mut() = Some(LoadedDocument::new(content));
        }
    }

    #[test]
    fn test_mount_shows_viewer_and_assistant_only() {
        let mut h = Harness::new("/");
        assert_eq!(h.frame(1280.0), vec!["viewer", "assistant:"]);
        assert_eq!(h.app.shell.doc_content(), "");
    }

    #[test]
    fn test_loading_document_mounts_gated_panels() {
        let mut h = Harness::new("/");
        h.frame(1280.0);

        h.load("Hello world");
        assert_eq!(
            h.frame(1280.0),
            vec![
                "viewer",
                "editor:Hello world",
                "comments",
                "flashcards:Hello world",
                "assistant:Hello world",
            ]
        );

        // same order in the single-column layout
        assert_eq!(h.frame(800.0).len(), 5);
    }

    #[test]
    fn test_loading_empty_document_unmounts_gated_panels() {
        let mut h = Harness::new("/");
        h.load("Hello world");
        h.frame(1280.0);

        assert_eq!(h.unmounts.get(), 0);

        h.load("");
        assert_eq!(h.frame(1280.0), vec!["viewer", "assistant:"]);
        assert_eq!(h.unmounts.get(), 1);
        assert_eq!(h.app.shell.doc_content(), "");

        h.frame(1280.0);
        assert_eq!(h.unmounts.get(), 1);
    }

    #[test]
    fn test_theme_toggle_click_flips_twice_back_to_light() {
        let mut h = Harness::new("/");
        assert_eq!(h.app.theme.theme(), Theme::Light);
        h.settle(1280.0);
        assert!(!h.ctx.style().visuals.dark_mode);

        // toggle sits at the right end of the docked sidebar's brand row
        let candidates = [228.0, 222.0, 216.0, 210.0]
            .into_iter()
            .flat_map(|x| (28..=64).step_by(4).map(move |y| egui::pos2(x, y as f32)));
        let toggle = h
            .click_until(1280.0, candidates, |app| app.theme.theme() == Theme::Dark)
            .expect("theme toggle not found in the sidebar");

        // visuals follow within the frame of the click
        assert!(h.ctx.style().visuals.dark_mode);
        assert_eq!(h.app.config.ui.theme, Theme::Dark);
        assert_eq!(ThemeToggle::icon(h.app.theme.theme()), SUN_ICON);

        h.click(1280.0, toggle);
        assert_eq!(h.app.theme.theme(), Theme::Light);
        assert_eq!(h.app.config.ui.theme, Theme::Light);
        assert!(!h.ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_theme_shortcut_flips_theme() {
        let mut h = Harness::new("/");
        h.frame(1280.0);

        let ctrl_shift = egui::Modifiers::CTRL | egui::Modifiers::SHIFT;
        h.press_key(1280.0, egui::Key::D, ctrl_shift);
        assert_eq!(h.app.theme.theme(), Theme::Dark);
        assert!(h.ctx.style().visuals.dark_mode);
        assert_eq!(h.app.config.ui.theme, Theme::Dark);
    }

    #[test]
    fn test_menu_button_opens_sidebar_and_home_link_closes_it() {
        let mut h = Harness::new("/");
        h.settle(500.0);
        assert!(!h.app.shell.is_sidebar_open());

        h.click(500.0, egui::pos2(26.0, 26.0));
        assert!(h.app.shell.is_sidebar_open());
        h.settle(500.0);

        // Home is the first link below the brand row
        let candidates = (64..=200).step_by(8).map(|y| egui::pos2(60.0, y as f32));
        let link = h.click_until(500.0, candidates, |app| !app.shell.is_sidebar_open());
        assert!(link.is_some(), "Home link did not close the sidebar");
        assert_eq!(h.app.router.current(), &Route::Home);
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let mut h = Harness::new("/settings");
        assert!(h.frame(1280.0).is_empty());
        assert_eq!(h.app.router.current(), &Route::NotFound("/settings".to_string()));

        h.app.navigate("/");
        assert_eq!(h.frame(1280.0), vec!["viewer", "assistant:"]);
    }
}
