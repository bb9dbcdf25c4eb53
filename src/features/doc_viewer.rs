//! Document viewer: loads exported Google Docs and renders them as markdown

use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use super::api::{DocViewer, Feature};
use crate::core::document::{google_doc_export_url, parse_google_doc_id, LoadedDocument};
use crate::ui::card;

/// Default document viewer
pub struct DocViewerPanel {
    /// Google Docs link or id typed by the user
    link: String,
    /// Text pasted by the user
    pasted: String,
    /// Last successfully loaded document
    current: Option<LoadedDocument>,
    /// Last error, shown inline
    error: Option<String>,
    cache: CommonMarkCache,
}

impl Default for DocViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocViewerPanel {
    pub fn new() -> Self {
        Self {
            link: String::new(),
            pasted: String::new(),
            current: None,
            error: None,
            cache: CommonMarkCache::default(),
        }
    }

    /// Record a successful load and report it once
    fn accept(&mut self, doc: LoadedDocument, on_loaded: &mut dyn FnMut(LoadedDocument)) {
        self.error = None;
        self.current = Some(doc.clone());
        on_loaded(doc);
    }

    fn fail(&mut self, message: String) {
        tracing::error!("Failed to load document: {}", message);
        self.error = Some(message);
    }

    fn pick_file(&mut self, on_loaded: &mut dyn FnMut(LoadedDocument)) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Exported documents", &["txt", "md", "markdown"])
            .pick_file()
        else {
            return;
        };

        match LoadedDocument::open(&path) {
            Ok(doc) => self.accept(doc, on_loaded),
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn load_pasted(&mut self, on_loaded: &mut dyn FnMut(LoadedDocument)) {
        if self.pasted.trim().is_empty() {
            self.fail("Nothing to load: paste the document text first".to_string());
            return;
        }
        let mut doc = LoadedDocument::new(std::mem::take(&mut self.pasted));
        if let Ok(id) = parse_google_doc_id(&self.link) {
            doc = doc.with_label(id);
        }
        self.accept(doc, on_loaded);
    }

    fn open_export(&mut self) {
        match parse_google_doc_id(&self.link) {
            Ok(id) => {
                let url = google_doc_export_url(&id);
                tracing::info!("Opening export for document {}", id);
                if let Err(e) = open::that(&url) {
                    self.fail(format!("Could not open browser: {e}"));
                } else {
                    self.error = None;
                }
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui, on_loaded: &mut dyn FnMut(LoadedDocument)) {
        ui.horizontal(|ui| {
            ui.label("Google Doc:");
            ui.add(
                egui::TextEdit::singleline(&mut self.link)
                    .hint_text("https://docs.google.com/document/d/...")
                    .desired_width(ui.available_width() - 140.0),
            );
            if ui
                .button("Export \u{2197}")
                .on_hover_text("Open the plain-text export in your browser")
                .clicked()
            {
                self.open_export();
            }
        });

        ui.add(
            egui::TextEdit::multiline(&mut self.pasted)
                .hint_text("...or paste the document text here")
                .desired_width(f32::INFINITY)
                .desired_rows(4),
        );

        ui.horizontal(|ui| {
            if ui.button("Load pasted text").clicked() {
                self.load_pasted(on_loaded);
            }
            if ui.button("Open file...").clicked() {
                self.pick_file(on_loaded);
            }
        });

        if let Some(ref error) = self.error {
            ui.colored_label(ui.visuals().error_fg_color, error.as_str());
        }
    }
}

impl Feature for DocViewerPanel {
    fn name(&self) -> &str {
        "DocViewer"
    }
}

impl DocViewer for DocViewerPanel {
    fn show(&mut self, ui: &mut egui::Ui, on_loaded: &mut dyn FnMut(LoadedDocument)) {
        card(ui, "Document", |ui| {
            self.show_controls(ui, on_loaded);

            if let Some(ref doc) = self.current {
                ui.separator();
                ui.strong(doc.title());
                egui::ScrollArea::vertical()
                    .id_salt("doc_viewer_scroll")
                    .max_height(320.0)
                    .show(ui, |ui| {
                        CommonMarkViewer::new().show(ui, &mut self.cache, &doc.content);
                    });
            }
        });
    }
}
