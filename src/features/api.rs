//! Contracts between the dashboard and its feature panels

use eframe::egui;

use crate::core::config::{ApiConfig, PublicEnv};
use crate::core::document::LoadedDocument;

/// Behaviour shared by every feature panel
pub trait Feature {
    /// Panel name, used in logs
    fn name(&self) -> &str;

    /// Called once when the panel is hidden by its gate. Panels drop their
    /// local state here, like a component being unmounted.
    fn on_unmount(&mut self) {}
}

/// Loads documents and reports each successful load exactly once
pub trait DocViewer: Feature {
    fn show(&mut self, ui: &mut egui::Ui, on_loaded: &mut dyn FnMut(LoadedDocument));
}

/// Edits a snapshot of the document. Edits are never read back.
pub trait DocEditor: Feature {
    fn show(&mut self, ui: &mut egui::Ui, initial_content: &str);
}

/// Comments with their own state and storage
pub trait CommentingSystem: Feature {
    fn show(&mut self, ui: &mut egui::Ui);
}

/// Study cards derived from the document; regenerates on content change
pub trait FlashcardStudy: Feature {
    fn show(&mut self, ui: &mut egui::Ui, document_content: &str);
}

/// Conversational help about the document. Must cope with `""`.
pub trait AIAssistant: Feature {
    fn show(&mut self, ui: &mut egui::Ui, document_content: &str, env: &SlotEnv);
}

/// Runtime surface visible to panels
#[derive(Debug, Clone, Default)]
pub struct SlotEnv {
    /// `DOCSGPT_PUBLIC_*` variables only
    pub public: PublicEnv,
    /// Backend routing
    pub api: ApiConfig,
}

impl SlotEnv {
    pub fn new(public: PublicEnv, api: ApiConfig) -> Self {
        Self { public, api }
    }
}

/// The five panels the dashboard composes
pub struct FeatureSlots {
    pub viewer: Box<dyn DocViewer>,
    pub editor: Box<dyn DocEditor>,
    pub comments: Box<dyn CommentingSystem>,
    pub flashcards: Box<dyn FlashcardStudy>,
    pub assistant: Box<dyn AIAssistant>,
}

impl Default for FeatureSlots {
    fn default() -> Self {
        Self {
            viewer: Box::new(super::doc_viewer::DocViewerPanel::new()),
            editor: Box::new(super::doc_editor::DocEditorPanel::new()),
            comments: Box::new(super::comments::CommentsPanel::new()),
            flashcards: Box::new(super::flashcards::FlashcardPanel::new()),
            assistant: Box::new(super::assistant::AssistantPanel::new()),
        }
    }
}

impl FeatureSlots {
    /// Unmount every document-gated panel
    pub fn unmount_gated(&mut self) {
        tracing::debug!(
            "Unmounting {}, {}, {}",
            self.editor.name(),
            self.comments.name(),
            self.flashcards.name()
        );
        self.editor.on_unmount();
        self.comments.on_unmount();
        self.flashcards.on_unmount();
    }
}
