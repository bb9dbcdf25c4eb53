//! Feature panels composed by the dashboard
//!
//! The dashboard only knows the contracts in [`api`]. The built-in panels are
//! thin defaults so the application works on its own; any of them can be
//! replaced through [`FeatureSlots`].

pub mod api;
pub mod assistant;
pub mod comments;
pub mod doc_editor;
pub mod doc_viewer;
pub mod flashcards;

pub use api::{AIAssistant, CommentingSystem, DocEditor, DocViewer, Feature, FeatureSlots, FlashcardStudy, SlotEnv};
