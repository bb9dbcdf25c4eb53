//! Comment list kept alongside the loaded document

use eframe::egui;

use super::api::{CommentingSystem, Feature};
use crate::ui::card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub resolved: bool,
}

/// In-memory comments. Nothing is persisted.
#[derive(Debug, Default)]
pub struct CommentsPanel {
    comments: Vec<Comment>,
    draft: String,
    next_id: u64,
}

impl CommentsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment; blank text is ignored
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        self.comments.push(Comment {
            id: self.next_id,
            text: text.to_string(),
            resolved: false,
        });
        Some(self.next_id)
    }

    pub fn toggle_resolved(&mut self, id: u64) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
            comment.resolved = !comment.resolved;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.comments.retain(|c| c.id != id);
    }

    #[cfg(test)]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn open_count(&self) -> usize {
        self.comments.iter().filter(|c| !c.resolved).count()
    }
}

impl Feature for CommentsPanel {
    fn name(&self) -> &str {
        "CommentingSystem"
    }

    fn on_unmount(&mut self) {
        self.comments.clear();
        self.draft.clear();
    }
}

impl CommentingSystem for CommentsPanel {
    fn show(&mut self, ui: &mut egui::Ui) {
        let title = format!("Comments ({} open)", self.open_count());
        card(ui, &title, |ui| {
            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.draft)
                        .hint_text("Add a comment...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    let draft = std::mem::take(&mut self.draft);
                    self.add(&draft);
                }
            });

            if self.comments.is_empty() {
                ui.weak("No comments yet");
                return;
            }

            let mut toggled = None;
            let mut removed = None;
            for comment in &self.comments {
                ui.horizontal(|ui| {
                    let mark = if comment.resolved { "\u{2611}" } else { "\u{2610}" };
                    if ui.small_button(mark).on_hover_text("Resolve").clicked() {
                        toggled = Some(comment.id);
                    }
                    if comment.resolved {
                        ui.label(egui::RichText::new(&comment.text).strikethrough().weak());
                    } else {
                        ui.label(comment.text.as_str());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("\u{2715}").on_hover_text("Delete").clicked() {
                            removed = Some(comment.id);
                        }
                    });
                });
            }

            if let Some(id) = toggled {
                self.toggle_resolved(id);
            }
            if let Some(id) = removed {
                self.remove(id);
            }
        });
    }
}
