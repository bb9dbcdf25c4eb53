//! Assistant panel answering questions about the loaded document

use std::collections::HashSet;

use eframe::egui;

use super::api::{AIAssistant, Feature, SlotEnv};
use crate::ui::card;

/// Backend path the assistant talks to when a proxy rule covers it
pub const ASSISTANT_API_PATH: &str = "/api/assistant";
/// Public variable naming the assistant's display name
pub const ASSISTANT_NAME_VAR: &str = "DOCSGPT_PUBLIC_ASSISTANT_NAME";

const NO_DOCUMENT_REPLY: &str =
    "Load a document first and I can answer questions about it.";
const MAX_ANSWER_SENTENCES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Words worth matching on
fn keywords(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2)
        .map(str::to_lowercase)
        .collect()
}

fn sentences(content: &str) -> impl Iterator<Item = &str> {
    content
        .split_inclusive(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Answer from the document itself: the sentences sharing the most keywords
/// with the question, in document order.
pub fn answer(question: &str, document_content: &str) -> String {
    if document_content.trim().is_empty() {
        return NO_DOCUMENT_REPLY.to_string();
    }

    let wanted = keywords(question);
    let mut scored: Vec<(usize, usize, &str)> = sentences(document_content)
        .enumerate()
        .map(|(pos, sentence)| {
            let overlap = keywords(sentence).intersection(&wanted).count();
            (overlap, pos, sentence)
        })
        .filter(|(overlap, _, _)| *overlap > 0)
        .collect();

    if scored.is_empty() {
        return "I couldn't find anything about that in the document.".to_string();
    }

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.truncate(MAX_ANSWER_SENTENCES);
    scored.sort_by_key(|(_, pos, _)| *pos);

    scored
        .into_iter()
        .map(|(_, _, sentence)| sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default assistant
#[derive(Debug, Default)]
pub struct AssistantPanel {
    transcript: Vec<ChatMessage>,
    question: String,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask a question; blank questions are ignored
    pub fn ask(&mut self, question: &str, document_content: &str) {
        let question = question.trim();
        if question.is_empty() {
            return;
        }
        self.transcript.push(ChatMessage {
            speaker: Speaker::User,
            text: question.to_string(),
        });
        self.transcript.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: answer(question, document_content),
        });
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    fn backend_label(env: &SlotEnv) -> String {
        env.api
            .resolve(ASSISTANT_API_PATH)
            .unwrap_or_else(|| "local".to_string())
    }
}

impl Feature for AssistantPanel {
    fn name(&self) -> &str {
        "AIAssistant"
    }
}

impl AIAssistant for AssistantPanel {
    fn show(&mut self, ui: &mut egui::Ui, document_content: &str, env: &SlotEnv) {
        let name = env.public.get(ASSISTANT_NAME_VAR).unwrap_or("AI Assistant");
        card(ui, name, |ui| {
            ui.weak(format!("Backend: {}", Self::backend_label(env)));
            if document_content.is_empty() {
                ui.weak("No document loaded yet.");
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("assistant_scroll")
                .max_height(420.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in &self.transcript {
                        match message.speaker {
                            Speaker::User => {
                                ui.label(egui::RichText::new(format!("You: {}", message.text)).strong());
                            }
                            Speaker::Assistant => {
                                ui.label(message.text.as_str());
                            }
                        }
                        ui.add_space(4.0);
                    }
                });

            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.question)
                        .hint_text("Ask about the document...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Ask").clicked() || submitted {
                    let question = std::mem::take(&mut self.question);
                    self.ask(&question, document_content);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ApiConfig, ProxyRule};

    const DOC: &str = "Rust was started by Graydon Hoare. The borrow checker enforces ownership rules. \
                       Cargo is the Rust package manager. Ownership rules prevent data races.";

    #[test]
    fn test_answer_without_document() {
        assert_eq!(answer("What is Rust?", ""), NO_DOCUMENT_REPLY);
        assert_eq!(answer("What is Rust?", "  \n"), NO_DOCUMENT_REPLY);
    }

    #[test]
    fn test_answer_picks_best_sentences_in_order() {
        let reply = answer("What do ownership rules do?", DOC);
        assert_eq!(
            reply,
            "The borrow checker enforces ownership rules. Ownership rules prevent data races."
        );
    }

    #[test]
    fn test_answer_without_match() {
        assert!(answer("weather tomorrow", DOC).contains("couldn't find"));
    }

    #[test]
    fn test_ask_records_transcript() {
        let mut panel = AssistantPanel::new();
        panel.ask("   ", DOC);
        assert!(panel.transcript().is_empty());

        panel.ask("Who started Rust?", "");
        assert_eq!(panel.transcript().len(), 2);
        assert_eq!(panel.transcript()[0].speaker, Speaker::User);
        assert_eq!(panel.transcript()[1].text, NO_DOCUMENT_REPLY);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(AssistantPanel::backend_label(&SlotEnv::default()), "local");

        let env = SlotEnv {
            api: ApiConfig {
                proxy: vec![ProxyRule {
                    prefix: "/api".to_string(),
                    target: "http://localhost:8000".to_string(),
                    strip_prefix: true,
                }],
            },
            ..Default::default()
        };
        assert_eq!(AssistantPanel::backend_label(&env), "http://localhost:8000/assistant");
    }
}
