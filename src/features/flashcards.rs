//! Flashcards generated from the document outline

use eframe::egui;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::api::{Feature, FlashcardStudy};
use crate::ui::card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Build cards from headings and the first paragraph under each, falling
/// back to `Term: definition` lines when the document has no usable headings.
pub fn generate_cards(content: &str) -> Vec<Flashcard> {
    let cards = cards_from_headings(content);
    if cards.is_empty() {
        cards_from_definitions(content)
    } else {
        cards
    }
}

fn cards_from_headings(content: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut heading: Option<String> = None;
    let mut in_heading = false;
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                heading = Some(text.trim().to_string()).filter(|h| !h.is_empty());
                text.clear();
            }
            Event::Start(Tag::Paragraph) if heading.is_some() => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                in_paragraph = false;
                if let Some(front) = heading.take() {
                    let back = text.trim();
                    if !back.is_empty() {
                        cards.push(Flashcard::new(front, back));
                    }
                }
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading || in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    cards
}

fn cards_from_definitions(content: &str) -> Vec<Flashcard> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim().trim_start_matches(['-', '*']).trim();
            let (term, definition) = line.split_once(':')?;
            let (term, definition) = (term.trim(), definition.trim());
            // long "terms" are sentences, not definitions
            let is_term = !term.is_empty() && term.split_whitespace().count() <= 5;
            (is_term && !definition.is_empty()).then(|| Flashcard::new(term, definition))
        })
        .collect()
}

/// Study deck for the loaded document
#[derive(Debug, Default)]
pub struct FlashcardPanel {
    /// Content the deck was generated from
    source: Option<String>,
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
}

impl FlashcardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate the deck when the content changed
    fn sync(&mut self, content: &str) {
        if self.source.as_deref() == Some(content) {
            return;
        }
        self.cards = generate_cards(content);
        self.source = Some(content.to_string());
        self.index = 0;
        self.flipped = false;
        tracing::debug!("Generated {} flashcards", self.cards.len());
    }

    fn next(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
            self.flipped = false;
        }
    }

    fn previous(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
            self.flipped = false;
        }
    }
}

impl Feature for FlashcardPanel {
    fn name(&self) -> &str {
        "FlashcardStudy"
    }

    fn on_unmount(&mut self) {
        *self = Self::default();
    }
}

impl FlashcardStudy for FlashcardPanel {
    fn show(&mut self, ui: &mut egui::Ui, document_content: &str) {
        self.sync(document_content);

        card(ui, "Flashcards", |ui| {
            let Some(current) = self.cards.get(self.index) else {
                ui.weak("No flashcards: add headings or \"Term: definition\" lines to the document.");
                return;
            };

            ui.weak(format!("Card {} of {}", self.index + 1, self.cards.len()));
            let text = if self.flipped { &current.back } else { &current.front };
            let face = egui::RichText::new(text).size(if self.flipped { 15.0 } else { 18.0 });
            let response = ui.add(egui::Button::new(face).min_size(egui::vec2(ui.available_width(), 80.0)));
            if response.on_hover_text("Click to flip").clicked() {
                self.flipped = !self.flipped;
            }

            ui.horizontal(|ui| {
                if ui.button("\u{2190} Prev").clicked() {
                    self.previous();
                }
                if ui.button("Next \u{2192}").clicked() {
                    self.next();
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_from_headings() {
        let doc = "# Photosynthesis\nPlants turn *light* into sugar.\n\nMore detail.\n\n## Mitochondria\nThe `powerhouse`\nof the cell.\n\n## Empty heading\n";
        assert_eq!(
            generate_cards(doc),
            vec![
                Flashcard::new("Photosynthesis", "Plants turn light into sugar."),
                Flashcard::new("Mitochondria", "The powerhouse of the cell."),
            ]
        );
    }

    #[test]
    fn test_cards_from_definitions() {
        let doc = "Glossary\n- Latency: time until the first byte\nThis sentence has a colon but is far too long to be a term: nope\nBandwidth:\n";
        assert_eq!(
            generate_cards(doc),
            vec![Flashcard::new("Latency", "time until the first byte")]
        );
    }

    #[test]
    fn test_plain_text_has_no_cards() {
        assert!(generate_cards("Hello world").is_empty());
    }

    #[test]
    fn test_deck_regenerates_on_change_and_wraps() {
        let mut panel = FlashcardPanel::new();
        panel.sync("A: one\nB: two");
        assert_eq!(panel.cards.len(), 2);

        panel.previous();
        assert_eq!(panel.index, 1);
        panel.flipped = true;
        panel.next();
        assert_eq!(panel.index, 0);
        assert!(!panel.flipped);

        panel.next();
        panel.sync("A: one\nB: two");
        assert_eq!(panel.index, 1, "same content keeps position");

        panel.sync("C: three");
        assert_eq!(panel.index, 0);
        assert_eq!(panel.cards, vec![Flashcard::new("C", "three")]);
    }
}
