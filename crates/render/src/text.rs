use std::fmt;

use crate::card::Card;
use crate::surface::Surface;

/// Plain-text surface for terminals.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    count: String,
    message: Option<String>,
    cards: Vec<Card>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.count.clear();
        self.message = None;
        self.cards.clear();
    }

    fn set_count(&mut self, label: &str) {
        self.count = label.to_owned();
    }

    fn show_message(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.count.is_empty() {
            writeln!(f, "{}", self.count)?;
        }
        if let Some(message) = &self.message {
            writeln!(f, "{message}")?;
        }
        for (idx, card) in self.cards.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", idx + 1, card.title)?;
            for line in &card.details {
                writeln!(f, "   {line}")?;
            }
        }
        Ok(())
    }
}
