//! Card record and the in-memory catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Card model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card ID, unique within the catalog
    pub id: u32,
    /// Question shown on the front of the card
    pub question: String,
    /// Answer shown on the back of the card
    pub answer: String,
}

impl Card {
    fn new(id: u32, question: &str, answer: &str) -> Self {
        Self {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Read-only collection of cards, built once and shared by every request.
///
/// Cloning only bumps the reference count, so the catalog can live in the
/// router state without any locking.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Arc<[Card]>,
}

impl CardCatalog {
    /// Build the catalog served by the API
    pub fn builtin() -> Self {
        Self::from(vec![
            Card::new(
                1,
                "What is React?",
                "A JavaScript library for building user interfaces.",
            ),
            Card::new(
                2,
                "What is a Component?",
                "Independent and reusable bits of code.",
            ),
            Card::new(
                3,
                "What is State?",
                "A built-in React object that is used to contain data or information about the component.",
            ),
            Card::new(
                4,
                "What is a Hook?",
                "Functions that let you use state and other React features without writing a class.",
            ),
            Card::new(5, "What is JSX?", "A syntax extension to JavaScript."),
            Card::new(
                6,
                "What is the Virtual DOM?",
                "A lightweight copy of the actual DOM in memory.",
            ),
            Card::new(
                7,
                "What is Props?",
                "Inputs to a React component. They are data passed down from a parent component.",
            ),
        ])
    }

    /// All cards, in insertion order
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    /// Shared handle to the cards, serializable without copying them
    pub fn shared(&self) -> Arc<[Card]> {
        Arc::clone(&self.cards)
    }

    /// Find a card by its ID
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Number of cards in the catalog
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for CardCatalog {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}
