//! Showcase deck configuration.
//!
//! A deck is the set of cards the showcase lays out. It is read from a
//! JSON file:
//!
//! ```json
//! {
//!   "title": "Capitals",
//!   "max_cards_per_row": 3,
//!   "cards": [
//!     { "front": "Peru", "back": "Lima" },
//!     { "front": "Chad", "back": "N'Djamena", "aspect_ratio": "1/1" }
//!   ]
//! }
//! ```
//!
//! or generated when no file is available. Every field is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flipcards_core::{CardState, DEFAULT_CARDS_PER_ROW};
use serde::{Deserialize, Serialize};

/// Number of cards in a generated deck
pub const DEFAULT_CARD_COUNT: usize = 12;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deck {
    pub title: String,
    /// Initial grid cap, passed to the grid unchecked
    pub max_cards_per_row: i64,
    pub cards: Vec<DeckCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckCard {
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    /// Initial `flipped` / `aspect_ratio`
    #[serde(flatten)]
    pub card: CardState,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            title: "Flip Cards".to_string(),
            max_cards_per_row: DEFAULT_CARDS_PER_ROW as i64,
            cards: Vec::new(),
        }
    }
}

impl Deck {
    /// Generated deck of `count` numbered cards.
    pub fn sample(count: usize) -> Self {
        let cards = (1..=count)
            .map(|n| DeckCard {
                front: Some(format!("Card {}", n)),
                back: Some(format!("Back of card {}", n)),
                card: CardState::default(),
            })
            .collect();
        Self {
            cards,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid deck JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// `<config dir>/flipcards/deck.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flipcards").join("deck.json"))
    }

    /// Use one aspect ratio for every card.
    pub fn set_aspect_ratio(&mut self, ratio: &str) {
        for entry in &mut self.cards {
            entry.card.set_aspect_ratio(ratio);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_deck_is_numbered() {
        let deck = Deck::sample(3);
        assert_eq!(deck.cards.len(), 3);
        assert_eq!(deck.cards[0].front.as_deref(), Some("Card 1"));
        assert_eq!(deck.cards[2].back.as_deref(), Some("Back of card 3"));
        assert_eq!(deck.max_cards_per_row, 4);
        assert!(deck.cards.iter().all(|c| c.card == CardState::default()));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let deck = Deck::from_json(r#"{ "cards": [ {}, { "flipped": true, "aspect_ratio": "1/1" } ] }"#)
            .unwrap();
        assert_eq!(deck.title, "Flip Cards");
        assert_eq!(deck.max_cards_per_row, 4);
        assert_eq!(deck.cards[0].front, None);
        assert_eq!(deck.cards[0].card.aspect_ratio, "2/3");
        assert!(deck.cards[1].card.flipped);
        assert_eq!(deck.cards[1].card.aspect_ratio, "1/1");
    }

    #[test]
    fn aspect_ratio_override_applies_to_all_cards() {
        let mut deck = Deck::sample(4);
        deck.set_aspect_ratio("16/9");
        assert!(deck.cards.iter().all(|c| c.card.aspect_ratio == "16/9"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "title": "Capitals", "max_cards_per_row": 3, "cards": [ {{ "front": "Peru", "back": "Lima" }} ] }}"#
        )
        .unwrap();

        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.title, "Capitals");
        assert_eq!(deck.max_cards_per_row, 3);
        assert_eq!(deck.cards[0].back.as_deref(), Some("Lima"));
    }

    #[test]
    fn load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Deck::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Deck::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read deck file"));
    }
}
