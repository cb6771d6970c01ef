//! Markup attributes reflected from component state.
//!
//! Names here are the public markup surface of the widgets:
//!
//! | Element          | Attribute           | Kind              |
//! |------------------|---------------------|-------------------|
//! | `flip-card`      | `flipped`           | boolean presence  |
//! | `flip-card`      | `aspect-ratio`      | string            |
//! | `flip-card-grid` | `max-cards-per-row` | integer           |

use std::collections::BTreeMap;

use crate::card::CardState;
use crate::grid::GridState;

/// Class of the card host element
pub const FLIP_CARD_TAG: &str = "flip-card";
/// Class of the grid host element
pub const FLIP_CARD_GRID_TAG: &str = "flip-card-grid";

pub const FLIPPED_ATTR: &str = "flipped";
pub const ASPECT_RATIO_ATTR: &str = "aspect-ratio";
pub const MAX_CARDS_PER_ROW_ATTR: &str = "max-cards-per-row";

/// Custom property read by the card stylesheet
pub const ASPECT_RATIO_VAR: &str = "--aspect-ratio";
/// Custom property read by the grid stylesheet
pub const MAX_CARDS_PER_ROW_VAR: &str = "--max-cards-per-row";

/// Attribute map of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }
}

impl CardState {
    /// Write state to markup: `flipped` by presence, `aspect-ratio` always.
    pub fn reflect_attributes(&self, attrs: &mut Attributes) {
        if self.flipped {
            attrs.set(FLIPPED_ATTR, "");
        } else {
            attrs.remove(FLIPPED_ATTR);
        }
        attrs.set(ASPECT_RATIO_ATTR, self.aspect_ratio.as_str());
    }
}

impl GridState {
    pub fn reflect_attributes(&self, attrs: &mut Attributes) {
        attrs.set(MAX_CARDS_PER_ROW_ATTR, self.max_cards_per_row().to_string());
    }
}
