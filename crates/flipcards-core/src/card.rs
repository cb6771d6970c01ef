//! Flip card state.
//!
//! A card shows one of two faces. `flipped` picks the face; the aspect
//! ratio is handed to the rendering layer as the `--aspect-ratio` custom
//! property without validation.

use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::attributes::ASPECT_RATIO_VAR;
use crate::reactive::{ChangedProperties, Reactive, StyleVars};

/// Aspect ratio used when none is configured (width/height)
pub const DEFAULT_ASPECT_RATIO: &str = "2/3";

/// Face of the card currently turned towards the viewer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    /// Slot name for this face's content
    pub fn slot(&self) -> &'static str {
        match self {
            CardFace::Front => "front",
            CardFace::Back => "back",
        }
    }

    /// Text shown when the face has no content of its own
    pub fn placeholder(&self) -> &'static str {
        match self {
            CardFace::Front => "Front",
            CardFace::Back => "Back",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CardProperty {
    Flipped,
    AspectRatio,
}

/// Observable properties of a flip card.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CardState {
    pub flipped: bool,
    pub aspect_ratio: String,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            flipped: false,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}

impl CardState {
    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
        tracing::debug!(flipped = self.flipped, "card toggled");
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    pub fn set_aspect_ratio(&mut self, ratio: impl Into<String>) {
        self.aspect_ratio = ratio.into();
    }

    pub fn visible_face(&self) -> CardFace {
        if self.flipped {
            CardFace::Back
        } else {
            CardFace::Front
        }
    }

    /// Value for the activation region's `aria-pressed`
    pub fn aria_pressed(&self) -> &'static str {
        if self.flipped {
            "true"
        } else {
            "false"
        }
    }

    /// Toggle for a discrete activation; returns whether the card flipped.
    pub fn handle_activation(&mut self, activation: Activation) -> bool {
        if !activation.is_discrete() {
            return false;
        }
        self.toggle_flip();
        true
    }
}

impl Reactive for CardState {
    type Property = CardProperty;
    const PROPERTIES: &'static [CardProperty] = &[CardProperty::Flipped, CardProperty::AspectRatio];

    fn changed_since(&self, previous: &Self) -> ChangedProperties<CardProperty> {
        let mut changed = ChangedProperties::none();
        if self.flipped != previous.flipped {
            changed.insert(CardProperty::Flipped);
        }
        if self.aspect_ratio != previous.aspect_ratio {
            changed.insert(CardProperty::AspectRatio);
        }
        changed
    }

    fn updated(&self, changed: &ChangedProperties<CardProperty>, style: &mut StyleVars) {
        if changed.has(CardProperty::AspectRatio) {
            style.set_property(ASPECT_RATIO_VAR, self.aspect_ratio.as_str());
        }
    }
}
