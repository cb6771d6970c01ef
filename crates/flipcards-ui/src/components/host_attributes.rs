//! Host element attributes
//!
//! Components reflect their state onto the host element through the core
//! `reflect_attributes` hooks, then spread the result into `rsx!`.

use dioxus::dioxus_core::Attribute;
use dioxus::prelude::*;
use flipcards_core::{
    Attributes, CardFace, CardState, GridState, ASPECT_RATIO_ATTR, FLIPPED_ATTR,
    MAX_CARDS_PER_ROW_ATTR,
};

/// Attributes reflected by a card host, in markup order
const CARD_ATTRS: [&str; 2] = [FLIPPED_ATTR, ASPECT_RATIO_ATTR];
/// Attributes reflected by a grid host
const GRID_ATTRS: [&str; 1] = [MAX_CARDS_PER_ROW_ATTR];

fn to_dom(attrs: &Attributes, names: &[&'static str]) -> Vec<Attribute> {
    names
        .iter()
        .filter_map(|&name| {
            attrs
                .get(name)
                .map(|value| Attribute::new(name, value.to_string(), None, false))
        })
        .collect()
}

/// `flipped` (only while flipped) and `aspect-ratio` for a card host
pub(crate) fn card_host_attributes(state: &CardState) -> Vec<Attribute> {
    let mut attrs = Attributes::new();
    state.reflect_attributes(&mut attrs);
    to_dom(&attrs, &CARD_ATTRS)
}

/// `max-cards-per-row` for a grid host
pub(crate) fn grid_host_attributes(state: &GridState) -> Vec<Attribute> {
    let mut attrs = Attributes::new();
    state.reflect_attributes(&mut attrs);
    to_dom(&attrs, &GRID_ATTRS)
}

/// Caller content for a face, or the face's placeholder text
pub fn face_text(content: Option<&str>, face: CardFace) -> String {
    content.unwrap_or(face.placeholder()).to_string()
}

/// Caller content for a face, or an element holding the placeholder text
pub(crate) fn face_content(content: Option<Element>, face: CardFace) -> Element {
    content.unwrap_or_else(|| {
        let text = face_text(None, face);
        rsx! { "{text}" }
    })
}
