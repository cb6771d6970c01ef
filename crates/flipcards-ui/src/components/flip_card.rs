//! Flip Card Component
//!
//! A two-faced card. The whole card is one toggle button: click, Enter or
//! Space turns it over. Faces are filled with caller content and fall
//! back to "Front" / "Back".

use dioxus::prelude::*;
use flipcards_core::{
    Activation, CardFace, CardProperty, CardState, Host, DEFAULT_ASPECT_RATIO, FLIP_CARD_TAG,
};

use super::host_attributes::{card_host_attributes, face_content};

/// Properties for the FlipCard component
#[derive(Clone, PartialEq, Props)]
pub struct FlipCardProps {
    /// Whether the back face is shown. Changing it from the parent turns
    /// the card; user toggles do not write it back.
    #[props(default = false)]
    pub flipped: bool,
    /// CSS aspect ratio (width/height), passed through unvalidated
    #[props(default = DEFAULT_ASPECT_RATIO.to_string(), into)]
    pub aspect_ratio: String,
    /// Front face content
    #[props(default)]
    pub front: Option<Element>,
    /// Back face content
    #[props(default)]
    pub back: Option<Element>,
    /// Called with the new flipped state after every toggle
    #[props(default)]
    pub on_toggle: Option<EventHandler<bool>>,
}

/// Flippable card with keyboard support
///
/// # Design Notes
///
/// - The host `div.flip-card` reflects `flipped` (by presence) and
///   `aspect-ratio`, and carries `--aspect-ratio` inline
/// - Faces are stacked; the `.card` layer rotates 180deg when flipped
/// - Rotation is instant under `prefers-reduced-motion: reduce`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCard {
///         aspect_ratio: "3/4",
///         front: rsx! { "What is the capital of Peru?" },
///         back: rsx! { "Lima" },
///         on_toggle: move |flipped| tracing::info!(flipped),
///     }
/// }
/// ```
#[component]
pub fn FlipCard(props: FlipCardProps) -> Element {
    let mut host = use_signal(|| {
        Host::new(CardState {
            flipped: props.flipped,
            aspect_ratio: props.aspect_ratio.clone(),
        })
    });

    let flipped = props.flipped;
    use_effect(use_reactive((&flipped,), move |(flipped,)| {
        host.write().update(|card| card.set_flipped(flipped));
    }));

    let aspect_ratio = props.aspect_ratio.clone();
    use_effect(use_reactive((&aspect_ratio,), move |(aspect_ratio,)| {
        host.write().update(|card| card.set_aspect_ratio(aspect_ratio));
    }));

    let on_toggle = props.on_toggle;
    let mut activate = move |activation: Activation| {
        let (changed, flipped) = {
            let mut card = host.write();
            let changed = card.update(|c| c.handle_activation(activation));
            (changed, card.state().flipped)
        };
        if changed.has(CardProperty::Flipped) {
            if let Some(handler) = &on_toggle {
                handler.call(flipped);
            }
        }
    };

    let card = host.read();
    let state = card.state();
    let style = card.style().to_inline_style();
    let pressed = state.aria_pressed();
    let visible = state.visible_face();
    let host_attrs = card_host_attributes(state);

    let front = face_content(props.front.clone(), CardFace::Front);
    let back = face_content(props.back.clone(), CardFace::Back);

    rsx! {
        div {
            class: FLIP_CARD_TAG,
            style: "{style}",
            ..host_attrs,
            div {
                class: "card",
                role: "button",
                tabindex: "0",
                "aria-label": "Flip card",
                "aria-pressed": pressed,
                onclick: move |_| activate(Activation::Pointer),
                onkeydown: move |evt: KeyboardEvent| {
                    let raw_key = evt.key().to_string();
                    let Some(activation) = Activation::from_keydown(&raw_key, evt.is_auto_repeating()) else {
                        return;
                    };
                    // Enter would click and Space would scroll
                    evt.prevent_default();
                    activate(activation);
                },
                div {
                    class: "face front",
                    "data-slot": CardFace::Front.slot(),
                    "aria-hidden": visible != CardFace::Front,
                    {front}
                }
                div {
                    class: "face back",
                    "data-slot": CardFace::Back.slot(),
                    "aria-hidden": visible != CardFace::Back,
                    {back}
                }
            }
        }
    }
}
