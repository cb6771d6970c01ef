//! Flip Card Grid Component
//!
//! Responsive grid for many cards with a "Max per row" control.

use dioxus::prelude::*;
use flipcards_core::{
    GridProperty, GridState, Host, DEFAULT_CARDS_PER_ROW, FLIP_CARD_GRID_TAG, MAX_CARDS_PER_ROW,
    MIN_CARDS_PER_ROW,
};

use super::host_attributes::grid_host_attributes;

/// Properties for the FlipCardGrid component
#[derive(Clone, PartialEq, Props)]
pub struct FlipCardGridProps {
    /// Cap on cards per row. Taken as given; only the control is bounded.
    #[props(default = DEFAULT_CARDS_PER_ROW as i64)]
    pub max_cards_per_row: i64,
    /// Grid content, typically FlipCard components
    pub children: Element,
    /// Called with the new cap whenever the control changes it
    #[props(default)]
    pub on_change: Option<EventHandler<i64>>,
}

/// Wrapping card grid with an adjustable column cap
///
/// # Design Notes
///
/// - The host `div.flip-card-grid` reflects `max-cards-per-row` and
///   carries `--max-cards-per-row` inline for the column template
/// - Control values outside 1..=10 or without a number are ignored; the
///   `max_cards_per_row` prop is not checked
/// - Minimum card width steps up at 768px and 1024px viewports
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCardGrid {
///         max_cards_per_row: 3,
///         on_change: move |n| tracing::info!(n, "cap changed"),
///         for i in 0..9 {
///             FlipCard { key: "{i}" }
///         }
///     }
/// }
/// ```
#[component]
pub fn FlipCardGrid(props: FlipCardGridProps) -> Element {
    let mut host = use_signal(|| Host::new(GridState::with_max_cards_per_row(props.max_cards_per_row)));

    let max_cards_per_row = props.max_cards_per_row;
    use_effect(use_reactive((&max_cards_per_row,), move |(max_cards_per_row,)| {
        host.write()
            .update(|g| g.configure_max_cards_per_row(max_cards_per_row));
    }));

    let on_change = props.on_change;
    let on_input = move |evt: FormEvent| {
        let (changed, cap) = {
            let mut grid = host.write();
            let changed = grid.update(|g| g.apply_control_input(&evt.value()));
            (changed, grid.state().max_cards_per_row())
        };
        if changed.has(GridProperty::MaxCardsPerRow) {
            if let Some(handler) = &on_change {
                handler.call(cap);
            }
        }
    };

    let grid = host.read();
    let cap = grid.state().max_cards_per_row();
    let style = grid.style().to_inline_style();
    let host_attrs = grid_host_attributes(grid.state());

    rsx! {
        div {
            class: FLIP_CARD_GRID_TAG,
            style: "{style}",
            ..host_attrs,
            div { class: "controls",
                label {
                    "Max per row:"
                    input {
                        r#type: "number",
                        min: "{MIN_CARDS_PER_ROW}",
                        max: "{MAX_CARDS_PER_ROW}",
                        value: "{cap}",
                        oninput: on_input,
                    }
                }
            }
            div { class: "grid",
                {props.children}
            }
        }
    }
}
