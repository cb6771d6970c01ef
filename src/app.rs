use dioxus::prelude::*;
use flipcards_core::{columns_per_row, CardFace};
use flipcards_ui::{face_text, FlipCard, FlipCardGrid, FlipCardStyles};

use crate::theme::{GLOBAL_STYLES, PAGE_PADDING_PX};
use crate::{get_deck, WINDOW_WIDTH};

/// Root application component.
///
/// Lays out every card of the deck in one grid and keeps a status line
/// with the current cap and the number of flips so far.
#[component]
pub fn App() -> Element {
    let deck = use_hook(get_deck);

    let mut cap = use_signal(|| deck.max_cards_per_row);
    let mut flips = use_signal(|| 0u32);

    let viewport = WINDOW_WIDTH as u32;
    let columns = columns_per_row(viewport.saturating_sub(2 * PAGE_PADDING_PX), viewport, cap());

    rsx! {
        style { {GLOBAL_STYLES} }
        FlipCardStyles {}
        header { class: "showcase-header",
            h1 { class: "showcase-title", "{deck.title}" }
            p { class: "showcase-status",
                "max {cap} per row \u{00B7} {columns} columns at launch width \u{00B7} {flips} flips"
            }
        }
        main { class: "showcase",
            FlipCardGrid {
                max_cards_per_row: deck.max_cards_per_row,
                on_change: move |n| {
                    tracing::info!("Cap set to {}", n);
                    cap.set(n);
                },
                for (i, entry) in deck.cards.iter().enumerate() {
                    {
                        let front = face_text(entry.front.as_deref(), CardFace::Front);
                        let back = face_text(entry.back.as_deref(), CardFace::Back);
                        rsx! {
                            FlipCard {
                                key: "{i}",
                                flipped: entry.card.flipped,
                                aspect_ratio: entry.card.aspect_ratio.clone(),
                                front: rsx! { "{front}" },
                                back: rsx! { "{back}" },
                                on_toggle: move |_| flips += 1,
                            }
                        }
                    }
                }
            }
        }
    }
}
