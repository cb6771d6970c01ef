//! Flip Cards UI Components
//!
//! Dioxus renditions of the two widgets in `flipcards-core`:
//!
//! - [`FlipCard`]: a card with a front and a back face, turned over by
//!   click, Enter or Space
//! - [`FlipCardGrid`]: a wrapping grid of arbitrary children with a numeric
//!   control capping the number of cards per row
//!
//! Include [`FlipCardStyles`] once per document so the class names used by
//! the components resolve.
//!
//! ```rust,ignore
//! rsx! {
//!     FlipCardStyles {}
//!     FlipCardGrid { max_cards_per_row: 3,
//!         FlipCard {
//!             front: rsx! { "Question" },
//!             back: rsx! { "Answer" },
//!         }
//!     }
//! }
//! ```

pub mod components;
pub mod styles;

pub use components::*;
pub use styles::{grid_styles, stylesheet, FLIP_CARD_STYLES};
