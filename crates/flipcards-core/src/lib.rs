//! Flip Cards Core Library
//!
//! Framework-free state for two presentational widgets:
//!
//! - **flip card**: a two-faced card turned over by click, Enter or Space
//! - **flip card grid**: a wrapping layout with a user-adjustable cap on
//!   cards per row
//!
//! ## Overview
//!
//! Each widget is an observable state record ([`CardState`],
//! [`GridState`]) owned by a [`Host`]. After every mutation the host runs
//! the record's `updated` hook, which writes derived CSS custom properties
//! (`--aspect-ratio`, `--max-cards-per-row`) that the stylesheets read.
//! Rendering lives in `flipcards-ui`.
//!
//! ## Quick Start
//!
//! ```
//! use flipcards_core::{GridState, Host};
//!
//! let mut grid = Host::new(GridState::default());
//! grid.update(|g| g.apply_control_input("7"));
//! grid.update(|g| g.apply_control_input("15")); // ignored
//!
//! assert_eq!(grid.state().max_cards_per_row(), 7);
//! assert_eq!(grid.style().get("--max-cards-per-row"), Some("7"));
//! ```

pub mod activation;
pub mod attributes;
pub mod card;
pub mod error;
pub mod grid;
pub mod layout;
pub mod reactive;

// Re-exports
pub use activation::{Activation, ActivationKey};
pub use attributes::{
    Attributes, ASPECT_RATIO_ATTR, ASPECT_RATIO_VAR, FLIPPED_ATTR, FLIP_CARD_GRID_TAG,
    FLIP_CARD_TAG, MAX_CARDS_PER_ROW_ATTR, MAX_CARDS_PER_ROW_VAR,
};
pub use card::{CardFace, CardProperty, CardState, DEFAULT_ASPECT_RATIO};
pub use error::{FlipCardError, FlipCardResult};
pub use grid::{
    parse_cards_per_row, parse_leading_int, GridProperty, GridState, DEFAULT_CARDS_PER_ROW, MAX_CARDS_PER_ROW,
    MIN_CARDS_PER_ROW,
};
pub use layout::{columns_per_row, grid_template_columns, min_card_width, Breakpoint, BREAKPOINTS};
pub use reactive::{ChangedProperties, Host, Reactive, StyleVars};
