//! Responsive column policy for the card grid.
//!
//! Columns use CSS `auto-fit` with a per-card minimum width that grows on
//! wider viewports, and a maximum track width of
//! `100% / --max-cards-per-row - gap` so no row holds more than the cap.

use crate::attributes::MAX_CARDS_PER_ROW_VAR;
use crate::grid::DEFAULT_CARDS_PER_ROW;

/// Gap between grid cells, in pixels (`1rem`)
pub const GRID_GAP_PX: u32 = 16;

/// Viewport width from which a minimum card width applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Breakpoint {
    pub min_viewport_px: u32,
    pub min_card_px: u32,
}

/// Ordered from narrowest to widest
pub const BREAKPOINTS: [Breakpoint; 3] = [
    Breakpoint {
        min_viewport_px: 0,
        min_card_px: 150,
    },
    Breakpoint {
        min_viewport_px: 768,
        min_card_px: 200,
    },
    Breakpoint {
        min_viewport_px: 1024,
        min_card_px: 250,
    },
];

/// Minimum card width for a viewport of the given width.
pub fn min_card_width(viewport_px: u32) -> u32 {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| viewport_px >= bp.min_viewport_px)
        .map(|bp| bp.min_card_px)
        .unwrap_or(BREAKPOINTS[0].min_card_px)
}

/// `grid-template-columns` value for a given minimum card width.
pub fn grid_template_columns(min_card_px: u32) -> String {
    format!(
        "repeat(auto-fit, minmax({}px, calc(100% / var({}, {}) - 1rem)))",
        min_card_px, MAX_CARDS_PER_ROW_VAR, DEFAULT_CARDS_PER_ROW
    )
}

/// Number of columns the capped auto-fit layout produces.
///
/// A container narrower than one card still gets a single column, as does
/// a cap below one.
pub fn columns_per_row(container_px: u32, viewport_px: u32, max_cards_per_row: i64) -> u32 {
    let min_card = min_card_width(viewport_px);
    let fit = (container_px + GRID_GAP_PX) / (min_card + GRID_GAP_PX);
    let cap = max_cards_per_row.clamp(1, u32::MAX as i64) as u32;
    fit.clamp(1, cap)
}
