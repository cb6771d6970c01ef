//! Card and grid components.

mod flip_card;
mod flip_card_grid;
mod host_attributes;
mod stylesheet;

pub use flip_card::*;
pub use flip_card_grid::*;
pub use host_attributes::face_text;
pub use stylesheet::*;
