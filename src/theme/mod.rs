//! Showcase page styling.

mod styles;

pub use styles::{GLOBAL_STYLES, PAGE_PADDING_PX};
