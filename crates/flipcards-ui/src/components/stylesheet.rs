//! Stylesheet Component

use dioxus::prelude::*;

use crate::styles::stylesheet;

/// Emits the card and grid stylesheet. Render once, near the document root.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCardStyles {}
///     FlipCard {}
/// }
/// ```
#[component]
pub fn FlipCardStyles() -> Element {
    let css = stylesheet();
    rsx! {
        style { {css} }
    }
}
