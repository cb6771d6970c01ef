//! CSS for the flip card and the card grid.
//!
//! Card styles are static. Grid column templates are generated from the
//! breakpoint table in `flipcards-core`, so the CSS and
//! `flipcards_core::min_card_width` never disagree.

use flipcards_core::{grid_template_columns, BREAKPOINTS};

pub const FLIP_CARD_STYLES: &str = r#"
/* === Flip Card === */
.flip-card {
  display: block;
  perspective: 1000px;
  width: 100%;
  aspect-ratio: var(--aspect-ratio, 2/3);
  min-width: 150px;
}

.flip-card .card {
  width: 100%;
  height: 100%;
  transition: transform 0.6s;
  transform-style: preserve-3d;
  position: relative;
  cursor: pointer;
}

.flip-card[flipped] .card {
  transform: rotateY(180deg);
}

.flip-card .card:focus-visible {
  outline: 2px solid #5f8fff;
  outline-offset: 4px;
  border-radius: 10px;
}

.flip-card .face {
  position: absolute;
  width: 100%;
  height: 100%;
  backface-visibility: hidden;
  border: 1px solid #ccc;
  border-radius: 10px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.2em;
  background: white;
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
  padding: 1rem;
  box-sizing: border-box;
  overflow: hidden;
}

.flip-card .back {
  transform: rotateY(180deg);
  background: #f0f0f0;
}

@media (prefers-reduced-motion: reduce) {
  .flip-card .card {
    transition: none;
  }
}
"#;

const GRID_BASE_STYLES: &str = r#"
/* === Flip Card Grid === */
.flip-card-grid {
  display: block;
  padding: 1rem;
}

.flip-card-grid .grid {
  display: grid;
  gap: 1rem;
  max-width: 100%;
}

.flip-card-grid .controls {
  margin-bottom: 1rem;
  display: flex;
  gap: 1rem;
  align-items: center;
  flex-wrap: wrap;
}

.flip-card-grid label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.flip-card-grid input[type="number"] {
  width: 60px;
  padding: 0.25rem;
  border: 1px solid #ccc;
  border-radius: 3px;
}
"#;

/// Grid CSS including one column rule per breakpoint.
pub fn grid_styles() -> String {
    let mut css = GRID_BASE_STYLES.to_string();
    for bp in BREAKPOINTS.iter() {
        let rule = format!(
            ".flip-card-grid .grid {{\n  grid-template-columns: {};\n}}\n",
            grid_template_columns(bp.min_card_px)
        );
        if bp.min_viewport_px == 0 {
            css.push('\n');
            css.push_str(&rule);
        } else {
            css.push_str(&format!(
                "\n@media (min-width: {}px) {{\n{}}}\n",
                bp.min_viewport_px, rule
            ));
        }
    }
    css
}

/// Full stylesheet for both components.
pub fn stylesheet() -> String {
    format!("{}{}", FLIP_CARD_STYLES, grid_styles())
}
