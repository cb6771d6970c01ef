//! Global CSS for the showcase page.
//!
//! Component styles come from `flipcards_ui::FlipCardStyles`; this only
//! covers the page around them.

/// Horizontal padding of `main.showcase` plus the grid's own padding
pub const PAGE_PADDING_PX: u32 = 32;

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: #fafafa;
  color: #222;
  line-height: 1.5;
  min-height: 100vh;
}

/* === Header === */
.showcase-header {
  padding: 1.5rem 2rem 0;
}

.showcase-title {
  font-size: 1.5rem;
  font-weight: 600;
}

.showcase-status {
  font-size: 0.875rem;
  color: #666;
}

/* === Layout === */
.showcase {
  padding: 0 1rem 2rem;
}
"#;
