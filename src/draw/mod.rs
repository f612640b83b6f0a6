//! Rendering primitives and style definitions (Cairo-based).
//!
//! This module defines the drawing layer:
//! - [`Color`]: RGBA color representation with CSS-style parsing
//! - [`StyleGuard`] and the style records passed to each primitive
//! - Surface-level primitives ([`draw_line`], [`shade_except_rect`], ...)
//! - Context-level renderers in [`render`] for drawing many shapes per context

pub mod color;
pub mod font;
pub mod primitives;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use color::{Color, random_color};
pub use font::{FontDescriptor, FontWeight};
pub use primitives::{
    Canvas, clear, draw_circle_arc, draw_circle_filled, draw_line, draw_rect_filled,
    draw_rect_outline, draw_text, shade_except_rect,
};
pub use render::LINE_END_OFFSET;
pub use style::{ArcStyle, LineStyle, OutlineStyle, StyleGuard, TextAlign, TextStyle};

pub use color::{BLACK, BLUE, GREEN, INK, ORANGE, PINK, RED, SHADE, TRANSPARENT, WHITE, YELLOW};
