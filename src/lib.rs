//! Stateless drawing primitives on Cairo surfaces.
//!
//! Every primitive takes a surface, draws a single shape with its own scoped
//! style state and leaves the caller's context untouched. Alongside them sit
//! the pixel-grid alignment helpers used to keep one pixel strokes crisp, and
//! a small TOML configuration layer for default styles.

pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;

pub use config::Config;
pub use error::{DrawError, Result};
pub use geometry::{
    Point, Rect, align_point_to_pixel_grid, align_rect_to_pixel_grid, align_value_to_pixel_grid,
};
