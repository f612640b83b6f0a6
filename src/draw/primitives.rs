//! Surface-level drawing primitives.
//!
//! These are the entry points most callers want: hand over a surface, get one
//! shape drawn. Each call creates its own context, so nothing is shared
//! between calls. To draw many shapes through one context use the functions
//! in [`render`](super::render) instead.

use super::color::Color;
use super::render;
use super::style::{ArcStyle, LineStyle, OutlineStyle, TextStyle};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use log::debug;

/// A raster target the primitives can draw on.
///
/// Callers own the surface; the primitives only acquire a context from it and
/// change its pixels.
pub trait Canvas {
    /// Acquires a fresh drawing context for the surface.
    fn context(&mut self) -> Result<cairo::Context>;

    /// Current size of the surface in pixels.
    fn dimensions(&self) -> (i32, i32);
}

impl Canvas for cairo::ImageSurface {
    fn context(&mut self) -> Result<cairo::Context> {
        Ok(cairo::Context::new(&*self)?)
    }

    fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }
}

/// Erases the whole surface to full transparency.
pub fn clear<S: Canvas + ?Sized>(surface: &mut S) -> Result<()> {
    let (width, height) = surface.dimensions();
    let ctx = surface.context()?;
    render::render_clear(&ctx, width as f64, height as f64)
}

/// Strokes a round-capped line from `start` to `end`.
///
/// The stroke actually ends at `end + (1, 1)`; see
/// [`LINE_END_OFFSET`](render::LINE_END_OFFSET).
pub fn draw_line<S: Canvas + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    style: &LineStyle,
) -> Result<()> {
    debug!("draw_line {:?} -> {:?}", start, end);
    let ctx = surface.context()?;
    render::render_line(&ctx, start, end, style)
}

/// Strokes the border of `rect`.
pub fn draw_rect_outline<S: Canvas + ?Sized>(
    surface: &mut S,
    rect: Rect,
    style: &OutlineStyle,
) -> Result<()> {
    debug!("draw_rect_outline {:?}", rect);
    let ctx = surface.context()?;
    render::render_rect_outline(&ctx, rect, style)
}

/// Fills the interior of `rect`.
pub fn draw_rect_filled<S: Canvas + ?Sized>(
    surface: &mut S,
    rect: Rect,
    color: Color,
) -> Result<()> {
    debug!("draw_rect_filled {:?}", rect);
    let ctx = surface.context()?;
    render::render_rect_filled(&ctx, rect, color)
}

/// Shades the whole surface with `color` except `rect`, which is left fully
/// transparent (a spotlight on `rect`).
pub fn shade_except_rect<S: Canvas + ?Sized>(
    surface: &mut S,
    rect: Rect,
    color: Color,
) -> Result<()> {
    debug!("shade_except_rect {:?}", rect);
    let (width, height) = surface.dimensions();
    let ctx = surface.context()?;
    render::render_shade_except_rect(&ctx, width as f64, height as f64, rect, color)
}

/// Fills a full disc of `radius` around `center`.
pub fn draw_circle_filled<S: Canvas + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: f64,
    color: Color,
) -> Result<()> {
    debug!("draw_circle_filled {:?} r={}", center, radius);
    let ctx = surface.context()?;
    render::render_circle_filled(&ctx, center, radius, color)
}

/// Strokes an arc of a circle between two angles given in degrees.
pub fn draw_circle_arc<S: Canvas + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    style: &ArcStyle,
) -> Result<()> {
    debug!(
        "draw_circle_arc {:?} r={} {}°..{}°",
        center, radius, start_deg, end_deg
    );
    let ctx = surface.context()?;
    render::render_circle_arc(&ctx, center, radius, start_deg, end_deg, style)
}

/// Renders `text` at `size` pixels, vertically centered on `anchor`.
pub fn draw_text<S: Canvas + ?Sized>(
    surface: &mut S,
    text: &str,
    size: f64,
    anchor: Point,
    style: &TextStyle,
) -> Result<()> {
    debug!("draw_text {:?} at {:?} ({:?})", text, anchor, style.align);
    let ctx = surface.context()?;
    render::render_text(&ctx, text, size, anchor, style)
}
