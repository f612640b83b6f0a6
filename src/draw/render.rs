//! Cairo-based rendering functions on an already acquired context.
//!
//! Each function wraps its state changes in a [`StyleGuard`], so line width,
//! source, caps and operator are the same after the call as before it. The
//! current path is not part of Cairo's saved state; every function starts with
//! `new_path()` and consumes the path it builds.

use super::color::Color;
use super::style::{ArcStyle, LineStyle, OutlineStyle, StyleGuard, TextAlign, TextStyle};
use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Offset added to both coordinates of a line's end point.
///
/// Only the end point is shifted, never the start, so a line from `(0, 0)` to
/// `(10, 10)` is stroked to `(11, 11)`. Existing callers position their lines
/// around this, so it is kept as is.
pub const LINE_END_OFFSET: f64 = 1.0;

/// Returns the segment actually stroked for a line from `start` to `end`.
pub fn line_segment(start: Point, end: Point) -> (Point, Point) {
    (start, end.offset(LINE_END_OFFSET, LINE_END_OFFSET))
}

/// Erases `width` x `height` pixels from the origin to full transparency.
pub fn render_clear(ctx: &cairo::Context, width: f64, height: f64) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    guard.set_operator(cairo::Operator::Clear);
    guard.new_path();
    guard.rectangle(0.0, 0.0, width, height);
    guard.fill()?;
    Ok(())
}

/// Render a round-capped straight line (see [`line_segment`]).
pub fn render_line(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    style: &LineStyle,
) -> Result<()> {
    let (from, to) = line_segment(start, end);

    let guard = StyleGuard::new(ctx)?;
    style.color.apply(&guard);
    guard.set_line_width(style.thickness);
    guard.set_line_cap(cairo::LineCap::Round);

    guard.new_path();
    guard.move_to(from.x, from.y);
    guard.line_to(to.x, to.y);
    guard.stroke()?;
    Ok(())
}

/// Render a rectangle (outline)
pub fn render_rect_outline(
    ctx: &cairo::Context,
    rect: Rect,
    style: &OutlineStyle,
) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    style.color.apply(&guard);
    guard.set_line_width(style.thickness);

    guard.new_path();
    guard.rectangle(rect.x, rect.y, rect.width, rect.height);
    guard.stroke()?;
    Ok(())
}

/// Render a filled rectangle
pub fn render_rect_filled(ctx: &cairo::Context, rect: Rect, color: Color) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    color.apply(&guard);

    guard.new_path();
    guard.rectangle(rect.x, rect.y, rect.width, rect.height);
    guard.fill()?;
    Ok(())
}

/// Covers the surface with `color`, then cuts `rect` out of it.
///
/// The cut uses [`cairo::Operator::Clear`], which removes whatever is under the
/// rectangle (the fresh overlay and anything drawn before), leaving it fully
/// transparent instead of blending into it.
pub fn render_shade_except_rect(
    ctx: &cairo::Context,
    width: f64,
    height: f64,
    rect: Rect,
    color: Color,
) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    color.apply(&guard);
    guard.new_path();
    guard.rectangle(0.0, 0.0, width, height);
    guard.fill()?;

    guard.set_operator(cairo::Operator::Clear);
    guard.rectangle(rect.x, rect.y, rect.width, rect.height);
    guard.fill()?;
    Ok(())
}

/// Render a filled full circle
pub fn render_circle_filled(
    ctx: &cairo::Context,
    center: Point,
    radius: f64,
    color: Color,
) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    color.apply(&guard);

    guard.new_path();
    guard.arc(
        center.x,
        center.y,
        radius,
        0f64.to_radians(),
        360f64.to_radians(),
    );
    guard.fill()?;
    Ok(())
}

/// Render a circular arc from `start_deg` to `end_deg`.
///
/// Angles are in degrees, measured clockwise from the positive x axis in
/// surface coordinates. The arc always sweeps towards increasing angles.
pub fn render_circle_arc(
    ctx: &cairo::Context,
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    style: &ArcStyle,
) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;
    style.color.apply(&guard);
    guard.set_line_width(style.thickness);

    guard.new_path();
    guard.arc(
        center.x,
        center.y,
        radius,
        start_deg.to_radians(),
        end_deg.to_radians(),
    );
    guard.stroke()?;
    Ok(())
}

/// Computes where a layout of `width` x `height` pixels must start so that it
/// is vertically centered on `anchor` and placed horizontally per `align`.
pub fn text_origin(anchor: Point, width: f64, height: f64, align: TextAlign) -> Point {
    let x = match align {
        TextAlign::Left => anchor.x,
        TextAlign::Center => anchor.x - width / 2.0,
        TextAlign::Right => anchor.x - width,
    };
    Point::new(x, anchor.y - height / 2.0)
}

/// Renders a single text run with Pango.
///
/// `size` is an absolute pixel size. The logical extents of the layout are used
/// for placement, so the text box (not the ink) is centered on `anchor.y`.
pub fn render_text(
    ctx: &cairo::Context,
    text: &str,
    size: f64,
    anchor: Point,
    style: &TextStyle,
) -> Result<()> {
    let guard = StyleGuard::new(ctx)?;

    // Grayscale antialiasing; subpixel AA fringes on transparent surfaces
    guard.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(&guard);
    layout.set_font_description(Some(&style.font().to_pango(size)));
    layout.set_text(text);

    let (_ink_rect, logical_rect) = layout.pixel_extents();
    let origin = text_origin(
        anchor,
        logical_rect.width() as f64,
        logical_rect.height() as f64,
        style.align,
    );

    style.color.apply(&guard);
    guard.new_path();
    guard.move_to(origin.x, origin.y);
    pangocairo::functions::show_layout(&guard, &layout);
    guard.status()?;
    Ok(())
}
