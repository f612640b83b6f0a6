//! Geometry records and pixel-grid alignment.
//!
//! Cairo places integer coordinates on pixel *edges*, so a one pixel wide
//! stroke along `x = 10.0` is split across two columns and rendered as a
//! blurry two pixel line. Moving the coordinate to `10.5` centers the stroke
//! on a single column. The helpers below perform that shift.

/// A location in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height may be negative; nothing here normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle spanning two corners, keeping their order.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// Moves a coordinate to the center of the pixel it falls in: `floor(v) + 0.5`.
///
/// Only values already of the form `n + 0.5` are left unchanged.
pub fn align_value_to_pixel_grid(value: f64) -> f64 {
    value.floor() + 0.5
}

/// Aligns each axis of `point` independently.
pub fn align_point_to_pixel_grid(point: Point) -> Point {
    Point::new(
        align_value_to_pixel_grid(point.x),
        align_value_to_pixel_grid(point.y),
    )
}

/// Aligns a rectangle for crisp one pixel strokes.
///
/// The top-left and bottom-right corners are aligned separately and the size is
/// taken from the aligned corners, not from aligning `width`/`height`. The
/// result can therefore be up to one unit larger or smaller per axis than the
/// input. That is expected: both edges land on pixel centers.
pub fn align_rect_to_pixel_grid(rect: Rect) -> Rect {
    let top_left = align_point_to_pixel_grid(rect.top_left());
    let bottom_right = align_point_to_pixel_grid(rect.bottom_right());
    Rect::from_corners(top_left, bottom_right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_alignment_floors_then_adds_half() {
        assert_eq!(align_value_to_pixel_grid(10.3), 10.5);
        assert_eq!(align_value_to_pixel_grid(10.0), 10.5);
        assert_eq!(align_value_to_pixel_grid(10.99), 10.5);
        assert_eq!(align_value_to_pixel_grid(-0.2), -0.5);
        assert_eq!(align_value_to_pixel_grid(-3.0), -2.5);
    }

    #[test]
    fn half_values_are_fixed_points() {
        assert_eq!(align_value_to_pixel_grid(7.5), 7.5);
        assert_eq!(align_value_to_pixel_grid(-7.5), -7.5);
    }

    #[test]
    fn rect_alignment_uses_aligned_corners() {
        let rect = Rect::new(10.3, 20.7, 5.2, 3.9);
        let aligned = align_rect_to_pixel_grid(rect);
        assert_eq!(aligned.x, 10.5);
        assert_eq!(aligned.y, 20.5);
        assert_eq!(aligned.width, 5.0);
        assert_eq!(aligned.height, 4.0);
    }

    #[test]
    fn rect_alignment_keeps_negative_extent() {
        let aligned = align_rect_to_pixel_grid(Rect::new(10.0, 10.0, -4.0, -2.2));
        assert_eq!(aligned, Rect::new(10.5, 10.5, -4.0, -3.0));
    }
}
