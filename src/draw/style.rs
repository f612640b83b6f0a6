//! Scoped Cairo state.
//!
//! Cairo keeps stroke color, line width, caps and compositing operator on the
//! context itself. Every primitive wraps its changes in a [`StyleGuard`] so
//! nothing leaks into the caller's later drawing.

use super::color::{Color, INK, WHITE};
use super::font::{FontDescriptor, FontWeight};
use crate::error::Result;
use std::ops::Deref;

/// Saves the context state on creation and restores it when dropped.
///
/// Restoration happens on every exit path, including early `?` returns.
///
/// ```
/// # fn main() -> Result<(), pixdraw::DrawError> {
/// let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4)?;
/// let ctx = cairo::Context::new(&surface)?;
/// ctx.set_line_width(3.0);
/// {
///     let guard = pixdraw::draw::StyleGuard::new(&ctx)?;
///     guard.set_line_width(9.0);
/// }
/// assert_eq!(ctx.line_width(), 3.0);
/// # Ok(())
/// # }
/// ```
#[must_use = "the saved state is restored as soon as the guard is dropped"]
pub struct StyleGuard<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> StyleGuard<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Result<Self> {
        ctx.save()?;
        Ok(Self { ctx })
    }
}

impl Deref for StyleGuard<'_> {
    type Target = cairo::Context;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.ctx.restore() {
            log::warn!("Failed to restore cairo state: {}", err);
        }
    }
}

// ============================================================================
// Style records
// ============================================================================

/// Stroke settings for [`draw_line`](super::draw_line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub thickness: f64,
}

impl Default for LineStyle {
    /// `#111111`, 25 pixels wide.
    fn default() -> Self {
        Self {
            color: INK,
            thickness: 25.0,
        }
    }
}

/// Stroke settings for rectangle outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub color: Color,
    pub thickness: f64,
}

impl Default for OutlineStyle {
    /// White, one pixel wide.
    fn default() -> Self {
        Self {
            color: WHITE,
            thickness: 1.0,
        }
    }
}

/// Stroke settings for circle arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStyle {
    pub color: Color,
    pub thickness: f64,
}

impl Default for ArcStyle {
    /// White, 20 pixels wide.
    fn default() -> Self {
        Self {
            color: WHITE,
            thickness: 20.0,
        }
    }
}

/// Horizontal placement of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    Left,
    /// Text is centered on the anchor.
    #[default]
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Settings for [`draw_text`](super::draw_text).
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
    pub align: TextAlign,
    pub font_family: String,
}

impl TextStyle {
    /// Font descriptor for this style.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_family.clone(), FontWeight::from_bold(self.bold))
    }
}

impl Default for TextStyle {
    /// White, regular weight Arial, centered.
    fn default() -> Self {
        Self {
            color: WHITE,
            bold: false,
            align: TextAlign::Center,
            font_family: "Arial".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;

    fn context() -> cairo::Context {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 8, 8).unwrap();
        cairo::Context::new(&surface).unwrap()
    }

    #[test]
    fn restores_style_on_drop() {
        let ctx = context();
        ctx.set_line_width(2.0);
        ctx.set_line_cap(cairo::LineCap::Butt);
        {
            let guard = StyleGuard::new(&ctx).unwrap();
            guard.set_line_width(25.0);
            guard.set_line_cap(cairo::LineCap::Round);
            guard.set_operator(cairo::Operator::DestOut);
        }
        assert_eq!(ctx.line_width(), 2.0);
        assert_eq!(ctx.line_cap(), cairo::LineCap::Butt);
        assert_eq!(ctx.operator(), cairo::Operator::Over);
    }

    #[test]
    fn restores_style_on_early_return() {
        fn fails(ctx: &cairo::Context) -> Result<()> {
            let guard = StyleGuard::new(ctx)?;
            guard.set_line_width(40.0);
            Err(DrawError::InvalidColor("nope".into()))
        }

        let ctx = context();
        ctx.set_line_width(1.5);
        assert!(fails(&ctx).is_err());
        assert_eq!(ctx.line_width(), 1.5);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let ctx = context();
        ctx.set_line_width(1.0);
        {
            let outer = StyleGuard::new(&ctx).unwrap();
            outer.set_line_width(2.0);
            {
                let inner = StyleGuard::new(&ctx).unwrap();
                inner.set_line_width(3.0);
            }
            assert_eq!(ctx.line_width(), 2.0);
        }
        assert_eq!(ctx.line_width(), 1.0);
    }

    #[test]
    fn defaults_match_documented_values() {
        let line = LineStyle::default();
        assert_eq!(line.color.to_string(), "rgb(17,17,17)");
        assert_eq!(line.thickness, 25.0);
        assert_eq!(OutlineStyle::default().thickness, 1.0);
        assert_eq!(ArcStyle::default().thickness, 20.0);

        let text = TextStyle::default();
        assert_eq!(text.align, TextAlign::Center);
        assert!(!text.bold);
        assert_eq!(text.font().to_pango_string(12.0), "Arial 12px");
    }
}
