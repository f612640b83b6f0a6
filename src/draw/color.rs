//! RGBA color type, CSS-style color strings and predefined constants.

use crate::error::DrawError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use pixdraw::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let overlay: Color = "rgba(0, 0, 0, 0.7)".parse().unwrap();
/// assert_eq!(overlay.a, 0.7);
/// assert_eq!(red.to_string(), "rgb(255,0,0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit channels and a 0.0-1.0 alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a,
        }
    }

    /// Sets this color as the source of `ctx`.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }

    fn channel8(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Color {
    /// Formats as `rgb(R,G,B)` when opaque and `rgba(R,G,B,A)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (
            Self::channel8(self.r),
            Self::channel8(self.g),
            Self::channel8(self.b),
        );
        if self.a >= 1.0 {
            write!(f, "rgb({r},{g},{b})")
        } else {
            write!(f, "rgba({r},{g},{b},{})", self.a)
        }
    }
}

impl FromStr for Color {
    type Err = DrawError;

    /// Parses hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional
    /// (`rgb(r, g, b)`, `rgba(r, g, b, a)`) and named colors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || DrawError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, true).ok_or_else(invalid);
        }
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, false).ok_or_else(invalid);
        }

        name_to_color(&lower).ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            nibble(3)? as f64 / 255.0,
        )),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)? as f64 / 255.0,
        )),
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let a = if with_alpha {
        let a = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };

    Some(Color::from_rgba8(r, g, b, a))
}

/// Maps color name strings to Color values (case-insensitive).
///
/// # Supported Names
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black",
///   "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Returns an opaque `rgb(R,G,B)` string with independently sampled channels.
///
/// Each channel is drawn uniformly from `0..=255`. Pass a seeded generator to
/// get reproducible output.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let r: u8 = rng.gen_range(0..=255);
    let g: u8 = rng.gen_range(0..=255);
    let b: u8 = rng.gen_range(0..=255);
    Color::from_rgb8(r, g, b).to_string()
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Near-black used for lines (`#111111`)
pub const INK: Color = Color::new(17.0 / 255.0, 17.0 / 255.0, 17.0 / 255.0, 1.0);

/// Translucent black drawn around a spotlighted region (`rgba(0,0,0,0.7)`)
pub const SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.7);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_hex_notations() {
        assert_eq!("#fff".parse::<Color>().unwrap(), WHITE);
        assert_eq!("#ffffff".parse::<Color>().unwrap(), WHITE);
        assert_eq!("#111111".parse::<Color>().unwrap(), INK);
        assert_eq!("#FF000080".parse::<Color>().unwrap().a, 128.0 / 255.0);
        assert_eq!("#0000".parse::<Color>().unwrap(), TRANSPARENT);
    }

    #[test]
    fn parses_functional_notations() {
        assert_eq!("rgba(0, 0, 0, 0.7)".parse::<Color>().unwrap(), SHADE);
        assert_eq!(
            "rgb(255,128,0)".parse::<Color>().unwrap(),
            Color::from_rgb8(255, 128, 0)
        );
        assert_eq!(" RGB( 0 , 0 , 255 ) ".parse::<Color>().unwrap(), BLUE);
    }

    #[test]
    fn parses_names() {
        assert_eq!("White".parse::<Color>().unwrap(), WHITE);
        assert_eq!("transparent".parse::<Color>().unwrap(), TRANSPARENT);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in [
            "#ff",
            "#ggg",
            "#12345",
            "rgb(1,2)",
            "rgb(256,0,0)",
            "rgba(0,0,0,1.5)",
            "rgb(0,0,0",
            "chartreuse",
            "",
        ] {
            let err = bad.parse::<Color>().unwrap_err();
            assert!(matches!(err, DrawError::InvalidColor(ref s) if s == bad));
        }
    }

    #[test]
    fn display_uses_rgb_or_rgba() {
        assert_eq!(INK.to_string(), "rgb(17,17,17)");
        assert_eq!(SHADE.to_string(), "rgba(0,0,0,0.7)");
    }

    #[test]
    fn random_color_matches_rgb_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let color = random_color(&mut rng);
            let inner = color
                .strip_prefix("rgb(")
                .and_then(|rest| rest.strip_suffix(')'))
                .expect("rgb(...) wrapper");
            let channels: Vec<u16> = inner
                .split(',')
                .map(|part| part.parse().expect("integer channel"))
                .collect();
            assert_eq!(channels.len(), 3);
            assert!(channels.iter().all(|c| *c <= 255));
        }
    }

    #[test]
    fn random_color_covers_the_channel_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let color: Color = random_color(&mut rng).parse().unwrap();
            let red = (color.r * 255.0).round() as u8;
            counts[(red / 64) as usize] += 1;
            seen_min |= red == 0;
            seen_max |= red == 255;
        }
        assert!(seen_min && seen_max);
        // 5000 expected per quarter
        assert!(counts.iter().all(|c| (4500..5500).contains(c)), "{counts:?}");
    }

    #[test]
    fn random_color_is_reproducible_with_a_seed() {
        let a = random_color(&mut StdRng::seed_from_u64(99));
        let b = random_color(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
