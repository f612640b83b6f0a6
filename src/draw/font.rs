//! Font descriptor for text rendering.

/// Weight applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn from_bold(bold: bool) -> Self {
        if bold { Self::Bold } else { Self::Normal }
    }
}

/// Font configuration for text rendering: family name and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Arial", "Sans", "JetBrains Mono")
    pub family: String,

    /// Font weight
    pub weight: FontWeight,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family [Bold] Sizepx"
    /// Example: "Arial Bold 32px" or "Monospace 12.5px"
    ///
    /// The size is kept as given, fractions included. The `px` suffix makes
    /// Pango treat it as absolute device units rather than points.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.weight == FontWeight::Bold {
            parts.push("Bold".to_string());
        }

        parts.push(format!("{}px", size));

        parts.join(" ")
    }

    /// Builds the Pango description for `size` pixels.
    pub fn to_pango(&self, size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        if self.weight == FontWeight::Bold {
            desc.set_weight(pango::Weight::Bold);
        }
        desc.set_absolute_size(size * pango::SCALE as f64);
        desc
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Arial", FontWeight::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(16.0), "Arial 16px");
    }

    #[test]
    fn test_pango_string_bold_keeps_fraction() {
        let font = FontDescriptor::new("Arial", FontWeight::from_bold(true));
        assert_eq!(font.to_pango_string(31.6), "Arial Bold 31.6px");
    }

    #[test]
    fn test_pango_string_small_size_is_not_zero() {
        let font = FontDescriptor::new("Monospace", FontWeight::Normal);
        assert_eq!(font.to_pango_string(0.25), "Monospace 0.25px");
    }

    #[test]
    fn test_pango_description_is_absolute() {
        let desc = FontDescriptor::default().to_pango(20.0);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 20 * pango::SCALE);
        assert_eq!(desc.family().as_deref(), Some("Arial"));
        assert_eq!(desc.weight(), pango::Weight::Normal);
    }

    #[test]
    fn test_pango_description_keeps_fractional_size() {
        let desc = FontDescriptor::new("Arial", FontWeight::Bold).to_pango(12.5);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), (12.5 * pango::SCALE as f64) as i32);
        assert_eq!(desc.weight(), pango::Weight::Bold);
    }
}
