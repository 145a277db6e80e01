use std::fmt;

/// Codepoint BMFont uses for the space character
pub const SPACE_ID: i32 = 32;

/// One `char` record as read from a .fnt file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRecord {
    /// Character id (usually the Unicode codepoint)
    pub id: i32,
    /// Left edge of the glyph rectangle in atlas pixels
    pub x: i32,
    /// Top edge of the glyph rectangle in atlas pixels
    pub y: i32,
    /// Rectangle width in pixels
    pub width: i32,
    /// Rectangle height in pixels
    pub height: i32,
    /// Horizontal pen offset
    pub xoffset: i32,
    /// Vertical pen offset
    pub yoffset: i32,
    /// Pen advance after drawing the glyph
    pub xadvance: i32,
}

impl GlyphRecord {
    /// A glyph with no visible area has nothing to map into UV space
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// A glyph rectangle mapped into normalized texture space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedGlyph {
    pub id: i32,
    pub u1: f64,
    pub v1: f64,
    pub u2: f64,
    pub v2: f64,
    /// Width-to-height ratio of the glyph bitmap
    pub aspect_ratio: f64,
    pub width: i32,
    pub height: i32,
}

impl NormalizedGlyph {
    pub fn identifier(&self) -> GlyphIdentifier {
        GlyphIdentifier(self.id)
    }
}

/// Name a glyph is listed under in a .fontdef file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIdentifier(pub i32);

impl fmt::Display for GlyphIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SPACE_ID => write!(f, "space"),
            id => write!(f, "u{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(width: i32, height: i32) -> GlyphRecord {
        GlyphRecord {
            id: 65,
            x: 0,
            y: 0,
            width,
            height,
            xoffset: 0,
            yoffset: 0,
            xadvance: 0,
        }
    }

    #[test]
    fn test_identifier_names() {
        assert_eq!(GlyphIdentifier(32).to_string(), "space");
        assert_eq!(GlyphIdentifier(65).to_string(), "u65");
        assert_eq!(GlyphIdentifier(-5).to_string(), "u-5");
        assert_eq!(GlyphIdentifier(0).to_string(), "u0");
    }

    #[test]
    fn test_degenerate_glyphs() {
        assert!(record(0, 10).is_degenerate());
        assert!(record(10, 0).is_degenerate());
        assert!(record(-1, 10).is_degenerate());
        assert!(!record(1, 1).is_degenerate());
    }
}
