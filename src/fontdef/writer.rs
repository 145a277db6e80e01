use std::fmt;
use crate::models::{AtlasInfo, NormalizedGlyph};

const INDENT: &str = "    ";
const SIZE_COMMENT: &str = "// 基准字号";

/// A complete `font { ... }` block ready to be written out
#[derive(Debug, Clone, Copy)]
pub struct FontDefinition<'a> {
    pub name: &'a str,
    /// Texture file name, emitted verbatim
    pub source: &'a str,
    pub atlas: AtlasInfo,
    /// Expected to be sorted by id already
    pub glyphs: &'a [NormalizedGlyph],
}

impl<'a> FontDefinition<'a> {
    pub fn new(
        name: &'a str,
        source: &'a str,
        atlas: AtlasInfo,
        glyphs: &'a [NormalizedGlyph],
    ) -> Self {
        Self {
            name,
            source,
            atlas,
            glyphs,
        }
    }

    /// Render the block. Lines are separated by `\n` with no newline after
    /// the closing brace.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FontDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "font {}", self.name)?;
        writeln!(f, "{{")?;
        writeln!(f, "{}type image", INDENT)?;
        writeln!(f, "{}source {}", INDENT, self.source)?;
        writeln!(f, "{}size {}  {}", INDENT, self.atlas.scale_h, SIZE_COMMENT)?;
        writeln!(f)?;
        for glyph in self.glyphs {
            writeln!(
                f,
                "{}glyph {} {:.6} {:.6} {:.6} {:.6} {:.6}",
                INDENT,
                glyph.identifier(),
                glyph.u1,
                glyph.v1,
                glyph.u2,
                glyph.v2,
                glyph.aspect_ratio
            )?;
        }
        write!(f, "}}")
    }
}
