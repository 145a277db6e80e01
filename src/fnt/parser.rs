use std::fmt;
use log::debug;
use crate::models::{AtlasInfo, GlyphRecord, NormalizedGlyph};
use super::tokenizer::FieldMap;
use super::uv::normalize;

const COMMON_PREFIX: &str = "common";
const CHAR_PREFIX: &str = "char";

/// Why a `common` or `char` line produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A required key is absent from the line
    MissingField(&'static str),
    /// A required key holds something other than an integer
    InvalidInteger { key: &'static str, value: String },
    /// A `common` line declares a zero-sized atlas
    InvalidAtlasSize { scale_w: u32, scale_h: u32 },
    /// A glyph with zero or negative width or height
    DegenerateGlyph { id: i32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField(key) => write!(f, "missing field '{}'", key),
            SkipReason::InvalidInteger { key, value } => {
                write!(f, "field '{}' is not an integer: '{}'", key, value)
            }
            SkipReason::InvalidAtlasSize { scale_w, scale_h } => {
                write!(f, "atlas size {}x{} is empty", scale_w, scale_h)
            }
            SkipReason::DegenerateGlyph { id } => write!(f, "glyph {} has no area", id),
        }
    }
}

/// What a single .fnt line contributes to the conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRecord {
    Atlas(AtlasInfo),
    Glyph(GlyphRecord),
    Skipped(SkipReason),
    /// Blank lines and records the converter does not consume
    Ignored,
}

/// Classify one line and extract the fields its record type needs
pub fn classify_line(line: &str) -> LineRecord {
    let line = line.trim();
    let result = if line.starts_with(COMMON_PREFIX) {
        parse_common(&FieldMap::parse(line)).map(LineRecord::Atlas)
    } else if line.starts_with(CHAR_PREFIX) {
        parse_char(&FieldMap::parse(line)).map(LineRecord::Glyph)
    } else {
        Ok(LineRecord::Ignored)
    };
    result.unwrap_or_else(LineRecord::Skipped)
}

fn parse_common(fields: &FieldMap<'_>) -> Result<AtlasInfo, SkipReason> {
    let scale_w = fields.uint("scaleW")?;
    let scale_h = fields.uint("scaleH")?;
    AtlasInfo::new(scale_w, scale_h).ok_or(SkipReason::InvalidAtlasSize { scale_w, scale_h })
}

fn parse_char(fields: &FieldMap<'_>) -> Result<GlyphRecord, SkipReason> {
    Ok(GlyphRecord {
        id: fields.int("id")?,
        x: fields.int("x")?,
        y: fields.int("y")?,
        width: fields.int("width")?,
        height: fields.int("height")?,
        xoffset: fields.int("xoffset")?,
        yoffset: fields.int("yoffset")?,
        xadvance: fields.int("xadvance")?,
    })
}

/// A line that was recognized but not used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Summary of what a parse consumed and what it passed over
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    /// Atlas in effect when the input ended
    pub atlas: AtlasInfo,
    /// Number of `common` lines that updated the atlas
    pub atlas_lines: usize,
    /// Number of glyphs that made it into the output
    pub glyph_count: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Degenerate glyphs dropped before normalization
    pub fn degenerate_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::DegenerateGlyph { .. }))
            .count()
    }

    /// Malformed `common`/`char` lines
    pub fn malformed_count(&self) -> usize {
        self.skipped.len() - self.degenerate_count()
    }
}

impl Default for ParseReport {
    fn default() -> Self {
        Self {
            atlas: AtlasInfo::default(),
            atlas_lines: 0,
            glyph_count: 0,
            skipped: Vec::new(),
        }
    }
}

/// Glyphs of a parsed font, sorted by id
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    pub glyphs: Vec<NormalizedGlyph>,
    pub report: ParseReport,
}

impl ParsedFont {
    pub fn atlas(&self) -> AtlasInfo {
        self.report.atlas
    }
}

/// Line-at-a-time .fnt reader.
///
/// Glyphs are normalized against the atlas in effect when their line is fed,
/// so a `common` line only affects the `char` lines after it.
#[derive(Debug)]
pub struct FntParser {
    flip_y: bool,
    atlas: AtlasInfo,
    line_number: usize,
    glyphs: Vec<NormalizedGlyph>,
    report: ParseReport,
}

impl FntParser {
    pub fn new(flip_y: bool) -> Self {
        Self {
            flip_y,
            atlas: AtlasInfo::default(),
            line_number: 0,
            glyphs: Vec::new(),
            report: ParseReport::default(),
        }
    }

    /// Atlas that the next glyph line will be normalized against
    pub fn current_atlas(&self) -> AtlasInfo {
        self.atlas
    }

    pub fn feed_line(&mut self, line: &str) {
        self.line_number += 1;
        match classify_line(line) {
            LineRecord::Atlas(atlas) => {
                debug!(
                    "Line {}: atlas size {}x{}",
                    self.line_number, atlas.scale_w, atlas.scale_h
                );
                self.atlas = atlas;
                self.report.atlas_lines += 1;
            }
            LineRecord::Glyph(record) if record.is_degenerate() => {
                self.skip(SkipReason::DegenerateGlyph { id: record.id });
            }
            LineRecord::Glyph(record) => {
                self.glyphs.push(normalize(&record, &self.atlas, self.flip_y));
            }
            LineRecord::Skipped(reason) => self.skip(reason),
            LineRecord::Ignored => {}
        }
    }

    fn skip(&mut self, reason: SkipReason) {
        debug!("Line {}: skipped, {}", self.line_number, reason);
        self.report.skipped.push(SkippedLine {
            line_number: self.line_number,
            reason,
        });
    }

    pub fn finish(mut self) -> ParsedFont {
        // Stable, so duplicate ids keep their input order.
        self.glyphs.sort_by_key(|glyph| glyph.id);
        self.report.atlas = self.atlas;
        self.report.glyph_count = self.glyphs.len();
        ParsedFont {
            glyphs: self.glyphs,
            report: self.report,
        }
    }
}

/// Lines of a .fnt file ending in `\n`, `\r\n` or a lone `\r`
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}

/// Parse the full text of a .fnt file
pub fn parse_fnt(text: &str, flip_y: bool) -> ParsedFont {
    let mut parser = FntParser::new(flip_y);
    for line in split_lines(text) {
        parser.feed_line(line);
    }
    parser.finish()
}
