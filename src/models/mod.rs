//! Data types shared across parsing, conversion and output

pub mod atlas;
pub mod config;
pub mod glyph;

pub use atlas::{AtlasInfo, DEFAULT_SCALE_H, DEFAULT_SCALE_W};
pub use config::Config;
pub use glyph::{GlyphIdentifier, GlyphRecord, NormalizedGlyph, SPACE_ID};
