//! BMFont text format reading and UV normalization

pub mod parser;
pub mod tokenizer;
pub mod uv;

pub use parser::{
    classify_line, parse_fnt, FntParser, LineRecord, ParseReport, ParsedFont, SkipReason,
    SkippedLine,
};
pub use tokenizer::FieldMap;
pub use uv::{normalize, round_uv};
