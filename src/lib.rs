//! Conversion of BMFont text `.fnt` metrics into `.fontdef` glyph tables.
//!
//! ```no_run
//! fnt2fontdef::convert("123.fnt", "output.fontdef", "MyBitmapFont", "123.png", false)?;
//! # Ok::<(), fnt2fontdef::Error>(())
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod fnt;
pub mod fontdef;
pub mod models;
pub mod utils;

pub use converter::{convert, convert_with_report, ConversionJob};
pub use error::{Error, Result};
pub use fnt::{ParseReport, SkipReason};
pub use models::{AtlasInfo, Config};
