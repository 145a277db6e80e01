use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::Result;
use crate::fnt::{parse_fnt, ParseReport};
use crate::fontdef::FontDefinition;
use crate::models::Config;
use crate::utils::{
    default_font_name,
    default_image_file,
    default_output_path,
    read_text,
    write_atomically,
};

/// Convert a BMFont text file into a .fontdef file.
///
/// Malformed `common`/`char` lines are skipped silently; only failing to
/// read `fnt_path` or to write `output_path` is an error.
pub fn convert(
    fnt_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    font_name: &str,
    image_file: &str,
    flip_y: bool,
) -> Result<()> {
    convert_with_report(fnt_path, output_path, font_name, image_file, flip_y).map(|_| ())
}

/// Same as [`convert`], also returning what the parser consumed and skipped
pub fn convert_with_report(
    fnt_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    font_name: &str,
    image_file: &str,
    flip_y: bool,
) -> Result<ParseReport> {
    let fnt_path = fnt_path.as_ref();
    let output_path = output_path.as_ref();

    debug!("Reading {}", fnt_path.display());
    let text = read_text(fnt_path)?;
    let font = parse_fnt(&text, flip_y);

    let definition = FontDefinition::new(font_name, image_file, font.atlas(), &font.glyphs);
    write_atomically(output_path, &definition.render())?;

    debug!(
        "Wrote {} glyphs to {} ({} skipped)",
        font.report.glyph_count,
        output_path.display(),
        font.report.skipped.len()
    );
    Ok(font.report)
}

/// One input/output pairing with the names to embed in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub font_name: String,
    pub image_file: String,
}

impl ConversionJob {
    /// Job with every setting derived from the input file name
    pub fn from_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: default_output_path(&input),
            font_name: default_font_name(&input),
            image_file: default_image_file(&input),
            input,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    pub fn with_image_file(mut self, image_file: impl Into<String>) -> Self {
        self.image_file = image_file.into();
        self
    }

    pub fn run(&self, config: &Config) -> Result<ParseReport> {
        let report = convert_with_report(
            &self.input,
            &self.output,
            &self.font_name,
            &self.image_file,
            config.flip_y,
        )?;
        info!(
            "{} -> {} ({} glyphs)",
            self.input.display(),
            self.output.display(),
            report.glyph_count
        );
        Ok(report)
    }
}
