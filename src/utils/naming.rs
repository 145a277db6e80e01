use std::path::{Path, PathBuf};

/// Extension given to generated font definitions
pub const FONTDEF_EXTENSION: &str = "fontdef";
/// Extension assumed for the atlas texture when none is given
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Clean a name for use as a single .fontdef token
pub fn clean_name(name: &str) -> String {
    // Whitespace would split the token, braces would break the block
    let invalid_chars = ['{', '}', '<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || invalid_chars.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let cleaned = cleaned.trim_matches('.').to_string();

    if cleaned.is_empty() {
        "Unknown".to_string()
    } else {
        cleaned
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Font name derived from the .fnt file name
pub fn default_font_name(fnt_path: &Path) -> String {
    clean_name(&file_stem(fnt_path))
}

/// Texture file name a BMFont export usually ships next to its .fnt
pub fn default_image_file(fnt_path: &Path) -> String {
    format!("{}.{}", file_stem(fnt_path), DEFAULT_IMAGE_EXTENSION)
}

/// Output path next to the input, with the .fontdef extension
pub fn default_output_path(fnt_path: &Path) -> PathBuf {
    fnt_path.with_extension(FONTDEF_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("My Font"), "My_Font");
        assert_eq!(clean_name("  Arial{Bold}  "), "Arial_Bold_");
        assert_eq!(clean_name("..."), "Unknown");
        assert_eq!(clean_name(""), "Unknown");
        assert_eq!(clean_name("Pixel_8x8"), "Pixel_8x8");
    }

    #[test]
    fn test_defaults_from_input_path() {
        let path = Path::new("assets/fonts/Game Font.fnt");
        assert_eq!(default_font_name(path), "Game_Font");
        assert_eq!(default_image_file(path), "Game Font.png");
        assert_eq!(
            default_output_path(path),
            PathBuf::from("assets/fonts/Game Font.fontdef")
        );
    }

    #[test]
    fn test_defaults_without_extension() {
        let path = Path::new("123");
        assert_eq!(default_font_name(path), "123");
        assert_eq!(default_image_file(path), "123.png");
        assert_eq!(default_output_path(path), PathBuf::from("123.fontdef"));
    }
}
