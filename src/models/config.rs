/// Configuration shared by every conversion in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Remap glyph rows from a top-left origin to a bottom-left origin
    pub flip_y: bool,
}

impl Config {
    /// Create a new configuration
    pub fn new(debug_mode: bool, flip_y: bool) -> Self {
        Self { debug_mode, flip_y }
    }
}
