/// Atlas width assumed until a `common` record declares one
pub const DEFAULT_SCALE_W: u32 = 256;
/// Atlas height assumed until a `common` record declares one
pub const DEFAULT_SCALE_H: u32 = 256;

/// Pixel dimensions of the texture atlas backing a bitmap font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasInfo {
    /// Atlas width in pixels
    pub scale_w: u32,
    /// Atlas height in pixels
    pub scale_h: u32,
}

impl AtlasInfo {
    /// Returns `None` when either dimension is zero.
    pub fn new(scale_w: u32, scale_h: u32) -> Option<Self> {
        if scale_w == 0 || scale_h == 0 {
            return None;
        }
        Some(Self { scale_w, scale_h })
    }

    /// Width over height of the whole atlas
    pub fn aspect(&self) -> f64 {
        f64::from(self.scale_w) / f64::from(self.scale_h)
    }
}

impl Default for AtlasInfo {
    fn default() -> Self {
        Self {
            scale_w: DEFAULT_SCALE_W,
            scale_h: DEFAULT_SCALE_H,
        }
    }
}
