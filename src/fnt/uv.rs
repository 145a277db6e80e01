use crate::models::{AtlasInfo, GlyphRecord, NormalizedGlyph};

/// Decimal places kept for every emitted coordinate
pub const UV_DECIMALS: i32 = 6;

/// Round to `UV_DECIMALS` places, ties to even.
///
/// Rounds the exact decimal value of `value`. Scaling by 10^6 first would
/// round the product instead, which lands on a false tie for atlas widths
/// such as 640 or 1280.
pub fn round_uv(value: f64) -> f64 {
    format!("{:.*}", UV_DECIMALS as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Top edge of a glyph after moving the origin to the bottom-left corner
pub fn flipped_y(record: &GlyphRecord, atlas: &AtlasInfo) -> i64 {
    i64::from(atlas.scale_h) - i64::from(record.y) - i64::from(record.height)
}

/// Map a glyph's pixel rectangle into texture space.
///
/// The caller filters degenerate glyphs first; a zero height would make the
/// aspect ratio undefined.
pub fn normalize(record: &GlyphRecord, atlas: &AtlasInfo, flip_y: bool) -> NormalizedGlyph {
    let scale_w = f64::from(atlas.scale_w);
    let scale_h = f64::from(atlas.scale_h);

    let x = f64::from(record.x);
    let y = if flip_y {
        flipped_y(record, atlas) as f64
    } else {
        f64::from(record.y)
    };
    let width = f64::from(record.width);
    let height = f64::from(record.height);

    let u1 = x / scale_w;
    let v1 = y / scale_h;
    let u2 = (x + width) / scale_w;
    let v2 = (y + height) / scale_h;
    let aspect_ratio = atlas.aspect() * (u2 - u1) / (v2 - v1);

    NormalizedGlyph {
        id: record.id,
        u1: round_uv(u1),
        v1: round_uv(v1),
        u2: round_uv(u2),
        v2: round_uv(v2),
        aspect_ratio: round_uv(aspect_ratio),
        width: record.width,
        height: record.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: i32, y: i32, width: i32, height: i32) -> GlyphRecord {
        GlyphRecord {
            id: 65,
            x,
            y,
            width,
            height,
            xoffset: 0,
            yoffset: -2,
            xadvance: 9,
        }
    }

    fn atlas(w: u32, h: u32) -> AtlasInfo {
        AtlasInfo::new(w, h).unwrap()
    }

    #[test]
    fn test_normalize_without_flip() {
        let n = normalize(&glyph(10, 20, 8, 12), &atlas(128, 128), false);
        assert_eq!(n.u1, 0.078125);
        assert_eq!(n.v1, 0.15625);
        assert_eq!(n.u2, 0.140625);
        assert_eq!(n.v2, 0.25);
        assert_eq!(n.aspect_ratio, 0.666667);
    }

    #[test]
    fn test_normalize_with_flip() {
        let n = normalize(&glyph(10, 20, 8, 12), &atlas(128, 128), true);
        assert_eq!(n.u1, 0.078125);
        assert_eq!(n.u2, 0.140625);
        assert_eq!(n.v1, 0.75);
        assert_eq!(n.v2, 0.84375);
        assert_eq!(n.aspect_ratio, 0.666667);
    }

    #[test]
    fn test_aspect_ratio_matches_pixels_on_wide_atlas() {
        let samples = [(0, 0, 7, 13), (100, 3, 31, 9), (250, 60, 5, 40), (17, 90, 64, 1)];
        for &(x, y, w, h) in &samples {
            for flip in [false, true] {
                let n = normalize(&glyph(x, y, w, h), &atlas(512, 128), flip);
                let expected = f64::from(w) / f64::from(h);
                assert!((n.aspect_ratio - expected).abs() < 1e-6, "{:?}", (x, y, w, h, flip));
            }
        }
    }

    #[test]
    fn test_uv_recovers_pixels() {
        let a = atlas(300, 200);
        let n = normalize(&glyph(37, 51, 19, 23), &a, false);
        let tolerance = f64::from(a.scale_w) * 1e-6;
        assert!((n.u1 * 300.0 - 37.0).abs() <= tolerance);
        assert!(((n.u2 - n.u1) * 300.0 - 19.0).abs() <= 2.0 * tolerance);
        assert!(n.u1 < n.u2);
        assert!(n.v1 < n.v2);
    }

    #[test]
    fn test_flip_uses_atlas_height() {
        assert_eq!(flipped_y(&glyph(0, 20, 8, 12), &atlas(128, 128)), 96);
        assert_eq!(flipped_y(&glyph(0, 0, 8, 256), &atlas(64, 256)), 0);
    }

    #[test]
    fn test_round_uv_ties_to_even() {
        assert_eq!(round_uv(0.6666666), 0.666667);
        assert_eq!(round_uv(0.0), 0.0);
        assert_eq!(round_uv(-0.0039062), -0.003906);
        assert_eq!(round_uv(0.0078125), 0.007812);
    }

    #[test]
    fn test_round_uv_on_non_power_of_two_widths() {
        // 1/640 is stored just above the decimal tie.
        assert_eq!(round_uv(2.0 / 1280.0), 0.001563);
        assert_eq!(round_uv(1.0 / 640.0), 0.001563);
        assert_eq!(round_uv(6.0 / 1280.0), 0.004687);
    }

    #[test]
    fn test_normalize_on_1280_atlas() {
        let n = normalize(&glyph(2, 6, 8, 8), &atlas(1280, 1280), false);
        let text = format!("{:.6} {:.6} {:.6} {:.6} {:.6}", n.u1, n.v1, n.u2, n.v2, n.aspect_ratio);
        assert_eq!(text, "0.001563 0.004687 0.007812 0.010937 1.000000");
    }
}
