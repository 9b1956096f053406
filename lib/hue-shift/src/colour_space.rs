//! RGB <-> HSV conversion
//!
//! Hue is expressed in degrees, saturation and value in percent. Both
//! directions work on 8-bit RGB triples so they can be fed straight from an
//! RGBA buffer.

/// A single color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Degrees, `[0, 360)` when produced by [`rgb_to_hsv`].
    pub hue: f64,
    /// Percent, `[0, 100]`.
    pub saturation: f64,
    /// Percent, `[0, 100]`.
    pub value: f64,
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        rgb_to_hsv(r, g, b)
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }

    /// Same saturation and value, different hue.
    pub fn with_hue(self, hue: f64) -> Self {
        Self { hue, ..self }
    }

    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}

/// Convert an 8-bit RGB triple to HSV.
///
/// The hue is rounded to a whole degree (halves round up) and folded into
/// `[0, 360)`. Gray pixels (`max == min`) get a hue of 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        // Truncated remainder: keeps the sign, fixed up below.
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hue = round_half_up(sector * 60.0);
    if hue < 0.0 {
        hue += 360.0;
    }
    if hue >= 360.0 {
        hue -= 360.0;
    }

    let saturation = if max == 0.0 {
        0.0
    } else {
        (delta / max) * 100.0
    };

    Hsv {
        hue,
        saturation,
        value: max * 100.0,
    }
}

/// Convert HSV back to an 8-bit RGB triple.
///
/// Any finite hue is accepted and wrapped into `[0, 360)` before the sector
/// is picked, so `hsv_to_rgb(h + 360.0, s, v) == hsv_to_rgb(h, s, v)`.
/// A non-finite hue is treated as 0. Saturation and value are clamped to
/// `[0, 100]`.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let hue = normalize_hue(hue);
    let s = percent(saturation);
    let v = percent(value);

    let c = v * s;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [to_channel(r + m), to_channel(g + m), to_channel(b + m)]
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);

    // rem_euclid of a tiny negative number can round up to exactly 360
    if hue >= 360.0 { 0.0 } else { hue }
}

#[inline]
fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}

#[inline]
fn percent(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, 100.0) / 100.0
    }
}

#[inline]
fn to_channel(n: f64) -> u8 {
    (n * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsv(hsv: Hsv, hue: f64, saturation: f64, value: f64) {
        assert_eq!(hsv.hue, hue, "hue of {hsv:?}");
        assert!(
            (hsv.saturation - saturation).abs() < 1e-9,
            "saturation of {hsv:?}"
        );
        assert!((hsv.value - value).abs() < 1e-9, "value of {hsv:?}");
    }

    #[test]
    fn test_primaries() {
        assert_hsv(rgb_to_hsv(255, 0, 0), 0.0, 100.0, 100.0);
        assert_hsv(rgb_to_hsv(0, 255, 0), 120.0, 100.0, 100.0);
        assert_hsv(rgb_to_hsv(0, 0, 255), 240.0, 100.0, 100.0);
    }

    #[test]
    fn test_secondaries() {
        assert_hsv(rgb_to_hsv(255, 255, 0), 60.0, 100.0, 100.0);
        assert_hsv(rgb_to_hsv(0, 255, 255), 180.0, 100.0, 100.0);
        assert_hsv(rgb_to_hsv(255, 0, 255), 300.0, 100.0, 100.0);
    }

    #[test]
    fn test_achromatic() {
        let hsv = rgb_to_hsv(128, 128, 128);
        assert_eq!(hsv.hue, 0.0);
        assert_eq!(hsv.saturation, 0.0);
        assert!((hsv.value - 50.2).abs() < 0.01);
        assert!(hsv.is_achromatic());

        for hue in [0.0, 45.0, 123.0, 200.0, 359.0] {
            assert_eq!(hsv_to_rgb(hue, 0.0, hsv.value), [128, 128, 128]);
        }
    }

    #[test]
    fn test_black_and_white() {
        assert_hsv(rgb_to_hsv(0, 0, 0), 0.0, 0.0, 0.0);
        assert_hsv(rgb_to_hsv(255, 255, 255), 0.0, 0.0, 100.0);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.0), [0, 0, 0]);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 100.0), [255, 255, 255]);
    }

    #[test]
    fn test_red_side_negative_hue_wraps() {
        // (0 - 10/255) * 60 = -2.35 -> -2 -> 358
        assert_eq!(rgb_to_hsv(255, 0, 10).hue, 358.0);

        // -0.235 rounds to 0, not to 360
        assert_eq!(rgb_to_hsv(255, 0, 1).hue, 0.0);
    }

    #[test]
    fn test_hue_stays_below_360() {
        for r in (0..=255u32).step_by(3) {
            for g in (0..=255u32).step_by(3) {
                for b in (0..=255u32).step_by(3) {
                    let hue = rgb_to_hsv(r as u8, g as u8, b as u8).hue;
                    assert!((0.0..360.0).contains(&hue), "({r}, {g}, {b}) -> {hue}");
                    assert_eq!(hue, hue.round());
                }
            }
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(180.0, 100.0, 100.0), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), [255, 0, 255]);
    }

    #[test]
    fn test_mid_sector() {
        assert_eq!(hsv_to_rgb(30.0, 100.0, 100.0), [255, 128, 0]);
        assert_eq!(hsv_to_rgb(210.0, 100.0, 100.0), [0, 128, 255]);
        assert_eq!(hsv_to_rgb(330.0, 100.0, 100.0), [255, 0, 128]);
    }

    #[test]
    fn test_out_of_range_hue_wraps() {
        for hue in [0.0, 30.0, 90.0, 150.0, 210.0, 270.0, 330.0] {
            let expected = hsv_to_rgb(hue, 80.0, 60.0);
            assert_eq!(hsv_to_rgb(hue + 360.0, 80.0, 60.0), expected);
            assert_eq!(hsv_to_rgb(hue + 720.0, 80.0, 60.0), expected);
            assert_eq!(hsv_to_rgb(hue - 360.0, 80.0, 60.0), expected);
        }

        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(-60.0, 100.0, 100.0), [255, 0, 255]);
    }

    #[test]
    fn test_degenerate_parameters() {
        assert_eq!(hsv_to_rgb(f64::NAN, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(f64::INFINITY, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 150.0, 200.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(120.0, -10.0, 100.0), [255, 255, 255]);
        assert_eq!(hsv_to_rgb(120.0, f64::NAN, 100.0), [255, 255, 255]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(f64::NEG_INFINITY), 0.0);
    }

    // Whole-degree hue rounding moves the middle channel by at most
    // 255 * 0.5 / 60 ~= 2.1, so the round trip is exact up to 2 levels.
    #[test]
    fn test_round_trip() {
        for r in (0..=255u32).step_by(5) {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(5) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let out = Hsv::from_rgb(r, g, b).to_rgb();

                    for (got, want) in out.iter().zip([r, g, b]) {
                        assert!(
                            (*got as i32 - want as i32).abs() <= 2,
                            "({r}, {g}, {b}) -> {out:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_exact_for_pure_colors() {
        for rgb in [
            [255, 0, 0],
            [255, 255, 0],
            [0, 255, 0],
            [0, 255, 255],
            [0, 0, 255],
            [255, 0, 255],
            [128, 128, 128],
            [0, 0, 0],
            [255, 255, 255],
        ] {
            assert_eq!(Hsv::from_rgb(rgb[0], rgb[1], rgb[2]).to_rgb(), rgb);
        }
    }

    #[test]
    fn test_with_hue_keeps_saturation_and_value() {
        let hsv = Hsv::from_rgb(200, 100, 50).with_hue(240.0);
        let [r, g, b] = hsv.to_rgb();
        let shifted = rgb_to_hsv(r, g, b);

        assert_eq!(shifted.hue, 240.0);
        assert!((shifted.saturation - hsv.saturation).abs() < 1.0);
        assert!((shifted.value - hsv.value).abs() < 1.0);
    }
}
