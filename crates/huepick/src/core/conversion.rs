use crate::Float;

/// Wrap the hue into the half-open range `0..360`.
///
/// # Examples
///
/// ```
/// # use huepick::normalize_hue;
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// assert_eq!(normalize_hue(390.0), 30.0);
/// assert_eq!(normalize_hue(720.0), 0.0);
/// ```
#[inline]
pub fn normalize_hue(hue: Float) -> Float {
    // Adding zero turns negative zero into zero.
    let h = hue.rem_euclid(360.0) + 0.0;
    // rem_euclid may round tiny negative inputs up to exactly 360.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Round a unit-range coordinate to an 8-bit channel, clamping to
/// `0x00..=0xff`.
#[inline]
pub(crate) fn to_channel(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSV coordinates to 24-bit RGB.
///
/// The hue is in degrees, saturation and value have unit range. The
/// conversion uses the chroma `c = v·s`, the intermediate `x = c·(1 - |(h/60)
/// mod 2 - 1|)`, and the offset `m = v - c`, selecting one of six 60º sectors.
/// Each channel is rounded on its own, so chained conversions may drift by up
/// to 1/255.
pub fn hsv_to_rgb(hsv: &[Float; 3]) -> [u8; 3] {
    let [h, s, v] = *hsv;
    let h = normalize_hue(h);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [to_channel(r + m), to_channel(g + m), to_channel(b + m)]
}

/// Convert 24-bit RGB to HSV coordinates.
///
/// The hue is determined by the maximal channel and normalized to `0..360`.
/// It is zero for achromatic colors. Saturation is zero for black.
pub fn rgb_to_hsv(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = rgb.map(|c| c as Float / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let h = if diff == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / diff).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / diff + 2.0)
    } else {
        60.0 * ((r - g) / diff + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { diff / max };

    [normalize_hue(h), s, max]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSV coordinates to HSL coordinates. This is a one-hop, direct
/// conversion that leaves the hue as is.
///
/// Lightness is `v·(1 - s/2)`. For black and white, i.e., lightness 0 or 1,
/// saturation is forced to zero.
pub fn hsv_to_hsl(hsv: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *hsv;

    let l = v * (1.0 - s / 2.0);
    let s = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };

    [h, s, l]
}

/// Convert HSL coordinates to HSV coordinates. This is a one-hop, direct
/// conversion that leaves the hue as is.
pub fn hsl_to_hsv(hsl: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *hsl;

    let v = l + s * l.min(1.0 - l);
    let s = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [h, s, v]
}

/// Convert 24-bit RGB to HSL coordinates with unit-range saturation and
/// lightness.
pub fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    hsv_to_hsl(&rgb_to_hsv(rgb))
}

/// Convert HSL coordinates with unit-range saturation and lightness to 24-bit
/// RGB.
pub fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    hsv_to_rgb(&hsl_to_hsv(hsl))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsv,
    };
    use crate::core::equality::assert_within;
    use crate::Float;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const PRIMARIES: [([u8; 3], [Float; 3]); 8] = [
        ([0, 0, 0], [0.0, 0.0, 0.0]),
        ([255, 255, 255], [0.0, 0.0, 1.0]),
        ([255, 0, 0], [0.0, 1.0, 1.0]),
        ([255, 255, 0], [60.0, 1.0, 1.0]),
        ([0, 255, 0], [120.0, 1.0, 1.0]),
        ([0, 255, 255], [180.0, 1.0, 1.0]),
        ([0, 0, 255], [240.0, 1.0, 1.0]),
        ([255, 0, 255], [300.0, 1.0, 1.0]),
    ];

    #[test]
    fn test_primaries() {
        for (rgb, hsv) in PRIMARIES {
            assert_eq!(hsv_to_rgb(&hsv), rgb);
            assert_eq!(rgb_to_hsv(&rgb), hsv);
        }

        assert_eq!(hsv_to_rgb(&[360.0, 1.0, 1.0]), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(&[-120.0, 1.0, 1.0]), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(&[0.0, 0.0, 0.5]), [128, 128, 128]);
    }

    #[test]
    fn test_rgb_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..10_000 {
            let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let again = hsv_to_rgb(&rgb_to_hsv(&rgb));
            for (c1, c2) in rgb.iter().zip(again.iter()) {
                assert!(c1.abs_diff(*c2) <= 1, "{:?} became {:?}", rgb, again);
            }
        }
    }

    #[test]
    fn test_hsl() {
        // Pure red, lightness 50%
        let [h, s, l] = hsv_to_hsl(&[0.0, 1.0, 1.0]);
        assert_eq!([h, s, l], [0.0, 1.0, 0.5]);
        assert_eq!(hsl_to_hsv(&[h, s, l]), [0.0, 1.0, 1.0]);

        // Black and white have no saturation
        assert_eq!(hsv_to_hsl(&[200.0, 0.7, 0.0]), [200.0, 0.0, 0.0]);
        assert_eq!(hsv_to_hsl(&[200.0, 0.0, 1.0]), [200.0, 0.0, 1.0]);
        assert_eq!(hsl_to_hsv(&[200.0, 0.7, 0.0]), [200.0, 0.0, 0.0]);

        // #abcdef is hsl(210, 68%, 80%)
        let [h, s, l] = rgb_to_hsl(&[0xab, 0xcd, 0xef]);
        assert_within!(h, 210.0, 1e-9);
        assert_within!(s, 0.68, 1e-9);
        assert_within!(l, 0.803921568627451, 1e-9);

        assert_eq!(hsl_to_rgb(&[240.0, 1.0, 0.5]), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 1.0]), [255, 255, 255]);
    }

    #[test]
    fn test_hsl_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let hsv: [Float; 3] = [
                rng.random_range(0.0..360.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.01..1.0),
            ];
            let [h, s, v] = hsl_to_hsv(&hsv_to_hsl(&hsv));
            assert_within!(h, hsv[0], 1e-9);
            assert_within!(s, hsv[1], 1e-6);
            assert_within!(v, hsv[2], 1e-9);
        }
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(390.0), 30.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(359.5), 359.5);
        assert!(normalize_hue(-0.0).is_sign_positive());
    }
}
