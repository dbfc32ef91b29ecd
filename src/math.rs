//! Color math — direct HSV/RGB conversions without external dependencies.
//!
//! Hue is in degrees (0.0–360.0, where 360 wraps to 0). Saturation, value and
//! RGB channels are normalized f64 in 0.0–1.0.

/// HSV → RGB. `h` in degrees, `s` and `v` in 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h / 60.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Returns `(h, s, v)` with `h` in degrees `[0, 360)`.
///
/// Achromatic input (all channels equal) reports hue 0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    // rem_euclid can land on exactly 6.0 for tiny negative inputs
    let h = if h >= 360.0 { 0.0 } else { h };
    (h, s, v)
}

/// Clamp into `[min, max]`, mapping NaN to `min`.
pub(crate) fn saturate(x: f64, min: f64, max: f64) -> f64 {
    if x.is_nan() {
        min
    } else {
        x.clamp(min, max)
    }
}

/// Quantize a 0.0–1.0 channel to 8 bits, rounding to nearest.
pub(crate) fn to_u8(x: f64) -> u8 {
    (saturate(x, 0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn primaries_to_rgb() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert!(close(hsv_to_rgb(360.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn secondaries_to_hsv() {
        assert!(close(rgb_to_hsv(1.0, 1.0, 0.0), (60.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(0.0, 1.0, 1.0), (180.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(1.0, 0.0, 1.0), (300.0, 1.0, 1.0)));
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let (h, s, v) = rgb_to_hsv(0.5, 0.5, 0.5);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn black_is_fully_desaturated() {
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn saturate_maps_nan_to_lower_bound() {
        assert_eq!(saturate(f64::NAN, 0.0, 1.0), 0.0);
        assert_eq!(saturate(2.0, 0.0, 1.0), 1.0);
        assert_eq!(saturate(-1.0, 0.0, 360.0), 0.0);
    }
}
