//! Forward transforms: RGB to each alternative model.
//!
//! All functions are pure and total over 8-bit RGB. Achromatic inputs resolve
//! hue (and where relevant saturation) to 0 instead of dividing by zero.

use glam::DVec3;

use crate::model::{Cmyk, Hsi, Hsl, Hsv, Lab, Rgb, YCbCr};
use crate::numeric::{
    hue_turns, lab_compand, normalized, srgb_component_to_linear, to_percent, wrap_degrees,
    D65_WHITE, HSI_EPSILON, SRGB_TO_XYZ,
};

/// Converts RGB to HSV by max/min chroma decomposition.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = normalized(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if max == min {
        0.0
    } else {
        hue_turns(r, g, b, max, delta)
    };

    Hsv {
        h: wrap_degrees(h * 360.0),
        s: to_percent(s),
        v: to_percent(max),
    }
}

/// Converts RGB to HSL; saturation switches formula at half lightness.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = normalized(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        (hue_turns(r, g, b, max, delta), s)
    };

    Hsl {
        h: wrap_degrees(h * 360.0),
        s: to_percent(s),
        l: to_percent(l),
    }
}

/// Converts RGB to HSI using the geometric hue formula.
///
/// Hue stays 0 when saturation is 0 or the hue denominator is too small to
/// divide by safely.
pub fn rgb_to_hsi(rgb: Rgb) -> Hsi {
    let (r, g, b) = normalized(rgb);
    let sum = r + g + b;
    let i = sum / 3.0;

    let s = if sum > 0.0 {
        1.0 - 3.0 * r.min(g).min(b) / sum
    } else {
        0.0
    };

    let mut h = 0.0;
    if s > 0.0 {
        let num = 0.5 * ((r - g) + (r - b));
        let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
        if den > HSI_EPSILON {
            let theta = (num / den).clamp(-1.0, 1.0).acos();
            let theta = if b > g {
                std::f64::consts::TAU - theta
            } else {
                theta
            };
            h = theta.to_degrees();
        }
    }

    Hsi {
        h: wrap_degrees(h),
        s: to_percent(s),
        i: to_percent(i),
    }
}

/// Converts RGB to CMYK with the ink re-normalized against black.
///
/// After re-normalization at least one of `c`, `m`, `y` is always 0.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::new(0, 0, 0) {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let (r, g, b) = normalized(rgb);
    let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
    let k = c.min(m).min(y);
    let ink = |x: f64| (x - k) / (1.0 - k);

    Cmyk {
        c: to_percent(ink(c)),
        m: to_percent(ink(m)),
        y: to_percent(ink(y)),
        k: to_percent(k),
    }
}

/// Converts RGB to CIE L*a*b* (D65) via linear RGB and XYZ.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let (r, g, b) = normalized(rgb);
    let linear = DVec3::new(
        srgb_component_to_linear(r),
        srgb_component_to_linear(g),
        srgb_component_to_linear(b),
    );
    let xyz = SRGB_TO_XYZ * linear * 100.0 / D65_WHITE;

    let fx = lab_compand(xyz.x);
    let fy = lab_compand(xyz.y);
    let fz = lab_compand(xyz.z);

    Lab {
        l: (116.0 * fy - 16.0).round() as i16,
        a: (500.0 * (fx - fy)).round() as i16,
        b: (200.0 * (fy - fz)).round() as i16,
    }
}

/// Converts RGB to full-range BT.601 YCbCr. Rounded, never clamped.
pub fn rgb_to_ycbcr(rgb: Rgb) -> YCbCr {
    let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b;

    YCbCr {
        y: y.round() as i16,
        cb: cb.round() as i16,
        cr: cr.round() as i16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const ROYAL_BLUE: Rgb = Rgb::new(65, 105, 225);

    // -- HSV --

    #[test]
    fn hsv_pure_red() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv { h: 0, s: 100, v: 100 });
    }

    #[test]
    fn hsv_primaries_land_on_sextant_offsets() {
        assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)).h, 120);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)).h, 240);
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 255)).h, 300);
    }

    #[test]
    fn hsv_known_color() {
        assert_eq!(rgb_to_hsv(ROYAL_BLUE), Hsv { h: 225, s: 71, v: 88 });
    }

    #[test]
    fn hsv_achromatic_fixed_points() {
        assert_eq!(rgb_to_hsv(BLACK), Hsv { h: 0, s: 0, v: 0 });
        assert_eq!(rgb_to_hsv(WHITE), Hsv { h: 0, s: 0, v: 100 });
        assert_eq!(rgb_to_hsv(Rgb::new(128, 128, 128)), Hsv { h: 0, s: 0, v: 50 });
    }

    #[test]
    fn hsv_hue_near_full_turn_wraps_to_zero() {
        // (g - b) / d + 6 = 5.996..., which rounds to 360 degrees
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 1));
        assert_eq!(hsv.h, 0, "expected wrapped hue, got {hsv:?}");
    }

    // -- HSL --

    #[test]
    fn hsl_known_color() {
        assert_eq!(rgb_to_hsl(ROYAL_BLUE), Hsl { h: 225, s: 73, l: 57 });
    }

    #[test]
    fn hsl_saturation_branches_on_lightness() {
        // dark red: l < 0.5 uses d / (max + min)
        assert_eq!(rgb_to_hsl(Rgb::new(128, 0, 0)), Hsl { h: 0, s: 100, l: 25 });
        // pale red: l > 0.5 uses d / (2 - max - min)
        assert_eq!(rgb_to_hsl(Rgb::new(255, 128, 128)), Hsl { h: 0, s: 100, l: 75 });
    }

    #[test]
    fn hsl_achromatic_fixed_points() {
        assert_eq!(rgb_to_hsl(BLACK), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(rgb_to_hsl(WHITE), Hsl { h: 0, s: 0, l: 100 });
    }

    // -- HSI --

    #[test]
    fn hsi_primaries() {
        assert_eq!(rgb_to_hsi(Rgb::new(255, 0, 0)), Hsi { h: 0, s: 100, i: 33 });
        assert_eq!(rgb_to_hsi(Rgb::new(0, 255, 0)), Hsi { h: 120, s: 100, i: 33 });
        assert_eq!(rgb_to_hsi(Rgb::new(0, 0, 255)), Hsi { h: 240, s: 100, i: 33 });
    }

    #[test]
    fn hsi_known_color() {
        assert_eq!(rgb_to_hsi(ROYAL_BLUE), Hsi { h: 226, s: 51, i: 52 });
    }

    #[test]
    fn hsi_achromatic_fixed_points() {
        assert_eq!(rgb_to_hsi(BLACK), Hsi { h: 0, s: 0, i: 0 });
        assert_eq!(rgb_to_hsi(WHITE), Hsi { h: 0, s: 0, i: 100 });
        assert_eq!(rgb_to_hsi(Rgb::new(77, 77, 77)).h, 0);
    }

    // -- CMYK --

    #[test]
    fn cmyk_black_is_pure_key() {
        assert_eq!(rgb_to_cmyk(BLACK), Cmyk { c: 0, m: 0, y: 0, k: 100 });
    }

    #[test]
    fn cmyk_white_is_no_ink() {
        assert_eq!(rgb_to_cmyk(WHITE), Cmyk { c: 0, m: 0, y: 0, k: 0 });
    }

    #[test]
    fn cmyk_known_color() {
        assert_eq!(rgb_to_cmyk(ROYAL_BLUE), Cmyk { c: 71, m: 53, y: 0, k: 12 });
    }

    #[test]
    fn cmyk_pure_red() {
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk { c: 0, m: 100, y: 100, k: 0 });
    }

    // -- Lab --

    #[test]
    fn lab_white_is_reference_white() {
        assert_eq!(rgb_to_lab(WHITE), Lab { l: 100, a: 0, b: 0 });
    }

    #[test]
    fn lab_black_is_origin() {
        assert_eq!(rgb_to_lab(BLACK), Lab { l: 0, a: 0, b: 0 });
    }

    #[test]
    fn lab_primaries() {
        assert_eq!(rgb_to_lab(Rgb::new(255, 0, 0)), Lab { l: 53, a: 80, b: 67 });
        assert_eq!(rgb_to_lab(Rgb::new(0, 255, 0)), Lab { l: 88, a: -86, b: 83 });
        assert_eq!(rgb_to_lab(Rgb::new(0, 0, 255)), Lab { l: 32, a: 79, b: -108 });
    }

    #[test]
    fn lab_known_color() {
        assert_eq!(rgb_to_lab(ROYAL_BLUE), Lab { l: 48, a: 26, b: -65 });
    }

    // -- YCbCr --

    #[test]
    fn ycbcr_black_is_neutral_chroma() {
        assert_eq!(rgb_to_ycbcr(BLACK), YCbCr { y: 0, cb: 128, cr: 128 });
    }

    #[test]
    fn ycbcr_white_is_full_luma() {
        assert_eq!(rgb_to_ycbcr(WHITE), YCbCr { y: 255, cb: 128, cr: 128 });
    }

    #[test]
    fn ycbcr_known_color() {
        assert_eq!(rgb_to_ycbcr(ROYAL_BLUE), YCbCr { y: 107, cb: 195, cr: 98 });
    }

    #[test]
    fn ycbcr_is_rounded_not_clamped() {
        assert_eq!(rgb_to_ycbcr(Rgb::new(0, 0, 255)).cb, 256);
        assert_eq!(rgb_to_ycbcr(Rgb::new(255, 0, 0)).cr, 256);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb { r, g, b })
        }

        proptest! {
            #[test]
            fn hue_models_stay_in_range(rgb in any_rgb()) {
                let hsv = rgb_to_hsv(rgb);
                prop_assert!(hsv.h < 360 && hsv.s <= 100 && hsv.v <= 100, "{hsv:?}");
                let hsl = rgb_to_hsl(rgb);
                prop_assert!(hsl.h < 360 && hsl.s <= 100 && hsl.l <= 100, "{hsl:?}");
                let hsi = rgb_to_hsi(rgb);
                prop_assert!(hsi.h < 360 && hsi.s <= 100 && hsi.i <= 100, "{hsi:?}");
            }

            #[test]
            fn cmyk_stays_in_range_with_one_zero_ink(rgb in any_rgb()) {
                let cmyk = rgb_to_cmyk(rgb);
                prop_assert!(
                    cmyk.c <= 100 && cmyk.m <= 100 && cmyk.y <= 100 && cmyk.k <= 100,
                    "{cmyk:?}"
                );
                prop_assert!(
                    cmyk.c == 0 || cmyk.m == 0 || cmyk.y == 0,
                    "no zero ink in {cmyk:?} for {rgb:?}"
                );
            }

            #[test]
            fn lab_stays_in_practical_range(rgb in any_rgb()) {
                let lab = rgb_to_lab(rgb);
                prop_assert!((0..=100).contains(&lab.l), "{lab:?}");
                prop_assert!((-128..=127).contains(&lab.a), "{lab:?}");
                prop_assert!((-128..=127).contains(&lab.b), "{lab:?}");
            }

            #[test]
            fn ycbcr_stays_within_rounding_of_range(rgb in any_rgb()) {
                let ycc = rgb_to_ycbcr(rgb);
                prop_assert!((0..=255).contains(&ycc.y), "{ycc:?}");
                prop_assert!((0..=256).contains(&ycc.cb), "{ycc:?}");
                prop_assert!((0..=256).contains(&ycc.cr), "{ycc:?}");
            }

            #[test]
            fn ycbcr_luma_is_monotonic_in_red(g in any::<u8>(), b in any::<u8>(), r in 0u8..255) {
                let lower = rgb_to_ycbcr(Rgb { r, g, b });
                let higher = rgb_to_ycbcr(Rgb { r: r + 1, g, b });
                prop_assert!(higher.y >= lower.y, "{lower:?} -> {higher:?}");
            }

            #[test]
            fn gray_is_achromatic_everywhere(v in any::<u8>()) {
                let gray = Rgb { r: v, g: v, b: v };
                let hsv = rgb_to_hsv(gray);
                prop_assert_eq!((hsv.h, hsv.s), (0, 0));
                let hsl = rgb_to_hsl(gray);
                prop_assert_eq!((hsl.h, hsl.s), (0, 0));
                let hsi = rgb_to_hsi(gray);
                prop_assert_eq!((hsi.h, hsi.s), (0, 0));
            }
        }
    }
}
