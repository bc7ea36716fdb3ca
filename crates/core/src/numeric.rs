//! Numeric building blocks shared by the forward and inverse transforms.
//!
//! Everything here works on normalized floating point values. Rounding to the
//! integer model fields happens only through the helpers at the bottom of this
//! module, so every transform quantizes the same way.

use glam::{DMat3, DVec3};

use crate::model::Rgb;

/// CIE D65 reference white in XYZ, scaled so that Y = 100.
pub const D65_WHITE: DVec3 = DVec3::new(95.047, 100.0, 108.883);

/// Linear sRGB (BT.709 primaries) to CIE XYZ, stored column-major.
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// CIE XYZ to linear sRGB, stored column-major.
pub const XYZ_TO_SRGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2406, -0.9689, 0.0557),
    DVec3::new(-1.5372, 1.8758, -0.2040),
    DVec3::new(-0.4986, 0.0415, 1.0570),
);

/// Below this relative luminance the Lab transfer function is linear.
pub const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Denominators at or below this are treated as zero in the HSI hue formula.
pub const HSI_EPSILON: f64 = 0.00001;

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// The CIE Lab companding function `f(t)`.
pub fn lab_compand(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Inverse of [`lab_compand`]; the threshold is tested on the cubed value.
pub fn lab_expand(v: f64) -> f64 {
    let cubed = v * v * v;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (v - LAB_OFFSET) / LAB_SLOPE
    }
}

/// RGB channels scaled into [0, 1].
pub(crate) fn normalized(rgb: Rgb) -> (f64, f64, f64) {
    (
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

/// Hue in turns of the circle, from the channel holding the maximum.
///
/// `delta` must be non-zero. Ties on the maximum resolve in r, g, b order.
pub(crate) fn hue_turns(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sixths = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sixths / 6.0
}

/// Rounds a degree value and wraps it into [0, 360).
pub(crate) fn wrap_degrees(deg: f64) -> u16 {
    // rem_euclid keeps the result non-negative, so the narrowing cast is exact
    (deg.round() as i64).rem_euclid(360) as u16
}

/// Rounds a fraction in [0, 1] to a whole percentage.
pub(crate) fn to_percent(x: f64) -> u8 {
    (x * 100.0).round() as u8
}

/// Reads a percentage field as a fraction, clamping anything above 100.
pub(crate) fn from_percent(p: u8) -> f64 {
    f64::from(p.min(100)) / 100.0
}

/// Reads a hue field as degrees in [0, 360).
pub(crate) fn hue_degrees(h: u16) -> f64 {
    f64::from(h % 360)
}

/// Saturates a channel value into [0, 255] and rounds it.
pub(crate) fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Builds an RGB value from unit-range channels, saturating each one.
pub(crate) fn rgb_from_unit(r: f64, g: f64, b: f64) -> Rgb {
    Rgb {
        r: clamp_channel(r * 255.0),
        g: clamp_channel(g * 255.0),
        b: clamp_channel(b * 255.0),
    }
}
