//! Inverse transforms: each alternative model back to RGB.
//!
//! Hue fields wrap modulo 360 and percentage fields are clamped to 100 before
//! use. Lab and YCbCr are taken as given. Every output channel is saturated
//! into [0, 255] and rounded, so out-of-gamut input never fails.

use std::f64::consts::PI;

use glam::DVec3;

use crate::model::{Cmyk, Hsi, Hsl, Hsv, Lab, Rgb, YCbCr};
use crate::numeric::{
    clamp_channel, from_percent, hue_degrees, lab_expand, linear_component_to_srgb,
    rgb_from_unit, D65_WHITE, XYZ_TO_SRGB,
};

/// Converts HSV to RGB by the sector method.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hue_degrees(hsv.h) / 360.0;
    let s = from_percent(hsv.s);
    let v = from_percent(hsv.v);

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    rgb_from_unit(r, g, b)
}

/// One channel of HSL, `t` being the hue in turns shifted for that channel.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hue_degrees(hsl.h) / 360.0;
    let s = from_percent(hsl.s);
    let l = from_percent(hsl.l);

    if s == 0.0 {
        return rgb_from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    rgb_from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Converts HSI to RGB over three 120 degree sectors.
///
/// In each sector one channel is `i(1 - s)`, the next follows from the cosine
/// ratio, and the last is whatever keeps the channel sum at `3i`.
pub fn hsi_to_rgb(hsi: Hsi) -> Rgb {
    let h = hue_degrees(hsi.h);
    let s = from_percent(hsi.s);
    let i = from_percent(hsi.i);

    let floor = i * (1.0 - s);
    let lead = |shift_deg: f64| {
        let shifted = (h - shift_deg).to_radians();
        i * (1.0 + s * shifted.cos() / (PI / 3.0 - shifted).cos())
    };

    let (r, g, b) = if h < 120.0 {
        let r = lead(0.0);
        (r, 3.0 * i - (r + floor), floor)
    } else if h < 240.0 {
        let g = lead(120.0);
        (floor, g, 3.0 * i - (floor + g))
    } else {
        let b = lead(240.0);
        (3.0 * i - (floor + b), floor, b)
    };
    rgb_from_unit(r, g, b)
}

/// Converts CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = from_percent(cmyk.k);
    let channel = |ink: u8| clamp_channel(255.0 * (1.0 - from_percent(ink)) * (1.0 - k));
    Rgb {
        r: channel(cmyk.c),
        g: channel(cmyk.m),
        b: channel(cmyk.y),
    }
}

/// Converts CIE L*a*b* (D65) to RGB, saturating out-of-gamut results.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (f64::from(lab.l) + 16.0) / 116.0;
    let fx = f64::from(lab.a) / 500.0 + fy;
    let fz = fy - f64::from(lab.b) / 200.0;

    let xyz = DVec3::new(lab_expand(fx), lab_expand(fy), lab_expand(fz)) * D65_WHITE / 100.0;
    let linear = XYZ_TO_SRGB * xyz;

    rgb_from_unit(
        linear_component_to_srgb(linear.x),
        linear_component_to_srgb(linear.y),
        linear_component_to_srgb(linear.z),
    )
}

/// Converts full-range BT.601 YCbCr to RGB.
pub fn ycbcr_to_rgb(ycc: YCbCr) -> Rgb {
    let y = f64::from(ycc.y);
    let cb = f64::from(ycc.cb) - 128.0;
    let cr = f64::from(ycc.cr) - 128.0;
    Rgb {
        r: clamp_channel(y + 1.402 * cr),
        g: clamp_channel(y - 0.344136 * cb - 0.714136 * cr),
        b: clamp_channel(y + 1.772 * cb),
    }
}
