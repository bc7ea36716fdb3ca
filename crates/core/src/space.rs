//! Positions of colors inside the 3D solid of each model.
//!
//! Each model is laid out as its textbook solid (cube, cylinder, double cone
//! or opponent-axis blob) scaled to roughly [-1, 1] on every axis, with the
//! lightness-like quantity on `y`. Rotation, projection and drawing are left
//! to the renderer consuming these points.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;
use crate::model::{ColorModel, Rgb};

/// A sampled color and where it sits in its model's solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamutPoint {
    pub position: DVec3,
    pub hex: String,
}

/// Point on a cylinder: hue is the angle, `radius` in [0, 1], `height` in [0, 1].
fn cylindrical(hue: u16, radius: f64, height: f64) -> DVec3 {
    let angle = f64::from(hue).to_radians();
    DVec3::new(angle.cos() * radius, height * 2.0 - 1.0, angle.sin() * radius)
}

/// Maps `[0, 255]` onto `[-1, 1]`.
fn unit_axis(channel: f64) -> f64 {
    channel / 255.0 * 2.0 - 1.0
}

/// Position of `rgb` inside the solid of `model`.
pub fn position(model: ColorModel, rgb: Rgb) -> DVec3 {
    let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
    match Color::from_rgb(model, rgb) {
        Color::Rgb(_) => DVec3::new(unit_axis(r), unit_axis(g), unit_axis(b)),
        // CMY cube, inverted RGB
        Color::Cmyk(_) => DVec3::new(unit_axis(255.0 - r), unit_axis(255.0 - g), unit_axis(255.0 - b)),
        Color::Hsv(c) => cylindrical(c.h, f64::from(c.s) / 100.0, f64::from(c.v) / 100.0),
        Color::Hsi(c) => cylindrical(c.h, f64::from(c.s) / 100.0, f64::from(c.i) / 100.0),
        Color::Hsl(c) => {
            let l = f64::from(c.l) / 100.0;
            let radius = f64::from(c.s) / 100.0 * (1.0 - (2.0 * l - 1.0).abs());
            cylindrical(c.h, radius, l)
        }
        Color::Lab(c) => DVec3::new(
            f64::from(c.a) / 128.0,
            f64::from(c.l) / 100.0 * 2.0 - 1.0,
            f64::from(c.b) / 128.0,
        ),
        Color::YCbCr(c) => DVec3::new(
            (f64::from(c.cb) - 128.0) / 128.0,
            unit_axis(f64::from(c.y)),
            (f64::from(c.cr) - 128.0) / 128.0,
        ),
    }
}

/// Samples the RGB cube every `step` levels per channel and places each
/// sample in the solid of `model`.
///
/// Returns `ColorError::InvalidSampleStep` for a step of 0.
pub fn sample_gamut(model: ColorModel, step: u8) -> Result<Vec<GamutPoint>, ColorError> {
    if step == 0 {
        return Err(ColorError::InvalidSampleStep(step));
    }
    let levels: Vec<u8> = (0..=u8::MAX).step_by(usize::from(step)).collect();
    let mut points = Vec::with_capacity(levels.len().pow(3));
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                let rgb = Rgb { r, g, b };
                points.push(GamutPoint {
                    position: position(model, rgb),
                    hex: rgb.to_hex(),
                });
            }
        }
    }
    Ok(points)
}
