//! A color in any of the supported models, dispatched in one place.
//!
//! Callers that switch between models at run time hold a [`Color`] and let
//! [`Color::to_rgb`] and [`Color::from_rgb`] pick the transform, instead of
//! matching on the model at every call site.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::forward::{rgb_to_cmyk, rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_ycbcr};
use crate::inverse::{cmyk_to_rgb, hsi_to_rgb, hsl_to_rgb, hsv_to_rgb, lab_to_rgb, ycbcr_to_rgb};
use crate::model::{Cmyk, ColorModel, Hsi, Hsl, Hsv, Lab, Rgb, YCbCr};

/// A color value tagged with its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "model", content = "value")]
pub enum Color {
    #[serde(rename = "RGB")]
    Rgb(Rgb),
    #[serde(rename = "HSV")]
    Hsv(Hsv),
    #[serde(rename = "HSL")]
    Hsl(Hsl),
    #[serde(rename = "HSI")]
    Hsi(Hsi),
    #[serde(rename = "CMYK")]
    Cmyk(Cmyk),
    #[serde(rename = "Lab")]
    Lab(Lab),
    #[serde(rename = "YCbCr")]
    YCbCr(YCbCr),
}

impl Color {
    /// Converts an RGB value into the given model.
    pub fn from_rgb(model: ColorModel, rgb: Rgb) -> Self {
        match model {
            ColorModel::Rgb => Color::Rgb(rgb),
            ColorModel::Cmyk => Color::Cmyk(rgb_to_cmyk(rgb)),
            ColorModel::Hsv => Color::Hsv(rgb_to_hsv(rgb)),
            ColorModel::Hsl => Color::Hsl(rgb_to_hsl(rgb)),
            ColorModel::Hsi => Color::Hsi(rgb_to_hsi(rgb)),
            ColorModel::Lab => Color::Lab(rgb_to_lab(rgb)),
            ColorModel::YCbCr => Color::YCbCr(rgb_to_ycbcr(rgb)),
        }
    }

    /// Converts this color back to RGB.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Rgb(c) => c,
            Color::Hsv(c) => hsv_to_rgb(c),
            Color::Hsl(c) => hsl_to_rgb(c),
            Color::Hsi(c) => hsi_to_rgb(c),
            Color::Cmyk(c) => cmyk_to_rgb(c),
            Color::Lab(c) => lab_to_rgb(c),
            Color::YCbCr(c) => ycbcr_to_rgb(c),
        }
    }

    /// Re-expresses this color in another model, going through RGB.
    pub fn convert(self, model: ColorModel) -> Self {
        if self.model() == model {
            return self;
        }
        Color::from_rgb(model, self.to_rgb())
    }

    /// The model this color is expressed in.
    pub fn model(self) -> ColorModel {
        match self {
            Color::Rgb(_) => ColorModel::Rgb,
            Color::Hsv(_) => ColorModel::Hsv,
            Color::Hsl(_) => ColorModel::Hsl,
            Color::Hsi(_) => ColorModel::Hsi,
            Color::Cmyk(_) => ColorModel::Cmyk,
            Color::Lab(_) => ColorModel::Lab,
            Color::YCbCr(_) => ColorModel::YCbCr,
        }
    }

    /// Field values in the order of [`ColorModel::fields`].
    pub fn values(self) -> Vec<i32> {
        match self {
            Color::Rgb(c) => vec![c.r.into(), c.g.into(), c.b.into()],
            Color::Hsv(c) => vec![c.h.into(), c.s.into(), c.v.into()],
            Color::Hsl(c) => vec![c.h.into(), c.s.into(), c.l.into()],
            Color::Hsi(c) => vec![c.h.into(), c.s.into(), c.i.into()],
            Color::Cmyk(c) => vec![c.c.into(), c.m.into(), c.y.into(), c.k.into()],
            Color::Lab(c) => vec![c.l.into(), c.a.into(), c.b.into()],
            Color::YCbCr(c) => vec![c.y.into(), c.cb.into(), c.cr.into()],
        }
    }

    /// Builds a color from loose integer values, e.g. slider positions.
    ///
    /// Hue values wrap modulo 360; every other value is clamped into its
    /// field's nominal range. Returns `ColorError::ArityMismatch` if the
    /// number of values does not match the model.
    pub fn from_values(model: ColorModel, values: &[i64]) -> Result<Self, ColorError> {
        let fields = model.fields();
        if values.len() != fields.len() {
            return Err(ColorError::ArityMismatch {
                model: model.name().to_string(),
                expected: fields.len(),
                got: values.len(),
            });
        }
        let v: Vec<i32> = fields
            .iter()
            .zip(values)
            .map(|(field, &value)| field.normalize(value))
            .collect();

        // normalize() keeps every value inside its field range, so the casts are lossless
        let color = match model {
            ColorModel::Rgb => Color::Rgb(Rgb::new(v[0] as u8, v[1] as u8, v[2] as u8)),
            ColorModel::Hsv => Color::Hsv(Hsv {
                h: v[0] as u16,
                s: v[1] as u8,
                v: v[2] as u8,
            }),
            ColorModel::Hsl => Color::Hsl(Hsl {
                h: v[0] as u16,
                s: v[1] as u8,
                l: v[2] as u8,
            }),
            ColorModel::Hsi => Color::Hsi(Hsi {
                h: v[0] as u16,
                s: v[1] as u8,
                i: v[2] as u8,
            }),
            ColorModel::Cmyk => Color::Cmyk(Cmyk {
                c: v[0] as u8,
                m: v[1] as u8,
                y: v[2] as u8,
                k: v[3] as u8,
            }),
            ColorModel::Lab => Color::Lab(Lab {
                l: v[0] as i16,
                a: v[1] as i16,
                b: v[2] as i16,
            }),
            ColorModel::YCbCr => Color::YCbCr(YCbCr {
                y: v[0] as i16,
                cb: v[1] as i16,
                cr: v[2] as i16,
            }),
        };
        Ok(color)
    }

    /// Hex string of the color's RGB equivalent.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => fmt::Display::fmt(c, f),
            Color::Hsv(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Hsi(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
            Color::Lab(c) => fmt::Display::fmt(c, f),
            Color::YCbCr(c) => fmt::Display::fmt(c, f),
        }
    }
}

macro_rules! impl_from_model {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Color {
                fn from(c: $ty) -> Self {
                    Color::$ty(c)
                }
            }
        )*
    };
}

impl_from_model!(Rgb, Hsv, Hsl, Hsi, Cmyk, Lab, YCbCr);
