//! Value types for the seven color models, plus the static field table.
//!
//! Every model is a small `Copy` record of integer fields. Values are created
//! fresh by each conversion and never mutated afterwards. Field ranges are
//! described once, at compile time, by [`FieldDescriptor`] tables reachable
//! through [`ColorModel::fields`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ColorError;

/// 8-bit RGB, the source-of-truth representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue (degrees), saturation and value (percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// Hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Hue (degrees), saturation and intensity (percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsi {
    pub h: u16,
    pub s: u8,
    pub i: u8,
}

/// Subtractive ink coverage, all four fields in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// CIE L*a*b* under D65.
///
/// `l` is nominally in [0, 100] and `a`, `b` in [-128, 127], but any value is
/// accepted by [`lab_to_rgb`](crate::inverse::lab_to_rgb); impossible
/// coordinates saturate on the way back to RGB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lab {
    pub l: i16,
    pub a: i16,
    pub b: i16,
}

/// ITU-R BT.601 luma and chroma differences, full range.
///
/// Forward conversion rounds without clamping, so the most saturated blues
/// and reds reach 256 in `cb` and `cr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YCbCr {
    pub y: i16,
    pub cb: i16,
    pub cr: i16,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#4169e1" or "4169E1" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#rrggbb"` with lowercase digits.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

/// Formats three channels as a 7-character lowercase hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsi({}, {}%, {}%)", self.h, self.s, self.i)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}

impl fmt::Display for YCbCr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YCbCr({}, {}, {})", self.y, self.cb, self.cr)
    }
}

/// Static description of one field of a color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Human-readable name, e.g. "Saturation".
    pub label: &'static str,
    /// Short symbol, e.g. "S".
    pub symbol: &'static str,
    pub min: i32,
    pub max: i32,
    /// True for hue fields, which wrap modulo 360 instead of clamping.
    pub wraps: bool,
}

impl FieldDescriptor {
    const fn new(label: &'static str, symbol: &'static str, min: i32, max: i32) -> Self {
        Self {
            label,
            symbol,
            min,
            max,
            wraps: false,
        }
    }

    const fn hue() -> Self {
        Self {
            label: "Hue",
            symbol: "H",
            min: 0,
            max: 360,
            wraps: true,
        }
    }

    /// Brings an arbitrary value into this field's range: hues wrap, the rest clamp.
    pub fn normalize(&self, value: i64) -> i32 {
        if self.wraps {
            value.rem_euclid(i64::from(self.max)) as i32
        } else {
            value.clamp(i64::from(self.min), i64::from(self.max)) as i32
        }
    }
}

const RGB_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Red", "R", 0, 255),
    FieldDescriptor::new("Green", "G", 0, 255),
    FieldDescriptor::new("Blue", "B", 0, 255),
];

const HSV_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::hue(),
    FieldDescriptor::new("Saturation", "S", 0, 100),
    FieldDescriptor::new("Value", "V", 0, 100),
];

const HSL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::hue(),
    FieldDescriptor::new("Saturation", "S", 0, 100),
    FieldDescriptor::new("Lightness", "L", 0, 100),
];

const HSI_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::hue(),
    FieldDescriptor::new("Saturation", "S", 0, 100),
    FieldDescriptor::new("Intensity", "I", 0, 100),
];

const CMYK_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Cyan", "C", 0, 100),
    FieldDescriptor::new("Magenta", "M", 0, 100),
    FieldDescriptor::new("Yellow", "Y", 0, 100),
    FieldDescriptor::new("Key (Black)", "K", 0, 100),
];

const LAB_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Lightness", "L", 0, 100),
    FieldDescriptor::new("a (G-R)", "a", -128, 127),
    FieldDescriptor::new("b (B-Y)", "b", -128, 127),
];

const YCBCR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Y (Luma)", "Y", 0, 255),
    FieldDescriptor::new("Cb (Blue-Diff)", "Cb", 0, 255),
    FieldDescriptor::new("Cr (Red-Diff)", "Cr", 0, 255),
];

/// The closed set of supported color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorModel {
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "CMYK")]
    Cmyk,
    #[serde(rename = "HSV")]
    Hsv,
    #[serde(rename = "HSL")]
    Hsl,
    #[serde(rename = "HSI")]
    Hsi,
    #[serde(rename = "Lab")]
    Lab,
    #[serde(rename = "YCbCr")]
    YCbCr,
}

impl ColorModel {
    /// Every model, in display order.
    pub const ALL: [ColorModel; 7] = [
        ColorModel::Rgb,
        ColorModel::Cmyk,
        ColorModel::Hsv,
        ColorModel::Hsl,
        ColorModel::Hsi,
        ColorModel::Lab,
        ColorModel::YCbCr,
    ];

    /// Canonical display name, e.g. "YCbCr".
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Cmyk => "CMYK",
            ColorModel::Hsv => "HSV",
            ColorModel::Hsl => "HSL",
            ColorModel::Hsi => "HSI",
            ColorModel::Lab => "Lab",
            ColorModel::YCbCr => "YCbCr",
        }
    }

    /// Looks a model up by name, ignoring case.
    ///
    /// Returns `ColorError::UnknownModel` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownModel(name.to_string()))
    }

    /// Returns the display names of all models.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    /// Field table for this model, in value order.
    pub fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            ColorModel::Rgb => RGB_FIELDS,
            ColorModel::Cmyk => CMYK_FIELDS,
            ColorModel::Hsv => HSV_FIELDS,
            ColorModel::Hsl => HSL_FIELDS,
            ColorModel::Hsi => HSI_FIELDS,
            ColorModel::Lab => LAB_FIELDS,
            ColorModel::YCbCr => YCBCR_FIELDS,
        }
    }

    /// Number of fields (and image channels) for this model.
    pub fn channel_count(self) -> usize {
        self.fields().len()
    }

    /// The field table as a JSON object, for tools that render controls.
    pub fn field_schema(self) -> Value {
        let fields: Vec<Value> = self
            .fields()
            .iter()
            .map(|f| {
                json!({
                    "label": f.label,
                    "symbol": f.symbol,
                    "min": f.min,
                    "max": f.max,
                    "wraps": f.wraps,
                })
            })
            .collect();
        json!({ "model": self.name(), "fields": fields })
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
