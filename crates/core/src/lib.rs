#![deny(unsafe_code)]
//! Core types and transforms for the chromatic color-space engine.
//!
//! Provides the value types of every supported model (`Rgb`, `Hsv`, `Hsl`,
//! `Hsi`, `Cmyk`, `Lab`, `YCbCr`), the RGB-to-model and model-to-RGB
//! transforms, the `Color`/`ColorModel` dispatch layer with its field schema,
//! per-channel gray levels and 3D gamut positions.

pub mod channel;
pub mod color;
pub mod error;
pub mod forward;
pub mod inverse;
pub mod model;
pub mod numeric;
pub mod space;

pub use channel::channel_intensities;
pub use color::Color;
pub use error::ColorError;
pub use forward::{rgb_to_cmyk, rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_ycbcr};
pub use inverse::{cmyk_to_rgb, hsi_to_rgb, hsl_to_rgb, hsv_to_rgb, lab_to_rgb, ycbcr_to_rgb};
pub use model::{rgb_to_hex, Cmyk, ColorModel, FieldDescriptor, Hsi, Hsl, Hsv, Lab, Rgb, YCbCr};
pub use space::{position, sample_gamut, GamutPoint};
