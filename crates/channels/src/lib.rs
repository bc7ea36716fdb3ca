#![deny(unsafe_code)]
//! Splits RGBA images into one grayscale plane per channel of a color model.
//!
//! This crate sits between `chromatic-core` (which maps a single pixel to its
//! channel gray levels) and front ends that work with whole images. The
//! buffer mapping lives in [`pixel`] and is always available; PNG decoding
//! and encoding live in [`snapshot`] behind the `png` feature.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use chromatic_core::{ColorError, ColorModel, FieldDescriptor};

/// Grayscale planes of an image, one per channel of `model`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlanes {
    model: ColorModel,
    width: usize,
    height: usize,
    planes: Vec<Vec<u8>>,
}

impl ChannelPlanes {
    /// Splits a tightly packed RGBA8 buffer of `width * height` pixels.
    ///
    /// Returns `ColorError::InvalidDimensions` if either dimension is zero or
    /// their product overflows, and `ColorError::BufferSizeMismatch` if the
    /// buffer is not exactly `width * height * 4` bytes.
    pub fn from_rgba(
        width: usize,
        height: usize,
        rgba: &[u8],
        model: ColorModel,
    ) -> Result<Self, ColorError> {
        if width == 0 || height == 0 {
            return Err(ColorError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ColorError::InvalidDimensions)?;
        if rgba.len() != expected {
            return Err(ColorError::BufferSizeMismatch {
                expected,
                got: rgba.len(),
            });
        }
        Ok(Self {
            model,
            width,
            height,
            planes: pixel::split_rgba(rgba, model),
        })
    }

    pub fn model(&self) -> ColorModel {
        self.model
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All planes, in the order of the model's fields.
    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// A single plane, or `None` past the model's channel count.
    pub fn plane(&self, index: usize) -> Option<&[u8]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    /// Planes paired with the field each one shows.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &[u8])> {
        self.model
            .fields()
            .iter()
            .zip(self.planes.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn royal_blue_pixels(count: usize) -> Vec<u8> {
        [65u8, 105, 225, 255].repeat(count)
    }

    #[test]
    fn from_rgba_builds_one_plane_per_channel() {
        for model in ColorModel::ALL {
            let planes = ChannelPlanes::from_rgba(4, 2, &royal_blue_pixels(8), model).unwrap();
            assert_eq!(planes.planes().len(), model.channel_count(), "{model}");
            assert!(planes.planes().iter().all(|p| p.len() == 8));
            assert_eq!(planes.model(), model);
            assert_eq!(planes.width(), 4);
            assert_eq!(planes.height(), 2);
        }
    }

    #[test]
    fn from_rgba_zero_dimensions_is_error() {
        let result = ChannelPlanes::from_rgba(0, 4, &[], ColorModel::Rgb);
        assert!(matches!(result, Err(ColorError::InvalidDimensions)));
        let result = ChannelPlanes::from_rgba(4, 0, &[], ColorModel::Rgb);
        assert!(matches!(result, Err(ColorError::InvalidDimensions)));
    }

    #[test]
    fn from_rgba_overflowing_dimensions_is_error() {
        let result = ChannelPlanes::from_rgba(usize::MAX, 2, &[], ColorModel::Rgb);
        assert!(matches!(result, Err(ColorError::InvalidDimensions)));
    }

    #[test]
    fn from_rgba_wrong_buffer_length_is_error() {
        let result = ChannelPlanes::from_rgba(2, 2, &royal_blue_pixels(3), ColorModel::Hsv);
        assert!(matches!(
            result,
            Err(ColorError::BufferSizeMismatch {
                expected: 16,
                got: 12
            })
        ));
    }

    #[test]
    fn plane_past_channel_count_is_none() {
        let planes = ChannelPlanes::from_rgba(1, 1, &royal_blue_pixels(1), ColorModel::Hsl).unwrap();
        assert!(planes.plane(2).is_some());
        assert!(planes.plane(3).is_none());
    }

    #[test]
    fn labeled_pairs_planes_with_fields() {
        let planes = ChannelPlanes::from_rgba(1, 1, &royal_blue_pixels(1), ColorModel::Cmyk).unwrap();
        let symbols: Vec<&str> = planes.labeled().map(|(f, _)| f.symbol).collect();
        assert_eq!(symbols, ["C", "M", "Y", "K"]);
        let (_, key) = planes.labeled().last().unwrap();
        // K = 12%
        assert_eq!(key, &[30]);
    }
}
