//! Per-pixel channel intensities for grayscale channel visualization.
//!
//! Maps one RGB pixel to the 8-bit gray level of each channel of a model, the
//! standard way of showing a single channel of an image. Applying
//! [`channel_intensities`] to every pixel of an image splits it into planes.

use crate::color::Color;
use crate::model::{ColorModel, Rgb};

/// Scales a value in `[0, max]` to a gray level, truncating like a canvas would.
fn scale(value: i32, max: i32) -> u8 {
    (f64::from(value) / f64::from(max) * 255.0).floor().clamp(0.0, 255.0) as u8
}

fn saturate(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Gray levels for each channel of `model` at this pixel.
///
/// Only the first [`ColorModel::channel_count`] entries are meaningful; the
/// remainder are 0. Hues map 0..360 and percentages 0..100 onto 0..255, Lab
/// `a`/`b` are offset by 128, and RGB and YCbCr values are used directly.
pub fn channel_intensities(model: ColorModel, rgb: Rgb) -> [u8; 4] {
    let mut out = [0u8; 4];
    let values = Color::from_rgb(model, rgb).values();
    for (slot, (field, &value)) in out.iter_mut().zip(model.fields().iter().zip(&values)) {
        *slot = match model {
            ColorModel::Rgb | ColorModel::YCbCr => saturate(value),
            ColorModel::Lab if field.min < 0 => saturate(value + 128),
            _ => scale(value, field.max),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_channels_are_passed_through() {
        assert_eq!(
            channel_intensities(ColorModel::Rgb, Rgb::new(65, 105, 225)),
            [65, 105, 225, 0]
        );
    }

    #[test]
    fn hue_and_percentages_are_scaled() {
        // hsv(240, 100%, 100%)
        let levels = channel_intensities(ColorModel::Hsv, Rgb::new(0, 0, 255));
        assert_eq!(levels, [170, 255, 255, 0]);
    }

    #[test]
    fn cmyk_uses_four_channels() {
        let levels = channel_intensities(ColorModel::Cmyk, Rgb::new(0, 0, 0));
        assert_eq!(levels, [0, 0, 0, 255]);
        let levels = channel_intensities(ColorModel::Cmyk, Rgb::new(255, 0, 0));
        assert_eq!(levels, [0, 255, 255, 0]);
    }

    #[test]
    fn lab_opponent_axes_are_offset() {
        // Lab(100, 0, 0)
        let levels = channel_intensities(ColorModel::Lab, Rgb::new(255, 255, 255));
        assert_eq!(levels, [255, 128, 128, 0]);
        // Lab(32, 79, -108)
        let levels = channel_intensities(ColorModel::Lab, Rgb::new(0, 0, 255));
        assert_eq!(levels, [81, 207, 20, 0]);
    }

    #[test]
    fn ycbcr_saturates_at_255() {
        // YCbCr(29, 256, 107)
        let levels = channel_intensities(ColorModel::YCbCr, Rgb::new(0, 0, 255));
        assert_eq!(levels, [29, 255, 107, 0]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unused_slots_stay_zero(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                for model in ColorModel::ALL {
                    let levels = channel_intensities(model, Rgb { r, g, b });
                    for &level in &levels[model.channel_count()..] {
                        prop_assert_eq!(level, 0);
                    }
                }
            }
        }
    }
}
