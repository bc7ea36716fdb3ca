//! Pure-computation split of an RGBA8 buffer into channel planes.
//!
//! This module is always available (no feature gate) so that callers holding
//! raw pixel data, such as a canvas `ImageData`, can split it without pulling
//! in the `image` crate.

use chromatic_core::{channel_intensities, ColorModel, Rgb};

/// Maps every pixel through [`channel_intensities`], producing one plane per
/// channel of `model`.
///
/// Pixels are read as four bytes (R, G, B, A); alpha is ignored and a
/// trailing partial pixel is dropped. Each plane holds one byte per pixel.
pub fn split_rgba(rgba: &[u8], model: ColorModel) -> Vec<Vec<u8>> {
    let count = model.channel_count();
    let pixels = rgba.len() / 4;
    let mut planes: Vec<Vec<u8>> = (0..count).map(|_| Vec::with_capacity(pixels)).collect();
    for px in rgba.chunks_exact(4) {
        let levels = channel_intensities(model, Rgb::new(px[0], px[1], px[2]));
        for (plane, &level) in planes.iter_mut().zip(&levels[..count]) {
            plane.push(level);
        }
    }
    planes
}
