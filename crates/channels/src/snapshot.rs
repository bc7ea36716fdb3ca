//! PNG input and output for channel planes.
//!
//! This module is feature-gated behind `png` (default on) so that callers
//! that only need [`crate::pixel`] can depend on this crate without pulling
//! in the `image` crate.

use std::fs;
use std::path::{Path, PathBuf};

use chromatic_core::{ColorError, ColorModel};

use crate::ChannelPlanes;

/// Decodes an image file and splits it into the channels of `model`.
///
/// Any format the `image` crate was built with is accepted; the image is
/// converted to RGBA8 first. Returns `ColorError::Io` if the file cannot be
/// read or decoded.
pub fn split_image(input: &Path, model: ColorModel) -> Result<ChannelPlanes, ColorError> {
    let img = image::open(input)
        .map_err(|e| ColorError::Io(format!("{}: {e}", input.display())))?
        .to_rgba8();
    let w = usize::try_from(img.width()).map_err(|_| ColorError::InvalidDimensions)?;
    let h = usize::try_from(img.height()).map_err(|_| ColorError::InvalidDimensions)?;
    ChannelPlanes::from_rgba(w, h, img.as_raw(), model)
}

/// File name of one plane, e.g. `photo_hsv_s.png`.
fn plane_file_name(stem: &str, model: ColorModel, symbol: &str) -> String {
    format!(
        "{stem}_{}_{}.png",
        model.name().to_ascii_lowercase(),
        symbol.to_ascii_lowercase()
    )
}

/// Writes each plane as a grayscale PNG named `<stem>_<model>_<symbol>.png`
/// under `dir`, creating the directory if needed.
///
/// Returns the written paths in channel order, or `ColorError::Io` on any
/// write failure.
pub fn write_planes(
    planes: &ChannelPlanes,
    dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>, ColorError> {
    fs::create_dir_all(dir).map_err(|e| ColorError::Io(format!("{}: {e}", dir.display())))?;
    let w = u32::try_from(planes.width()).map_err(|_| ColorError::InvalidDimensions)?;
    let h = u32::try_from(planes.height()).map_err(|_| ColorError::InvalidDimensions)?;

    let mut paths = Vec::with_capacity(planes.planes().len());
    for (field, plane) in planes.labeled() {
        let path = dir.join(plane_file_name(stem, planes.model(), field.symbol));
        let img = image::GrayImage::from_raw(w, h, plane.to_vec())
            .ok_or_else(|| ColorError::Io("plane buffer size mismatch".into()))?;
        img.save(&path)
            .map_err(|e| ColorError::Io(format!("{}: {e}", path.display())))?;
        paths.push(path);
    }
    Ok(paths)
}
