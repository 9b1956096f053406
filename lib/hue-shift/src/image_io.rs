//! Decoding and encoding at the edges of the pipeline
//!
//! The hue transform itself only sees raw RGBA bytes. This module turns
//! image files into those bytes and back, using the `image` crate codecs.

use crate::{HueShiftError, HueShiftResult, hue_effect::CHANNELS};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage, imageops};
use std::path::Path;

/// Decode an image file into an RGBA8 buffer.
pub fn load_rgba(path: impl AsRef<Path>) -> HueShiftResult<RgbaImage> {
    let path = path.as_ref();
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Encode `image` to `path`, the format is picked from the file extension.
///
/// Formats without an alpha channel (JPEG) get the color channels only.
pub fn save_rgba(path: impl AsRef<Path>, image: &RgbaImage) -> HueShiftResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;

    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => image.save_with_format(path, format)?,
    }

    log::debug!(
        "saved {} ({}x{}, {format:?})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}

/// Encode a raw RGBA buffer of `width` x `height` pixels.
pub fn save_rgba_buffer(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    buffer: &[u8],
) -> HueShiftResult<()> {
    let expected = width as usize * height as usize * CHANNELS;
    if buffer.len() != expected {
        return Err(HueShiftError::InvalidInput(format!(
            "buffer holds {} bytes, {width}x{height} RGBA needs {expected}",
            buffer.len()
        )));
    }

    let image = RgbaImage::from_raw(width, height, buffer.to_vec()).ok_or_else(|| {
        HueShiftError::InvalidInput(format!("can not build a {width}x{height} image"))
    })?;

    save_rgba(path, &image)
}

/// Put `left` and `right` next to each other.
///
/// The sheet is as tall as the taller image, the rest is transparent.
pub fn side_by_side(left: &RgbaImage, right: &RgbaImage) -> RgbaImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());

    let mut sheet = RgbaImage::new(width, height);
    imageops::replace(&mut sheet, left, 0, 0);
    imageops::replace(&mut sheet, right, left.width() as i64, 0);
    sheet
}
