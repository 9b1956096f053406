//! Hue override over RGBA pixel buffers
//!
//! Every pixel keeps its HSV saturation and value and takes the requested
//! hue. Alpha is never touched.

use crate::{
    Effect, HueShiftError, HueShiftResult,
    colour_space::{hsv_to_rgb, rgb_to_hsv},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Hue override effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct HueConfig {
    #[derivative(Default(value = "0.0"))]
    hue: f64, // degrees, wrapped into [0, 360)
}

impl HueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Effect for HueConfig {
    fn apply(&self, image: &mut RgbaImage) -> HueShiftResult<()> {
        apply_hue_in_place(image, self.hue)
    }
}

/// Return a copy of `buffer` with every pixel recolored to `hue`.
///
/// `buffer` holds row-major `(R, G, B, A)` quadruples. Fails with
/// [`HueShiftError::InvalidInput`] when it is empty, when its length is not
/// a multiple of 4 or when `hue` is not finite. The input is left as is.
///
/// # Example
/// ```
/// let red_pixel = [255, 0, 0, 200];
/// let green_pixel = hue_shift::apply_hue(&red_pixel, 120.0).unwrap();
/// assert_eq!(green_pixel, vec![0, 255, 0, 200]);
/// ```
pub fn apply_hue(buffer: &[u8], hue: f64) -> HueShiftResult<Vec<u8>> {
    validate(buffer.len(), hue)?;

    let mut output = buffer.to_vec();
    shift_pixels(&mut output, hue);
    Ok(output)
}

/// Same as [`apply_hue`] but rewrites `buffer` itself.
pub fn apply_hue_in_place(buffer: &mut [u8], hue: f64) -> HueShiftResult<()> {
    validate(buffer.len(), hue)?;
    shift_pixels(buffer, hue);
    Ok(())
}

fn validate(len: usize, hue: f64) -> HueShiftResult<()> {
    if len == 0 {
        return Err(HueShiftError::InvalidInput(
            "pixel buffer is empty".to_string(),
        ));
    }

    if len % CHANNELS != 0 {
        return Err(HueShiftError::InvalidInput(format!(
            "pixel buffer length {len} is not a multiple of {CHANNELS}"
        )));
    }

    if !hue.is_finite() {
        return Err(HueShiftError::InvalidInput(format!(
            "hue must be a finite number of degrees, got {hue}"
        )));
    }

    Ok(())
}

fn shift_pixels(buffer: &mut [u8], hue: f64) {
    log::debug!("apply hue {hue} to {} pixels", buffer.len() / CHANNELS);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        buffer
            .par_chunks_exact_mut(CHANNELS)
            .for_each(|pixel| shift_pixel(pixel, hue));
    }

    #[cfg(not(feature = "parallel"))]
    buffer
        .chunks_exact_mut(CHANNELS)
        .for_each(|pixel| shift_pixel(pixel, hue));
}

#[inline]
fn shift_pixel(pixel: &mut [u8], hue: f64) {
    let hsv = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
    let [r, g, b] = hsv_to_rgb(hue, hsv.saturation, hsv.value);

    pixel[0] = r;
    pixel[1] = g;
    pixel[2] = b;
}
