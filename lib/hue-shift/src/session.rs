//! A loaded image and its recolored copy.
//!
//! Changing the hue always recolors the original pixels, never the result
//! of a previous change, so moving the hue back and forth does not
//! accumulate rounding loss.

use crate::{Effect, HueShiftResult, hue_effect::HueConfig, image_io};
use image::RgbaImage;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct HueSession {
    original: RgbaImage,
    modified: Option<RgbaImage>,
    hue: Option<f64>,
}

impl HueSession {
    pub fn new(original: RgbaImage) -> Self {
        Self {
            original,
            modified: None,
            hue: None,
        }
    }

    pub fn open(path: impl AsRef<Path>) -> HueShiftResult<Self> {
        Ok(Self::new(image_io::load_rgba(path)?))
    }

    /// Recolor the original to `hue` and keep the result.
    ///
    /// On error the previous hue and result stay in place.
    pub fn set_hue(&mut self, hue: f64) -> HueShiftResult<&RgbaImage> {
        let mut image = self.original.clone();
        HueConfig::new().with_hue(hue).apply(&mut image)?;

        log::info!(
            "hue set to {hue} for {}x{} image",
            image.width(),
            image.height()
        );

        self.hue = Some(hue);
        Ok(self.modified.insert(image))
    }

    pub fn original(&self) -> &RgbaImage {
        &self.original
    }

    /// The recolored image, or the original while no hue has been set.
    pub fn modified(&self) -> &RgbaImage {
        self.modified.as_ref().unwrap_or(&self.original)
    }

    pub fn hue(&self) -> Option<f64> {
        self.hue
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }

    pub fn save_modified(&self, path: impl AsRef<Path>) -> HueShiftResult<()> {
        image_io::save_rgba(path, self.modified())
    }

    /// Save original and recolored image side by side.
    pub fn save_compare(&self, path: impl AsRef<Path>) -> HueShiftResult<()> {
        let sheet = image_io::side_by_side(&self.original, self.modified());
        image_io::save_rgba(path, &sheet)
    }
}
