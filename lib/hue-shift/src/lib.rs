pub mod colour_space;
pub mod hue_effect;
pub mod image_io;
pub mod session;

use image::RgbaImage;

pub use colour_space::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use hue_effect::{HueConfig, apply_hue, apply_hue_in_place};
pub use session::HueSession;

pub type HueShiftResult<T> = Result<T, HueShiftError>;

#[derive(thiserror::Error, Debug)]
pub enum HueShiftError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> HueShiftResult<()>;
}
