//! Image file helpers built on the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoding, grayscale
//! conversion, and the final crop/save are delegated here so the core stays
//! a pure matrix computation.

use std::path::Path;

use crate::geometry::Rect;
use crate::image::ImageView;
use crate::util::{CropError, CropResult};

/// Owned 8-bit grayscale pixels decoded from an image.
pub struct GrayBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayBuffer {
    /// Returns a borrowed view over the pixels.
    pub fn view(&self) -> ImageView<'_> {
        ImageView::from_slice(&self.data, self.width, self.height)
            .expect("dimensions validated at construction")
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Consumes the buffer and returns the raw pixel data.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Converts a decoded image to an owned grayscale buffer.
pub fn gray_from_dynamic(img: &image::DynamicImage) -> CropResult<GrayBuffer> {
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    if width == 0 || height == 0 {
        return Err(CropError::InvalidDimensions { width, height });
    }
    Ok(GrayBuffer {
        data: gray.into_raw(),
        width,
        height,
    })
}

/// Decodes `path` and converts it to 8-bit grayscale.
pub fn load_gray<P: AsRef<Path>>(path: P) -> CropResult<GrayBuffer> {
    let img = image::open(path).map_err(|err| CropError::ImageIo {
        reason: err.to_string(),
    })?;
    gray_from_dynamic(&img)
}

/// Crops `img` to `rect` and writes the result to `path`.
///
/// `rect` is expected to already be readjusted into image bounds; anything
/// outside is clamped before the crop.
pub fn crop_and_save<P: AsRef<Path>>(
    img: &image::DynamicImage,
    rect: Rect,
    path: P,
) -> CropResult<()> {
    let x = rect.x1.max(0) as u32;
    let y = rect.y1.max(0) as u32;
    let width = rect.span_x().max(0) as u32;
    let height = rect.span_y().max(0) as u32;
    let cropped = img.crop_imm(x, y, width, height);
    cropped.save(path).map_err(|err| CropError::ImageIo {
        reason: err.to_string(),
    })
}
