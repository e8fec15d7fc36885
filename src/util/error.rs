//! Error types for autocrop.

use thiserror::Error;

/// Result alias for autocrop operations.
pub type CropResult<T> = std::result::Result<T, CropError>;

/// Errors that can occur while selecting a crop rectangle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// An image or map was described with a zero dimension.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the described matrix.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// A requested output size with a zero side.
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },
    /// Featured coordinates that do not satisfy `x1 < x2` and `y1 < y2`.
    #[error("invalid featured box: ({x1},{y1})-({x2},{y2})")]
    InvalidFeaturedBox { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// A smoothing kernel of zero length.
    #[error("invalid smoothing kernel length {len}")]
    InvalidKernel { len: usize },
    /// An entropy disk of zero radius.
    #[error("invalid entropy disk radius {radius}")]
    InvalidDiskRadius { radius: u32 },
    /// Failure while decoding or encoding an image file.
    #[cfg(feature = "image-io")]
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
