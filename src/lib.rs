//! Entropy-guided automatic image cropping.
//!
//! Given a grayscale image and optional hints (a featured rectangle and/or a
//! target size), this crate computes a local-entropy density map, smooths it
//! with a separable box filter, and extracts the crop rectangle that best
//! preserves visually dense content. Decoding, color handling, and pixel
//! extraction stay outside the core; the `image-io` feature provides thin
//! helpers over the `image` crate for callers that want them.

pub mod config;
pub mod density;
pub mod geometry;
pub mod image;
pub mod map;
pub mod pipeline;
pub mod select;
pub mod util;

pub use config::CropConfig;
pub use density::smooth::box_smooth;
pub use density::{estimate_density, local_entropy, DensityPath};
pub use geometry::{center, readjust, Rect, TargetSize};
pub use image::ImageView;
pub use map::Map;
pub use pipeline::{CropHints, Cropper, Selection};
pub use select::{optimal_rect, Interval, Strategy};
pub use util::{CropError, CropResult};

#[cfg(feature = "image-io")]
pub use image::io;
