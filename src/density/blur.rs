//! Separable Gaussian blur for grayscale buffers.
//!
//! Used only on the re-estimation path: thin-line imagery is blurred before
//! the entropy is recomputed so scattered micro-peaks coalesce into one
//! region. The kernel is truncated at three standard deviations and borders
//! clamp to the edge pixel.

use crate::ImageView;

/// Blurs `image` with a Gaussian of standard deviation `sigma`.
///
/// Returns a contiguous buffer with the same dimensions. A non-positive
/// `sigma` leaves the pixels unchanged.
pub(crate) fn gaussian_blur_u8(image: ImageView<'_>, sigma: f32) -> Vec<u8> {
    let width = image.width();
    let height = image.height();
    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as isize;

    // Horizontal pass into f32.
    let mut tmp = vec![0.0f32; width * height];
    for y in 0..height {
        let row = image.row(y).expect("row within validated bounds");
        let out = &mut tmp[y * width..(y + 1) * width];
        for (x, slot) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                let sx = (x as isize + k as isize - half).clamp(0, width as isize - 1);
                acc += w * f32::from(row[sx as usize]);
            }
            *slot = acc;
        }
    }

    // Vertical pass back to u8.
    let mut out = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                let sy = (y as isize + k as isize - half).clamp(0, height as isize - 1);
                acc += w * tmp[sy as usize * width + x];
            }
            out[y * width + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Normalized 1-D Gaussian taps truncated at `3 * sigma`.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let half = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut taps = Vec::with_capacity((2 * half + 1) as usize);
    for d in -half..=half {
        let d = d as f32;
        taps.push((-(d * d) / denom).exp());
    }
    let sum: f32 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}
