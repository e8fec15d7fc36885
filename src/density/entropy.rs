//! Local Shannon entropy over a circular neighborhood.
//!
//! Each cell of the density map is the base-2 entropy of the intensity
//! distribution inside a disk around the pixel: the minimum number of bits
//! needed to encode the local grey-level distribution. Raw entropy over
//! thin-line or noisy content produces many small incoherent peaks that
//! defeat the later peak and interval search, so a second pass recomputes
//! the map on a blurred copy of the input when the first pass looks like
//! that kind of imagery.

use crate::config::CropConfig;
use crate::density::blur::gaussian_blur_u8;
use crate::map::Map;
use crate::util::{math, CropError, CropResult};
use crate::ImageView;

/// Which estimation pass produced the density map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityPath {
    /// Entropy of the raw grayscale input.
    Direct,
    /// Entropy recomputed after a Gaussian blur of the input.
    Reestimated,
}

/// Computes the per-pixel base-2 entropy of the intensity distribution in a
/// disk of `radius` around each pixel.
///
/// Border neighborhoods keep only their in-bounds samples; probabilities
/// are normalized by the actual sample count.
pub fn local_entropy(image: ImageView<'_>, radius: u32) -> CropResult<Map> {
    if radius == 0 {
        return Err(CropError::InvalidDiskRadius { radius });
    }
    let width = image.width();
    let height = image.height();
    let offsets = disk_offsets(radius);

    let mut data = vec![0.0f32; width * height];
    let mut hist = [0u32; 256];
    let mut samples: Vec<u8> = Vec::with_capacity(offsets.len());

    for y in 0..height {
        for x in 0..width {
            samples.clear();
            for &(dx, dy) in &offsets {
                let sx = x as i32 + dx;
                let sy = y as i32 + dy;
                if sx < 0 || sy < 0 || sx >= width as i32 || sy >= height as i32 {
                    continue;
                }
                let row = image.row(sy as usize).expect("row within validated bounds");
                let v = row[sx as usize];
                hist[v as usize] += 1;
                samples.push(v);
            }

            let n = samples.len() as f64;
            let mut bits = 0.0f64;
            // Each distinct value is visited once; its histogram slot is
            // zeroed after use so the histogram is clean for the next pixel.
            for &v in &samples {
                let count = hist[v as usize];
                if count > 0 {
                    let p = f64::from(count) / n;
                    bits -= p * p.log2();
                    hist[v as usize] = 0;
                }
            }
            data[y * width + x] = bits as f32;
        }
    }
    Map::from_vec(data, width, height)
}

/// Produces the density map for `image`, re-estimating on a blurred copy
/// when the first pass classifies the input as thin or low-contrast
/// structure.
pub fn estimate_density(image: ImageView<'_>, cfg: &CropConfig) -> CropResult<(Map, DensityPath)> {
    let first = local_entropy(image, cfg.disk_radius)?;
    let (mean, std) = math::mean_std(first.as_slice());
    if !needs_reestimate(mean, std, cfg) {
        return Ok((first, DensityPath::Direct));
    }

    tracing::debug!(mean, std, "re-estimating entropy on blurred input");
    let blurred = gaussian_blur_u8(image, cfg.blur_sigma);
    let view = ImageView::from_slice(&blurred, image.width(), image.height())?;
    let second = local_entropy(view, cfg.disk_radius)?;
    Ok((second, DensityPath::Reestimated))
}

/// Classification rule for the re-estimation pass.
fn needs_reestimate(mean: f32, std: f32, cfg: &CropConfig) -> bool {
    mean > cfg.entropy_mean_high || (mean > cfg.entropy_mean_low && std < cfg.entropy_std_flat)
}

/// Offsets `(dx, dy)` of a disk of `radius` (`dx^2 + dy^2 <= r^2`).
fn disk_offsets(radius: u32) -> Vec<(i32, i32)> {
    let r = radius as i32;
    let r2 = r * r;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::{disk_offsets, needs_reestimate};
    use crate::config::CropConfig;

    #[test]
    fn disk_of_radius_five_has_81_cells() {
        assert_eq!(disk_offsets(5).len(), 81);
    }

    #[test]
    fn disk_of_radius_one_is_a_cross() {
        let offsets = disk_offsets(1);
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(!offsets.contains(&(1, 1)));
    }

    #[test]
    fn reestimate_rule_matches_thresholds() {
        let cfg = CropConfig::default();
        // High mean triggers on its own.
        assert!(needs_reestimate(5.1, 2.0, &cfg));
        // Moderate mean needs a low std as well.
        assert!(needs_reestimate(4.5, 0.5, &cfg));
        assert!(!needs_reestimate(4.5, 1.0, &cfg));
        assert!(!needs_reestimate(3.0, 0.1, &cfg));
    }
}
