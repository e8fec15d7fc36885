//! End-to-end crop selection.

use crate::config::CropConfig;
use crate::density::smooth::box_smooth;
use crate::density::{estimate_density, DensityPath};
use crate::geometry::{center, readjust, Rect, TargetSize};
use crate::select::{optimal_rect, Strategy};
use crate::util::CropResult;
use crate::ImageView;

/// Optional caller guidance for the crop.
#[derive(Clone, Copy, Debug, Default)]
pub struct CropHints {
    /// Rectangle marking important content. When present, density
    /// estimation is bypassed entirely.
    pub featured: Option<Rect>,
    /// Requested output size.
    pub size: Option<TargetSize>,
}

/// Result of a crop selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Final rectangle, translated into image bounds.
    pub rect: Rect,
    /// Which search strategy produced the rectangle.
    pub strategy: Strategy,
    /// Density estimation path; `None` when a featured box bypassed it.
    pub density_path: Option<DensityPath>,
}

/// Crop selector bound to a configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cropper {
    cfg: CropConfig,
}

impl Cropper {
    /// Creates a selector with the default configuration.
    pub fn new() -> Self {
        Self {
            cfg: CropConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: CropConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CropConfig {
        &self.cfg
    }

    /// Selects the crop rectangle for `image` under `hints`.
    ///
    /// A featured box is centered directly (defaulting the size to the box
    /// span); otherwise the density map decides: peak mode when a size is
    /// requested, interval search when nothing is. The raw rectangle is
    /// always readjusted into image bounds before it is returned.
    pub fn select(&self, image: ImageView<'_>, hints: &CropHints) -> CropResult<Selection> {
        let (raw, strategy, density_path) = match hints.featured {
            Some(featured) => {
                featured.validate_featured()?;
                let size = match hints.size {
                    Some(size) => size,
                    None => TargetSize::new(featured.span_x() as u32, featured.span_y() as u32)?,
                };
                (center(featured, size), Strategy::Featured, None)
            }
            None => {
                let (density, path) = estimate_density(image, &self.cfg)?;
                let smoothed = box_smooth(&density, self.cfg.kernel_len)?;
                match hints.size {
                    Some(size) => {
                        let (x, y) = smoothed.max_position();
                        let seed = Rect::point(x as i32, y as i32);
                        (center(seed, size), Strategy::Peak, Some(path))
                    }
                    None => {
                        let (rect, strategy) = optimal_rect(&smoothed, &self.cfg);
                        (rect, strategy, Some(path))
                    }
                }
            }
        };

        let rect = readjust(raw, image.width() as u32, image.height() as u32);
        tracing::debug!(?rect, ?strategy, "selected crop rectangle");
        Ok(Selection {
            rect,
            strategy,
            density_path,
        })
    }
}
