//! Pipeline configuration.

/// Tuning constants for density estimation and rectangle search.
///
/// Defaults reproduce the reference behavior. The thresholds are heuristic
/// with no closed-form justification; changing them changes output with no
/// baseline to validate against.
#[derive(Clone, Copy, Debug)]
pub struct CropConfig {
    /// Radius of the circular entropy neighborhood, in pixels.
    pub disk_radius: u32,
    /// First-pass mean entropy above this triggers re-estimation on its own.
    pub entropy_mean_high: f32,
    /// Combined with `entropy_std_flat`: a mean above this while the std
    /// stays low classifies the image as thin or low-contrast structure.
    pub entropy_mean_low: f32,
    /// Standard-deviation ceiling for the low-contrast classification.
    pub entropy_std_flat: f32,
    /// Standard deviation of the Gaussian applied before re-estimation.
    pub blur_sigma: f32,
    /// Length of the all-ones smoothing kernel, applied along each axis.
    pub kernel_len: usize,
    /// Significance cutoff is `mean + significance_mult * std`.
    pub significance_mult: f32,
    /// Nonzero profile indices at most this far apart share an interval.
    pub merge_distance: usize,
    /// The retained-prefix walk over span-sorted intervals stops when a
    /// span shrinks by more than this ratio.
    pub span_ratio_cutoff: f64,
    /// Fraction of each image dimension added around the detected content.
    pub margin_fraction: f32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            disk_radius: 5,
            entropy_mean_high: 5.0,
            entropy_mean_low: 4.0,
            entropy_std_flat: 0.8,
            blur_sigma: 10.0,
            kernel_len: 50,
            significance_mult: 1.6,
            merge_distance: 30,
            span_ratio_cutoff: 1.25,
            margin_fraction: 0.1,
        }
    }
}
