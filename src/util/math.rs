//! Numeric helpers shared across the pipeline.

/// Mean and population standard deviation of `values`.
///
/// Accumulates in `f64` so large maps do not lose precision; an empty slice
/// yields `(0, 0)`.
pub(crate) fn mean_std(values: &[f32]) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mut sum = 0.0f64;
    for &v in values {
        sum += f64::from(v);
    }
    let mean = sum / n;

    let mut sq = 0.0f64;
    for &v in values {
        let d = f64::from(v) - mean;
        sq += d * d;
    }
    (mean as f32, (sq / n).sqrt() as f32)
}
