//! Separable box smoothing of a density map.
//!
//! Every row is convolved with a length-K all-ones kernel under centered
//! ("same") alignment, the result is transposed, and the pass repeats; the
//! final transpose restores the original orientation. The two passes equal
//! a K×K box filter applied separably and suppress the micro-peaks of the
//! raw density map so one broad region of high value emerges.

use crate::map::Map;
use crate::util::{CropError, CropResult};

/// Smooths `map` with a separable K×K all-ones kernel, preserving shape.
pub fn box_smooth(map: &Map, kernel_len: usize) -> CropResult<Map> {
    if kernel_len == 0 {
        return Err(CropError::InvalidKernel { len: kernel_len });
    }
    let pass = convolve_rows_same(map, kernel_len).transpose();
    Ok(convolve_rows_same(&pass, kernel_len).transpose())
}

/// Convolves every row with an all-ones kernel of `len` under "same"
/// alignment: output index `i` sums inputs in
/// `[i - (len - 1 - (len - 1) / 2), i + (len - 1) / 2]`, clipped to the row.
/// For even lengths the window reaches one further left, matching the
/// centered convention of a full convolution offset by `(len - 1) / 2`.
fn convolve_rows_same(map: &Map, len: usize) -> Map {
    let width = map.width();
    let height = map.height();
    let right = (len - 1) / 2;
    let left = len - 1 - right;

    let mut data = vec![0.0f32; width * height];
    let mut prefix = vec![0.0f64; width + 1];
    for y in 0..height {
        let row = map.row(y).expect("row within map bounds");
        for (x, &v) in row.iter().enumerate() {
            prefix[x + 1] = prefix[x] + f64::from(v);
        }
        let out = &mut data[y * width..(y + 1) * width];
        for (x, slot) in out.iter_mut().enumerate() {
            let lo = x.saturating_sub(left);
            let hi = (x + right).min(width - 1);
            *slot = (prefix[hi + 1] - prefix[lo]) as f32;
        }
    }
    Map::from_vec(data, width, height).expect("smoothed map keeps input shape")
}
