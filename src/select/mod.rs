//! Region selection over a smoothed density map.
//!
//! Two mutually exclusive strategies: locating the single global peak (when
//! the caller wants a fixed output size) and a full interval search over
//! both axis profiles (when no hints are given at all). Peak lookup lives
//! on [`Map::max_position`]; this module owns the interval search.

mod interval;

pub use interval::Interval;

use crate::config::CropConfig;
use crate::geometry::Rect;
use crate::map::Map;

/// How the final rectangle was derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Centered on a caller-supplied featured box.
    Featured,
    /// Centered on the global maximum of the smoothed density map.
    Peak,
    /// Interval search over both axis profiles. The flags record axes whose
    /// profile had no significant cells and fell back to the whole extent.
    Intervals { x_fallback: bool, y_fallback: bool },
}

/// Extracts a raw candidate rectangle from a smoothed density map.
///
/// Cells below `mean + significance_mult * std` are discarded; the
/// surviving mass is summed into one profile per axis, the winning interval
/// of each profile is selected, and the combined rectangle is expanded by
/// the margin fraction of each image dimension. The result is not yet
/// clipped to image bounds.
pub fn optimal_rect(map: &Map, cfg: &CropConfig) -> (Rect, Strategy) {
    let width = map.width();
    let height = map.height();
    let (mean, std) = map.stats();
    let threshold = mean + cfg.significance_mult * std;

    let mut col_profile = vec![0.0f64; width];
    let mut row_profile = vec![0.0f64; height];
    for y in 0..height {
        let row = map.row(y).expect("row within map bounds");
        for (x, &v) in row.iter().enumerate() {
            if v >= threshold {
                col_profile[x] += f64::from(v);
                row_profile[y] += f64::from(v);
            }
        }
    }

    let x_interval = interval::optimal_interval(&col_profile, cfg);
    let y_interval = interval::optimal_interval(&row_profile, cfg);
    let x_fallback = x_interval.is_none();
    let y_fallback = y_interval.is_none();
    if x_fallback {
        tracing::warn!(axis = "x", "no significant profile mass, using whole extent");
    }
    if y_fallback {
        tracing::warn!(axis = "y", "no significant profile mass, using whole extent");
    }

    let xi = x_interval.unwrap_or(Interval {
        start: 0,
        end: width - 1,
    });
    let yi = y_interval.unwrap_or(Interval {
        start: 0,
        end: height - 1,
    });

    let margin_x = (cfg.margin_fraction * width as f32) as i32;
    let margin_y = (cfg.margin_fraction * height as f32) as i32;
    let rect = Rect::new(
        xi.start as i32 - margin_x,
        yi.start as i32 - margin_y,
        xi.end as i32 + margin_x,
        yi.end as i32 + margin_y,
    );
    (
        rect,
        Strategy::Intervals {
            x_fallback,
            y_fallback,
        },
    )
}
