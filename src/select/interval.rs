//! 1-D interval extraction from thresholded axis profiles.

use crate::config::CropConfig;

/// Inclusive index interval along one profile axis, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Span in indices (`end - start`); a single-index run has span 0.
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// Collects the nonzero runs of `profile`, merging runs whose consecutive
/// nonzero indices are at most `merge_distance` apart. A distance of
/// exactly `merge_distance` merges; one more splits.
pub(crate) fn merged_intervals(profile: &[f64], merge_distance: usize) -> Vec<Interval> {
    let mut nonzero = profile
        .iter()
        .enumerate()
        .filter(|(_, &v)| v != 0.0)
        .map(|(i, _)| i);
    let first = match nonzero.next() {
        Some(i) => i,
        None => return Vec::new(),
    };

    let mut intervals = Vec::new();
    let mut start = first;
    let mut prev = first;
    for i in nonzero {
        if i - prev > merge_distance {
            intervals.push(Interval { start, end: prev });
            start = i;
        }
        prev = i;
    }
    intervals.push(Interval { start, end: prev });
    intervals
}

/// Profile mass inside `interval`, endpoints included.
fn mass(profile: &[f64], interval: Interval) -> f64 {
    profile[interval.start..=interval.end].iter().sum()
}

/// Picks the winning interval of `profile`, or `None` when the profile has
/// no nonzero entries.
///
/// Intervals are sorted by span descending; the retained prefix keeps
/// extending while the ratio of consecutive spans stays within the cutoff,
/// so several comparably wide candidates survive when significance is split
/// across near-equal regions. Among the retained intervals the one with the
/// greatest aggregate mass wins, not merely the longest; the first wins
/// ties.
pub(crate) fn optimal_interval(profile: &[f64], cfg: &CropConfig) -> Option<Interval> {
    let mut intervals = merged_intervals(profile, cfg.merge_distance);
    if intervals.is_empty() {
        return None;
    }
    intervals.sort_by(|a, b| b.span().cmp(&a.span()));

    let mut keep = intervals.len();
    for i in 0..intervals.len() - 1 {
        let ratio = intervals[i].span() as f64 / intervals[i + 1].span() as f64;
        if ratio > cfg.span_ratio_cutoff {
            keep = i + 1;
            break;
        }
    }
    intervals.truncate(keep);

    let mut best = intervals[0];
    let mut best_mass = mass(profile, best);
    for &candidate in &intervals[1..] {
        let m = mass(profile, candidate);
        if m > best_mass {
            best = candidate;
            best_mass = m;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::{merged_intervals, optimal_interval, Interval};
    use crate::config::CropConfig;

    fn profile_with(indices: &[usize], len: usize) -> Vec<f64> {
        let mut profile = vec![0.0; len];
        for &i in indices {
            profile[i] = 1.0;
        }
        profile
    }

    #[test]
    fn gap_of_exactly_thirty_merges() {
        let profile = profile_with(&[10, 40], 100);
        let intervals = merged_intervals(&profile, 30);
        assert_eq!(intervals, vec![Interval { start: 10, end: 40 }]);
    }

    #[test]
    fn gap_of_thirty_one_splits() {
        let profile = profile_with(&[10, 41], 100);
        let intervals = merged_intervals(&profile, 30);
        assert_eq!(
            intervals,
            vec![
                Interval { start: 10, end: 10 },
                Interval { start: 41, end: 41 },
            ]
        );
    }

    #[test]
    fn empty_profile_has_no_intervals() {
        let profile = vec![0.0; 64];
        assert!(merged_intervals(&profile, 30).is_empty());
        assert_eq!(optimal_interval(&profile, &CropConfig::default()), None);
    }

    #[test]
    fn disproportionate_interval_is_dropped_before_mass_ranking() {
        // Spans 40 and 8: the second is more than 25% shorter, so only the
        // first survives the prefix walk even though it carries less mass.
        let mut profile = vec![0.0; 200];
        for slot in &mut profile[10..=50] {
            *slot = 1.0;
        }
        for slot in &mut profile[100..=108] {
            *slot = 100.0;
        }
        let cfg = CropConfig::default();
        assert_eq!(
            optimal_interval(&profile, &cfg),
            Some(Interval { start: 10, end: 50 })
        );
    }

    #[test]
    fn comparable_intervals_are_ranked_by_mass() {
        // Spans 40 and 36 (ratio 1.11): both retained, the heavier second
        // interval wins.
        let mut profile = vec![0.0; 200];
        for slot in &mut profile[10..=50] {
            *slot = 1.0;
        }
        for slot in &mut profile[100..=136] {
            *slot = 100.0;
        }
        let cfg = CropConfig::default();
        assert_eq!(
            optimal_interval(&profile, &cfg),
            Some(Interval { start: 100, end: 136 })
        );
    }

    #[test]
    fn single_interval_is_returned_as_is() {
        let profile = profile_with(&[5, 6, 7], 32);
        let cfg = CropConfig::default();
        assert_eq!(
            optimal_interval(&profile, &cfg),
            Some(Interval { start: 5, end: 7 })
        );
    }

    #[test]
    fn zero_span_runner_up_stops_the_prefix_walk() {
        // Span 3 followed by span 0: the ratio is infinite, so the
        // single-index run is dropped.
        let profile = profile_with(&[5, 6, 7, 8, 80], 120);
        let cfg = CropConfig::default();
        assert_eq!(
            optimal_interval(&profile, &cfg),
            Some(Interval { start: 5, end: 8 })
        );
    }
}
