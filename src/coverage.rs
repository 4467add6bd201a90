//! Extraction of margin-trimmed intervals from a depth sequence.
//!
//! Given the depth of one sample at consecutive loci, [`extract()`] finds every
//! maximal run of nonzero depth, drops the runs that are too short to survive
//! trimming, and shrinks the remaining runs inward by the margin on both sides.
//! The local run indices are then translated into absolute coordinates by
//! adding the coordinate origin (the locus of index `0`).
//!
//! ```text
//! locus   | 100 | 101 | 102 | 103 | 104 | 105 | 106 | 107 | 108 |
//! depth   |  0  |  0  |  5  |  5  |  5  |  5  |  5  |  0  |  0  |
//! ----------------------------------------------------------------
//! run                 [102 ------------------------ 107)
//! trimmed (margin 2)              [104 - 105)
//! ```
//!
//! The margin exists so that every retained locus is covered by enough
//! overlapping analysis windows: sliding-window callers lose a window's worth
//! of support at each boundary of a covered run.
//!
//! Depths are expected to be masked with [`mask()`] beforehand: only the
//! distinction between zero and nonzero matters here.

pub mod interval;
pub mod run;

pub use interval::Interval;
pub use run::Run;

use crate::margin::MinimumLength;

/// Forces every depth below `min_coverage` to zero, leaving the remaining
/// depths untouched.
///
/// # Examples
///
/// ```
/// use coverage_intervals::coverage;
///
/// let masked = coverage::mask(&[3, 10, 9, 12, 0], 10);
/// assert_eq!(masked, vec![0, 10, 0, 12, 0]);
/// ```
pub fn mask(depths: &[i64], min_coverage: i64) -> Vec<i64> {
    depths
        .iter()
        .map(|depth| if *depth < min_coverage { 0 } else { *depth })
        .collect()
}

/// Extracts the trimmed intervals of every sufficiently long run of nonzero
/// depth.
///
/// - Runs shorter than the minimum length given by `minimum` are dropped
///   entirely.
/// - Each surviving run `[a, b)` is trimmed to `[a + margin, b - margin)`.
/// - `origin` is added to both endpoints.
///
/// The result is sorted by start and contains one interval per surviving run.
/// Nothing is merged or deduplicated. Under [`MinimumLength::Margin`], a run
/// whose length lies in `margin..2 * margin` produces an inverted interval;
/// see [`MinimumLength`] for details.
///
/// # Examples
///
/// ```
/// use coverage_intervals::coverage;
/// use coverage_intervals::coverage::Interval;
/// use coverage_intervals::margin::MinimumLength;
///
/// let depths = [0, 0, 5, 5, 5, 5, 5, 0, 0];
/// let intervals = coverage::extract(&depths, 2, 100, MinimumLength::Margin);
///
/// assert_eq!(intervals, vec![Interval::new(104, 105)]);
/// ```
pub fn extract(
    depths: &[i64],
    margin: usize,
    origin: i64,
    minimum: MinimumLength,
) -> Vec<Interval> {
    let required = minimum.required_length(margin);

    run::runs(depths)
        .into_iter()
        .filter(|run| run.len() >= required)
        .map(|run| {
            // NOTE: `run.end() >= run.len() >= margin` for every run that
            // survives the filter, so neither subtraction can underflow.
            let start = (run.start() + margin) as i64;
            let end = (run.end() - margin) as i64;

            Interval::new(origin + start, origin + end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(intervals: &[Interval]) -> Vec<(i64, i64)> {
        intervals
            .iter()
            .map(|interval| (interval.start(), interval.end()))
            .collect()
    }

    #[test]
    fn test_empty_and_all_zero_inputs_produce_nothing() {
        for minimum in [MinimumLength::Margin, MinimumLength::TwiceMargin] {
            assert!(extract(&[], 2, 0, minimum).is_empty());
            assert!(extract(&[0, 0, 0, 0, 0], 1, 50, minimum).is_empty());
        }
    }

    #[test]
    fn test_single_interior_run() {
        let depths = [0, 0, 5, 5, 5, 5, 5, 0, 0];

        let intervals = extract(&depths, 2, 100, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(104, 105)]);

        let intervals = extract(&depths, 2, 100, MinimumLength::TwiceMargin);
        assert_eq!(pairs(&intervals), vec![(104, 105)]);
    }

    #[test]
    fn test_run_touching_the_start_is_inverted_under_margin_minimum() {
        let depths = [7, 7, 7];

        let intervals = extract(&depths, 2, 0, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(2, 1)]);
        assert!(intervals[0].is_inverted());

        assert!(extract(&depths, 2, 0, MinimumLength::TwiceMargin).is_empty());
    }

    #[test]
    fn test_run_of_exactly_the_margin_is_kept() {
        let depths = [0, 1, 1, 1, 0];

        let intervals = extract(&depths, 3, 10, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(14, 11)]);
    }

    #[test]
    fn test_run_of_exactly_twice_the_margin_is_zero_width() {
        let depths = [0, 1, 1, 1, 1, 0];

        let intervals = extract(&depths, 2, 10, MinimumLength::TwiceMargin);
        assert_eq!(pairs(&intervals), vec![(13, 13)]);
        assert!(intervals[0].is_empty());
    }

    #[test]
    fn test_runs_shorter_than_the_minimum_are_dropped() {
        let depths = [4, 0, 4, 4, 0, 4, 4, 4, 4, 4, 4];

        let intervals = extract(&depths, 3, 0, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(8, 8)]);

        let intervals = extract(&depths, 2, 0, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(4, 2), (7, 9)]);

        let intervals = extract(&depths, 2, 0, MinimumLength::TwiceMargin);
        assert_eq!(pairs(&intervals), vec![(7, 9)]);
    }

    #[test]
    fn test_margin_larger_than_any_run_produces_nothing() {
        let depths = [1, 1, 1, 0, 1];
        assert!(extract(&depths, 10, 0, MinimumLength::Margin).is_empty());
        assert!(extract(&depths, usize::MAX, 0, MinimumLength::TwiceMargin).is_empty());
    }

    #[test]
    fn test_strict_intervals_are_sorted_disjoint_and_never_inverted() {
        let depths = [
            0, 9, 9, 9, 9, 9, 9, 0, 3, 3, 3, 3, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 2, 2,
        ];

        for margin in 1..=4 {
            let intervals = extract(&depths, margin, 1_000, MinimumLength::TwiceMargin);

            assert!(intervals.iter().all(|interval| !interval.is_inverted()));
            for pair in intervals.windows(2) {
                assert!(pair[0].start() <= pair[1].start());
                assert!(pair[0].end() <= pair[1].start());
            }
        }
    }

    #[test]
    fn test_intervals_are_sorted_by_start_under_margin_minimum() {
        let depths = [5, 5, 0, 5, 5, 5, 0, 5, 5, 5, 5, 5];
        let intervals = extract(&depths, 2, 0, MinimumLength::Margin);

        assert_eq!(pairs(&intervals), vec![(2, 0), (5, 4), (9, 10)]);
        for pair in intervals.windows(2) {
            assert!(pair[0].start() < pair[1].start());
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let depths = mask(&[0, 40, 41, 39, 50, 60, 70, 80, 0, 90], 40);

        let first = extract(&depths, 1, 7, MinimumLength::Margin);
        let second = extract(&depths, 1, 7, MinimumLength::Margin);

        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_origin() {
        let intervals = extract(&[0, 1, 1, 1, 1, 1], 1, -3, MinimumLength::Margin);
        assert_eq!(pairs(&intervals), vec![(-1, 2)]);
    }

    #[test]
    fn test_mask_keeps_depths_at_the_threshold() {
        assert_eq!(mask(&[], 5), Vec::<i64>::new());
        assert_eq!(mask(&[4, 5, 6], 5), vec![0, 5, 6]);
        assert_eq!(mask(&[-1, 0, 1], 0), vec![0, 0, 1]);
    }
}
