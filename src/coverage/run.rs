//! Maximal runs of nonzero depth within a depth sequence.
//!
//! ```text
//! index   | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 |
//! depth   | 0 | 0 | 5 | 5 | 5 | 5 | 5 | 0 | 3 |
//! ---------------------------------------------
//! runs            [2 ---------------- 7)  [8 - 9)
//! ```
//!
//! A run opens at every index where the "is nonzero" predicate switches from
//! false to true and closes at every index where it switches back. The edges of
//! the sequence act as implicit boundaries, so a sequence that begins or ends
//! inside a run still produces a closed run.

/// A maximal, half-open range `[start, end)` of local indices whose depth is
/// nonzero.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Run {
    /// The first index of the run (inclusive).
    start: usize,

    /// The index immediately after the run (exclusive).
    end: usize,
}

impl Run {
    /// Creates a new [`Run`].
    ///
    /// Runs are always produced by [`runs()`], so `start < end` holds for every
    /// run observed outside of this module.
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Gets the start index of the run (inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::run;
    ///
    /// let runs = run::runs(&[0, 4, 4, 0]);
    /// assert_eq!(runs[0].start(), 1);
    /// ```
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the end index of the run (exclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::run;
    ///
    /// let runs = run::runs(&[0, 4, 4, 0]);
    /// assert_eq!(runs[0].end(), 3);
    /// ```
    pub fn end(&self) -> usize {
        self.end
    }

    /// Gets the number of loci within the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::run;
    ///
    /// let runs = run::runs(&[0, 4, 4, 0]);
    /// assert_eq!(runs[0].len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns whether the run contains no loci. This is never true for runs
    /// returned by [`runs()`].
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds every maximal run of nonzero values within `depths`, in ascending
/// order.
///
/// # Examples
///
/// ```
/// use coverage_intervals::coverage::run;
///
/// let runs = run::runs(&[7, 7, 0, 0, 2, 0, 1, 1]);
///
/// let bounds = runs
///     .iter()
///     .map(|run| (run.start(), run.end()))
///     .collect::<Vec<_>>();
///
/// assert_eq!(bounds, vec![(0, 2), (4, 5), (6, 8)]);
/// ```
pub fn runs(depths: &[i64]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut opened = None;

    for (index, depth) in depths.iter().enumerate() {
        match (opened, *depth != 0) {
            (None, true) => opened = Some(index),
            (Some(start), false) => {
                runs.push(Run::new(start, index));
                opened = None;
            }
            _ => {}
        }
    }

    // The end of the sequence closes any run that is still open.
    if let Some(start) = opened {
        runs.push(Run::new(start, depths.len()));
    }

    runs
}
