//! An absolute, half-open interval produced by trimming a covered run.
//!
//! Intervals are `[start, end)` in genomic coordinates. Trimming can produce a
//! zero-width interval (`start == end`) and, under
//! [`MinimumLength::Margin`](crate::margin::MinimumLength::Margin), an inverted
//! one (`start > end`). Both are passed through untouched, so this type does
//! not validate its endpoints.

/// A half-open interval `[start, end)` in absolute genomic coordinates.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Interval {
    /// The start coordinate (inclusive).
    start: i64,

    /// The end coordinate (exclusive).
    end: i64,
}

impl Interval {
    /// Creates a new [`Interval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    ///
    /// let interval = Interval::new(104, 105);
    /// assert_eq!(interval.start(), 104);
    /// assert_eq!(interval.end(), 105);
    /// ```
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Gets the start coordinate (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Gets the end coordinate (exclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Gets the signed width of the interval (`end - start`). This is negative
    /// for an inverted interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    ///
    /// assert_eq!(Interval::new(10, 15).width(), 5);
    /// assert_eq!(Interval::new(10, 10).width(), 0);
    /// assert_eq!(Interval::new(2, 1).width(), -1);
    /// ```
    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    /// Returns whether the interval is zero-width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns whether the start lies after the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    ///
    /// assert!(Interval::new(2, 1).is_inverted());
    /// assert!(!Interval::new(1, 1).is_inverted());
    /// ```
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}
