//! Margins and the policies that govern how they are applied.
//!
//! A margin is the number of loci trimmed from each end of a covered run. It is
//! provided as a comma-separated list (one value per sample), e.g., `20,20,25`.
//!
//! ## Margin mode
//!
//! Historically, only the first margin in the list was applied to every sample
//! even though one margin per sample was parsed and validated. That behavior is
//! preserved as [`Mode::First`] (the default). [`Mode::PerSample`] applies the
//! `i`th margin to the `i`th sample instead.
//!
//! ## Minimum run length
//!
//! Historically, a run was kept when its length was at least the margin, even
//! though the margin is then trimmed from _both_ ends. Runs with a length in
//! `margin..2 * margin` therefore produce inverted intervals (`start > end`).
//! That behavior is preserved as [`MinimumLength::Margin`] (the default), while
//! [`MinimumLength::TwiceMargin`] requires a length of at least `2 * margin`,
//! which guarantees `start <= end`.

use std::num::ParseIntError;
use std::str::FromStr;

use nonempty::NonEmpty;

/// The delimiter between margins in a margin list.
pub const DELIMITER: char = ',';

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a margin list.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The margin list was empty.
    Empty,

    /// A margin was not a valid integer.
    InvalidMargin(String, ParseIntError),

    /// A margin was zero.
    ZeroMargin(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no margins were provided"),
            ParseError::InvalidMargin(value, err) => {
                write!(f, "invalid margin `{value}`: {err}")
            }
            ParseError::ZeroMargin(index) => {
                write!(f, "margin #{} must be greater than zero", index + 1)
            }
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Margins
////////////////////////////////////////////////////////////////////////////////////////

/// A non-empty list of margins, each greater than zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Margins(NonEmpty<usize>);

impl Margins {
    /// Gets the margins as a [`NonEmpty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::margin::Margins;
    ///
    /// let margins = "20,25".parse::<Margins>()?;
    /// assert_eq!(margins.inner().head, 20);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn inner(&self) -> &NonEmpty<usize> {
        &self.0
    }

    /// Gets the number of margins.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always returns `false`, as margins are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gets the margin applied to the sample at `index` under the provided
    /// [`Mode`].
    ///
    /// [`None`] is returned only when `mode` is [`Mode::PerSample`] and there
    /// is no margin at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::margin::Margins;
    /// use coverage_intervals::margin::Mode;
    ///
    /// let margins = "20,25".parse::<Margins>()?;
    ///
    /// assert_eq!(margins.for_sample(1, Mode::First), Some(20));
    /// assert_eq!(margins.for_sample(1, Mode::PerSample), Some(25));
    /// assert_eq!(margins.for_sample(2, Mode::PerSample), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn for_sample(&self, index: usize, mode: Mode) -> Option<usize> {
        match mode {
            Mode::First => Some(self.0.head),
            Mode::PerSample => self.0.get(index).copied(),
        }
    }
}

impl std::fmt::Display for Margins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let margins = self
            .0
            .iter()
            .map(|margin| margin.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}", margins.join(DELIMITER.to_string().as_str()))
    }
}

impl FromStr for Margins {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let margins = s
            .split(DELIMITER)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .enumerate()
            .map(|(index, value)| {
                let margin = value
                    .parse::<usize>()
                    .map_err(|err| ParseError::InvalidMargin(value.to_string(), err))?;

                match margin {
                    0 => Err(ParseError::ZeroMargin(index)),
                    margin => Ok(margin),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        NonEmpty::from_vec(margins)
            .map(Self)
            .ok_or(ParseError::Empty)
    }
}

impl From<NonEmpty<usize>> for Margins {
    fn from(value: NonEmpty<usize>) -> Self {
        Self(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Policies
////////////////////////////////////////////////////////////////////////////////////////

/// How margins from a [`Margins`] list are assigned to samples.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// The first margin is applied to every sample.
    #[default]
    First,

    /// The margin at index `i` is applied to the sample at index `i`.
    PerSample,
}

/// The minimum length a run must have to survive trimming.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MinimumLength {
    /// Runs must be at least `margin` loci long. Runs shorter than
    /// `2 * margin` produce inverted intervals.
    #[default]
    Margin,

    /// Runs must be at least `2 * margin` loci long.
    TwiceMargin,
}

impl MinimumLength {
    /// Gets the minimum run length required for the provided margin.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::margin::MinimumLength;
    ///
    /// assert_eq!(MinimumLength::Margin.required_length(20), 20);
    /// assert_eq!(MinimumLength::TwiceMargin.required_length(20), 40);
    /// ```
    pub fn required_length(&self, margin: usize) -> usize {
        match self {
            MinimumLength::Margin => margin,
            MinimumLength::TwiceMargin => margin.saturating_mul(2),
        }
    }
}
