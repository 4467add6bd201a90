//! A builder for an [`Extractor`].

use crate::extraction::Extractor;
use crate::margin::Margins;
use crate::margin::MinimumLength;
use crate::margin::Mode;

/// The minimum coverage used when none is provided.
pub const DEFAULT_MIN_COVERAGE: i64 = 100;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum MissingError {
    /// No margins were provided to the [`Builder`].
    Margins,

    /// No reference name was provided to the [`Builder`].
    Reference,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Margins => write!(f, "margins"),
            MissingError::Reference => write!(f, "reference"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error related to a [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// The list of sample identifiers was empty.
    EmptySamples,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::EmptySamples => write!(f, "the list of sample identifiers is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for an [`Extractor`].
#[derive(Debug)]
pub struct Builder {
    /// The minimum coverage.
    min_coverage: i64,

    /// The margins.
    margins: Option<Margins>,

    /// How margins are assigned to samples.
    mode: Mode,

    /// The minimum run length policy.
    minimum_length: MinimumLength,

    /// Sample identifiers overriding those in the matrix header.
    samples: Option<Vec<String>>,

    /// The reference name.
    reference: Option<String>,
}

impl Builder {
    /// Sets the minimum coverage. Depths below this value are treated as
    /// uncovered.
    pub fn min_coverage(mut self, min_coverage: i64) -> Self {
        self.min_coverage = min_coverage;
        self
    }

    /// Sets the margins.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Sets how margins are assigned to samples.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the minimum run length policy.
    pub fn minimum_length(mut self, minimum_length: MinimumLength) -> Self {
        self.minimum_length = minimum_length;
        self
    }

    /// Sets the sample identifiers, overriding those in the matrix header.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::extraction::Builder;
    ///
    /// let builder = Builder::default().samples(vec![String::from("s1")])?;
    /// assert!(Builder::default().samples(Vec::new()).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn samples(mut self, samples: Vec<String>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySamples);
        }

        self.samples = Some(samples);
        Ok(self)
    }

    /// Sets the reference name.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Consumes `self` to attempt to build an [`Extractor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::extraction::Builder;
    /// use coverage_intervals::margin::Margins;
    ///
    /// let extractor = Builder::default()
    ///     .min_coverage(10)
    ///     .margins("20".parse::<Margins>()?)
    ///     .reference("HXB2")
    ///     .try_build()?;
    ///
    /// assert_eq!(extractor.reference(), "HXB2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Extractor> {
        let margins = self
            .margins
            .ok_or(Error::Missing(MissingError::Margins))?;
        let reference = self
            .reference
            .ok_or(Error::Missing(MissingError::Reference))?;

        Ok(Extractor {
            min_coverage: self.min_coverage,
            margins,
            mode: self.mode,
            minimum_length: self.minimum_length,
            samples: self.samples,
            reference,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            min_coverage: DEFAULT_MIN_COVERAGE,
            margins: None,
            mode: Mode::default(),
            minimum_length: MinimumLength::default(),
            samples: None,
            reference: None,
        }
    }
}
