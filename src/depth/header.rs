//! The header line of a depth matrix.

use std::str::FromStr;

use crate::depth::DELIMITER;

/// The optional prefix of a header line.
pub const HEADER_PREFIX: char = '#';

/// An error associated with parsing a header.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The header had no locus column.
    Empty,

    /// The header named no samples.
    MissingSamples,

    /// A sample identifier was empty.
    EmptySample(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "the header is empty"),
            ParseError::MissingSamples => {
                write!(f, "the header does not name any sample columns")
            }
            ParseError::EmptySample(column) => {
                write!(f, "the sample identifier in column {column} is empty")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The header of a depth matrix.
///
/// The first column names the locus column (and is otherwise ignored), while
/// each remaining column names one sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// The name of the locus column.
    locus: String,

    /// The sample identifiers.
    samples: Vec<String>,
}

impl Header {
    /// Gets the name of the locus column.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Header;
    ///
    /// let header = "#pos\tsample_a\tsample_b".parse::<Header>()?;
    /// assert_eq!(header.locus(), "pos");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn locus(&self) -> &str {
        &self.locus
    }

    /// Gets the sample identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Header;
    ///
    /// let header = "#pos\tsample_a\tsample_b".parse::<Header>()?;
    /// assert_eq!(header.samples(), &["sample_a", "sample_b"]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Gets the number of columns, including the locus column.
    pub fn width(&self) -> usize {
        self.samples.len() + 1
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", HEADER_PREFIX, self.locus)?;

        for sample in &self.samples {
            write!(f, "{}{}", DELIMITER, sample)?;
        }

        Ok(())
    }
}

impl FromStr for Header {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(HEADER_PREFIX).unwrap_or(s);

        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let mut fields = s.split(DELIMITER);

        // SAFETY: `split()` always yields at least one item.
        let locus = fields.next().unwrap().trim().to_string();

        let samples = fields
            .enumerate()
            .map(|(i, sample)| match sample.trim() {
                "" => Err(ParseError::EmptySample(i + 1)),
                sample => Ok(sample.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if samples.is_empty() {
            return Err(ParseError::MissingSamples);
        }

        Ok(Self { locus, samples })
    }
}
