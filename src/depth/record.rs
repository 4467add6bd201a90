//! A record (one locus) within a depth matrix.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::depth::DELIMITER;

/// An error associated with parsing a record.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The record was empty.
    Empty,

    /// An invalid locus.
    InvalidLocus(ParseIntError),

    /// An invalid depth within the specified column.
    InvalidDepth(usize, ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "the record is empty"),
            ParseError::InvalidLocus(err) => write!(f, "invalid locus: {err}"),
            ParseError::InvalidDepth(column, err) => {
                write!(f, "invalid depth in column {column}: {err}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The depths of every sample at a single locus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The locus.
    locus: i64,

    /// The depth of each sample at the locus.
    depths: Vec<i64>,
}

impl Record {
    /// Creates a new [`Record`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Record;
    ///
    /// let record = Record::new(1_000, vec![12, 0, 4]);
    /// assert_eq!(record.locus(), 1_000);
    /// ```
    pub fn new(locus: i64, depths: Vec<i64>) -> Self {
        Self { locus, depths }
    }

    /// Gets the locus.
    pub fn locus(&self) -> i64 {
        self.locus
    }

    /// Gets the depths.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Record;
    ///
    /// let record = "1000\t12\t0\t4".parse::<Record>()?;
    /// assert_eq!(record.depths(), &[12, 0, 4]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn depths(&self) -> &[i64] {
        &self.depths
    }

    /// Gets the number of columns, including the locus column.
    pub fn width(&self) -> usize {
        self.depths.len() + 1
    }

    /// Consumes self to return the locus and the depths.
    pub fn into_parts(self) -> (i64, Vec<i64>) {
        (self.locus, self.depths)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.locus)?;

        for depth in &self.depths {
            write!(f, "{}{}", DELIMITER, depth)?;
        }

        Ok(())
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let mut fields = s.split(DELIMITER);

        // SAFETY: `split()` always yields at least one item.
        let locus = fields
            .next()
            .unwrap()
            .trim()
            .parse::<i64>()
            .map_err(ParseError::InvalidLocus)?;

        let depths = fields
            .enumerate()
            .map(|(i, depth)| {
                depth
                    .trim()
                    .parse::<i64>()
                    .map_err(|err| ParseError::InvalidDepth(i + 1, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { locus, depths })
    }
}
