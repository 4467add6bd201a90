//! A report record: the regions of a single sample.

use std::str::FromStr;

use crate::report::region;
use crate::report::Region;

/// The delimiter between the sample identifier and its regions.
pub const DELIMITER: char = '\t';

/// The delimiter between regions.
pub const REGION_DELIMITER: char = ',';

/// An error associated with parsing a report record.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The line had no tab separating the sample from its regions.
    MissingDelimiter(String),

    /// The sample identifier was empty.
    EmptySample,

    /// An invalid region.
    InvalidRegion(region::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingDelimiter(line) => {
                write!(f, "missing tab after the sample identifier: {line}")
            }
            ParseError::EmptySample => write!(f, "the sample identifier is empty"),
            ParseError::InvalidRegion(err) => write!(f, "invalid region: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The well-covered regions of one sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The sample identifier.
    sample: String,

    /// The regions, in ascending order.
    regions: Vec<Region>,
}

impl Record {
    /// Creates a new [`Record`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    /// use coverage_intervals::report::Record;
    /// use coverage_intervals::report::Region;
    ///
    /// let record = Record::new(
    ///     "sample_a",
    ///     vec![
    ///         Region::new("HXB2", Interval::new(104, 105)),
    ///         Region::new("HXB2", Interval::new(210, 400)),
    ///     ],
    /// );
    ///
    /// assert_eq!(record.to_string(), "sample_a\tHXB2:104-105,HXB2:210-400");
    /// ```
    pub fn new(sample: impl Into<String>, regions: Vec<Region>) -> Self {
        Self {
            sample: sample.into(),
            regions,
        }
    }

    /// Gets the sample identifier.
    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Gets the regions.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Consumes self to return the sample identifier and its regions.
    pub fn into_parts(self) -> (String, Vec<Region>) {
        (self.sample, self.regions)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.sample, DELIMITER)?;

        for (i, region) in self.regions.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", REGION_DELIMITER)?;
            }

            write!(f, "{}", region)?;
        }

        Ok(())
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sample, regions) = s
            .split_once(DELIMITER)
            .ok_or_else(|| ParseError::MissingDelimiter(s.to_string()))?;

        if sample.is_empty() {
            return Err(ParseError::EmptySample);
        }

        let regions = match regions.is_empty() {
            true => Vec::new(),
            false => regions
                .split(REGION_DELIMITER)
                .map(|region| region.parse::<Region>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(ParseError::InvalidRegion)?,
        };

        Ok(Self::new(sample, regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::Interval;

    #[test]
    fn test_record_without_regions_has_an_empty_field() {
        let record = Record::new("sample_a", Vec::new());
        assert_eq!(record.to_string(), "sample_a\t");
    }

    #[test]
    fn test_parse_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "s1\tref:1-5,ref:9-9".parse::<Record>()?;

        assert_eq!(record.sample(), "s1");
        assert_eq!(
            record.regions(),
            &[
                Region::new("ref", Interval::new(1, 5)),
                Region::new("ref", Interval::new(9, 9)),
            ]
        );

        let record = "s2\t".parse::<Record>()?;
        assert_eq!(record.sample(), "s2");
        assert!(record.regions().is_empty());

        Ok(())
    }

    #[test]
    fn test_invalid_records() {
        assert!(matches!(
            "s1".parse::<Record>(),
            Err(ParseError::MissingDelimiter(_))
        ));
        assert!(matches!(
            "\tref:1-2".parse::<Record>(),
            Err(ParseError::EmptySample)
        ));
        assert!(matches!(
            "s1\tref:1-2,".parse::<Record>(),
            Err(ParseError::InvalidRegion(_))
        ));
    }
}
