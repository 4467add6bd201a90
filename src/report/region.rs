//! A named interval within a report, written as `<name>:<start>-<end>`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::coverage::Interval;

/// Matches `<name>:<start>-<end>`, where the name may itself contain colons and
/// either coordinate may be negative.
static REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+):(-?[0-9]+)-(-?[0-9]+)$").unwrap());

/// An error associated with parsing a region.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The value was not of the form `<name>:<start>-<end>`.
    InvalidFormat(String),

    /// A coordinate did not fit into an `i64`.
    InvalidCoordinate(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFormat(value) => write!(
                f,
                "invalid region `{value}`: expected the form `<name>:<start>-<end>`"
            ),
            ParseError::InvalidCoordinate(value) => {
                write!(f, "invalid coordinate in region `{value}`")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An interval anchored to a reference name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region {
    /// The reference name.
    name: String,

    /// The interval.
    interval: Interval,
}

impl Region {
    /// Creates a new [`Region`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    /// use coverage_intervals::report::Region;
    ///
    /// let region = Region::new("HXB2", Interval::new(2253, 3869));
    /// assert_eq!(region.to_string(), "HXB2:2253-3869");
    /// ```
    pub fn new(name: impl Into<String>, interval: Interval) -> Self {
        Self {
            name: name.into(),
            interval,
        }
    }

    /// Gets the reference name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.interval)
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = REGEX
            .captures(s)
            .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?;

        // SAFETY: every group is required by the expression, so each one is
        // present whenever the expression matches.
        let name = groups.get(1).unwrap().as_str();
        let start = groups.get(2).unwrap().as_str();
        let end = groups.get(3).unwrap().as_str();

        let start = start
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidCoordinate(s.to_string()))?;
        let end = end
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidCoordinate(s.to_string()))?;

        Ok(Self::new(name, Interval::new(start, end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() -> Result<(), Box<dyn std::error::Error>> {
        let region = "HXB2:104-105".parse::<Region>()?;

        assert_eq!(region.name(), "HXB2");
        assert_eq!(region.interval(), &Interval::new(104, 105));

        Ok(())
    }

    #[test]
    fn test_parse_region_with_colons_in_the_name() -> Result<(), Box<dyn std::error::Error>> {
        let region = "HXB2:2253-3869:10-20".parse::<Region>()?;

        assert_eq!(region.name(), "HXB2:2253-3869");
        assert_eq!(region.interval(), &Interval::new(10, 20));

        Ok(())
    }

    #[test]
    fn test_parse_inverted_and_negative_regions() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            "ref:2-1".parse::<Region>()?.interval(),
            &Interval::new(2, 1)
        );
        assert_eq!(
            "ref:-4--1".parse::<Region>()?.interval(),
            &Interval::new(-4, -1)
        );

        Ok(())
    }

    #[test]
    fn test_invalid_regions() {
        for value in ["", "ref", "ref:", "ref:1", "ref:1-", ":1-2", "ref:a-2"] {
            assert!(matches!(
                value.parse::<Region>(),
                Err(ParseError::InvalidFormat(_))
            ));
        }

        let err = "ref:1-99999999999999999999".parse::<Region>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_region_to_string() {
        assert_eq!(
            Region::new("ref", Interval::new(7, 7)).to_string(),
            "ref:7-7"
        );
    }
}
