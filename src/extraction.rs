//! Per-sample extraction of coverage intervals from a depth matrix.
//!
//! An [`Extractor`] ties together the minimum coverage, the margins, and the
//! reference name, checks them against the shape of a [`Matrix`], and runs the
//! [interval extraction](crate::coverage::extract) once for every sample
//! column. Every sample shares the same coordinate origin: the first locus of
//! the matrix.
//!
//! An [`Extractor`] cannot be instantiated directly. Instead, you should use
//! [`Builder`] to construct one.

pub mod builder;

pub use builder::Builder;

use crate::coverage;
use crate::depth::Matrix;
use crate::margin::Margins;
use crate::margin::MinimumLength;
use crate::margin::Mode;
use crate::report;
use crate::report::Region;

/// The delimiter between sample identifiers in a sample list.
pub const SAMPLE_DELIMITER: char = ',';

/// An error related to an [`Extractor`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The number of margins does not match the number of sample columns.
    MarginCount {
        /// The number of sample columns.
        expected: usize,

        /// The number of margins.
        found: usize,
    },

    /// The number of sample identifiers does not match the number of sample
    /// columns.
    SampleCount {
        /// The number of sample columns.
        expected: usize,

        /// The number of sample identifiers.
        found: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MarginCount { expected, found } => write!(
                f,
                "expected one margin per sample column ({expected}), found {found} margins"
            ),
            Error::SampleCount { expected, found } => write!(
                f,
                "expected one sample identifier per sample column ({expected}), found {found} \
                 sample identifiers"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Splits a comma-separated list of sample identifiers.
///
/// # Examples
///
/// ```
/// use coverage_intervals::extraction;
///
/// let samples = extraction::parse_samples("s1, s2,,s3");
/// assert_eq!(samples, vec!["s1", "s2", "s3"]);
/// ```
pub fn parse_samples(value: &str) -> Vec<String> {
    value
        .split(SAMPLE_DELIMITER)
        .map(str::trim)
        .filter(|sample| !sample.is_empty())
        .map(String::from)
        .collect()
}

/// Extracts the well-covered, margin-trimmed regions of every sample within a
/// depth matrix.
#[derive(Clone, Debug)]
pub struct Extractor {
    /// The minimum coverage.
    min_coverage: i64,

    /// The margins.
    margins: Margins,

    /// How margins are assigned to samples.
    mode: Mode,

    /// The minimum run length policy.
    minimum_length: MinimumLength,

    /// Sample identifiers overriding those in the matrix header.
    samples: Option<Vec<String>>,

    /// The reference name.
    reference: String,
}

impl Extractor {
    /// Gets the minimum coverage.
    pub fn min_coverage(&self) -> i64 {
        self.min_coverage
    }

    /// Gets the margins.
    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// Gets how margins are assigned to samples.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Gets the minimum run length policy.
    pub fn minimum_length(&self) -> MinimumLength {
        self.minimum_length
    }

    /// Gets the sample identifiers overriding those in the matrix header, if
    /// any were provided.
    pub fn samples(&self) -> Option<&[String]> {
        self.samples.as_deref()
    }

    /// Gets the reference name.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Checks the configuration against the shape of `matrix`.
    ///
    /// Margins must be given for every sample column, even when only the first
    /// one is applied under [`Mode::First`].
    pub fn validate(&self, matrix: &Matrix) -> Result<()> {
        let expected = matrix.num_samples();

        if self.margins.len() != expected {
            return Err(Error::MarginCount {
                expected,
                found: self.margins.len(),
            });
        }

        if let Some(samples) = &self.samples {
            if samples.len() != expected {
                return Err(Error::SampleCount {
                    expected,
                    found: samples.len(),
                });
            }
        }

        Ok(())
    }

    /// Extracts the regions of every sample, returning one report record per
    /// sample column in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Reader;
    /// use coverage_intervals::extraction::Builder;
    /// use coverage_intervals::margin::Margins;
    ///
    /// let data = b"pos\ts1\ts2\n\
    ///              100\t0\t0\n\
    ///              101\t0\t0\n\
    ///              102\t50\t0\n\
    ///              103\t50\t0\n\
    ///              104\t50\t0\n\
    ///              105\t50\t0\n\
    ///              106\t50\t0\n\
    ///              107\t0\t0\n";
    /// let matrix = Reader::new(&data[..]).read_matrix()?;
    ///
    /// let extractor = Builder::default()
    ///     .min_coverage(10)
    ///     .margins("2,2".parse::<Margins>()?)
    ///     .reference("ref")
    ///     .try_build()?;
    ///
    /// let records = extractor.extract(&matrix)?;
    /// assert_eq!(records[0].to_string(), "s1\tref:104-105");
    /// assert_eq!(records[1].to_string(), "s2\t");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extract(&self, matrix: &Matrix) -> Result<Vec<report::Record>> {
        self.validate(matrix)?;

        let samples = self.samples.as_deref().unwrap_or(matrix.samples());
        let origin = matrix.origin();

        matrix
            .columns()
            .zip(samples)
            .enumerate()
            .map(|(index, (depths, sample))| -> Result<report::Record> {
                let margin = self.margins.for_sample(index, self.mode).ok_or(
                    Error::MarginCount {
                        expected: matrix.num_samples(),
                        found: self.margins.len(),
                    },
                )?;

                let masked = coverage::mask(depths, self.min_coverage);
                let regions = coverage::extract(&masked, margin, origin, self.minimum_length)
                    .into_iter()
                    .map(|interval| Region::new(self.reference.as_str(), interval))
                    .collect::<Vec<_>>();

                Ok(report::Record::new(sample.as_str(), regions))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::Reader;

    /// Two samples over loci 10..20.
    const DATA: &[u8] = b"#pos\ts1\ts2\n\
        10\t0\t30\n\
        11\t30\t30\n\
        12\t30\t30\n\
        13\t30\t30\n\
        14\t30\t30\n\
        15\t30\t5\n\
        16\t30\t30\n\
        17\t5\t30\n\
        18\t30\t30\n\
        19\t30\t30\n";

    fn matrix() -> std::result::Result<Matrix, Box<dyn std::error::Error>> {
        Ok(Reader::new(DATA).read_matrix()?)
    }

    fn extractor(margins: &str) -> Builder {
        Builder::default()
            .min_coverage(10)
            .margins(margins.parse::<Margins>().unwrap())
            .reference("ref")
    }

    fn lines(records: &[report::Record]) -> Vec<String> {
        records.iter().map(|record| record.to_string()).collect()
    }

    #[test]
    fn test_first_margin_applies_to_every_sample()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = extractor("1,2").try_build()?.extract(&matrix()?)?;

        // s1 runs: [11, 17) and [18, 20). s2 runs: [10, 15) and [16, 20).
        assert_eq!(
            lines(&records),
            vec!["s1\tref:12-16,ref:19-19", "s2\tref:11-14,ref:17-19"]
        );

        Ok(())
    }

    #[test]
    fn test_per_sample_margins() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = extractor("1,2")
            .mode(Mode::PerSample)
            .try_build()?
            .extract(&matrix()?)?;

        assert_eq!(
            lines(&records),
            vec!["s1\tref:12-16,ref:19-19", "s2\tref:12-13,ref:18-18"]
        );

        Ok(())
    }

    #[test]
    fn test_twice_margin_minimum_drops_short_runs()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = extractor("2,2")
            .minimum_length(MinimumLength::TwiceMargin)
            .try_build()?
            .extract(&matrix()?)?;

        assert_eq!(lines(&records), vec!["s1\tref:13-15", "s2\tref:12-13,ref:18-18"]);

        Ok(())
    }

    #[test]
    fn test_margin_minimum_passes_inverted_intervals_through()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = extractor("2,2").try_build()?.extract(&matrix()?)?;

        assert_eq!(
            lines(&records),
            vec!["s1\tref:13-15,ref:20-18", "s2\tref:12-13,ref:18-18"]
        );

        Ok(())
    }

    #[test]
    fn test_sample_identifiers_override_the_header()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = extractor("1,1")
            .samples(vec![String::from("a"), String::from("b")])?
            .try_build()?
            .extract(&matrix()?)?;

        assert_eq!(records[0].sample(), "a");
        assert_eq!(records[1].sample(), "b");

        Ok(())
    }

    #[test]
    fn test_mismatched_counts_are_fatal() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = extractor("1").try_build()?.extract(&matrix()?).unwrap_err();
        assert_eq!(
            err,
            Error::MarginCount {
                expected: 2,
                found: 1
            }
        );

        let err = extractor("1,1")
            .samples(vec![String::from("a")])?
            .try_build()?
            .extract(&matrix()?)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected one sample identifier per sample column (2), found 1 sample identifiers"
        );

        Ok(())
    }

    #[test]
    fn test_empty_matrix_yields_empty_records() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let matrix = Reader::new(&b"pos\ts1\ts2\n"[..]).read_matrix()?;
        let records = extractor("1,1").try_build()?.extract(&matrix)?;

        assert_eq!(lines(&records), vec!["s1\t", "s2\t"]);

        Ok(())
    }

    #[test]
    fn test_parse_samples() {
        assert_eq!(parse_samples("a,b"), vec!["a", "b"]);
        assert!(parse_samples(" , ").is_empty());
    }
}
