//! A depth matrix held in memory, one column per sample.

use crate::depth::Header;
use crate::depth::Record;

/// An error related to a [`Matrix`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A record had a different number of fields than the header.
    IncorrectNumberOfFields {
        /// The locus of the offending record.
        locus: i64,

        /// The number of fields expected from the header.
        expected: usize,

        /// The number of fields found in the record.
        found: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IncorrectNumberOfFields {
                locus,
                expected,
                found,
            } => write!(
                f,
                "invalid number of fields at locus {locus}: expected {expected} fields, found \
                 {found} fields"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A depth matrix.
///
/// Depths are stored column-major, so the depth sequence of each sample can be
/// handed to the [interval extraction](crate::coverage::extract) as a slice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix {
    /// The header.
    header: Header,

    /// The locus of each row.
    loci: Vec<i64>,

    /// The depths of each sample.
    columns: Vec<Vec<i64>>,
}

impl Matrix {
    /// Creates a new, empty [`Matrix`] with the columns named by `header`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Header;
    /// use coverage_intervals::depth::Matrix;
    ///
    /// let header = "pos\ts1\ts2".parse::<Header>()?;
    /// let matrix = Matrix::new(header);
    ///
    /// assert!(matrix.is_empty());
    /// assert_eq!(matrix.num_samples(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(header: Header) -> Self {
        let columns = vec![Vec::new(); header.samples().len()];

        Self {
            header,
            loci: Vec::new(),
            columns,
        }
    }

    /// Pushes a record onto the end of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Header;
    /// use coverage_intervals::depth::Matrix;
    /// use coverage_intervals::depth::Record;
    ///
    /// let mut matrix = Matrix::new("pos\ts1\ts2".parse::<Header>()?);
    /// matrix.push(Record::new(100, vec![5, 0]))?;
    /// matrix.push(Record::new(101, vec![6, 1]))?;
    ///
    /// assert_eq!(matrix.column(0), Some(&[5, 6][..]));
    /// assert!(matrix.push(Record::new(102, vec![1])).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn push(&mut self, record: Record) -> Result<(), Error> {
        if record.width() != self.header.width() {
            return Err(Error::IncorrectNumberOfFields {
                locus: record.locus(),
                expected: self.header.width(),
                found: record.width(),
            });
        }

        let (locus, depths) = record.into_parts();
        self.loci.push(locus);

        for (column, depth) in self.columns.iter_mut().zip(depths) {
            column.push(depth);
        }

        Ok(())
    }

    /// Gets the header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Gets the sample identifiers from the header.
    pub fn samples(&self) -> &[String] {
        self.header.samples()
    }

    /// Gets the number of sample columns.
    pub fn num_samples(&self) -> usize {
        self.columns.len()
    }

    /// Gets the loci.
    pub fn loci(&self) -> &[i64] {
        &self.loci
    }

    /// Gets the number of loci (rows).
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// Returns whether the matrix has no loci.
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    /// Gets the depth sequence of the sample column at `index`.
    pub fn column(&self, index: usize) -> Option<&[i64]> {
        self.columns.get(index).map(|column| column.as_slice())
    }

    /// Returns an iterator over the depth sequence of each sample column.
    pub fn columns(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.columns.iter().map(|column| column.as_slice())
    }

    /// Gets the coordinate origin: the locus of the first row, shared by every
    /// sample. An empty matrix has an origin of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::depth::Reader;
    ///
    /// let data = b"pos\ts1\n250\t3\n251\t3\n";
    /// let matrix = Reader::new(&data[..]).read_matrix()?;
    ///
    /// assert_eq!(matrix.origin(), 250);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn origin(&self) -> i64 {
        self.loci.first().copied().unwrap_or(0)
    }

    /// Returns whether each locus immediately follows the previous one.
    ///
    /// Extraction assumes the loci are consecutive, as only the first locus is
    /// used to place intervals.
    pub fn is_contiguous(&self) -> bool {
        self.loci.windows(2).all(|pair| pair[1] == pair[0] + 1)
    }
}
