//! Tab-delimited depth matrices.
//!
//! A depth matrix has one header line followed by one record per locus. The
//! first column holds the locus and each remaining column holds the depth of
//! one sample at that locus.
//!
//! ```text
//! #pos    sample_a    sample_b
//! 1000    0           12
//! 1001    31          14
//! 1002    33          0
//! ```
//!
//! A leading `#` on the header line is optional and blank lines are skipped.

pub mod header;
pub mod matrix;
pub mod record;

use std::io;
use std::io::BufRead;
use std::iter;

pub use header::Header;
pub use matrix::Matrix;
pub use record::Record;

/// The delimiter between fields.
pub const DELIMITER: char = '\t';

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// The input ended before a header line was found.
    MissingHeader,

    /// An invalid header line.
    InvalidHeader(header::ParseError, String),

    /// An invalid record on the specified line.
    InvalidRecord(usize, record::ParseError),

    /// A record that does not fit the matrix on the specified line.
    Matrix(usize, matrix::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::MissingHeader => write!(f, "the depth matrix has no header line"),
            Error::InvalidHeader(err, line) => {
                write!(f, "invalid header: {err}\n\nline: {line}")
            }
            Error::InvalidRecord(line_no, err) => {
                write!(f, "invalid record on line {line_no}: {err}")
            }
            Error::Matrix(line_no, err) => write!(f, "matrix error on line {line_no}: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A depth matrix reader.
#[derive(Clone, Debug)]
pub struct Reader<T>
where
    T: BufRead,
{
    /// The inner reader.
    inner: T,

    /// The number of lines read so far.
    line_no: usize,
}

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a depth matrix reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"pos\ts1\n1\t10\n";
    /// let reader = coverage_intervals::depth::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Gets the number of lines read so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads a raw, textual line from the underlying reader with its line
    /// ending removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"pos\ts1\r\n1\t10";
    /// let mut reader = coverage_intervals::depth::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 8);
    /// assert_eq!(buffer, "pos\ts1");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 4);
    /// assert_eq!(buffer, "1\t10");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        let read = read_line(&mut self.inner, buffer)?;

        if read > 0 {
            self.line_no += 1;
        }

        Ok(read)
    }

    /// Reads the next non-blank line, returning `false` at the end of input.
    fn read_nonblank_line(&mut self, buffer: &mut String) -> io::Result<bool> {
        loop {
            match self.read_line_raw(buffer)? {
                0 => return Ok(false),
                _ if buffer.trim().is_empty() => continue,
                _ => return Ok(true),
            }
        }
    }

    /// Attempts to read the header, which is the first non-blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"\n#pos\ts1\ts2\n1\t10\t0\n";
    /// let mut reader = coverage_intervals::depth::Reader::new(&data[..]);
    ///
    /// let header = reader.read_header()?;
    /// assert_eq!(header.samples(), &["s1", "s2"]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_header(&mut self) -> Result<Header> {
        let mut buffer = String::new();

        match self.read_nonblank_line(&mut buffer).map_err(Error::Io)? {
            true => buffer
                .parse::<Header>()
                .map_err(|err| Error::InvalidHeader(err, buffer.clone())),
            false => Err(Error::MissingHeader),
        }
    }

    /// Returns an iterator over the remaining [`Record`]s in the underlying
    /// reader. This should be called after [`Reader::read_header()`].
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"pos\ts1\n1\t10\n\n2\t0\n";
    /// let mut reader = coverage_intervals::depth::Reader::new(&data[..]);
    /// reader.read_header()?;
    ///
    /// let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || match self.read_nonblank_line(&mut buffer) {
            Ok(false) => None,
            Ok(true) => Some(
                buffer
                    .parse::<Record>()
                    .map_err(|err| Error::InvalidRecord(self.line_no, err)),
            ),
            Err(err) => Some(Err(Error::Io(err))),
        })
    }

    /// Reads the header and every record into a [`Matrix`].
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"#pos\ts1\ts2\n100\t0\t5\n101\t7\t5\n";
    /// let mut reader = coverage_intervals::depth::Reader::new(&data[..]);
    ///
    /// let matrix = reader.read_matrix()?;
    /// assert_eq!(matrix.len(), 2);
    /// assert_eq!(matrix.column(1), Some(&[5, 5][..]));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_matrix(&mut self) -> Result<Matrix> {
        let header = self.read_header()?;
        let mut matrix = Matrix::new(header);

        let mut buffer = String::new();

        while self.read_nonblank_line(&mut buffer).map_err(Error::Io)? {
            let record = buffer
                .parse::<Record>()
                .map_err(|err| Error::InvalidRecord(self.line_no, err))?;

            matrix
                .push(record)
                .map_err(|err| Error::Matrix(self.line_no, err))?;
        }

        Ok(matrix)
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self { inner, line_no: 0 }
    }
}

/// Reads a line from a buffered reader, stripping the line ending.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
