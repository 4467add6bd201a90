//! Resolution of the reference name attached to every output interval.
//!
//! The reference can be given either as the path to a FASTA file (optionally
//! gzipped), in which case the name of its first record is used, or as the
//! name itself.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use noodles::fasta;

use crate::file;

/// An error related to resolving a reference name.
#[derive(Debug)]
pub enum Error {
    /// An I/O error while reading the FASTA file.
    Io(PathBuf, io::Error),

    /// The FASTA file contained no records.
    EmptyFasta(PathBuf),

    /// The resolved name was empty.
    EmptyName,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(path, err) => write!(f, "i/o error reading `{}`: {err}", path.display()),
            Error::EmptyFasta(path) => {
                write!(f, "the FASTA file `{}` has no records", path.display())
            }
            Error::EmptyName => write!(f, "the reference name is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Where the reference name comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// The name of the first record within a FASTA file.
    Fasta(PathBuf),

    /// A name given directly.
    Literal(String),
}

impl Source {
    /// Interprets a user-provided value as a [`Source`].
    ///
    /// A value naming an existing file is treated as a FASTA file. Anything
    /// else is treated as the name itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::reference::Source;
    ///
    /// let source = Source::from_arg("HXB2:2253-3869");
    /// assert_eq!(source, Source::Literal(String::from("HXB2:2253-3869")));
    /// ```
    pub fn from_arg(value: &str) -> Self {
        let path = Path::new(value);

        match path.is_file() {
            true => Source::Fasta(path.to_path_buf()),
            false => Source::Literal(value.to_string()),
        }
    }

    /// Resolves the reference name.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::reference::Source;
    ///
    /// let source = Source::Literal(String::from("HXB2"));
    /// assert_eq!(source.resolve()?, "HXB2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve(&self) -> Result<String> {
        let name = match self {
            Source::Fasta(path) => first_record_name(path)?,
            Source::Literal(name) => name.trim().to_string(),
        };

        match name.is_empty() {
            true => Err(Error::EmptyName),
            false => Ok(name),
        }
    }
}

/// Reads the name of the first record within a FASTA file.
fn first_record_name(path: &Path) -> Result<String> {
    let inner = file::open(path).map_err(|err| Error::Io(path.to_path_buf(), err))?;
    let mut reader = fasta::io::Reader::new(inner);

    match reader.records().next() {
        Some(result) => {
            let record = result.map_err(|err| Error::Io(path.to_path_buf(), err))?;
            Ok(String::from_utf8_lossy(record.name().as_ref()).into_owned())
        }
        None => Err(Error::EmptyFasta(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_literal_names_are_trimmed() -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Source::Literal(String::from(" chr1 ")).resolve()?, "chr1");
        Ok(())
    }

    #[test]
    fn test_empty_literal_name() {
        let err = Source::Literal(String::from("  ")).resolve().unwrap_err();
        assert!(matches!(err, Error::EmptyName));
    }

    #[test]
    fn test_missing_file_is_a_literal() {
        assert_eq!(
            Source::from_arg("does/not/exist.fasta"),
            Source::Literal(String::from("does/not/exist.fasta"))
        );
    }

    #[test]
    fn test_fasta_name_is_the_first_record() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new("reference")?;
        let path = dir.path().join("reference.fasta");
        std::fs::write(&path, ">HXB2 reference genome\nACGT\nACGT\n>other\nTTTT\n")?;

        let source = Source::from_arg(path.to_str().unwrap());
        assert_eq!(source, Source::Fasta(path.clone()));
        assert_eq!(source.resolve()?, "HXB2");

        Ok(())
    }

    #[test]
    fn test_empty_fasta() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("reference")?;
        let path = dir.path().join("empty.fasta");
        std::fs::write(&path, "")?;

        let err = Source::Fasta(path).resolve().unwrap_err();
        assert!(matches!(err, Error::EmptyFasta(_)));

        Ok(())
    }
}
