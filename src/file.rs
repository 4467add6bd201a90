//! Opening input files that may be gzipped.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// The extension that marks a file as gzipped.
const GZIP_EXTENSION: &str = "gz";

/// Opens a file for buffered reading.
///
/// Files with a `.gz` extension are transparently decompressed. Everything
/// else is read as-is.
///
/// # Examples
///
/// ```no_run
/// use std::io::BufRead as _;
///
/// let reader = coverage_intervals::file::open("depths.tsv.gz")?;
/// for line in reader.lines() {
///     println!("{}", line?);
/// }
///
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn open(path: impl AsRef<Path>) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match is_gzipped(path) {
        true => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        false => Ok(Box::new(BufReader::new(file))),
    }
}

/// Returns whether a path looks like a gzipped file.
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension.eq_ignore_ascii_case(GZIP_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("depths.tsv.gz")));
        assert!(is_gzipped(Path::new("DEPTHS.TSV.GZ")));
        assert!(!is_gzipped(Path::new("depths.tsv")));
        assert!(!is_gzipped(Path::new("gz")));
    }

    #[test]
    fn test_open_plain_and_gzipped_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("file")?;

        let plain = dir.path().join("depths.tsv");
        std::fs::write(&plain, "pos\ts1\n1\t2\n")?;

        let gzipped = dir.path().join("depths.tsv.gz");
        let mut encoder = GzEncoder::new(File::create(&gzipped)?, Compression::default());
        encoder.write_all(b"pos\ts1\n1\t2\n")?;
        encoder.finish()?;

        for path in [plain, gzipped] {
            let lines = open(&path)?.lines().collect::<io::Result<Vec<_>>>()?;
            assert_eq!(lines, vec![String::from("pos\ts1"), String::from("1\t2")]);
        }

        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let err = open("this/path/does/not/exist.tsv").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
