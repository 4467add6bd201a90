//! Coverage interval reports.
//!
//! A report has one line per sample: the sample identifier, a tab, and the
//! sample's regions separated by commas. A sample without any regions still
//! gets a line, with an empty field after the tab.
//!
//! ```text
//! sample_a    HXB2:2300-2780,HXB2:2900-3700
//! sample_b
//! ```

pub mod record;
pub mod region;

use std::io;
use std::io::Write;

pub use record::Record;
pub use region::Region;

/// A report writer.
#[derive(Debug)]
pub struct Writer<W>
where
    W: Write,
{
    /// The inner writer.
    inner: W,
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Creates a report writer.
    ///
    /// # Examples
    ///
    /// ```
    /// let writer = coverage_intervals::report::Writer::new(Vec::new());
    /// ```
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Gets a reference to the inner writer.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Consumes self and returns the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes a single record as one line.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_intervals::coverage::Interval;
    /// use coverage_intervals::report::Record;
    /// use coverage_intervals::report::Region;
    /// use coverage_intervals::report::Writer;
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_record(&Record::new(
    ///     "s1",
    ///     vec![Region::new("ref", Interval::new(4, 5))],
    /// ))?;
    /// writer.write_record(&Record::new("s2", Vec::new()))?;
    ///
    /// assert_eq!(writer.into_inner(), b"s1\tref:4-5\ns2\t\n");
    ///
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.inner, "{}", record)
    }

    /// Writes every record in order.
    pub fn write_records<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> io::Result<()> {
        for record in records {
            self.write_record(record)?;
        }

        Ok(())
    }

    /// Flushes the inner writer.
    pub fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
