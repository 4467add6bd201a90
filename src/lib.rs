//! `coverage_intervals` is a crate for finding, per sample, the regions of a
//! target locus that are covered well enough to trust sliding-window variant
//! calls made over them.
//!
//! The crate provides two main points of entry:
//!
//! - Extracting trimmed intervals from a single depth sequence.
//! - Running that extraction over every sample of a depth matrix and reporting
//!   the results.
//!
//! ## Extracting intervals
//!
//! The core of the crate is [`coverage::extract()`]. Given the depth of one
//! sample at consecutive loci (masked with [`coverage::mask()`] so that loci
//! below the minimum coverage are zero), it finds every maximal run of nonzero
//! depth, drops the runs that are too short, and trims a margin from both ends
//! of the rest. The margin accounts for the analysis windows that only
//! partially overlap a covered run at its boundaries.
//!
//! ```
//! use coverage_intervals::coverage;
//! use coverage_intervals::coverage::Interval;
//! use coverage_intervals::margin::MinimumLength;
//!
//! let depths = coverage::mask(&[0, 3, 40, 41, 42, 43, 44, 2, 0], 10);
//! let intervals = coverage::extract(&depths, 2, 100, MinimumLength::Margin);
//!
//! assert_eq!(intervals, vec![Interval::new(104, 105)]);
//! ```
//!
//! How short a run may be before it is dropped is governed by
//! [`margin::MinimumLength`]. The default keeps every run at least one margin
//! long, which can produce inverted intervals for runs shorter than two
//! margins; [`margin::MinimumLength::TwiceMargin`] avoids that.
//!
//! ## Depth matrices and reports
//!
//! Most users will want to read a tab-delimited [depth matrix](depth::Matrix)
//! with a [`depth::Reader`], configure an [`extraction::Extractor`] via its
//! [`extraction::Builder`], and write the resulting
//! [report records](report::Record) with a [`report::Writer`]. The name that
//! anchors every reported region can be resolved from a FASTA file or given
//! directly via [`reference::Source`].
//!
//! ```
//! use coverage_intervals::depth;
//! use coverage_intervals::extraction;
//! use coverage_intervals::margin::Margins;
//! use coverage_intervals::report;
//!
//! let data = b"#pos\ts1\n10\t0\n11\t50\n12\t50\n13\t50\n14\t50\n15\t0\n";
//! let matrix = depth::Reader::new(&data[..]).read_matrix()?;
//!
//! let extractor = extraction::Builder::default()
//!     .min_coverage(20)
//!     .margins("1".parse::<Margins>()?)
//!     .reference("HXB2")
//!     .try_build()?;
//!
//! let mut writer = report::Writer::new(Vec::new());
//! writer.write_records(&extractor.extract(&matrix)?)?;
//!
//! assert_eq!(writer.into_inner(), b"s1\tHXB2:12-14\n");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod coverage;
pub mod depth;
pub mod extraction;
pub mod file;
pub mod margin;
pub mod reference;
pub mod report;
