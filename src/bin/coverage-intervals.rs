//! A binary to report, for each sample in a depth matrix, the margin-trimmed
//! regions whose coverage meets a minimum threshold.
//!
//! ```shell
//! cargo run --release --bin=coverage-intervals --features=binaries -- \
//!     --reference reference.fasta --min-coverage 100 --margins 201,201 \
//!     --output coverage_intervals.tsv depths.tsv
//! ```
//!
//! The output has one line per sample of the form
//! `<sample>\t<name>:<start>-<end>,<name>:<start>-<end>,...`.

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use coverage_intervals::depth;
use coverage_intervals::extraction;
use coverage_intervals::file;
use coverage_intervals::margin::Margins;
use coverage_intervals::margin::MinimumLength;
use coverage_intervals::margin::Mode;
use coverage_intervals::reference;
use coverage_intervals::report;
use tracing::debug;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Reports the well-covered, margin-trimmed regions of every sample in a
/// depth matrix.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A tab-delimited depth matrix (optionally gzipped) with a header line,
    /// the locus in the first column, and one column of depths per sample.
    depths: PathBuf,

    /// The reference: either a FASTA file (the first record's name is used) or
    /// the name itself.
    #[arg(short, long)]
    reference: String,

    /// Loci with a depth below this value are treated as uncovered.
    #[arg(short = 'c', long, default_value_t = extraction::builder::DEFAULT_MIN_COVERAGE)]
    min_coverage: i64,

    /// A comma-separated list of margins (one per sample) trimmed from both
    /// ends of every covered region.
    #[arg(short = 'w', long)]
    margins: Margins,

    /// A comma-separated list of sample identifiers to use instead of those in
    /// the header of the depth matrix.
    #[arg(short, long)]
    samples: Option<String>,

    /// Where to write the report. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Apply the margin at index `i` to the sample at index `i` rather than
    /// applying the first margin to every sample.
    #[arg(long, default_value_t = false)]
    per_sample_margins: bool,

    /// Require covered regions to span at least twice the margin, which
    /// guarantees that no reported region has its start after its end.
    #[arg(long, default_value_t = false)]
    strict: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

fn run(args: &Args) -> Result<()> {
    info!("depth matrix: reading {}", args.depths.display());

    let matrix = file::open(&args.depths)
        .map(depth::Reader::new)
        .with_context(|| format!("opening depth matrix {}", args.depths.display()))?
        .read_matrix()
        .with_context(|| format!("reading depth matrix {}", args.depths.display()))?;

    info!(
        "depth matrix: {} loci across {} samples, origin {}",
        matrix.len(),
        matrix.num_samples(),
        matrix.origin()
    );

    if !matrix.is_contiguous() {
        warn!("depth matrix: loci are not consecutive, so intervals are placed by row index");
    }

    let reference = reference::Source::from_arg(&args.reference)
        .resolve()
        .context("resolving the reference name")?;
    info!("reference: {reference}");

    let mode = match args.per_sample_margins {
        true => Mode::PerSample,
        false => Mode::First,
    };

    let minimum_length = match args.strict {
        true => MinimumLength::TwiceMargin,
        false => MinimumLength::Margin,
    };

    let mut builder = extraction::Builder::default()
        .min_coverage(args.min_coverage)
        .margins(args.margins.clone())
        .mode(mode)
        .minimum_length(minimum_length)
        .reference(reference);

    if let Some(samples) = &args.samples {
        builder = builder
            .samples(extraction::parse_samples(samples))
            .context("parsing sample identifiers")?;
    }

    let extractor = builder.try_build().context("configuring the extraction")?;
    debug!(
        "extraction: min coverage {}, margins {}, {:?}, {:?}",
        extractor.min_coverage(),
        extractor.margins(),
        extractor.mode(),
        extractor.minimum_length()
    );

    let records = extractor
        .extract(&matrix)
        .context("extracting coverage intervals")?;

    for record in &records {
        let inverted = record
            .regions()
            .iter()
            .filter(|region| region.interval().is_inverted())
            .count();

        info!(
            "{}: {} covered region(s)",
            record.sample(),
            record.regions().len()
        );

        if inverted > 0 {
            warn!(
                "{}: {inverted} region(s) are shorter than twice the margin and end before they \
                 start (use `--strict` to drop them)",
                record.sample()
            );
        }
    }

    let inner: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("creating output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut writer = report::Writer::new(inner);
    writer
        .write_records(&records)
        .context("writing the report")?;
    writer.finish().context("flushing the report")?;

    if let Some(path) = &args.output {
        info!("report: written to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(io::stderr)
            .init(),
    };

    if args.min_coverage < 0 {
        bail!("the minimum coverage must not be negative: {}", args.min_coverage);
    }

    run(&args)
}
