use std::fs::File;
use std::io::Write as _;

use coverage_intervals::depth;
use coverage_intervals::extraction;
use coverage_intervals::file;
use coverage_intervals::margin::Margins;
use coverage_intervals::margin::MinimumLength;
use coverage_intervals::reference;
use coverage_intervals::report;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempdir::TempDir;

/// Writes a matrix of 30 loci starting at 2253 for three samples:
///
/// - `s1` is covered over loci 2255..2275.
/// - `s2` is covered over loci 2253..2258 and 2262..2283 (touching the end).
/// - `s3` is never covered above the threshold.
fn depth_matrix() -> String {
    let mut data = String::from("#pos\ts1\ts2\ts3\n");

    for locus in 2253..2283 {
        let s1 = if (2255..2275).contains(&locus) { 120 } else { 0 };
        let s2 = if (2253..2258).contains(&locus) || locus >= 2262 {
            300
        } else {
            99
        };
        let s3 = 42;

        data.push_str(&format!("{locus}\t{s1}\t{s2}\t{s3}\n"));
    }

    data
}

#[test]
fn test_gzipped_matrix_and_fasta_reference() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("pipeline")?;

    let depths = dir.path().join("depths.tsv.gz");
    let mut encoder = GzEncoder::new(File::create(&depths)?, Compression::default());
    encoder.write_all(depth_matrix().as_bytes())?;
    encoder.finish()?;

    let fasta = dir.path().join("reference.fasta");
    std::fs::write(&fasta, ">HXB2 pol\nACGTACGTAC\nGTACGT\n")?;

    let matrix = depth::Reader::new(file::open(&depths)?).read_matrix()?;
    assert_eq!(matrix.len(), 30);
    assert_eq!(matrix.origin(), 2253);
    assert!(matrix.is_contiguous());

    let name = reference::Source::from_arg(fasta.to_str().unwrap()).resolve()?;
    assert_eq!(name, "HXB2");

    let extractor = extraction::Builder::default()
        .min_coverage(100)
        .margins("3,3,3".parse::<Margins>()?)
        .reference(name)
        .try_build()?;

    let output = dir.path().join("coverage_intervals.tsv");
    let mut writer = report::Writer::new(File::create(&output)?);
    writer.write_records(&extractor.extract(&matrix)?)?;
    writer.finish()?;

    let lines = std::fs::read_to_string(&output)?;
    assert_eq!(
        lines,
        "s1\tHXB2:2258-2272\n\
         s2\tHXB2:2256-2255,HXB2:2265-2280\n\
         s3\t\n"
    );

    let records = lines
        .lines()
        .map(|line| line.parse::<report::Record>())
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 3);
    assert!(records[1].regions()[0].interval().is_inverted());

    Ok(())
}

#[test]
fn test_strict_minimum_length_with_literal_reference() -> Result<(), Box<dyn std::error::Error>> {
    let matrix = depth::Reader::new(depth_matrix().as_bytes()).read_matrix()?;

    let name = reference::Source::from_arg("HXB2:2253-3869").resolve()?;

    let extractor = extraction::Builder::default()
        .min_coverage(100)
        .margins("3,3,3".parse::<Margins>()?)
        .minimum_length(MinimumLength::TwiceMargin)
        .samples(vec![
            String::from("a"),
            String::from("b"),
            String::from("c"),
        ])?
        .reference(name)
        .try_build()?;

    let lines = extractor
        .extract(&matrix)?
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        lines,
        vec![
            "a\tHXB2:2253-3869:2258-2272",
            "b\tHXB2:2253-3869:2265-2280",
            "c\t"
        ]
    );

    Ok(())
}
