//! End-to-end runs through `updgraph::run` using scratch input files.

use std::fs;
use std::path::{Path, PathBuf};

use updgraph::{run, ErrorKind, IdeogramError, Layout, RenderOptions, RunOptions, VariantClass};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(dir: &Path, genome: &str, report: PathBuf, roh: Option<PathBuf>, output: &str) -> RunOptions {
    RunOptions {
        genome: genome.to_string(),
        report,
        roh,
        output: dir.join(output),
        label_prefix: "chr".to_string(),
        layout: Layout::default(),
        render: RenderOptions {
            pixels_per_unit: 10.0,
            legend: true,
        },
    }
}

const REPORT: &str = "\
#chrom\tpos\tclass
chr1\t1\tBP
chr1\t100000000\tBP
Chr21\t20000000\tFF
chr21\t20000000\tFF
chrX\t120000000\tFM

chr7\t60100000\tFM
";

#[test]
fn test_png_run_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", REPORT);
    let roh = write(dir.path(), "roh.tsv", "chr2\t1\t300000000\nchr6\t20000000\t40000000\n");
    let opts = options(dir.path(), "hg38", report, Some(roh), "ideogram.png");

    let summary = run(&opts).unwrap();

    // the two identical chr21 records share one mark
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.excluded(), 2);
    assert_eq!(summary.filtered_variants.get(VariantClass::Biparental), 1);
    assert_eq!(summary.filtered_variants.get(VariantClass::MaternalOnly), 1);
    assert_eq!(summary.included(VariantClass::PaternalOnly), 1);
    assert_eq!(summary.dropped_roh, 0);

    let img = image::open(&opts.output).unwrap();
    assert_eq!(img.width(), 300);
    assert_eq!(img.height(), 375);
}

#[test]
fn test_svg_output_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", REPORT);
    let opts = options(dir.path(), "T2T", report, None, "ideogram.svg");

    run(&opts).unwrap();

    let svg = fs::read_to_string(&opts.output).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(">chrY</text>"));
}

#[test]
fn test_bad_class_token_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", "chr1\t100\tBP\nchr1\t200\tXX\n");
    let opts = options(dir.path(), "hg38", report, None, "ideogram.png");

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, IdeogramError::UnknownVariantClass { line: 2, .. }));
    assert!(!opts.output.exists());
}

#[test]
fn test_unknown_genome_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", REPORT);
    let opts = options(dir.path(), "hg18", report, None, "ideogram.png");

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!opts.output.exists());
}

#[test]
fn test_inverted_roh_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", REPORT);
    let roh = write(dir.path(), "roh.tsv", "# AutoMap\nchr3\t5000000\t4000000\n");
    let opts = options(dir.path(), "hg19", report, Some(roh), "ideogram.png");

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("line 2"));
    assert!(!opts.output.exists());
}

#[test]
fn test_chromosome_missing_from_build_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", "chrM\t100\tBP\n");
    let opts = options(dir.path(), "hg19", report, None, "ideogram.png");

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
}

#[test]
fn test_missing_report_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), "hg38", dir.path().join("absent.tsv"), None, "ideogram.png");

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_oversized_resolution_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let report = write(dir.path(), "report.tsv", REPORT);
    let mut opts = options(dir.path(), "hg38", report, None, "ideogram.png");
    opts.render.pixels_per_unit = 1e9;

    let err = run(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!opts.output.exists());
}
