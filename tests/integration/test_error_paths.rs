//! Failure modes of the command line.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{
    PREFIX, SUFFIX, arg, create_plain_fastq, named, run_umiqc, standard_reads, tagged_read,
};

/// Run and assert failure, returning stderr.
fn run_failing(args: &[&str]) -> String {
    let result = run_umiqc(args);
    assert!(!result.status.success(), "expected failure for {args:?}");
    String::from_utf8_lossy(&result.stderr).into_owned()
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.fq");
    let stderr = run_failing(&[
        "estimate",
        "--input",
        arg(&missing),
        "--output-dir",
        arg(dir.path()),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
    ]);
    assert!(stderr.contains("File does not exist"), "stderr: {stderr}");
}

#[test]
fn test_zero_threads() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let stderr = run_failing(&[
        "estimate",
        "--input",
        arg(&input),
        "--output-dir",
        arg(dir.path()),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
        "--threads",
        "0",
    ]);
    assert!(stderr.contains("threads"), "stderr: {stderr}");
}

#[test]
fn test_mixed_tag_lengths() {
    let dir = TempDir::new().unwrap();
    let reads = named(&[tagged_read("AAAAAA"), tagged_read("AAAAA")]);
    let input = create_plain_fastq(&dir, "reads.fq", &reads);
    let stderr = run_failing(&[
        "estimate",
        "--input",
        arg(&input),
        "--output-dir",
        arg(&dir.path().join("out")),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
    ]);
    assert!(stderr.contains("same length"), "stderr: {stderr}");
}

#[test]
fn test_no_tags_found() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let stderr = run_failing(&[
        "extract",
        "--input",
        arg(&input),
        "--output",
        arg(&dir.path().join("counts.txt")),
        "--umi-prefix",
        "GATTACA",
        "--umi-suffix",
        "TACAGAT",
    ]);
    assert!(stderr.contains("No tag found"), "stderr: {stderr}");
}

#[test]
fn test_input_and_counts_conflict() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let counts = dir.path().join("counts.txt");
    fs::write(&counts, "tag\tcount\nAAAAAA\t1\n").unwrap();
    run_failing(&[
        "estimate",
        "--input",
        arg(&input),
        "--counts",
        arg(&counts),
        "--output-dir",
        arg(dir.path()),
    ]);
}

#[test]
fn test_too_many_tags() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let stderr = run_failing(&[
        "estimate",
        "--input",
        arg(&input),
        "--output-dir",
        arg(&dir.path().join("out")),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
        "--max-tags",
        "2",
    ]);
    assert!(stderr.contains("Too many distinct tags"), "stderr: {stderr}");
}
