//! End-to-end tests for `umiqc estimate`.

use std::path::Path;

use tempfile::TempDir;

use crate::helpers::{
    PREFIX, SUFFIX, arg, create_gzip_fastq, create_plain_fastq, read_tsv_rows, run_umiqc,
    standard_reads,
};

const OUTPUTS: [&str; 5] = [
    "unique_tag_counts.txt",
    "tag_count_frequency.txt",
    "hamming_distance_matrix.txt",
    "similarity_groups.txt",
    "error_rate.txt",
];

fn assert_success(args: &[&str]) {
    let result = run_umiqc(args);
    assert!(
        result.status.success(),
        "estimate failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
}

fn estimate_fastq(input: &Path, out_dir: &Path, extra: &[&str]) {
    let mut args = vec![
        "estimate",
        "--input",
        arg(input),
        "--output-dir",
        arg(out_dir),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
    ];
    args.extend_from_slice(extra);
    assert_success(&args);
}

/// The single row of `error_rate.txt`.
fn error_rate_row(out_dir: &Path) -> Vec<String> {
    let mut rows = read_tsv_rows(&out_dir.join("error_rate.txt"));
    assert_eq!(rows.len(), 1);
    rows.remove(0)
}

#[test]
fn test_estimate_from_fastq_writes_all_outputs() {
    let dir = TempDir::new().unwrap();
    let input = create_gzip_fastq(&dir, "reads.fq.gz", &standard_reads());
    let out_dir = dir.path().join("out");

    estimate_fastq(&input, &out_dir, &[]);

    for name in OUTPUTS {
        assert!(out_dir.join(name).exists(), "missing {name}");
    }

    // distinct_tags, total_reads, max_distance, groups, total_bases, error_bases,
    // correct_bases, accuracy, error_rate
    let row = error_rate_row(&out_dir);
    assert_eq!(&row[..7], &["3", "8", "2", "1", "48", "1", "47"]);
    assert_eq!(row[7], "0.979167");
    assert_eq!(row[8], "0.020833");
}

#[test]
fn test_similarity_groups_output() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let out_dir = dir.path().join("out");

    estimate_fastq(&input, &out_dir, &[]);

    let rows = read_tsv_rows(&out_dir.join("similarity_groups.txt"));
    assert_eq!(rows.len(), 1);
    // group, consensus, consensus_count, members, member_count, reads, error_bases
    assert_eq!(rows[0], vec!["1", "AAAAAA", "5", "AAAAAA,AAAAAT", "2", "6", "1"]);
}

#[test]
fn test_distance_matrix_output() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let out_dir = dir.path().join("out");

    estimate_fastq(&input, &out_dir, &[]);

    let content = std::fs::read_to_string(out_dir.join("hamming_distance_matrix.txt")).unwrap();
    assert_eq!(
        content,
        "tag\tAAAAAA\tAAAAAT\tCCCCCC\n\
         AAAAAA\t0\t1\t6\n\
         AAAAAT\t1\t0\t6\n\
         CCCCCC\t6\t6\t0\n"
    );
}

#[test]
fn test_estimate_from_counts_matches_fastq() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let counts = dir.path().join("counts.txt");
    assert_success(&[
        "extract",
        "--input",
        arg(&input),
        "--output",
        arg(&counts),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
    ]);

    let from_fastq = dir.path().join("from_fastq");
    let from_counts = dir.path().join("from_counts");
    estimate_fastq(&input, &from_fastq, &[]);
    assert_success(&["estimate", "--counts", arg(&counts), "--output-dir", arg(&from_counts)]);

    for name in OUTPUTS {
        assert_eq!(
            std::fs::read_to_string(from_fastq.join(name)).unwrap(),
            std::fs::read_to_string(from_counts.join(name)).unwrap(),
            "{name} differs"
        );
    }
}

#[test]
fn test_zero_max_distance_has_no_errors() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let out_dir = dir.path().join("out");

    estimate_fastq(&input, &out_dir, &["--max-distance", "0"]);

    let row = error_rate_row(&out_dir);
    assert_eq!(&row[..7], &["3", "8", "0", "0", "48", "0", "48"]);
    assert_eq!(row[7], "1.000000");
    assert!(read_tsv_rows(&out_dir.join("similarity_groups.txt")).is_empty());
}

#[test]
fn test_no_matrix_skips_distance_matrix() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let out_dir = dir.path().join("out");

    estimate_fastq(&input, &out_dir, &["--no-matrix"]);

    assert!(!out_dir.join("hamming_distance_matrix.txt").exists());
    assert!(out_dir.join("error_rate.txt").exists());
}

#[test]
fn test_thread_count_does_not_change_outputs() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let single = dir.path().join("single");
    let multi = dir.path().join("multi");

    estimate_fastq(&input, &single, &["--threads", "1"]);
    estimate_fastq(&input, &multi, &["--threads", "4"]);

    for name in OUTPUTS {
        assert_eq!(
            std::fs::read_to_string(single.join(name)).unwrap(),
            std::fs::read_to_string(multi.join(name)).unwrap(),
            "{name} differs"
        );
    }
}
