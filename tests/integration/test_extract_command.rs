//! End-to-end tests for `umiqc extract`.

use tempfile::TempDir;

use crate::helpers::{
    PREFIX, SUFFIX, arg, create_gzip_fastq, create_plain_fastq, read_tsv_rows, run_umiqc,
    standard_reads,
};

fn run_extract(input: &std::path::Path, output: &std::path::Path, extra: &[&str]) {
    let mut args = vec![
        "extract",
        "--input",
        arg(input),
        "--output",
        arg(output),
        "--umi-prefix",
        PREFIX,
        "--umi-suffix",
        SUFFIX,
    ];
    args.extend_from_slice(extra);
    let result = run_umiqc(&args);
    assert!(
        result.status.success(),
        "extract failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
}

#[test]
fn test_extract_plain_fastq() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let output = dir.path().join("counts.txt");

    run_extract(&input, &output, &[]);

    let header = std::fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("tag\tcount\n"));
    assert_eq!(
        read_tsv_rows(&output),
        vec![
            vec!["AAAAAA".to_string(), "5".to_string()],
            vec!["CCCCCC".to_string(), "2".to_string()],
            vec!["AAAAAT".to_string(), "1".to_string()],
        ]
    );
}

#[test]
fn test_extract_gzip_matches_plain() {
    let dir = TempDir::new().unwrap();
    let plain = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let gzip = create_gzip_fastq(&dir, "reads.fq.gz", &standard_reads());
    let plain_out = dir.path().join("plain.txt");
    let gzip_out = dir.path().join("gzip.txt");

    run_extract(&plain, &plain_out, &[]);
    run_extract(&gzip, &gzip_out, &[]);

    assert_eq!(
        std::fs::read_to_string(&plain_out).unwrap(),
        std::fs::read_to_string(&gzip_out).unwrap()
    );
}

#[test]
fn test_extract_per_read_skips_untagged_reads() {
    let dir = TempDir::new().unwrap();
    let input = create_plain_fastq(&dir, "reads.fq", &standard_reads());
    let output = dir.path().join("counts.txt");
    let per_read = dir.path().join("per_read.txt");

    run_extract(&input, &output, &["--per-read", arg(&per_read)]);

    let rows = read_tsv_rows(&per_read);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], vec!["read0".to_string(), "AAAAAA".to_string()]);
    assert_eq!(rows[5], vec!["read5".to_string(), "AAAAAT".to_string()]);
    assert!(rows.iter().all(|row| row[0] != "read8"));
}
