//! FASTQ fixtures.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Flank placed before every generated tag.
pub const PREFIX: &str = "ACGTAC";
/// Flank placed after every generated tag.
pub const SUFFIX: &str = "TTGCAG";

/// A read carrying `tag` between the standard flanks, with template bases on both sides.
#[must_use]
pub fn tagged_read(tag: &str) -> String {
    format!("GGCC{PREFIX}{tag}{SUFFIX}CCGGAATT")
}

/// One record per `(name, sequence)`, with constant qualities.
fn write_records<W: Write>(mut out: W, records: &[(String, String)]) -> std::io::Result<W> {
    for (name, seq) in records {
        writeln!(out, "@{name}")?;
        writeln!(out, "{seq}")?;
        writeln!(out, "+")?;
        writeln!(out, "{}", "I".repeat(seq.len()))?;
    }
    Ok(out)
}

/// Reads named `read0`, `read1`, ... with the given sequences.
#[must_use]
pub fn named(seqs: &[String]) -> Vec<(String, String)> {
    seqs.iter().enumerate().map(|(i, s)| (format!("read{i}"), s.clone())).collect()
}

/// Create a plain (uncompressed) FASTQ file.
pub fn create_plain_fastq(dir: &TempDir, name: &str, records: &[(String, String)]) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).unwrap();
    write_records(file, records).unwrap();
    path
}

/// Create a gzip-compressed FASTQ file.
pub fn create_gzip_fastq(dir: &TempDir, name: &str, records: &[(String, String)]) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).unwrap();
    let encoder = write_records(GzEncoder::new(file, Compression::default()), records).unwrap();
    encoder.finish().unwrap();
    path
}

/// Reads with tag `AAAAAA` five times, `AAAAAT` once and `CCCCCC` twice, plus one read
/// without flanks.
#[must_use]
pub fn standard_reads() -> Vec<(String, String)> {
    let mut seqs: Vec<String> = Vec::new();
    seqs.extend(std::iter::repeat_n(tagged_read("AAAAAA"), 5));
    seqs.push(tagged_read("AAAAAT"));
    seqs.extend(std::iter::repeat_n(tagged_read("CCCCCC"), 2));
    seqs.push("GGGGGGGGGGGGGGGGGGGG".to_string());
    named(&seqs)
}
