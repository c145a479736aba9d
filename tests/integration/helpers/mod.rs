//! Helper utilities for integration tests.

pub mod fastq;

pub use fastq::*;

use std::path::Path;
use std::process::{Command, Output};

/// Run the umiqc binary with the given arguments.
pub fn run_umiqc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_umiqc"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute umiqc")
}

/// Path as a `&str`, for building argument lists.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temporary paths are valid UTF-8")
}

/// Non-header lines of a TSV file, split on tabs.
pub fn read_tsv_rows(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path).expect("Failed to read TSV");
    content
        .lines()
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
