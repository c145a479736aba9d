//! Utilities for reading and writing metrics files.
//!
//! Metric rows go through `DelimFile` as TSV with a header row. The distance matrix has a
//! column per tag and so is written directly.

use anyhow::{Context, Result};
use fgoxide::io::{DelimFile, Io};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use umiqc_umi::DistanceMatrix;

use crate::Metric;

const BUFFER_SIZE: usize = 64 * 1024;

/// Write metrics to a TSV file with consistent error handling.
///
/// # Arguments
/// * `path` - Path to the output TSV file
/// * `metrics` - The metrics to write (must implement Serialize)
/// * `description` - Human-readable description of the metrics for error messages
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_metrics<P: AsRef<Path>, T: Serialize>(
    path: P,
    metrics: &[T],
    description: &str,
) -> Result<()> {
    let path_ref = path.as_ref();
    DelimFile::default()
        .write_tsv(&path_ref, metrics)
        .with_context(|| format!("Failed to write {} metrics: {}", description, path_ref.display()))
}

/// Write metrics implementing the Metric trait, naming them by [`Metric::metric_name`].
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_metrics_auto<P: AsRef<Path>, T: Metric>(path: P, metrics: &[T]) -> Result<()> {
    write_metrics(path, metrics, T::metric_name())
}

/// Read metrics of a known type back from a TSV file.
///
/// # Errors
/// Returns an error if the file cannot be read or a row does not parse
pub fn read_metrics<P: AsRef<Path>, T: Metric>(path: P) -> Result<Vec<T>> {
    let path_ref = path.as_ref();
    DelimFile::default()
        .read_tsv(&path_ref)
        .with_context(|| format!("Failed to read {} metrics: {}", T::metric_name(), path_ref.display()))
}

/// Write the distance matrix as a labelled square TSV.
///
/// The header is `tag` followed by every tag in sorted order; each following line starts
/// with its tag and holds that tag's distances to every column.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_distance_matrix<P: AsRef<Path>>(path: P, matrix: &DistanceMatrix) -> Result<()> {
    let path_ref = path.as_ref();
    let write = || -> Result<()> {
        let mut out = Io::new(5, BUFFER_SIZE).new_writer(path_ref)?;

        write!(out, "tag")?;
        for tag in matrix.tags() {
            write!(out, "\t{tag}")?;
        }
        writeln!(out)?;

        for (i, tag) in matrix.tags().iter().enumerate() {
            write!(out, "{tag}")?;
            for dist in matrix.row(i) {
                write!(out, "\t{dist}")?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    };
    write().with_context(|| format!("Failed to write distance matrix: {}", path_ref.display()))
}
