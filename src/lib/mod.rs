#![deny(unsafe_code)]
// Clippy lint configuration for CI
// - cast_*: counts are converted to f64 for rates and percentages
// - missing_*_doc: documentation improvements tracked separately
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::uninlined_format_args
)]

//! # umiqc - UMI error-rate estimation library
//!
//! Estimates how often bases in UMI (Unique Molecular Identifier) tags are mis-called by
//! treating rare tags that lie close to an abundant tag as error copies of it.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`umi`]** - Frequency table, distance matrix, similarity grouping, consensus and
//!   error-rate aggregation
//! - **[`fastq`]** - Tag extraction from FASTQ reads using flanking sequences
//! - **[`metrics`]** - Metric row types and TSV writers
//!
//! ### Utilities
//!
//! - **[`validation`]** - Input validation utilities for parameters and files
//! - **[`progress`]** - Progress tracking and logging
//! - **[`logging`]** - Formatting helpers and run summaries
//! - **[`errors`]** - Application error types
//!
//! ## Quick Start
//!
//! ```
//! use umiqc_lib::umi::{AnalysisConfig, FrequencyTable, estimate_error_rate};
//!
//! let table = FrequencyTable::from_counts([("AAAA", 5), ("AAAT", 1)]).unwrap();
//! let analysis = estimate_error_rate(&table, &AnalysisConfig::new(1)).unwrap();
//!
//! // One error base out of 24 sequenced
//! assert_eq!(analysis.report.error_bases, 1);
//! assert_eq!(analysis.report.total_bases, 24);
//! ```
//!
//! ### Extracting Tags
//!
//! ```no_run
//! use std::path::Path;
//! use umiqc_lib::fastq::TagExtractor;
//!
//! # fn main() -> anyhow::Result<()> {
//! let extractor = TagExtractor::new("ACGTAC", "TTGCAG")?;
//! let extracted = extractor.extract_file(Path::new("reads.fq.gz"), false)?;
//! println!("{} distinct tags", extracted.table.len());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod fastq;
pub mod logging;
pub mod progress;
pub mod validation;

pub use umiqc_metrics as metrics;
pub use umiqc_umi as umi;
