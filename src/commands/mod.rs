//! CLI command implementations for umiqc.
//!
//! - [`extract`] - Extract tags from a FASTQ file and count them
//! - [`estimate`] - Estimate the tag base-calling error rate

pub mod command;
pub mod common;
pub mod estimate;
pub mod extract;
