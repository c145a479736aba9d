//! Enhanced logging utilities for formatted output.
//!
//! Consistent, user-friendly formatting for progress, timing, and the summaries logged at
//! the end of each command.

use std::time::{Duration, Instant};

pub use umiqc_metrics::format_count;
use umiqc_umi::ErrorAnalysis;

use crate::fastq::ExtractionStats;

/// Formats a fraction as a percentage with the given number of decimal places.
///
/// # Examples
///
/// ```
/// use umiqc_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(23.0 / 24.0, 4), "95.8333%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}

/// Formats a duration in human-readable form.
///
/// Durations under a minute keep one decimal place of seconds, since most runs finish
/// well within one.
///
/// # Examples
///
/// ```
/// use umiqc_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(420)), "0.4s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        0..60 => format!("{:.1}s", duration.as_secs_f64()),
        60..3600 => match secs % 60 {
            0 => format!("{}m", secs / 60),
            rem => format!("{}m {rem}s", secs / 60),
        },
        _ => match (secs % 3600) / 60 {
            0 => format!("{}h", secs / 3600),
            mins => format!("{}h {mins}m", secs / 3600),
        },
    }
}

/// Formats a processing rate for `unit`s handled over `duration`.
///
/// Rates below one per second are reported per minute.
///
/// # Examples
///
/// ```
/// use umiqc_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1), "reads"), "1,000 reads/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60), "tags"), "30.0 tags/min");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration, unit: &str) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} {unit}/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} {unit}/s", format_count(rate as u64))
    } else {
        format!("{:.1} {unit}/min", rate * 60.0)
    }
}

/// Logs the accuracy summary for a completed error-rate analysis.
///
/// Reports the number of correctly called bases over the total, and the accuracy as a
/// percentage.
///
/// # Examples
///
/// ```
/// use umiqc_lib::logging::log_error_report_summary;
/// use umiqc_lib::umi::{AnalysisConfig, FrequencyTable, estimate_error_rate};
///
/// let table = FrequencyTable::from_counts([("AAAA", 5), ("AAAT", 1)]).unwrap();
/// let analysis = estimate_error_rate(&table, &AnalysisConfig::new(1)).unwrap();
/// log_error_report_summary(&analysis);
/// ```
pub fn log_error_report_summary(analysis: &ErrorAnalysis) {
    let report = &analysis.report;
    log::info!("Tag Error Rate Summary:");
    log::info!("  Distinct tags: {}", format_count(analysis.table.len() as u64));
    log::info!("  Tagged reads: {}", format_count(analysis.table.total_observations()));
    log::info!("  Similarity groups: {}", format_count(analysis.groups.len() as u64));
    log::info!(
        "  Correctly called bases: {} / {}",
        format_count(report.correct_bases()),
        format_count(report.total_bases)
    );
    if report.error_bases > report.total_bases {
        log::warn!(
            "Error bases ({}) exceed total bases because tags in overlapping groups are counted once per group",
            format_count(report.error_bases)
        );
    }
    log::info!("  Accuracy: {}", format_percent(report.accuracy, 4));
}

/// Logs a summary of tag extraction from a FASTQ file.
pub fn log_extraction_summary(stats: &ExtractionStats) {
    log::info!("Tag Extraction Summary:");
    log::info!("  Total reads: {}", format_count(stats.reads));
    log::info!("  Reads with a tag: {}", format_count(stats.tagged));

    if stats.reads > 0 {
        log::info!("  Tag rate: {}", format_percent(stats.tagged as f64 / stats.reads as f64, 2));
    }
    if stats.skipped > 0 {
        log::warn!("Skipped {} read(s) with no tag between prefix and suffix.", format_count(stats.skipped));
    }
    if stats.with_no_call > 0 {
        log::info!("  Tags containing a no-call: {}", format_count(stats.with_no_call));
    }
}

/// Times a named operation, logging its start and a summary on completion.
///
/// # Examples
///
/// ```
/// use umiqc_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Extracting tags", "reads");
/// // ... do work ...
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    unit: &'static str,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str, unit: &'static str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), unit, start_time: Instant::now() }
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.start_time.elapsed();
        log::info!(
            "{} completed: {} {} in {} ({})",
            self.operation,
            format_count(count),
            self.unit,
            format_duration(duration),
            format_rate(count, duration, self.unit)
        );
    }
}
