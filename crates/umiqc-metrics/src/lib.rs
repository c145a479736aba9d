#![deny(unsafe_code)]

//! Structured metric types and TSV writers for umiqc reports.
//!
//! This crate provides:
//! - the [`Metric`] trait implemented by every row type
//! - tag count rows ([`tags`]) and error-rate rows ([`error_rate`])
//! - [`writer`] functions for TSV output, including the labelled distance matrix

pub mod error_rate;
pub mod tags;
pub mod writer;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of decimal places used for float metrics.
pub const FLOAT_PRECISION: usize = 6;

/// Formats a float value with the standard precision for metrics.
///
/// # Example
/// ```
/// use umiqc_metrics::format_float;
/// assert_eq!(format_float(0.9), "0.900000");
/// assert_eq!(format_float(23.0 / 24.0), "0.958333");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:.FLOAT_PRECISION$}")
}

/// Formats a count with comma thousands separators.
///
/// # Example
/// ```
/// use umiqc_metrics::format_count;
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(12), "12");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A metric type that can be serialized to TSV files.
pub trait Metric: Serialize + for<'de> Deserialize<'de> + Clone + Default {
    /// Human-readable name for this metric type.
    ///
    /// Used in error messages and logging when writing metrics files.
    fn metric_name() -> &'static str;
}

/// Serializes an f64 with [`FLOAT_PRECISION`] decimal places.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub(crate) fn serialize_f64_fixed<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        return serializer.serialize_str("NaN");
    }
    serializer.serialize_str(&format_float(*value))
}

/// Deserializes an f64 from a string, accepting `NaN`.
pub(crate) fn deserialize_f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    match s.as_str() {
        "NaN" => Ok(f64::NAN),
        _ => s.parse().map_err(serde::de::Error::custom),
    }
}

pub use error_rate::{ErrorRateMetric, SimilarityGroupMetric};
pub use tags::{CountFrequencyMetric, ReadTagMetric, TagCountMetric};
pub use writer::{read_metrics, write_distance_matrix, write_metrics, write_metrics_auto};
