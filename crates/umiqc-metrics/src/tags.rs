//! Per-tag metrics: counts, per-read assignments, and the count distribution.

use serde::{Deserialize, Serialize};
use umiqc_umi::FrequencyTable;

use crate::Metric;

/// Number of reads in which a distinct tag was observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCountMetric {
    /// The tag sequence
    pub tag: String,
    /// Number of reads carrying the tag
    pub count: u64,
}

impl TagCountMetric {
    /// One row per distinct tag, most common first (ties in tag order).
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Vec<Self> {
        table
            .most_common()
            .into_iter()
            .map(|(tag, count)| Self { tag: tag.to_string(), count })
            .collect()
    }
}

impl Metric for TagCountMetric {
    fn metric_name() -> &'static str {
        "unique tag count"
    }
}

/// The tag extracted from a single read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTagMetric {
    /// Read name, up to the first whitespace
    pub read_name: String,
    /// Tag extracted from the read sequence
    pub tag: String,
}

impl Metric for ReadTagMetric {
    fn metric_name() -> &'static str {
        "per-read tag"
    }
}

/// How many distinct tags were observed exactly `count` times.
///
/// This is the data behind a tag count histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountFrequencyMetric {
    /// Observation count
    pub count: u64,
    /// Number of distinct tags observed `count` times
    pub tags: usize,
}

impl CountFrequencyMetric {
    /// One row per observed count, ascending.
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Vec<Self> {
        table.count_frequency().into_iter().map(|(count, tags)| Self { count, tags }).collect()
    }
}

impl Metric for CountFrequencyMetric {
    fn metric_name() -> &'static str {
        "tag count frequency"
    }
}
