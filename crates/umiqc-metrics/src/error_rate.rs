//! Metrics describing similarity groups and the run-level error rate.

use serde::{Deserialize, Serialize};
use umiqc_umi::ErrorAnalysis;

use crate::{Metric, deserialize_f64_from_str, serialize_f64_fixed};

/// One row per similarity group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityGroupMetric {
    /// 1-based group number, in representative order
    pub group: usize,
    /// The consensus (most abundant) tag of the group
    pub consensus: String,
    /// Number of reads carrying the consensus tag
    pub consensus_count: u64,
    /// Comma-separated member tags in sorted order
    pub members: String,
    /// Number of distinct member tags
    pub member_count: usize,
    /// Total reads across all members
    pub reads: u64,
    /// Bases attributed to sequencing error within the group
    pub error_bases: u64,
}

impl SimilarityGroupMetric {
    /// Build one row per group from a completed analysis.
    #[must_use]
    pub fn from_analysis(analysis: &ErrorAnalysis) -> Vec<Self> {
        analysis
            .groups
            .iter()
            .zip(&analysis.assignments)
            .enumerate()
            .map(|(i, (group, assignment))| Self {
                group: i + 1,
                consensus: assignment.canonical.clone(),
                consensus_count: assignment.canonical_count,
                members: group.member_tags(analysis.tags()).collect::<Vec<_>>().join(","),
                member_count: assignment.member_count,
                reads: assignment.reads,
                error_bases: assignment.error_bases,
            })
            .collect()
    }
}

impl Metric for SimilarityGroupMetric {
    fn metric_name() -> &'static str {
        "similarity group"
    }
}

/// Summary of a single error-rate analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorRateMetric {
    /// Number of distinct tags
    pub distinct_tags: usize,
    /// Number of reads with a tag
    pub total_reads: u64,
    /// Maximum Hamming distance used for grouping
    pub max_distance: u32,
    /// Number of similarity groups
    pub groups: usize,
    /// Total tag bases observed
    pub total_bases: u64,
    /// Bases attributed to sequencing error
    pub error_bases: u64,
    /// `total_bases - error_bases`, floored at zero
    pub correct_bases: u64,
    /// Fraction of bases called correctly
    #[serde(serialize_with = "serialize_f64_fixed", deserialize_with = "deserialize_f64_from_str")]
    pub accuracy: f64,
    /// Fraction of bases called incorrectly
    #[serde(serialize_with = "serialize_f64_fixed", deserialize_with = "deserialize_f64_from_str")]
    pub error_rate: f64,
}

impl ErrorRateMetric {
    /// Summarize a completed analysis run at the given grouping distance.
    #[must_use]
    pub fn from_analysis(analysis: &ErrorAnalysis, max_distance: u32) -> Self {
        let report = &analysis.report;
        Self {
            distinct_tags: analysis.table.len(),
            total_reads: analysis.table.total_observations(),
            max_distance,
            groups: analysis.groups.len(),
            total_bases: report.total_bases,
            error_bases: report.error_bases,
            correct_bases: report.correct_bases(),
            accuracy: report.accuracy,
            error_rate: report.error_rate(),
        }
    }
}

impl Metric for ErrorRateMetric {
    fn metric_name() -> &'static str {
        "error rate"
    }
}
