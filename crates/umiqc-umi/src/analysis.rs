//! Single entry point running every stage of the analysis.

use log::info;

use crate::Tag;
use crate::aggregate::{ErrorReport, aggregate_error_rate};
use crate::config::AnalysisConfig;
use crate::consensus::{ConsensusAssignment, resolve_consensus};
use crate::distance::{DistanceMatrix, DistanceMatrixEngine};
use crate::error::Result;
use crate::grouper::{SimilarityGroup, SimilarityGrouper};
use crate::table::FrequencyTable;

/// Every product of one analysis run.
#[derive(Debug, Clone)]
pub struct ErrorAnalysis {
    /// Distinct tags with their counts, in sorted order.
    pub table: FrequencyTable,
    /// All-pairs distances indexed like `table`.
    pub matrix: DistanceMatrix,
    /// Similarity groups in representative order.
    pub groups: Vec<SimilarityGroup>,
    /// One consensus per group, in group order.
    pub assignments: Vec<ConsensusAssignment>,
    /// The run-level error rate.
    pub report: ErrorReport,
}

impl ErrorAnalysis {
    /// Distinct tags in sorted order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.matrix.tags()
    }

    /// `"TAG (count)"` labels in sorted tag order, as used for dendrogram leaves.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.table.iter().map(|(tag, count)| format!("{tag} ({count})")).collect()
    }
}

/// Run distance, grouping, consensus and aggregation over a frequency table.
///
/// # Errors
///
/// Fails on the first violated precondition: an empty table, too many distinct tags, tags
/// of different lengths, no observed bases, or an arithmetic overflow.
///
/// # Examples
///
/// ```
/// use umiqc_umi::{AnalysisConfig, FrequencyTable, estimate_error_rate};
///
/// let table = FrequencyTable::from_counts([("AAAA", 5), ("AAAT", 1)]).unwrap();
/// let analysis = estimate_error_rate(&table, &AnalysisConfig::new(1)).unwrap();
///
/// assert_eq!(analysis.groups.len(), 1);
/// assert_eq!(analysis.assignments[0].canonical, "AAAA");
/// assert_eq!(analysis.report.total_bases, 24);
/// assert_eq!(analysis.report.error_bases, 1);
/// ```
pub fn estimate_error_rate(table: &FrequencyTable, config: &AnalysisConfig) -> Result<ErrorAnalysis> {
    info!(
        "Estimating error rate over {} distinct tag(s) with max distance {}",
        table.len(),
        config.max_distance
    );

    let matrix = DistanceMatrixEngine::from_config(config).build(table)?;
    let groups = SimilarityGrouper::new(config.max_distance).group(&matrix);
    let assignments = resolve_consensus(table, &matrix, &groups)?;
    let report = aggregate_error_rate(table, &assignments)?;

    Ok(ErrorAnalysis { table: table.clone(), matrix, groups, assignments, report })
}
