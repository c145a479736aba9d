//! Run-level error rate.

use log::debug;

use crate::consensus::ConsensusAssignment;
use crate::error::{Result, UmiError};
use crate::table::FrequencyTable;

/// Final result of an analysis.
///
/// `accuracy` is `(total_bases - error_bases) / total_bases`. Because a tag in overlapping
/// groups is counted once per group, `error_bases` can exceed `total_bases` on pathological
/// inputs, in which case `accuracy` is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    /// Sum of `length(tag) * count(tag)` over all distinct tags.
    pub total_bases: u64,
    /// Sum of every group's error contribution.
    pub error_bases: u64,
    /// Fraction of bases called correctly.
    pub accuracy: f64,
}

impl ErrorReport {
    /// Fraction of bases called incorrectly, `1 - accuracy`.
    #[must_use]
    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy
    }

    /// `total_bases - error_bases`, floored at zero.
    #[must_use]
    pub fn correct_bases(&self) -> u64 {
        self.total_bases.saturating_sub(self.error_bases)
    }
}

/// Combine the table and consensus assignments into an [`ErrorReport`].
///
/// # Errors
///
/// - [`UmiError::ZeroTotalBases`] if no bases were observed (every tag is empty)
/// - [`UmiError::Overflow`] if either sum exceeds `u64::MAX`
#[allow(clippy::cast_precision_loss)]
pub fn aggregate_error_rate(
    table: &FrequencyTable,
    assignments: &[ConsensusAssignment],
) -> Result<ErrorReport> {
    let total_bases = table
        .iter()
        .try_fold(0u64, |acc, (tag, count)| {
            (tag.len() as u64).checked_mul(count).and_then(|bases| acc.checked_add(bases))
        })
        .ok_or(UmiError::Overflow { what: "total bases" })?;

    let error_bases = assignments
        .iter()
        .try_fold(0u64, |acc, a| acc.checked_add(a.error_bases))
        .ok_or(UmiError::Overflow { what: "error bases" })?;

    if total_bases == 0 {
        return Err(UmiError::ZeroTotalBases { distinct_tags: table.len() });
    }

    let accuracy = (total_bases as f64 - error_bases as f64) / total_bases as f64;
    debug!("Aggregated {error_bases} error base(s) over {total_bases} total base(s)");

    Ok(ErrorReport { total_bases, error_bases, accuracy })
}
