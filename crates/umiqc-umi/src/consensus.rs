//! Consensus selection and per-group error contribution.
//!
//! Within each [`SimilarityGroup`] the most frequently observed member is taken as the true
//! tag. Every other member is treated as that tag read with errors, so it contributes
//! `distance(canonical, member) * count(member)` error bases.

use log::debug;

use crate::Tag;
use crate::distance::DistanceMatrix;
use crate::error::{Result, UmiError};
use crate::grouper::SimilarityGroup;
use crate::table::FrequencyTable;

/// The canonical tag chosen for one group and the errors attributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusAssignment {
    /// Index of the canonical tag in the sorted tag list.
    pub canonical_index: usize,
    /// The canonical tag.
    pub canonical: Tag,
    /// Observation count of the canonical tag.
    pub canonical_count: u64,
    /// Number of distinct tags in the group.
    pub member_count: usize,
    /// Total observations across all members.
    pub reads: u64,
    /// Sum of `distance(canonical, member) * count(member)` over the members.
    pub error_bases: u64,
}

/// Pick the member with the highest count; the first member to reach it wins.
fn canonical_member(group: &SimilarityGroup, table: &FrequencyTable) -> Option<(usize, u64)> {
    group.members().iter().fold(None, |best, &idx| {
        let count = table.count_at(idx);
        match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((idx, count)),
        }
    })
}

/// Resolve a consensus for every group, in group order.
///
/// `matrix` must have been built from `table`, so that indices agree. A tag that belongs to
/// several overlapping groups contributes to each of them.
///
/// # Errors
///
/// Returns [`UmiError::Overflow`] if a group's read or error-base total exceeds `u64::MAX`.
pub fn resolve_consensus(
    table: &FrequencyTable,
    matrix: &DistanceMatrix,
    groups: &[SimilarityGroup],
) -> Result<Vec<ConsensusAssignment>> {
    debug_assert_eq!(table.len(), matrix.size());

    let mut assignments = Vec::with_capacity(groups.len());
    for group in groups {
        let Some((canonical_index, canonical_count)) = canonical_member(group, table) else {
            continue;
        };

        let reads = group
            .members()
            .iter()
            .try_fold(0u64, |acc, &idx| acc.checked_add(table.count_at(idx)))
            .ok_or(UmiError::Overflow { what: "group reads" })?;

        let error_bases = group
            .members()
            .iter()
            .try_fold(0u64, |acc, &idx| {
                let dist = u64::from(matrix.get(canonical_index, idx));
                dist.checked_mul(table.count_at(idx)).and_then(|e| acc.checked_add(e))
            })
            .ok_or(UmiError::Overflow { what: "group error bases" })?;

        assignments.push(ConsensusAssignment {
            canonical_index,
            canonical: table.tag_at(canonical_index).to_string(),
            canonical_count,
            member_count: group.len(),
            reads,
            error_bases,
        });
    }

    debug!("Resolved consensus tags for {} group(s)", assignments.len());
    Ok(assignments)
}
