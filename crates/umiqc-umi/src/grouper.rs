// Copyright (c) 2025, Fulcrum Genomics LLC
// All rights reserved.

//! # Similarity Grouping
//!
//! Links distinct tags that are close enough to be the same molecular identifier read with
//! sequencing errors.
//!
//! ## Algorithm
//!
//! Every unordered pair of distinct tags `(a, b)` with `a < b` is visited once, in sorted
//! tag order. When `0 < distance(a, b) <= threshold`, each tag of the pair acts as the
//! representative of its own group and the pair grows both groups: `a`'s group gains `b`
//! and `b`'s group gains `a`. After the scan:
//!
//! 1. each representative's group is its own tag plus every qualifying neighbour, sorted
//! 2. groups are emitted in representative order
//! 3. groups with exactly the same members are collapsed to the first occurrence
//!
//! Groups that only partially overlap are **not** merged. With `AAAA`, `AAAT`, `AATT` at
//! threshold 1 the groups are `{AAAA, AAAT}`, `{AAAA, AAAT, AATT}` and `{AAAT, AATT}`: the
//! scan is single-link on one axis, not a transitive closure, and a tag may appear in more
//! than one group. Tags with no qualifying neighbour are not grouped at all.
//!
//! **Complexity**: O(U²) over the matrix, O(U·k) to assemble groups where k is the
//! average neighbourhood size.
//!
//! ## Example
//!
//! ```
//! use umiqc_umi::{DistanceMatrixEngine, FrequencyTable, SimilarityGrouper};
//!
//! let table = FrequencyTable::from_counts([("AAAA", 5), ("AAAT", 1), ("GGGG", 3)]).unwrap();
//! let matrix = DistanceMatrixEngine::new(100, 1).build(&table).unwrap();
//! let groups = SimilarityGrouper::new(1).group(&matrix);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].member_tags(matrix.tags()).collect::<Vec<_>>(), vec!["AAAA", "AAAT"]);
//! ```

use ahash::AHashSet;
use log::debug;

use crate::Tag;
use crate::distance::DistanceMatrix;

/// Tags judged to originate from one true tag.
///
/// Members are indices into the sorted tag list of the [`DistanceMatrix`], in ascending
/// order, and always include the representative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityGroup {
    representative: usize,
    members: Vec<usize>,
}

impl SimilarityGroup {
    /// Index of the tag whose neighbourhood formed this group.
    #[must_use]
    pub fn representative(&self) -> usize {
        self.representative
    }

    /// Member indices in ascending order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a group holds at least a representative and one neighbour.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the tag at `index` is a member.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    /// Member tags, resolved against the sorted tag list.
    pub fn member_tags<'a>(&'a self, tags: &'a [Tag]) -> impl Iterator<Item = &'a str> + 'a {
        self.members.iter().map(move |&idx| tags[idx].as_str())
    }
}

/// Groups tags that lie within a Hamming distance threshold of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityGrouper {
    threshold: u32,
}

impl SimilarityGrouper {
    /// Create a grouper linking tags within `threshold` mismatches (inclusive).
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// The inclusive distance threshold.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Scan the matrix and return the deduplicated groups in representative order.
    ///
    /// A threshold of zero never links two distinct tags, so it yields no groups.
    #[must_use]
    pub fn group(&self, matrix: &DistanceMatrix) -> Vec<SimilarityGroup> {
        let n = matrix.size();
        let mut neighbours: Vec<Vec<usize>> = vec![Vec::new(); n];

        for i in 0..n {
            let row = matrix.row(i);
            for j in (i + 1)..n {
                let dist = row[j];
                if dist != 0 && dist <= self.threshold {
                    neighbours[i].push(j);
                    neighbours[j].push(i);
                }
            }
        }

        let candidates: Vec<SimilarityGroup> = neighbours
            .into_iter()
            .enumerate()
            .filter(|(_, near)| !near.is_empty())
            .map(|(representative, mut members)| {
                members.push(representative);
                members.sort_unstable();
                SimilarityGroup { representative, members }
            })
            .collect();

        let candidate_count = candidates.len();
        let mut seen: AHashSet<Vec<usize>> = AHashSet::with_capacity(candidate_count);
        let groups: Vec<SimilarityGroup> =
            candidates.into_iter().filter(|group| seen.insert(group.members.clone())).collect();

        debug!(
            "Found {} similarity group(s) ({} before removing identical groups) among {} tag(s) within distance {}",
            groups.len(),
            candidate_count,
            n,
            self.threshold
        );

        groups
    }
}
