//! Tag frequency table.
//!
//! A [`FrequencyTable`] is the engine's only input: every distinct tag observed in a run with
//! the number of reads it was seen in. Entries are kept sorted by tag, and that order is the
//! index order of the distance matrix built from the table.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::Tag;
use crate::error::{Result, UmiError};

/// Mapping from distinct tag to a positive occurrence count.
///
/// Invariants: tags are unique, every count is at least 1, and entries are sorted
/// lexicographically by tag. The table is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Tag, u64)>,
}

impl FrequencyTable {
    /// Build a table from `(tag, count)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`UmiError::ZeroCount`] if any count is zero and [`UmiError::DuplicateTag`] if a
    /// tag is supplied more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use umiqc_umi::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_counts([("AAAT", 1), ("AAAA", 5)]).unwrap();
    /// assert_eq!(table.tags().collect::<Vec<_>>(), vec!["AAAA", "AAAT"]);
    /// assert_eq!(table.count("AAAA"), Some(5));
    /// ```
    pub fn from_counts<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<Tag>,
    {
        let mut entries = Vec::new();
        for (tag, count) in pairs {
            let tag = tag.into();
            if count == 0 {
                return Err(UmiError::ZeroCount { tag });
            }
            entries.push((tag, count));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(dup) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(UmiError::DuplicateTag { tag: dup[0].0.clone() });
        }

        Ok(Self { entries })
    }

    /// Tally a stream of observed tags, one per read.
    ///
    /// # Examples
    ///
    /// ```
    /// use umiqc_umi::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_observations(["ACGT", "ACGT", "TTTT"]);
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.count("ACGT"), Some(2));
    /// ```
    pub fn from_observations<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<Tag, u64> = AHashMap::new();
        for tag in tags {
            let tag = tag.as_ref();
            if let Some(count) = counts.get_mut(tag) {
                *count += 1;
            } else {
                counts.insert(tag.to_owned(), 1);
            }
        }

        let mut entries: Vec<(Tag, u64)> = counts.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tags were observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct tags in sorted order.
    pub fn tags(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    /// `(tag, count)` pairs in sorted tag order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Count for a tag, or `None` if the tag was never observed.
    #[must_use]
    pub fn count(&self, tag: &str) -> Option<u64> {
        self.entries
            .binary_search_by(|(t, _)| t.as_str().cmp(tag))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Tag at a sorted index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn tag_at(&self, index: usize) -> &str {
        &self.entries[index].0
    }

    /// Count at a sorted index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn count_at(&self, index: usize) -> u64 {
        self.entries[index].1
    }

    /// Total number of observations (reads) across all tags.
    #[must_use]
    pub fn total_observations(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Entries ordered by count descending; ties keep sorted tag order.
    #[must_use]
    pub fn most_common(&self) -> Vec<(&str, u64)> {
        let mut ordered: Vec<(&str, u64)> = self.iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        ordered
    }

    /// How many distinct tags were seen exactly `count` times, for every observed count.
    ///
    /// Returns `(count, number_of_tags)` pairs sorted by count ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use umiqc_umi::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_counts([("AA", 3), ("CC", 1), ("GG", 3)]).unwrap();
    /// assert_eq!(table.count_frequency(), vec![(1, 1), (3, 2)]);
    /// ```
    #[must_use]
    pub fn count_frequency(&self) -> Vec<(u64, usize)> {
        let mut freq: BTreeMap<u64, usize> = BTreeMap::new();
        for (_, count) in &self.entries {
            *freq.entry(*count).or_insert(0) += 1;
        }
        freq.into_iter().collect()
    }
}
