//! All-pairs Hamming distance matrix over distinct tags.
//!
//! The matrix is indexed by the sorted tag order of the [`FrequencyTable`] it was built from.
//! Only the upper triangle is computed; the lower triangle is mirrored and the diagonal is
//! zero by construction.
//!
//! When every tag is a plain `A`/`C`/`G`/`T` sequence of at most 32 bases, distances come
//! from the 2-bit [`BitEnc`] encoding (XOR + popcount). Any other symbol, such as an
//! ambiguity code, switches the whole matrix to byte-wise comparison. Both paths produce the
//! same distances.
//!
//! Rows of the upper triangle are independent, so with more than one thread they are
//! computed on a dedicated rayon pool and concatenated in row order.

use log::debug;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use umiqc_dna::{BitEnc, hamming_distance};

use crate::config::AnalysisConfig;
use crate::error::{Result, UmiError};
use crate::table::FrequencyTable;
use crate::Tag;

/// Dense, symmetric, zero-diagonal matrix of Hamming distances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    /// Distinct tags in sorted order; row/column labels.
    tags: Vec<Tag>,
    /// Row-major `size * size` distances.
    cells: Vec<u32>,
}

impl DistanceMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.tags.len()
    }

    /// Row and column labels in sorted order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Distance between tags `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        let n = self.size();
        assert!(i < n && j < n, "index ({i}, {j}) out of bounds for {n}x{n} matrix");
        self.cells[i * n + j]
    }

    /// All distances from tag `i`, indexed by column.
    #[must_use]
    pub fn row(&self, i: usize) -> &[u32] {
        let n = self.size();
        &self.cells[i * n..(i + 1) * n]
    }

    /// Upper-triangle distances in row-major order: `(0,1), (0,2), ..., (1,2), ...`.
    ///
    /// This is the condensed form hierarchical clustering routines take as input.
    #[must_use]
    pub fn condensed(&self) -> Vec<u32> {
        let n = self.size();
        (0..n).flat_map(|i| self.row(i)[i + 1..].iter().copied()).collect()
    }

    /// Returns true if `M[i][j] == M[j][i]` for all cells and the diagonal is zero.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| self.get(i, i) == 0 && (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// How tag pairs are compared.
enum TagEncoding<'a> {
    /// 2-bit packed tags, compared with popcount.
    Packed(Vec<BitEnc>),
    /// Raw bytes, compared position by position.
    Bytes(Vec<&'a [u8]>),
}

impl TagEncoding<'_> {
    fn len(&self) -> usize {
        match self {
            TagEncoding::Packed(tags) => tags.len(),
            TagEncoding::Bytes(tags) => tags.len(),
        }
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> u32 {
        match self {
            TagEncoding::Packed(tags) => tags[i].hamming_distance(&tags[j]),
            TagEncoding::Bytes(tags) => {
                // Lengths are validated before encoding
                debug_assert_eq!(tags[i].len(), tags[j].len(), "tags must have equal length");
                hamming_distance(tags[i], tags[j]).unwrap_or(u32::MAX)
            }
        }
    }

    /// Distances from `i` to every later tag.
    fn upper_row(&self, i: usize) -> Vec<u32> {
        (i + 1..self.len()).map(|j| self.distance(i, j)).collect()
    }

    fn name(&self) -> &'static str {
        match self {
            TagEncoding::Packed(_) => "2-bit",
            TagEncoding::Bytes(_) => "byte-wise",
        }
    }
}

/// Builds [`DistanceMatrix`] instances from frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceMatrixEngine {
    max_distinct_tags: usize,
    threads: usize,
}

impl DistanceMatrixEngine {
    /// Create an engine with a distinct-tag cap and a worker thread count.
    #[must_use]
    pub fn new(max_distinct_tags: usize, threads: usize) -> Self {
        Self { max_distinct_tags, threads }
    }

    /// Create an engine from analysis parameters.
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.max_distinct_tags, config.threads)
    }

    /// Compute the all-pairs distance matrix for the distinct tags in `table`.
    ///
    /// # Errors
    ///
    /// - [`UmiError::EmptyTable`] if the table has no tags
    /// - [`UmiError::TooManyTags`] if the table exceeds the distinct-tag cap
    /// - [`UmiError::LengthMismatch`] if the tags do not all share one length
    /// - [`UmiError::ThreadPool`] if the worker pool cannot be created
    ///
    /// # Examples
    ///
    /// ```
    /// use umiqc_umi::{DistanceMatrixEngine, FrequencyTable};
    ///
    /// let table = FrequencyTable::from_counts([("AAAA", 5), ("AAAT", 1), ("TTTT", 2)]).unwrap();
    /// let matrix = DistanceMatrixEngine::new(100, 1).build(&table).unwrap();
    /// assert_eq!(matrix.get(0, 1), 1);
    /// assert_eq!(matrix.get(2, 0), 4);
    /// ```
    pub fn build(&self, table: &FrequencyTable) -> Result<DistanceMatrix> {
        if table.is_empty() {
            return Err(UmiError::EmptyTable);
        }
        if table.len() > self.max_distinct_tags {
            return Err(UmiError::TooManyTags {
                distinct: table.len(),
                max: self.max_distinct_tags,
            });
        }

        let first = table.tag_at(0);
        if let Some(offending) = table.tags().find(|tag| tag.len() != first.len()) {
            return Err(UmiError::LengthMismatch {
                first: first.to_string(),
                first_len: first.len(),
                offending: offending.to_string(),
                offending_len: offending.len(),
            });
        }

        let encoding = match BitEnc::encode_all(table.tags().map(str::as_bytes)) {
            Some(packed) => TagEncoding::Packed(packed),
            None => TagEncoding::Bytes(table.tags().map(str::as_bytes).collect()),
        };

        let rows = self.upper_triangle(&encoding)?;

        let n = table.len();
        let mut cells = vec![0u32; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (offset, &dist) in row.iter().enumerate() {
                let j = i + 1 + offset;
                cells[i * n + j] = dist;
                cells[j * n + i] = dist;
            }
        }

        debug!(
            "Built {n}x{n} distance matrix over tags of length {} ({} comparison, {} thread(s))",
            first.len(),
            encoding.name(),
            self.threads.max(1)
        );

        Ok(DistanceMatrix { tags: table.tags().map(str::to_string).collect(), cells })
    }

    /// Compute every upper-triangle row, on a dedicated pool when threads > 1.
    fn upper_triangle(&self, encoding: &TagEncoding<'_>) -> Result<Vec<Vec<u32>>> {
        let n = encoding.len();
        if self.threads > 1 {
            let pool = ThreadPoolBuilder::new().num_threads(self.threads).build().map_err(|e| {
                UmiError::ThreadPool { threads: self.threads, reason: e.to_string() }
            })?;
            Ok(pool.install(|| (0..n).into_par_iter().map(|i| encoding.upper_row(i)).collect()))
        } else {
            Ok((0..n).map(|i| encoding.upper_row(i)).collect())
        }
    }
}
