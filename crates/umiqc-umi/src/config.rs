//! Analysis parameters.

/// Default similarity threshold (maximum Hamming distance, inclusive).
pub const DEFAULT_MAX_DISTANCE: u32 = 2;

/// Default safety cap on distinct tags. The matrix needs U² cells, so 10,000 tags is
/// about 400MB of `u32` distances.
pub const DEFAULT_MAX_DISTINCT_TAGS: usize = 10_000;

/// Parameters for a single error-rate analysis.
///
/// # Examples
///
/// ```
/// use umiqc_umi::AnalysisConfig;
///
/// let config = AnalysisConfig::new(1).with_threads(4).with_max_distinct_tags(500);
/// assert_eq!(config.max_distance, 1);
/// assert_eq!(config.threads, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Tags within this Hamming distance (and not identical) are grouped together.
    pub max_distance: u32,
    /// Maximum number of distinct tags accepted before failing with a capacity error.
    pub max_distinct_tags: usize,
    /// Worker threads for the distance matrix. 1 runs on the calling thread.
    pub threads: usize,
}

impl AnalysisConfig {
    /// Create a config with the given threshold and default limits.
    #[must_use]
    pub fn new(max_distance: u32) -> Self {
        Self { max_distance, ..Self::default() }
    }

    /// Set the number of worker threads.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the distinct-tag safety cap.
    #[must_use]
    pub fn with_max_distinct_tags(mut self, max_distinct_tags: usize) -> Self {
        self.max_distinct_tags = max_distinct_tags;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_distinct_tags: DEFAULT_MAX_DISTINCT_TAGS,
            threads: 1,
        }
    }
}
