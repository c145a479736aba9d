//! Common CLI options shared across commands.
//!
//! Argument groups composed into command structs using `#[command(flatten)]`.

use clap::Args;
use umiqc_lib::fastq::TagExtractor;
use umiqc_lib::umi::{AnalysisConfig, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_DISTINCT_TAGS};
use umiqc_lib::validation::validate_positive;

/// Flanking sequences that locate the tag within each read.
#[derive(Debug, Clone, Args)]
pub struct TagFlankOptions {
    /// Sequence immediately before the tag (case-insensitive)
    #[arg(long = "umi-prefix", short = 'p')]
    pub umi_prefix: Option<String>,

    /// Sequence immediately after the tag (case-insensitive)
    #[arg(long = "umi-suffix", short = 's')]
    pub umi_suffix: Option<String>,
}

impl TagFlankOptions {
    /// Builds an extractor from the flanks, requiring both to be present.
    ///
    /// # Errors
    ///
    /// Returns an error if either flank is missing, empty, or contains whitespace.
    pub fn extractor(&self) -> anyhow::Result<TagExtractor> {
        let (Some(prefix), Some(suffix)) = (&self.umi_prefix, &self.umi_suffix) else {
            anyhow::bail!("Both --umi-prefix and --umi-suffix are required to extract tags from reads");
        };
        Ok(TagExtractor::new(prefix, suffix)?)
    }
}

/// Options for the worker pool.
#[derive(Debug, Clone, Args)]
pub struct ThreadingOptions {
    /// Number of threads used to compute the distance matrix
    #[arg(long = "threads", short = 't', default_value_t = 1)]
    pub threads: usize,
}

impl ThreadingOptions {
    /// Validates that at least one thread was requested.
    ///
    /// # Errors
    ///
    /// Returns an error if `threads` is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_positive(self.threads, "threads")?;
        Ok(())
    }
}

/// Options controlling similarity grouping.
#[derive(Debug, Clone, Args)]
pub struct GroupingOptions {
    /// Tags at most this many mismatches apart (and not identical) are grouped together
    #[arg(long = "max-distance", short = 'd', default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: u32,

    /// Fail if more than this many distinct tags are found
    #[arg(long = "max-tags", default_value_t = DEFAULT_MAX_DISTINCT_TAGS)]
    pub max_tags: usize,
}

impl GroupingOptions {
    /// Validates the limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_tags` is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_positive(self.max_tags, "max-tags")?;
        Ok(())
    }

    /// The engine configuration for these options and thread count.
    #[must_use]
    pub fn to_config(&self, threading: &ThreadingOptions) -> AnalysisConfig {
        AnalysisConfig::new(self.max_distance)
            .with_max_distinct_tags(self.max_tags)
            .with_threads(threading.threads)
    }
}
