//! Estimate the base-calling error rate of tags.
//!
//! Distinct tags within `--max-distance` mismatches of each other are grouped, the most
//! abundant tag of each group is taken as the true sequence, and every mismatch of the
//! other members against it is counted as a sequencing error.

use crate::commands::command::Command;
use crate::commands::common::{GroupingOptions, TagFlankOptions, ThreadingOptions};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use umiqc_lib::logging::{OperationTimer, log_error_report_summary, log_extraction_summary};
use umiqc_lib::metrics::writer::{read_metrics, write_distance_matrix, write_metrics_auto};
use umiqc_lib::metrics::{
    CountFrequencyMetric, ErrorRateMetric, SimilarityGroupMetric, TagCountMetric,
};
use umiqc_lib::umi::{ErrorAnalysis, FrequencyTable, estimate_error_rate};
use umiqc_lib::validation::validate_file_exists;

/// Distinct tags and their counts, most common first
pub const TAG_COUNTS_FILE: &str = "unique_tag_counts.txt";
/// Number of distinct tags seen at each count
pub const COUNT_FREQUENCY_FILE: &str = "tag_count_frequency.txt";
/// All-pairs Hamming distances between distinct tags
pub const DISTANCE_MATRIX_FILE: &str = "hamming_distance_matrix.txt";
/// One row per similarity group
pub const GROUPS_FILE: &str = "similarity_groups.txt";
/// Run-level error rate
pub const ERROR_RATE_FILE: &str = "error_rate.txt";

/// Estimate the tag error rate from reads or tag counts.
#[derive(Parser, Debug)]
#[command(
    name = "estimate",
    author,
    version,
    about = "\x1b[38;5;166m[ERROR RATE]\x1b[0m \x1b[36mEstimate tag base-calling accuracy from tag frequencies\x1b[0m",
    long_about = r#"
Estimates how accurately tag bases were sequenced from the frequencies of the distinct tags.

Input is either a FASTQ file (`--input`, with `--umi-prefix` and `--umi-suffix` to locate the
tag in each read) or a tag count file as written by `umiqc extract` (`--counts`). All tags must
have the same length.

Every pair of distinct tags at most `--max-distance` mismatches apart is linked. Each tag with
at least one such neighbour forms a group with its neighbours; identical groups are reported
once, overlapping groups are kept separate. Within each group the most frequent tag is taken as
the true sequence and each other member contributes `mismatches x count` error bases.

Accuracy is `(total bases - error bases) / total bases`, where total bases is the sum of tag
length times count over all distinct tags.

Outputs written to `--output-dir`:

  unique_tag_counts.txt        distinct tags and counts, most common first
  tag_count_frequency.txt      how many distinct tags were seen at each count
  hamming_distance_matrix.txt  all-pairs distances (skipped with --no-matrix)
  similarity_groups.txt        one row per group with its consensus and error bases
  error_rate.txt               the accuracy summary

The distance matrix grows with the square of the number of distinct tags; runs with more than
`--max-tags` distinct tags fail before it is built.
"#
)]
#[command(verbatim_doc_comment)]
pub(crate) struct Estimate {
    /// Input FASTQ file (plain or .gz)
    #[arg(long, short = 'i', conflicts_with = "counts", required_unless_present = "counts")]
    input: Option<PathBuf>,

    /// Tag count file with `tag` and `count` columns, as written by `extract`
    #[arg(long, short = 'c')]
    counts: Option<PathBuf>,

    /// Directory to write outputs to; created if missing
    #[arg(long, short = 'o')]
    output_dir: PathBuf,

    /// Do not write the distance matrix
    #[arg(long, default_value_t = false)]
    no_matrix: bool,

    /// Tag flanking sequences, required with --input.
    #[command(flatten)]
    flanks: TagFlankOptions,

    /// Grouping options.
    #[command(flatten)]
    grouping: GroupingOptions,

    /// Threading options.
    #[command(flatten)]
    threading: ThreadingOptions,
}

impl Estimate {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_file_exists(input, "Input FASTQ")?;
        }
        if let Some(counts) = &self.counts {
            validate_file_exists(counts, "Tag counts")?;
        }
        self.threading.validate()?;
        self.grouping.validate()?;
        Ok(())
    }

    /// Build the frequency table from whichever input was given.
    fn load_table(&self) -> Result<FrequencyTable> {
        match (&self.input, &self.counts) {
            (Some(input), _) => {
                let extractor = self.flanks.extractor()?;
                let timer = OperationTimer::new("Extracting tags", "reads");
                let extracted = extractor.extract_file(input, false)?;
                timer.log_completion(extracted.stats.reads);
                log_extraction_summary(&extracted.stats);
                Ok(extracted.table)
            }
            (None, Some(counts)) => load_counts(counts),
            (None, None) => anyhow::bail!("One of --input or --counts is required"),
        }
    }

    fn write_outputs(&self, analysis: &ErrorAnalysis) -> Result<()> {
        let dir = &self.output_dir;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        write_metrics_auto(dir.join(TAG_COUNTS_FILE), &TagCountMetric::from_table(&analysis.table))?;
        write_metrics_auto(
            dir.join(COUNT_FREQUENCY_FILE),
            &CountFrequencyMetric::from_table(&analysis.table),
        )?;
        if self.no_matrix {
            info!("Skipping distance matrix output");
        } else {
            write_distance_matrix(dir.join(DISTANCE_MATRIX_FILE), &analysis.matrix)?;
        }
        write_metrics_auto(dir.join(GROUPS_FILE), &SimilarityGroupMetric::from_analysis(analysis))?;
        write_metrics_auto(
            dir.join(ERROR_RATE_FILE),
            &[ErrorRateMetric::from_analysis(analysis, self.grouping.max_distance)],
        )?;
        info!("Wrote outputs to {}", dir.display());
        Ok(())
    }
}

/// Read a tag count file into a frequency table.
fn load_counts(path: &Path) -> Result<FrequencyTable> {
    let rows: Vec<TagCountMetric> = read_metrics(path)?;
    FrequencyTable::from_counts(rows.into_iter().map(|row| (row.tag, row.count)))
        .with_context(|| format!("Invalid tag counts in {}", path.display()))
}

impl Command for Estimate {
    fn execute(&self, _command_line: &str) -> Result<()> {
        self.validate()?;
        let table = self.load_table()?;
        info!("Loaded {} distinct tag(s) from {} read(s)", table.len(), table.total_observations());

        let max_distance = u64::from(self.grouping.max_distance);
        if let Some(tag_len) =
            table.tags().next().map(str::len).filter(|&len| len as u64 <= max_distance)
        {
            warn!(
                "--max-distance {max_distance} is not smaller than the tag length {tag_len}; every pair of distinct tags will be grouped"
            );
        }

        let timer = OperationTimer::new("Estimating error rate", "tags");
        let config = self.grouping.to_config(&self.threading);
        let analysis = estimate_error_rate(&table, &config).context("Error rate estimation failed")?;
        timer.log_completion(table.len() as u64);

        log_error_report_summary(&analysis);
        self.write_outputs(&analysis)
    }
}
