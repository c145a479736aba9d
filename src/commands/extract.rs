//! Extract tags from FASTQ reads and count them.
//!
//! Each read is searched for the tag between a fixed prefix and suffix. The distinct tags
//! are written with their read counts, most common first, in a form `estimate --counts`
//! accepts.

use crate::commands::command::Command;
use crate::commands::common::TagFlankOptions;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use umiqc_lib::fastq::ExtractedTags;
use umiqc_lib::logging::{OperationTimer, log_extraction_summary};
use umiqc_lib::metrics::writer::write_metrics_auto;
use umiqc_lib::metrics::{ReadTagMetric, TagCountMetric};
use umiqc_lib::validation::validate_file_exists;

/// Extract tags from a FASTQ file.
#[derive(Parser, Debug)]
#[command(
    name = "extract",
    author,
    version,
    about = "\x1b[38;5;30m[TAG EXTRACTION]\x1b[0m \x1b[36mExtract tags from FASTQ reads and count them\x1b[0m",
    long_about = r#"
Extracts a tag from each read of a FASTQ file (optionally gzipped) and counts the distinct tags.

The tag is the sequence between the first occurrence of `--umi-prefix` and the last occurrence
of `--umi-suffix` after it. Matching ignores case. Reads in which the flanks are not found are
skipped and counted; the command fails if no read has a tag.

The output is a tab-separated file with a header and `tag`, `count` columns, most common tag
first. With `--per-read`, the tag of every read is also written as `read_name`, `tag`.

Example:

  umiqc extract --input reads.fq.gz --umi-prefix ACGTAC --umi-suffix TTGCAG --output counts.txt
"#
)]
#[command(verbatim_doc_comment)]
pub(crate) struct Extract {
    /// Input FASTQ file (plain or .gz)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Output file of distinct tags and their counts
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Optional output file with the tag extracted from each read
    #[arg(long)]
    per_read: Option<PathBuf>,

    /// Tag flanking sequences.
    #[command(flatten)]
    flanks: TagFlankOptions,
}

impl Extract {
    fn validate(&self) -> Result<()> {
        validate_file_exists(&self.input, "Input FASTQ")?;
        Ok(())
    }

    fn write_outputs(&self, extracted: &ExtractedTags) -> Result<()> {
        write_metrics_auto(&self.output, &TagCountMetric::from_table(&extracted.table))?;
        info!("Wrote {} distinct tag(s) to {}", extracted.table.len(), self.output.display());

        if let Some(path) = &self.per_read {
            let rows: Vec<ReadTagMetric> = extracted
                .per_read
                .iter()
                .map(|r| ReadTagMetric { read_name: r.read_name.clone(), tag: r.tag.clone() })
                .collect();
            write_metrics_auto(path, &rows)?;
            info!("Wrote per-read tags to {}", path.display());
        }
        Ok(())
    }
}

impl Command for Extract {
    fn execute(&self, _command_line: &str) -> Result<()> {
        self.validate()?;
        let extractor = self.flanks.extractor()?;

        let timer = OperationTimer::new("Extracting tags", "reads");
        let extracted = extractor.extract_file(&self.input, self.per_read.is_some())?;
        timer.log_completion(extracted.stats.reads);

        log_extraction_summary(&extracted.stats);
        self.write_outputs(&extracted)
    }
}
