//! Tag extraction from FASTQ reads.
//!
//! A tag is located in each read by a fixed flanking sequence on either side: the bases
//! between the first occurrence of the prefix and the last occurrence of the suffix that
//! follows it. Matching ignores case, but the tag is returned as written in the read.
//!
//! Reads in which the flanks cannot be found are skipped and counted in
//! [`ExtractionStats`]. Plain and gzip-compressed (`.gz`) FASTQ files are supported.
//!
//! # Example
//!
//! ```
//! use umiqc_lib::fastq::TagExtractor;
//!
//! let extractor = TagExtractor::new("ACGT", "TTAA").unwrap();
//! assert_eq!(extractor.extract_tag(b"NNacgtGGCATTaaNN"), Some(&b"GGCA"[..]));
//! assert_eq!(extractor.extract_tag(b"ACGTGGCA"), None);
//! ```

use ahash::AHashMap;
use anyhow::{Context, Result};
use bstr::ByteSlice;
use fgoxide::io::Io;
use log::debug;
use seq_io::fastq::Reader as FastqReader;
use seq_io::fastq::Record;
use std::io::BufRead;
use std::path::Path;
use umiqc_dna::has_no_call;
use umiqc_umi::{FrequencyTable, Tag};

use crate::errors::UmiqcError;
use crate::progress::ProgressTracker;
use crate::validation::validate_flank;

const BUFFER_SIZE: usize = 1024 * 1024;

/// Locate the tag between `prefix` and `suffix` in `read`, ignoring case.
///
/// Uses the leftmost prefix and the rightmost suffix after it, so a suffix sequence that
/// also occurs inside the tag does not truncate it.
///
/// # Example
/// ```
/// use umiqc_lib::fastq::extract_tag;
///
/// assert_eq!(extract_tag(b"AAGGCTTTCC", b"aa", b"tt"), Some(&b"GGCT"[..]));
/// assert_eq!(extract_tag(b"AAGGTTCTTCC", b"AA", b"TT"), Some(&b"GGTTC"[..]));
/// assert_eq!(extract_tag(b"TTGGAA", b"AA", b"TT"), None);
/// ```
#[must_use]
pub fn extract_tag<'a>(read: &'a [u8], prefix: &[u8], suffix: &[u8]) -> Option<&'a [u8]> {
    locate(read, &prefix.to_ascii_uppercase(), &suffix.to_ascii_uppercase())
}

/// Find the tag given flanks that are already uppercase.
fn locate<'a>(read: &'a [u8], prefix: &[u8], suffix: &[u8]) -> Option<&'a [u8]> {
    let upper = read.to_ascii_uppercase();
    let start = upper.find(prefix)? + prefix.len();
    let end = upper.rfind(suffix)?;
    (end >= start).then(|| &read[start..end])
}

/// The tag extracted from one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTag {
    /// Read name up to the first whitespace
    pub read_name: String,
    /// The extracted tag
    pub tag: Tag,
}

/// Counts collected while extracting tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Reads examined
    pub reads: u64,
    /// Reads from which a tag was extracted
    pub tagged: u64,
    /// Reads skipped because the flanks were not found
    pub skipped: u64,
    /// Extracted tags containing at least one no-call base
    pub with_no_call: u64,
}

/// Tags extracted from a FASTQ file.
#[derive(Debug, Clone)]
pub struct ExtractedTags {
    /// Per-read tags in file order; empty unless requested
    pub per_read: Vec<ReadTag>,
    /// Distinct tags with read counts
    pub table: FrequencyTable,
    /// Extraction counts
    pub stats: ExtractionStats,
}

/// Extracts tags from reads using fixed flanking sequences.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    prefix: String,
    suffix: String,
    prefix_upper: Vec<u8>,
    suffix_upper: Vec<u8>,
}

impl TagExtractor {
    /// Create an extractor for tags between `prefix` and `suffix`.
    ///
    /// # Errors
    /// Returns [`UmiqcError::InvalidParameter`] if either flank is empty or has whitespace.
    pub fn new(prefix: &str, suffix: &str) -> crate::errors::Result<Self> {
        validate_flank(prefix, "umi-prefix")?;
        validate_flank(suffix, "umi-suffix")?;
        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            prefix_upper: prefix.as_bytes().to_ascii_uppercase(),
            suffix_upper: suffix.as_bytes().to_ascii_uppercase(),
        })
    }

    /// Extract the tag from a single read sequence.
    #[must_use]
    pub fn extract_tag<'a>(&self, read: &'a [u8]) -> Option<&'a [u8]> {
        locate(read, &self.prefix_upper, &self.suffix_upper)
    }

    /// Extract tags from every record of a FASTQ file, plain or gzipped.
    ///
    /// When `keep_per_read` is true the tag of each read is retained in file order.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if no read has a tag.
    pub fn extract_file(&self, path: &Path, keep_per_read: bool) -> Result<ExtractedTags> {
        let reader = Io::new(5, BUFFER_SIZE)
            .new_reader(path)
            .with_context(|| format!("Failed to open FASTQ: {}", path.display()))?;
        self.extract_reader(reader, &path.display().to_string(), keep_per_read)
    }

    /// Extract tags from FASTQ records read from `reader`; `source` names it in errors.
    ///
    /// # Errors
    /// Returns an error if a record cannot be parsed, or if no read has a tag.
    pub fn extract_reader<R: BufRead>(
        &self,
        reader: R,
        source: &str,
        keep_per_read: bool,
    ) -> Result<ExtractedTags> {
        let mut fastq = FastqReader::new(reader);
        let mut progress = ProgressTracker::new("Read");
        let mut stats = ExtractionStats::default();
        let mut per_read = Vec::new();
        let mut counts: AHashMap<Tag, u64> = AHashMap::new();

        while let Some(record) = fastq.next() {
            let record = record.with_context(|| format!("Failed to parse FASTQ record in {source}"))?;
            stats.reads += 1;
            progress.record(1);

            let Some(tag) = self.extract_tag(record.seq()) else {
                stats.skipped += 1;
                debug!("No tag found in read {}", record.id_bytes().to_str_lossy());
                continue;
            };

            stats.tagged += 1;
            if has_no_call(tag) {
                stats.with_no_call += 1;
            }

            let tag = tag.to_str().map_err(|e| UmiqcError::InvalidFileFormat {
                file_type: "FASTQ".to_string(),
                path: source.to_string(),
                reason: format!("Tag in read {} is not valid text: {e}", record.id_bytes().to_str_lossy()),
            })?;

            if keep_per_read {
                per_read.push(ReadTag {
                    read_name: record.id_bytes().to_str_lossy().into_owned(),
                    tag: tag.to_string(),
                });
            }
            if let Some(count) = counts.get_mut(tag) {
                *count += 1;
            } else {
                counts.insert(tag.to_string(), 1);
            }
        }
        progress.log_final();

        if stats.tagged == 0 {
            return Err(UmiqcError::TagNotFound {
                path: source.to_string(),
                reads: stats.reads,
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            }
            .into());
        }

        let table = FrequencyTable::from_counts(counts)?;
        debug!("Extracted {} distinct tag(s) from {} read(s)", table.len(), stats.tagged);
        Ok(ExtractedTags { per_read, table, stats })
    }
}
