//! Custom error types for umiqc operations.

use thiserror::Error;

/// Result type alias for umiqc operations
pub type Result<T> = std::result::Result<T, UmiqcError>;

/// Error type for umiqc operations
#[derive(Error, Debug)]
pub enum UmiqcError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// File format error
    #[error("Invalid {file_type} file '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "FASTQ", "tag counts")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// No read in the input carried a tag between the prefix and suffix
    #[error(
        "No tag found between prefix '{prefix}' and suffix '{suffix}' in any of the {reads} read(s) of '{path}'"
    )]
    TagNotFound {
        /// Path to the input
        path: String,
        /// Number of reads examined
        reads: u64,
        /// Sequence expected before the tag
        prefix: String,
        /// Sequence expected after the tag
        suffix: String,
    },
}
