//! Error types for the tag error engine.
//!
//! Every failure is detected at the stage boundary where the precondition is violated and
//! aborts the whole analysis. The computation is deterministic, so none of these are worth
//! retrying.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, UmiError>;

/// Broad category of an [`UmiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input tags or counts violate a precondition.
    InputValidation,
    /// A quantity could not be computed (division by zero, overflow).
    Arithmetic,
    /// The input is too large for the configured resources.
    Capacity,
}

/// Error type for the tag error engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UmiError {
    /// No tags were supplied
    #[error("Frequency table is empty: at least one tag is required")]
    EmptyTable,

    /// Tags of different lengths were supplied to the distance matrix
    #[error(
        "All tags must have the same length: '{first}' has length {first_len} but '{offending}' has length {offending_len}"
    )]
    LengthMismatch {
        /// The first tag in sorted order, whose length is the reference
        first: String,
        /// Length of the first tag
        first_len: usize,
        /// The first tag whose length differs
        offending: String,
        /// Length of the offending tag
        offending_len: usize,
    },

    /// A tag was given a count of zero
    #[error("Tag '{tag}' has a count of zero (counts must be >= 1)")]
    ZeroCount {
        /// The tag with the zero count
        tag: String,
    },

    /// The same tag was supplied more than once
    #[error("Tag '{tag}' appears more than once in the frequency table")]
    DuplicateTag {
        /// The repeated tag
        tag: String,
    },

    /// Accuracy is undefined because no bases were observed
    #[error("Cannot compute accuracy: total bases is zero across {distinct_tags} distinct tag(s)")]
    ZeroTotalBases {
        /// Number of distinct tags in the table
        distinct_tags: usize,
    },

    /// A running sum exceeded `u64::MAX`
    #[error("Arithmetic overflow while summing {what}")]
    Overflow {
        /// The quantity being summed
        what: &'static str,
    },

    /// Too many distinct tags for an O(U²) matrix
    #[error(
        "Too many distinct tags for an all-pairs distance matrix: {distinct} exceeds the maximum of {max}"
    )]
    TooManyTags {
        /// Number of distinct tags supplied
        distinct: usize,
        /// Configured maximum
        max: usize,
    },

    /// The worker pool for the distance matrix could not be created
    #[error("Failed to create a thread pool with {threads} threads: {reason}")]
    ThreadPool {
        /// Requested number of threads
        threads: usize,
        /// Underlying error message
        reason: String,
    },
}

impl UmiError {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            UmiError::EmptyTable
            | UmiError::LengthMismatch { .. }
            | UmiError::ZeroCount { .. }
            | UmiError::DuplicateTag { .. } => ErrorKind::InputValidation,
            UmiError::ZeroTotalBases { .. } | UmiError::Overflow { .. } => ErrorKind::Arithmetic,
            UmiError::TooManyTags { .. } | UmiError::ThreadPool { .. } => ErrorKind::Capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let error = UmiError::LengthMismatch {
            first: "AAAA".to_string(),
            first_len: 4,
            offending: "AAAAT".to_string(),
            offending_len: 5,
        };
        let msg = format!("{error}");
        assert!(msg.contains("'AAAA' has length 4"));
        assert!(msg.contains("'AAAAT' has length 5"));
        assert_eq!(error.kind(), ErrorKind::InputValidation);
    }

    #[test]
    fn test_zero_total_bases_message() {
        let error = UmiError::ZeroTotalBases { distinct_tags: 1 };
        assert!(error.to_string().contains("total bases is zero"));
        assert_eq!(error.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_too_many_tags_message() {
        let error = UmiError::TooManyTags { distinct: 20, max: 10 };
        let msg = error.to_string();
        assert!(msg.contains("20 exceeds the maximum of 10"));
        assert_eq!(error.kind(), ErrorKind::Capacity);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UmiError::EmptyTable.kind(), ErrorKind::InputValidation);
        assert_eq!(UmiError::ZeroCount { tag: "A".into() }.kind(), ErrorKind::InputValidation);
        assert_eq!(UmiError::DuplicateTag { tag: "A".into() }.kind(), ErrorKind::InputValidation);
        assert_eq!(UmiError::Overflow { what: "bases" }.kind(), ErrorKind::Arithmetic);
        assert_eq!(
            UmiError::ThreadPool { threads: 2, reason: "x".into() }.kind(),
            ErrorKind::Capacity
        );
    }
}
