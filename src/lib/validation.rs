//! Input validation utilities
//!
//! Common checks for command-line parameters and file paths with consistent error messages,
//! reported through [`crate::errors::UmiqcError`].

use crate::errors::{Result, UmiqcError};
use std::fmt::Display;
use std::path::Path;

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input FASTQ")
///
/// # Errors
/// Returns an error if the file does not exist
///
/// # Example
/// ```
/// use umiqc_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/reads.fq.gz", "Input FASTQ");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(UmiqcError::InvalidFileFormat {
            file_type: description.to_string(),
            path: path_ref.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }
    Ok(())
}

/// Validate that a value is positive (greater than zero)
///
/// # Errors
/// Returns an error if the value is zero or negative
///
/// # Example
/// ```
/// use umiqc_lib::validation::validate_positive;
///
/// assert!(validate_positive(4usize, "threads").is_ok());
/// assert!(validate_positive(0usize, "threads").is_err());
/// ```
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(UmiqcError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must be positive (> 0), got: {value}"),
        });
    }
    Ok(())
}

/// Validate that a flanking sequence used to locate tags is non-empty and has no whitespace
///
/// # Errors
/// Returns an error if the sequence is empty or contains whitespace
pub fn validate_flank(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UmiqcError::InvalidParameter {
            parameter: name.to_string(),
            reason: "Must not be empty".to_string(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(UmiqcError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must not contain whitespace, got: '{value}'"),
        });
    }
    Ok(())
}
