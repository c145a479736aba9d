//! Integration tests for the umiqc binary.
//!
//! Each test runs the compiled binary against files in a temporary directory.

mod helpers;
mod test_error_paths;
mod test_estimate_command;
mod test_extract_command;
