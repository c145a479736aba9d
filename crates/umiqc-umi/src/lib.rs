#![deny(unsafe_code)]

//! UMI error-rate estimation engine
//!
//! Given the distinct tags observed in a sequencing run and how often each was seen, this
//! crate decides which tags are sequencing-error copies of a more abundant tag and estimates
//! the implied per-base accuracy. It runs four stages, each consuming the previous one's
//! output:
//!
//! 1. [`DistanceMatrixEngine`]: all-pairs Hamming distances over the sorted distinct tags
//! 2. [`SimilarityGrouper`]: links tags within a distance threshold into [`SimilarityGroup`]s
//! 3. [`resolve_consensus`]: picks the most abundant member of each group as its true tag
//! 4. [`aggregate_error_rate`]: sums observed and erroneous bases into an [`ErrorReport`]
//!
//! [`estimate_error_rate`] runs all four for a [`FrequencyTable`] and an [`AnalysisConfig`].

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod consensus;
pub mod distance;
pub mod error;
pub mod grouper;
pub mod table;

pub use aggregate::{ErrorReport, aggregate_error_rate};
pub use analysis::{ErrorAnalysis, estimate_error_rate};
pub use config::{AnalysisConfig, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_DISTINCT_TAGS};
pub use consensus::{ConsensusAssignment, resolve_consensus};
pub use distance::{DistanceMatrix, DistanceMatrixEngine};
pub use error::{ErrorKind, Result, UmiError};
pub use grouper::{SimilarityGroup, SimilarityGrouper};
pub use table::FrequencyTable;

/// A molecular identifier as read from sequence, e.g. `ACGTAC`.
pub type Tag = String;
