#![deny(unsafe_code)]

//! DNA sequence utilities and constants.
//!
//! This crate provides the low-level sequence comparisons used by the tag error engine:
//! - 2-bit encoding for fast tag comparison (Hamming distance via popcount)
//! - Byte-wise Hamming distance for tags that carry ambiguity codes
//! - Common constants for no-call handling

pub mod bitenc;
pub mod hamming;

// Re-export submodule contents at crate root for convenience
pub use bitenc::BitEnc;
pub use hamming::hamming_distance;

/// No-call base character.
pub const NO_CALL_BASE: u8 = b'N';

/// Lowercase no-call base character.
pub const NO_CALL_BASE_LOWER: u8 = b'n';

/// Returns true if the sequence contains a no-call (`N` or `n`).
#[inline]
#[must_use]
pub fn has_no_call(seq: &[u8]) -> bool {
    seq.iter().any(|&b| b == NO_CALL_BASE || b == NO_CALL_BASE_LOWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_no_call() {
        assert!(!has_no_call(b"ACGT"));
        assert!(has_no_call(b"ACNT"));
        assert!(has_no_call(b"acnt"));
        assert!(!has_no_call(b""));
    }
}
