//! Byte-wise Hamming distance.
//!
//! Used for tags that cannot be packed into a [`BitEnc`](crate::BitEnc): ambiguity codes,
//! lowercase bases, or tags longer than 32 bases.

/// Count mismatches between two equal-length sequences.
///
/// Compares the sequences position by position. Returns `None` if the lengths differ, since
/// the Hamming distance is undefined in that case.
///
/// # Examples
///
/// ```
/// use umiqc_dna::hamming_distance;
///
/// assert_eq!(hamming_distance(b"ACGT", b"ACGT"), Some(0));
/// assert_eq!(hamming_distance(b"ACGT", b"ACTT"), Some(1));
/// assert_eq!(hamming_distance(b"ACGN", b"ACGT"), Some(1));
/// assert_eq!(hamming_distance(b"ACG", b"ACGT"), None);
/// ```
#[inline]
#[must_use]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Option<u32> {
    if a.len() != b.len() {
        return None;
    }
    let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
    u32::try_from(mismatches).ok()
}
