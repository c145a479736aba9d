//! A 2-bit DNA encoding for fast tag comparison.
//!
//! Distinct tags are compared all-against-all when building a distance matrix, so the
//! per-pair cost dominates. Packing each tag into a `u64` turns a Hamming distance into an
//! XOR plus a popcount.
//!
//! # Example
//!
//! ```
//! use umiqc_dna::bitenc::BitEnc;
//!
//! let tag1 = BitEnc::from_bytes(b"ACGT").unwrap();
//! let tag2 = BitEnc::from_bytes(b"ACTT").unwrap();
//! assert_eq!(tag1.hamming_distance(&tag2), 1);
//! ```

/// Maximum number of bases that fit in a single `BitEnc`.
pub const MAX_BITENC_BASES: usize = 32;

/// A 2-bit encoded DNA sequence stored in a u64.
///
/// Supports sequences up to 32 bases (64 bits).
/// Each base is encoded as: A=0, C=1, G=2, T=3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitEnc {
    /// The encoded sequence, with bases packed from LSB.
    bits: u64,
    /// Number of bases in the sequence.
    len: u8,
}

impl BitEnc {
    /// Encode a single DNA base to 2 bits.
    ///
    /// Lowercase bases are rejected so that `acgt` and `ACGT` keep the distance the byte-wise
    /// comparison would give them.
    #[inline]
    const fn encode_base(base: u8) -> Option<u64> {
        match base {
            b'A' => Some(0),
            b'C' => Some(1),
            b'G' => Some(2),
            b'T' => Some(3),
            _ => None,
        }
    }

    /// Create a `BitEnc` from a byte slice.
    ///
    /// Returns None if the sequence contains anything other than `A`, `C`, `G`, `T` or
    /// exceeds 32 bases.
    #[inline]
    #[must_use]
    pub fn from_bytes(seq: &[u8]) -> Option<Self> {
        if seq.len() > MAX_BITENC_BASES {
            return None;
        }

        let mut bits: u64 = 0;
        for (i, &base) in seq.iter().enumerate() {
            let encoded = Self::encode_base(base)?;
            bits |= encoded << (i * 2);
        }

        let len = u8::try_from(seq.len()).ok()?;
        Some(Self { bits, len })
    }

    /// Encode every sequence, or none of them.
    ///
    /// Returns None as soon as one sequence cannot be encoded, so callers can fall back to a
    /// byte-wise comparison for the whole set.
    #[must_use]
    pub fn encode_all<'a, I>(seqs: I) -> Option<Vec<Self>>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        seqs.into_iter().map(Self::from_bytes).collect()
    }

    /// Get the number of bases in this sequence.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if the sequence is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compute the Hamming distance between two encoded sequences.
    ///
    /// Both sequences must have the same length (debug assertion).
    #[inline]
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        debug_assert_eq!(self.len, other.len, "Sequences must have equal length");

        // XOR to find differing bits
        let diff = self.bits ^ other.bits;

        // For 2-bit encoding, a position differs if either of its 2 bits differ
        let odd_bits = diff & 0xAAAA_AAAA_AAAA_AAAA;
        let even_bits = diff & 0x5555_5555_5555_5555;

        let differs = (odd_bits >> 1) | even_bits;

        differs.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamming::hamming_distance;
    use proptest::prelude::*;

    #[test]
    fn test_from_bytes() {
        let enc = BitEnc::from_bytes(b"ACGT").unwrap();
        assert_eq!(enc.len(), 4);
        assert_eq!(enc.bits, 0b11_10_01_00); // T=3, G=2, C=1, A=0

        // Lowercase and ambiguity codes stay on the byte-wise path
        assert!(BitEnc::from_bytes(b"acgt").is_none());
        assert!(BitEnc::from_bytes(b"ACGN").is_none());
        assert!(BitEnc::from_bytes(b"ACGR").is_none());

        assert!(BitEnc::from_bytes(&[b'A'; 33]).is_none());
        assert!(BitEnc::from_bytes(&[b'A'; 32]).is_some());
    }

    #[test]
    fn test_empty_sequence() {
        let enc = BitEnc::from_bytes(b"").unwrap();
        assert!(enc.is_empty());
        assert_eq!(enc.hamming_distance(&enc), 0);
    }

    #[test]
    fn test_hamming_distance() {
        let seq1 = BitEnc::from_bytes(b"ACGTACGT").unwrap();
        let seq2 = BitEnc::from_bytes(b"ACGTACGT").unwrap();
        assert_eq!(seq1.hamming_distance(&seq2), 0);

        let seq3 = BitEnc::from_bytes(b"ACGTACTT").unwrap();
        assert_eq!(seq1.hamming_distance(&seq3), 1);

        let all_a = BitEnc::from_bytes(b"AAAA").unwrap();
        let all_t = BitEnc::from_bytes(b"TTTT").unwrap();
        assert_eq!(all_a.hamming_distance(&all_t), 4);

        // Typical 18bp tag
        let tag1 = BitEnc::from_bytes(b"AACAACACATCTACCTTC").unwrap();
        let tag2 = BitEnc::from_bytes(b"AACAACACATCTACCTTA").unwrap();
        assert_eq!(tag1.hamming_distance(&tag2), 1);
    }

    #[test]
    fn test_encode_all() {
        let seqs: Vec<&[u8]> = vec![b"AAAA", b"CCCC", b"GGTT"];
        let encoded = BitEnc::encode_all(seqs).unwrap();
        assert_eq!(encoded.len(), 3);
        assert_eq!(encoded[0].hamming_distance(&encoded[1]), 4);

        let with_n: Vec<&[u8]> = vec![b"AAAA", b"ANAA"];
        assert!(BitEnc::encode_all(with_n).is_none());
    }

    proptest! {
        /// The packed distance always agrees with the byte-wise distance.
        #[test]
        fn prop_packed_matches_bytewise(a in "[ACGT]{12}", b in "[ACGT]{12}") {
            let ea = BitEnc::from_bytes(a.as_bytes()).unwrap();
            let eb = BitEnc::from_bytes(b.as_bytes()).unwrap();
            prop_assert_eq!(Some(ea.hamming_distance(&eb)), hamming_distance(a.as_bytes(), b.as_bytes()));
        }
    }
}
