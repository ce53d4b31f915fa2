//! Bit difference counting
//!
//! The single XOR-popcount primitive shared by hex and file comparison.
//! All functions are pure and cannot fail.

const WORD: usize = std::mem::size_of::<u64>();

/// Number of differing bits between two bytes (0..=8)
#[inline(always)]
pub fn byte_diff(a: u8, b: u8) -> u32 {
    (a ^ b).count_ones()
}

/// Number of differing bits between two nibbles (0..=4)
///
/// Only the low four bits of each argument take part in the comparison.
#[inline(always)]
pub fn nibble_diff(a: u8, b: u8) -> u32 {
    byte_diff(a & 0x0f, b & 0x0f)
}

/// Number of differing bits between two equal-length slices
///
/// Bytes are compared eight at a time as native-endian words, the
/// remaining tail byte by byte. Popcount is independent of byte order so
/// the result is identical to summing [`byte_diff`] over every position.
pub fn slice_diff(a: &[u8], b: &[u8]) -> u64 {
    debug_assert_eq!(a.len(), b.len());

    let mut words_a = a.chunks_exact(WORD);
    let mut words_b = b.chunks_exact(WORD);
    let mut total = 0u64;

    for (wa, wb) in (&mut words_a).zip(&mut words_b) {
        let mut xa = [0u8; WORD];
        let mut xb = [0u8; WORD];
        xa.copy_from_slice(wa);
        xb.copy_from_slice(wb);
        total += u64::from((u64::from_ne_bytes(xa) ^ u64::from_ne_bytes(xb)).count_ones());
    }

    total
        + words_a
            .remainder()
            .iter()
            .zip(words_b.remainder())
            .map(|(&x, &y)| u64::from(byte_diff(x, y)))
            .sum::<u64>()
}
