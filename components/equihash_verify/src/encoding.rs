//! Bit-level decoding of hash rows and minimal solution encodings.
//!
//! Equihash treats both hash outputs and encoded solutions as big-endian bit
//! streams cut into fixed-width chunks: `n / (k + 1)` bits per collision
//! chunk, one bit more per encoded index. Chunks never exceed 25 bits for any
//! supported parameter set, so they are handled here as plain `u32` words.

use alloc::vec::Vec;

use crate::params::Params;

/// Widest chunk [`read_chunks`] can produce. The accumulator ingests eight
/// bits per step into a `u32`, so a chunk plus seven carry bits must fit.
pub(crate) const MAX_CHUNK_BITS: usize = 25;

/// Splits `bytes`, read as a big-endian bit stream, into consecutive
/// `bit_len`-bit chunks, returning each chunk as a `u32`.
///
/// Trailing bits that do not fill a whole chunk are dropped. `bit_len` must
/// lie in `8..=MAX_CHUNK_BITS`; [`Params::new`] only admits parameter sets
/// whose chunk widths do.
pub(crate) fn read_chunks(bytes: &[u8], bit_len: usize) -> Vec<u32> {
    debug_assert!((8..=MAX_CHUNK_BITS).contains(&bit_len));

    let mask: u32 = (1 << bit_len) - 1;
    let mut chunks = Vec::with_capacity(bytes.len() * 8 / bit_len);

    // The low `held` bits of `acc` are stream bits not yet emitted; anything
    // above them is stale and gets masked off on emission. Since bit_len >= 8,
    // at most one chunk completes per input byte.
    let mut acc: u32 = 0;
    let mut held = 0;
    for &b in bytes {
        acc = (acc << 8) | u32::from(b);
        held += 8;
        if held >= bit_len {
            held -= bit_len;
            chunks.push((acc >> held) & mask);
        }
    }

    chunks
}

/// Decodes the minimal (bit-packed) encoding of a solution into its index
/// list, or `None` if `minimal` is not exactly the encoded width for `p`.
///
/// Chunks are big-endian, so decoded indices compare the way the encoded bit
/// stream does.
pub(crate) fn indices_from_minimal(p: &Params, minimal: &[u8]) -> Option<Vec<u32>> {
    if minimal.len() as u64 != p.solution_width() {
        return None;
    }
    Some(read_chunks(minimal, p.collision_bit_length() + 1))
}
