//! The Equihash solution validity check.

use alloc::vec::Vec;
use core::fmt;

use blake2b_simd::{Hash as Blake2bHash, Params as Blake2bParams, State as Blake2bState};

use crate::encoding::{indices_from_minimal, read_chunks};
use crate::params::Params;

/// BLAKE2b personalization prefix. The full personalization is this tag
/// followed by `n` and `k` as little-endian words; existing solutions and
/// test vectors are bound to this exact value.
const PERSONALIZATION_TAG: &[u8; 8] = b"ZcashPoW";

/// Why a solution was rejected. Diagnostic only: the public interface
/// collapses every variant into `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reason {
    /// `(n, k)` lies outside the supported domain.
    Params,
    /// The index sequence is not exactly `2^k` long, or an encoded solution
    /// does not have the exact encoded width.
    SolutionSize,
    /// An index lies outside `0..2^(collision_bit_length + 1)`.
    IndexRange,
    /// Two rows disagree in the chunk their round must cancel.
    Collision,
    /// Two rows are not in canonical index order.
    IndexOrder,
    /// The same index appears on both sides of a merge.
    DuplicateIndices,
    /// Every round collided but the final XOR is non-zero.
    NonZeroRoot,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Params => f.write_str("unsupported parameters"),
            Reason::SolutionSize => f.write_str("wrong solution size"),
            Reason::IndexRange => f.write_str("index out of range"),
            Reason::Collision => f.write_str("rows do not collide"),
            Reason::IndexOrder => f.write_str("rows out of order"),
            Reason::DuplicateIndices => f.write_str("duplicate indices"),
            Reason::NonZeroRoot => f.write_str("root row is non-zero"),
        }
    }
}

/// One row of the folding pass: the indices merged into it so far, and the
/// hash chunks no round has consumed yet.
struct Row {
    chunks: Vec<u32>,
    indices: Vec<u32>,
}

impl Row {
    fn new(p: &Params, base: &Blake2bState, index: u32) -> Self {
        let digest = index_digest(base, index / p.indices_per_hash_output());
        let row_bytes = (p.n / 8) as usize;
        let start = (index % p.indices_per_hash_output()) as usize * row_bytes;
        Row {
            chunks: read_chunks(
                &digest.as_bytes()[start..start + row_bytes],
                p.collision_bit_length(),
            ),
            indices: vec![index],
        }
    }

    /// Merges a checked pair, dropping the chunk its round consumed.
    ///
    /// [`check_pair`] has already established that `a` precedes `b`, so the
    /// merged index list is always `a`'s followed by `b`'s.
    fn merge(a: Row, b: Row) -> Self {
        let chunks = a.chunks[1..]
            .iter()
            .zip(&b.chunks[1..])
            .map(|(x, y)| x ^ y)
            .collect();
        let mut indices = a.indices;
        indices.extend_from_slice(&b.indices);
        Row { chunks, indices }
    }

    fn first_index(&self) -> u32 {
        self.indices[0]
    }
}

/// Hash state over `input || nonce`, ready to absorb an index block.
fn base_state(p: &Params, input: &[u8], nonce: &[u8]) -> Blake2bState {
    let mut personal = [0u8; 16];
    personal[..8].copy_from_slice(PERSONALIZATION_TAG);
    personal[8..12].copy_from_slice(&p.n.to_le_bytes());
    personal[12..].copy_from_slice(&p.k.to_le_bytes());

    let mut state = Blake2bParams::new()
        .hash_length(p.hash_output() as usize)
        .personal(&personal)
        .to_state();
    state.update(input);
    state.update(nonce);
    state
}

fn index_digest(base: &Blake2bState, block: u32) -> Blake2bHash {
    let mut state = base.clone();
    state.update(&block.to_le_bytes());
    state.finalize()
}

/// The merge conditions, in the order their diagnostics are reported:
/// collision first, then canonical order, then distinctness.
fn check_pair(a: &Row, b: &Row) -> Result<(), Reason> {
    if a.chunks[0] != b.chunks[0] {
        Err(Reason::Collision)
    } else if b.first_index() < a.first_index() {
        Err(Reason::IndexOrder)
    } else if !distinct_indices(a, b) {
        Err(Reason::DuplicateIndices)
    } else {
        Ok(())
    }
}

fn distinct_indices(a: &Row, b: &Row) -> bool {
    a.indices.iter().all(|i| !b.indices.contains(i))
}

pub(crate) fn validate_solution(
    p: &Params,
    input: &[u8],
    nonce: &[u8],
    indices: &[u32],
) -> Result<(), Reason> {
    if indices.len() != p.solution_indices() {
        return Err(Reason::SolutionSize);
    }
    // Bounds-check the whole solution before hashing anything.
    if indices.iter().any(|&i| i >= p.index_bound()) {
        return Err(Reason::IndexRange);
    }

    let base = base_state(p, input, nonce);
    let mut rows: Vec<Row> = indices.iter().map(|&i| Row::new(p, &base, i)).collect();

    // Each pass checks and merges adjacent pairs, consuming one chunk from
    // every row and halving the row count.
    while rows.len() > 1 {
        let mut merged = Vec::with_capacity(rows.len() / 2);
        let mut pairs = rows.into_iter();
        while let (Some(a), Some(b)) = (pairs.next(), pairs.next()) {
            check_pair(&a, &b)?;
            merged.push(Row::merge(a, b));
        }
        rows = merged;
    }

    // k rounds have consumed all but one chunk of the root row; the solution
    // stands iff that final chunk (the full n-bit XOR) is zero.
    if rows[0].chunks[0] == 0 {
        Ok(())
    } else {
        Err(Reason::NonZeroRoot)
    }
}

fn report(result: Result<(), Reason>) -> bool {
    match result {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(%reason, "invalid Equihash solution");
            false
        }
    }
}

/// Checks whether `indices` is a valid Equihash solution for `(input, nonce)`
/// under the parameters `(n, k)`.
///
/// Every malformed input (unsupported parameters, wrong solution size,
/// out-of-range, mis-ordered or duplicated indices, a failed collision)
/// yields `false`. There is deliberately no way to tell the failure modes
/// apart from the result.
pub fn is_valid_solution(n: u32, k: u32, input: &[u8], nonce: &[u8], indices: &[u32]) -> bool {
    report(
        Params::new(n, k)
            .ok_or(Reason::Params)
            .and_then(|p| validate_solution(&p, input, nonce, indices)),
    )
}

/// Checks a solution carried in its minimal (bit-packed) encoding, the form
/// block headers store.
pub fn is_valid_encoded_solution(n: u32, k: u32, input: &[u8], nonce: &[u8], soln: &[u8]) -> bool {
    report(Params::new(n, k).ok_or(Reason::Params).and_then(|p| {
        let indices = indices_from_minimal(&p, soln).ok_or(Reason::SolutionSize)?;
        validate_solution(&p, input, nonce, &indices)
    }))
}
