use crate::encoding::MAX_CHUNK_BITS;

/// An Equihash parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Params {
    pub(crate) n: u32,
    pub(crate) k: u32,
}

impl Params {
    /// Returns `None` if the parameters fall outside the supported domain.
    pub(crate) fn new(n: u32, k: u32) -> Option<Self> {
        // Requirements on the parameters:
        // - n is a multiple of 8, so index rows have an exact byte length,
        //   and at most 512, so they pack into a single BLAKE2b output.
        // - k >= 3, so encoded solutions have an exact byte length.
        // - k < 32, so solution sizes of 2^k indices stay addressable.
        // - k < n, and n is a multiple of k + 1, so the collision bit length
        //   is a positive integer.
        if n % 8 != 0 || n > 512 || !(3..32).contains(&k) || k >= n || n % (k + 1) != 0 {
            return None;
        }
        let p = Params { n, k };
        // The chunk reader consumes one input byte per step and accumulates
        // chunks in a u32, which bounds the widths it can handle; both the
        // collision chunks and the one-bit-wider encoded indices must fit.
        if (8..MAX_CHUNK_BITS).contains(&p.collision_bit_length()) {
            Some(p)
        } else {
            None
        }
    }

    /// Number of index rows packed into each BLAKE2b output.
    pub(crate) fn indices_per_hash_output(&self) -> u32 {
        512 / self.n
    }

    /// Byte length requested from BLAKE2b.
    pub(crate) fn hash_output(&self) -> u8 {
        (self.indices_per_hash_output() * self.n / 8) as u8
    }

    /// Width in bits of the hash chunk each collision round must cancel.
    pub(crate) fn collision_bit_length(&self) -> usize {
        (self.n / (self.k + 1)) as usize
    }

    /// Chunks per index row: one consumed by each of the `k` rounds, plus the
    /// final zero check.
    #[cfg(test)]
    pub(crate) fn collision_chunks(&self) -> usize {
        (self.k as usize) + 1
    }

    /// Number of indices in a solution.
    pub(crate) fn solution_indices(&self) -> usize {
        1 << self.k
    }

    /// Byte length of a solution in the minimal encoding.
    pub(crate) fn solution_width(&self) -> u64 {
        // Division is exact because k >= 3.
        (1u64 << self.k) * (self.collision_bit_length() as u64 + 1) / 8
    }

    /// Exclusive upper bound of the index domain.
    pub(crate) fn index_bound(&self) -> u32 {
        1 << (self.collision_bit_length() + 1)
    }
}
