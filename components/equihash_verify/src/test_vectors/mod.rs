//! Test vectors for the `n = 96, k = 5` parameter set.
//!
//! The valid solutions were produced by a reference solver; the invalid table
//! mutates the best-documented of them (the "Generalised Birthday" vector) in
//! every way the validator is expected to catch.

mod invalid;

pub(crate) use invalid::INVALID_TEST_VECTORS;
pub(crate) use valid::{
    BIRTHDAY_ENCODED_SOLUTION, BIRTHDAY_INPUT, BIRTHDAY_NONCE, BIRTHDAY_SOLUTION,
    VALID_TEST_VECTORS,
};
