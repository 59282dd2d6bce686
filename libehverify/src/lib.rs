//! C-callable boundary for the Equihash validity check.
//!
//! Hosts link the staticlib and declare the two exported symbols in their own
//! header. Every buffer is borrowed for the duration of the call only; the
//! library neither allocates into nor retains caller memory, and reports every
//! malformed input as `false` rather than trapping.

use libc::{c_uchar, size_t};
use std::slice;

/// XOR two `uint64_t` values. A trivial, total export that hosts call to
/// confirm the library is linked and the calling convention lines up.
#[no_mangle]
pub extern "C" fn libehverify_xor(a: u64, b: u64) -> u64 {
    a ^ b
}

/// Checks an Equihash solution held in caller-owned buffers.
///
/// `input` and `nonce` are opaque byte buffers of the stated lengths and may
/// be empty; `indices` must point to `indices_len` `uint32_t` values in host
/// byte order. A null pointer is accepted only alongside a zero length;
/// null-with-length calls return `false` without reading the buffer.
///
/// # Safety
///
/// Non-null pointers must be valid for reads of the stated lengths.
#[no_mangle]
pub unsafe extern "C" fn libehverify_eh_isvalid(
    n: u32,
    k: u32,
    input: *const c_uchar,
    input_len: size_t,
    nonce: *const c_uchar,
    nonce_len: size_t,
    indices: *const u32,
    indices_len: size_t,
) -> bool {
    let (Some(input), Some(nonce), Some(indices)) = (
        borrow(input, input_len),
        borrow(nonce, nonce_len),
        borrow(indices, indices_len),
    ) else {
        return false;
    };
    equihash_verify::is_valid_solution(n, k, input, nonce, indices)
}

/// Reborrows a raw C buffer, mapping a null base pointer to the empty slice
/// when the length is zero and to `None` otherwise.
unsafe fn borrow<'a, T>(ptr: *const T, len: size_t) -> Option<&'a [T]> {
    if ptr.is_null() {
        if len == 0 {
            Some(&[])
        } else {
            None
        }
    } else {
        Some(slice::from_raw_parts(ptr, len))
    }
}
