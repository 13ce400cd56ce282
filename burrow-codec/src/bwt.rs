//! Burrows-Wheeler Transform.
//!
//! The BWT does not compress; it permutes the input so that equal bytes
//! cluster into long runs, which the Move-to-Front stage then turns into
//! small integers. The transform is the last column of the matrix of sorted
//! rotations plus the row at which the unrotated input appears; the inverse
//! rebuilds the input in O(N+R) from a counting sort, without re-sorting.

use crate::ALPHABET_SIZE;
use crate::suffix::CircularSuffixArray;
use burrow_core::error::{CodecError, Result};

/// Perform the Burrows-Wheeler Transform.
///
/// Returns the transformed bytes and the row index of the original input
/// among the sorted rotations. Empty input returns `(vec![], 0)`.
///
/// # Panics
///
/// Panics when `data` is longer than [`crate::MAX_BLOCK_LEN`], the largest
/// block whose row indices fit the frame header.
pub fn transform(data: &[u8]) -> (Vec<u8>, u32) {
    if data.is_empty() {
        return (Vec::new(), 0);
    }

    let n = data.len();
    let suffixes = CircularSuffixArray::new(data);

    // The unrotated input is the rotation starting at offset 0; exactly one
    // row holds it.
    let first = suffixes
        .order()
        .iter()
        .position(|&i| i == 0)
        .expect("BWT: offset 0 must appear in the sorted order") as u32;

    // Last column of the sorted rotation matrix: the byte immediately before
    // each rotation's start, wrapping around.
    let transformed: Vec<u8> = suffixes
        .order()
        .iter()
        .map(|&i| data[(i as usize + n - 1) % n])
        .collect();

    (transformed, first)
}

/// Stable counting sort of `t` by byte value.
///
/// Returns `(first_column, next)` as fresh arrays: `first_column` is `t`
/// sorted, and `next[r]` is the position in `t` whose byte landed at sorted
/// rank `r`. Ranks among equal bytes are assigned in original-index order, so
/// for rows `i < j` with the same leading byte, `next[i] < next[j]` - the
/// tie-break that makes the inverse transform unambiguous.
///
/// # Panics
///
/// Panics when `t` is longer than [`crate::MAX_BLOCK_LEN`]; entries of
/// `next` are `u32`.
pub fn successor_table(t: &[u8]) -> (Vec<u8>, Vec<u32>) {
    let n = t.len();
    assert!(
        n <= crate::MAX_BLOCK_LEN,
        "transformed block of {n} bytes exceeds the maximum block length"
    );

    let mut counts = [0usize; ALPHABET_SIZE];
    for &byte in t {
        counts[byte as usize] += 1;
    }

    // Cumulative counts: starting rank of each byte value in sorted order
    let mut positions = [0usize; ALPHABET_SIZE];
    let mut total = 0;
    for (pos, count) in positions.iter_mut().zip(counts) {
        *pos = total;
        total += count;
    }

    let mut first_column = vec![0u8; n];
    let mut next = vec![0u32; n];
    for (i, &byte) in t.iter().enumerate() {
        let rank = positions[byte as usize];
        positions[byte as usize] += 1;
        first_column[rank] = byte;
        next[rank] = i as u32;
    }

    (first_column, next)
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// Reconstructs the original input from the transformed bytes and the row
/// index produced by [`transform`]. Fails with
/// [`CodecError::IndexOutOfRange`] when `first` does not name a row of `t`
/// (for non-empty `t`, `first` must be in `[0, N)`; empty `t` requires
/// `first == 0`).
pub fn inverse_transform(t: &[u8], first: u32) -> Result<Vec<u8>> {
    let n = t.len();
    if first as usize >= n && !(n == 0 && first == 0) {
        return Err(CodecError::index_out_of_range(first as usize, n));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let (first_column, next) = successor_table(t);

    // Row `first` holds the unrotated input, so its leading byte is the
    // input's first byte; following `next` walks the rotations left to right.
    // `next` is a permutation of [0, n), so every step stays in bounds.
    let mut result = Vec::with_capacity(n);
    let mut row = first as usize;
    for _ in 0..n {
        result.push(first_column[row]);
        row = next[row] as usize;
    }

    Ok(result)
}
