//! Circular suffix sorting.
//!
//! A circular suffix of a buffer of length N is the rotation that starts at
//! some offset and wraps around to the byte before it. Sorting all N rotations
//! lexicographically is the core of the Burrows-Wheeler Transform. Rotations
//! are never materialized; a suffix is just its start offset, and comparison
//! dereferences the shared buffer with `(offset + n) % N` arithmetic, so the
//! sorter uses O(N) extra space regardless of input.

use std::cmp::Ordering;

/// Sorted order of the circular suffixes of a byte buffer.
///
/// `order[i]` holds the start offset of the i-th lexicographically smallest
/// rotation; it is always a permutation of `[0, N)`. Construction is the
/// dominant cost of the forward transform: O(N log N) comparisons typical,
/// with each comparison O(N) worst case on highly repetitive data. A
/// linear-time construction (SA-IS on the doubled string) would remove that
/// bound but is not needed at typical block sizes.
#[derive(Debug, Clone)]
pub struct CircularSuffixArray {
    order: Vec<u32>,
}

impl CircularSuffixArray {
    /// Sort the circular suffixes of `data`.
    ///
    /// An empty buffer yields an empty order.
    ///
    /// # Panics
    ///
    /// Panics when `data` is longer than [`crate::MAX_BLOCK_LEN`]: start
    /// offsets are stored as `u32` so they can travel in the frame header.
    pub fn new(data: &[u8]) -> Self {
        let n = data.len();
        assert!(
            n <= crate::MAX_BLOCK_LEN,
            "input of {n} bytes exceeds the maximum block length"
        );
        let mut order: Vec<u32> = (0..n as u32).collect();

        if n > 8 {
            // Pre-compute a 4-byte prefix key per rotation so the sort
            // resolves most comparisons on a single u32 compare instead of
            // walking the rotations byte by byte.
            let key_len = n.min(4);
            let mut keys: Vec<u32> = Vec::with_capacity(n);
            for i in 0..n {
                let mut key = 0u32;
                for j in 0..key_len {
                    key = (key << 8) | (data[(i + j) % n] as u32);
                }
                keys.push(key);
            }

            order.sort_by(|&a, &b| {
                match keys[a as usize].cmp(&keys[b as usize]) {
                    Ordering::Equal => {
                        // Keys match; compare the rest of the rotation. The
                        // walk covers the full length, so two rotations only
                        // compare equal when the input is fully periodic.
                        compare_rotations_from(data, a as usize, b as usize, key_len)
                    }
                    other => other,
                }
            });
        } else {
            order.sort_by(|&a, &b| compare_rotations_from(data, a as usize, b as usize, 0));
        }

        Self { order }
    }

    /// Number of suffixes (the input length).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Start offset of the rotation ranked `rank`, or `None` outside `[0, N)`.
    pub fn index(&self, rank: usize) -> Option<usize> {
        self.order.get(rank).map(|&i| i as usize)
    }

    /// The full sorted order as a permutation of `[0, N)`.
    pub fn order(&self) -> &[u32] {
        &self.order
    }
}

/// Compare two rotations of `data` starting at byte position `from` of each.
fn compare_rotations_from(data: &[u8], a: usize, b: usize, from: usize) -> Ordering {
    let n = data.len();
    for i in from..n {
        let byte_a = data[(a + i) % n];
        let byte_b = data[(b + i) % n];
        match byte_a.cmp(&byte_b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
