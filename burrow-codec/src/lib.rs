//! Block-sorting text transform codec for burrow.
//!
//! This crate implements the reversible preprocessing pipeline used by
//! block-sorting compressors:
//!
//! 1. Burrows-Wheeler Transform (BWT) - Permutes the input so equal bytes
//!    cluster into long runs
//! 2. Move-to-Front Transform (MTF) - Remaps the clustered bytes into small
//!    integers amenable to entropy coding
//!
//! Entropy coding itself is out of scope; the pipeline output is the frame a
//! downstream entropy coder would consume.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
/// Move-to-Front Transform implementation.
pub mod mtf;
/// End-to-end pipeline and frame layout.
pub mod pipeline;
/// Circular suffix sorting.
pub mod suffix;

pub use burrow_core::error::{CodecError, Result};
pub use pipeline::{compress, compress_stream, expand, expand_stream};
pub use suffix::CircularSuffixArray;

/// Alphabet size of the extended single-byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Length of the frame header: the BWT row index as a big-endian u32.
pub const HEADER_LEN: usize = 4;

/// Maximum transformable block length.
///
/// Row indices travel in the frame's 32-bit header, so a block is at most
/// `u32::MAX` bytes; the transforms reject longer input outright rather than
/// silently truncating their internal offsets.
pub const MAX_BLOCK_LEN: usize = u32::MAX as usize;
