//! # Burrow Core
//!
//! Core components for the burrow block-sorting codec.
//!
//! This crate provides the building blocks shared by the transform stages:
//!
//! - [`stream`]: byte-level I/O for fixed-width binary values
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! Burrow is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     burrow binary, encode/decode selection  │
//! ├─────────────────────────────────────────────┤
//! │ Codec                                       │
//! │     BWT, MTF, pipeline framing              │
//! ├─────────────────────────────────────────────┤
//! │ ByteStream (this crate)                     │
//! │     ByteReader/ByteWriter, errors           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use burrow_core::stream::{ByteReader, ByteWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = ByteWriter::new(&mut output);
//!     writer.write_u32_be(3).unwrap();
//!     writer.write_bytes(b"ARD!").unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = ByteReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_u32_be().unwrap(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod stream;

// Re-exports for convenience
pub use error::{CodecError, Result};
pub use stream::{ByteReader, ByteWriter};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CodecError, Result};
    pub use crate::stream::{ByteReader, ByteWriter};
}
