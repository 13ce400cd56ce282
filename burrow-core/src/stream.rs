//! Byte-level I/O for fixed-width binary values.
//!
//! This module provides `ByteReader` and `ByteWriter` for the persisted frame
//! layout the codec uses: a big-endian 32-bit row index followed by raw
//! transform bytes. The codec itself only ever sees in-memory buffers; these
//! types are the boundary where those buffers meet a `Read`/`Write` stream.
//!
//! # Byte Ordering
//!
//! Multi-byte integers are written MSB-first (big-endian), the on-disk
//! convention of the classic block-sorting tools.
//!
//! # Example
//!
//! ```
//! use burrow_core::stream::{ByteReader, ByteWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = ByteWriter::new(&mut output);
//!     writer.write_u32_be(0x0000_0003).unwrap();
//!     writer.write_bytes(b"ARD!").unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(&output[..4], &[0x00, 0x00, 0x00, 0x03]);
//!
//! let mut reader = ByteReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_u32_be().unwrap(), 3);
//! assert_eq!(reader.read_to_end().unwrap(), b"ARD!");
//! ```

use crate::error::{CodecError, Result};
use std::io::{Read, Write};

/// A reader of fixed-width binary values wrapping any `Read` implementation.
#[derive(Debug)]
pub struct ByteReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Total bytes read (for error reporting).
    total_bytes_read: u64,
}

impl<R: Read> ByteReader<R> {
    /// Create a new `ByteReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            total_bytes_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `ByteReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.total_bytes_read
    }

    /// Read a big-endian unsigned 32-bit integer.
    ///
    /// Fails with [`CodecError::TruncatedStream`] when fewer than 4 bytes
    /// remain, reporting how many were actually available.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => return Err(CodecError::truncated(buf.len(), filled)),
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.total_bytes_read += 4;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a single byte, or `None` at end of stream.
    pub fn read_u8(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.total_bytes_read += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read all remaining bytes from the stream.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let n = self.reader.read_to_end(&mut buf)?;
        self.total_bytes_read += n as u64;
        Ok(buf)
    }
}

/// A writer of fixed-width binary values wrapping any `Write` implementation.
///
/// `flush` (or `into_inner`, which flushes) guarantees all previously written
/// values have been handed to the underlying writer before control returns.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Total bytes written.
    total_bytes_written: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Create a new `ByteWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_bytes_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume this `ByteWriter` and return the underlying writer.
    ///
    /// This flushes before returning the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        // Use ManuallyDrop to prevent Drop from running (we already flushed)
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: We're consuming self and preventing drop, so it's safe to take the writer
        Ok(unsafe { std::ptr::read(&this.writer) })
    }

    /// Get the total number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.total_bytes_written
    }

    /// Write a big-endian unsigned 32-bit integer.
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.writer.write_all(&value.to_be_bytes())?;
        self.total_bytes_written += 4;
        Ok(())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.writer.write_all(&[byte])?;
        self.total_bytes_written += 1;
        Ok(())
    }

    /// Write raw bytes to the stream.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)?;
        self.total_bytes_written += buf.len() as u64;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for ByteWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        let _ = self.flush();
    }
}
