//! End-to-end transform pipeline and frame layout.
//!
//! Encode direction: raw bytes -> BWT -> MTF -> framed output. The frame
//! follows the classic block-sorting convention: a big-endian u32 holding
//! the BWT row index, followed by one MTF code byte per input byte. There is
//! no length field; the payload length is the stream length minus the
//! header. Decode is the exact left-inverse.
//!
//! Empty input produces a header-only frame (four zero bytes), which expands
//! back to empty output.

use crate::{HEADER_LEN, bwt, mtf};
use burrow_core::error::{CodecError, Result};
use burrow_core::stream::{ByteReader, ByteWriter};
use std::io::{Read, Write};

/// Run the full encode pipeline over an in-memory buffer.
///
/// # Panics
///
/// Panics when `input` is longer than [`crate::MAX_BLOCK_LEN`]: the row
/// index travels in the 4-byte header, so larger blocks are not
/// representable in this frame layout.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let (transformed, first) = bwt::transform(input);
    let codes = mtf::encode(&transformed);

    let mut frame = Vec::with_capacity(HEADER_LEN + codes.len());
    frame.extend_from_slice(&first.to_be_bytes());
    frame.extend_from_slice(&codes);
    frame
}

/// Run the full decode pipeline over an in-memory frame.
///
/// Fails with [`CodecError::TruncatedStream`] when the frame is shorter than
/// the header, and [`CodecError::IndexOutOfRange`] when the header's row
/// index does not name a row of the payload.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::truncated(HEADER_LEN, data.len()));
    }

    let first = u32::from_be_bytes(
        data[..HEADER_LEN]
            .try_into()
            .expect("header slice is exactly 4 bytes"),
    );
    let transformed = mtf::decode(&data[HEADER_LEN..]);
    bwt::inverse_transform(&transformed, first)
}

/// Encode everything from `reader` and emit the frame to `writer`.
///
/// The writer is flushed before returning, so the full frame is durably
/// handed off when this returns `Ok`.
pub fn compress_stream<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut reader = ByteReader::new(reader);
    let input = reader.read_to_end()?;

    let (transformed, first) = bwt::transform(&input);
    let codes = mtf::encode(&transformed);

    let mut writer = ByteWriter::new(writer);
    writer.write_u32_be(first)?;
    writer.write_bytes(&codes)?;
    writer.flush()
}

/// Decode a frame from `reader` and emit the original bytes to `writer`.
pub fn expand_stream<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut reader = ByteReader::new(reader);
    let first = reader.read_u32_be()?;
    let codes = reader.read_to_end()?;

    let transformed = mtf::decode(&codes);
    let output = bwt::inverse_transform(&transformed, first)?;

    let mut writer = ByteWriter::new(writer);
    writer.write_bytes(&output)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout_abracadabra() {
        // % java BurrowsWheeler - < abra.txt | java MoveToFront - | HexDump
        let frame = compress(b"ABRACADABRA!");
        assert_eq!(&frame[..HEADER_LEN], &[0x00, 0x00, 0x00, 0x03]);
        assert_eq!(frame.len(), HEADER_LEN + 12);
    }

    #[test]
    fn test_roundtrip() {
        let test_cases = [
            b"ABRACADABRA!".as_slice(),
            b"a",
            b"mississippi",
            b"the quick brown fox jumps over the lazy dog",
            &[0u8, 255, 0, 255],
        ];

        for data in test_cases {
            let frame = compress(data);
            assert_eq!(expand(&frame).unwrap(), data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_empty_input_header_only() {
        let frame = compress(b"");
        assert_eq!(frame, vec![0, 0, 0, 0]);
        assert_eq!(expand(&frame).unwrap(), b"");
    }

    #[test]
    fn test_truncated_frame() {
        for len in 0..HEADER_LEN {
            let frame = vec![0u8; len];
            assert!(matches!(
                expand(&frame),
                Err(CodecError::TruncatedStream { needed: 4, available }) if available == len
            ));
        }
    }

    #[test]
    fn test_bad_row_index() {
        // Header names row 12 but the payload has only 12 rows (0..12)
        let mut frame = compress(b"ABRACADABRA!");
        frame[..4].copy_from_slice(&12u32.to_be_bytes());
        assert!(matches!(
            expand(&frame),
            Err(CodecError::IndexOutOfRange { index: 12, len: 12 })
        ));
    }

    #[test]
    fn test_stream_roundtrip() {
        let data = b"compression is a pipeline of reversible transforms";

        let mut frame = Vec::new();
        compress_stream(&data[..], &mut frame).unwrap();

        let mut output = Vec::new();
        expand_stream(&frame[..], &mut output).unwrap();
        assert_eq!(output, data);
    }

    #[test]
    fn test_stream_matches_buffer_api() {
        let data = b"same bytes either way";
        let mut frame = Vec::new();
        compress_stream(&data[..], &mut frame).unwrap();
        assert_eq!(frame, compress(data));
    }
}
