//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its current position in a dynamically
//! reordered alphabet list, then promotes that byte to the front. After the
//! BWT has clustered equal bytes, this turns the clusters into many zeros and
//! other small integers, the ideal shape for entropy coding.
//!
//! The alphabet state is caller-owned and created fresh per pass; nothing is
//! shared between independent encode/decode calls.

use crate::ALPHABET_SIZE;

/// Caller-owned move-to-front alphabet state.
///
/// The sequence starts as the identity ordering and is mutated on every
/// step; it remains a permutation of the alphabet throughout.
#[derive(Debug, Clone)]
pub struct MoveToFront {
    seq: Vec<u8>,
}

impl MoveToFront {
    /// Create the full 256-symbol state with the identity ordering.
    pub fn new() -> Self {
        Self {
            seq: (0..=255).collect(),
        }
    }

    /// Create a state over a restricted alphabet of distinct symbols.
    pub fn with_alphabet(alphabet: &[u8]) -> Self {
        Self {
            seq: alphabet.to_vec(),
        }
    }

    /// Encode one symbol: its current position, then move it to the front.
    ///
    /// Returns `None` when the symbol is not in the alphabet (impossible for
    /// the full 256-symbol state).
    pub fn encode_symbol(&mut self, byte: u8) -> Option<u8> {
        let pos = self.seq.iter().position(|&b| b == byte)?;
        if pos > 0 {
            self.seq.remove(pos);
            self.seq.insert(0, byte);
        }
        Some(pos as u8)
    }

    /// Decode one rank: the symbol at that position, then move it to the front.
    ///
    /// Returns `None` when the rank is outside the alphabet.
    pub fn decode_symbol(&mut self, rank: u8) -> Option<u8> {
        let byte = *self.seq.get(rank as usize)?;
        if rank > 0 {
            self.seq.remove(rank as usize);
            self.seq.insert(0, byte);
        }
        Some(byte)
    }

    /// The current alphabet ordering.
    pub fn alphabet(&self) -> &[u8] {
        &self.seq
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

/// Move-to-Front encode over the full 256-symbol alphabet.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut state = MoveToFront::new();
    data.iter()
        .map(|&byte| {
            state
                .encode_symbol(byte)
                .expect("MTF: byte must exist in the 0-255 alphabet")
        })
        .collect()
}

/// Move-to-Front decode over the full 256-symbol alphabet.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut state = MoveToFront::new();
    data.iter()
        .map(|&rank| {
            state
                .decode_symbol(rank)
                .expect("MTF: rank must exist in the 0-255 alphabet")
        })
        .collect()
}
