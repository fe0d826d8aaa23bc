use crate::histogram_pipeline::pack::types::RECORD_BYTES;

/// Accumulator capacity in 32-bit words: 192 bits for a 168-bit record,
/// so a 21-bit field landing near the top still has a next word to
/// spill into.
const ACC_WORDS: usize = 6;

/// Wide-integer accumulator used to assemble one bin's record before
/// byte serialization.
///
/// Bits are written least-significant first: the first `write_bits` call
/// lands in bit 0 of word 0. A field whose word offset leaves fewer bits
/// than its width before the word boundary spills its high bits into the
/// low bits of the next word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordAccumulator {
    words: [u32; ACC_WORDS],
    bit_pos: usize,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far.
    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    /// Appends the low `width` bits of `value` at the current position.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `width` is not in `1..=32`, if `value`
    /// has bits set above `width`, or if the accumulator capacity would
    /// be exceeded.
    pub fn write_bits(&mut self, value: u32, width: usize) {
        debug_assert!((1..=32).contains(&width));
        debug_assert!(width == 32 || value < (1u32 << width));
        debug_assert!(self.bit_pos + width <= ACC_WORDS * 32);

        let word = self.bit_pos / 32;
        let offset = self.bit_pos % 32;

        self.words[word] |= value << offset;
        if offset + width > 32 {
            // Field spans two words: the high bits go into the low bits
            // of the next word.
            self.words[word + 1] |= value >> (32 - offset);
        }
        self.bit_pos += width;
    }

    /// Reads `width` bits starting at an absolute bit position.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `width` is not in `1..=32` or the range
    /// exceeds the accumulator capacity.
    pub fn read_bits(&self, bit_pos: usize, width: usize) -> u32 {
        debug_assert!((1..=32).contains(&width));
        debug_assert!(bit_pos + width <= ACC_WORDS * 32);

        let word = bit_pos / 32;
        let offset = bit_pos % 32;

        let mut value = self.words[word] >> offset;
        if offset + width > 32 {
            value |= self.words[word + 1] << (32 - offset);
        }
        if width == 32 {
            value
        } else {
            value & ((1 << width) - 1)
        }
    }

    /// Serializes the low 168 bits as 21 little-endian bytes.
    ///
    /// Byte `i` holds bits `8*i .. 8*i+8` of the record. The unused top
    /// 24 bits of capacity are discarded, never emitted.
    pub fn as_le_bytes(&self) -> [u8; RECORD_BYTES] {
        let mut bytes = [0u8; RECORD_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (self.words[i / 4] >> ((i % 4) * 8)) as u8;
        }
        bytes
    }

    /// Rebuilds an accumulator from a serialized 21-byte record.
    pub fn from_le_bytes(bytes: &[u8; RECORD_BYTES]) -> Self {
        let mut words = [0u32; ACC_WORDS];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i / 4] |= (byte as u32) << ((i % 4) * 8);
        }
        Self {
            words,
            bit_pos: RECORD_BYTES * 8,
        }
    }
}
