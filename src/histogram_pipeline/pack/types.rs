use crate::histogram_pipeline::histogram::types::{NUM_BINS, NUM_CAMERAS};

/// Width of a single camera's count field within a record.
pub const FIELD_BITS: usize = 21;
/// Largest count representable in a field: 2^21 - 1.
pub const MAX_COUNT: u32 = (1 << FIELD_BITS) - 1;
/// Serialized size of one bin's record: 8 fields * 21 bits = 168 bits.
pub const RECORD_BYTES: usize = NUM_CAMERAS * FIELD_BITS / 8;
/// Total size of the packed blob: 1024 records of 21 bytes.
pub const PACKED_SIZE: usize = NUM_BINS * RECORD_BYTES;

/// The packed output blob: 1024 contiguous 21-byte records in ascending
/// bin order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    bytes: Vec<u8>,
}

impl PackedBuffer {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), PACKED_SIZE);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The 21-byte record for one bin.
    ///
    /// # Panics
    ///
    /// Panics if `bin >= NUM_BINS`.
    pub fn record(&self, bin: usize) -> &[u8] {
        &self.bytes[bin * RECORD_BYTES..(bin + 1) * RECORD_BYTES]
    }
}

#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Pack bins on a rayon worker pool. Requires the `rayon` cargo
    /// feature; without it the flag degrades to sequential packing.
    /// Output bytes are identical either way.
    pub parallel: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "rayon"),
        }
    }
}

impl PackConfig {
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PackConfigBuilder {
    parallel: Option<bool>,
}

impl PackConfigBuilder {
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> PackConfig {
        let default = PackConfig::default();
        PackConfig {
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
