use tracing::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::histogram_pipeline::histogram::types::{CountMatrix, NUM_CAMERAS};
use crate::histogram_pipeline::pack::accumulator::RecordAccumulator;
use crate::histogram_pipeline::pack::error::PackError;
use crate::histogram_pipeline::pack::types::{
    FIELD_BITS, MAX_COUNT, PACKED_SIZE, PackConfig, PackedBuffer, RECORD_BYTES,
};

/// Packs a count matrix into the 21,504-byte blob.
///
/// Pure transformation: every count is checked against the 21-bit bound
/// and the call fails on the first violation without handing out a
/// partially packed buffer.
pub struct HistogramPacker {
    config: PackConfig,
}

impl HistogramPacker {
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn pack(&self, counts: &CountMatrix) -> Result<PackedBuffer, PackError> {
        let mut bytes = vec![0u8; PACKED_SIZE];

        #[cfg(feature = "rayon")]
        if self.config.parallel {
            debug!("Packing {} records in parallel", PACKED_SIZE / RECORD_BYTES);
            // Each bin owns a disjoint 21-byte region of the output, so
            // parallel workers never contend.
            bytes
                .par_chunks_exact_mut(RECORD_BYTES)
                .enumerate()
                .try_for_each(|(bin, record)| pack_record(counts, bin, record))?;
            return Ok(PackedBuffer::new(bytes));
        }

        debug!("Packing {} records", PACKED_SIZE / RECORD_BYTES);
        for (bin, record) in bytes.chunks_exact_mut(RECORD_BYTES).enumerate() {
            pack_record(counts, bin, record)?;
        }
        Ok(PackedBuffer::new(bytes))
    }
}

/// Packs one matrix with the default configuration.
pub fn pack_histograms(counts: &CountMatrix) -> Result<PackedBuffer, PackError> {
    HistogramPacker::new(PackConfig::default()).pack(counts)
}

/// Packs one bin's 8 fields into its 21-byte record.
///
/// A fresh accumulator is used per bin, so the 24 unused bits of
/// capacity are always zero and nothing stale can leak into the
/// discarded range.
fn pack_record(counts: &CountMatrix, bin: usize, record: &mut [u8]) -> Result<(), PackError> {
    let mut acc = RecordAccumulator::new();
    for camera in 0..NUM_CAMERAS {
        let value = counts.get(camera, bin);
        if value > MAX_COUNT {
            return Err(PackError::FieldOverflow { camera, bin, value });
        }
        acc.write_bits(value, FIELD_BITS);
    }
    record.copy_from_slice(&acc.as_le_bytes());
    Ok(())
}
