use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::histogram_pipeline::common::error::{PipelineError, Result};
use crate::histogram_pipeline::histogram::reader::HistogramReader;
use crate::histogram_pipeline::histogram::types::NUM_BINS;

/// Reads one camera's FPGA histogram dump: exactly 1024 unsigned 32-bit
/// counts, little-endian.
///
/// Only the shape of the input is checked here; the 21-bit bound on the
/// counts themselves is enforced by the packer.
pub struct FpgaHistogramReader;

impl HistogramReader for FpgaHistogramReader {
    fn read_histogram(&self, data: &[u8]) -> Result<Vec<u32>> {
        debug!("Decoding FPGA histogram, {} bytes", data.len());

        if data.len() != NUM_BINS * 4 {
            return Err(PipelineError::UnexpectedBinCount {
                expected: NUM_BINS,
                found: data.len() / 4,
            });
        }

        let mut counts = vec![0u32; NUM_BINS];
        let mut cursor = std::io::Cursor::new(data);
        cursor.read_u32_into::<LittleEndian>(&mut counts)?;

        Ok(counts)
    }
}
