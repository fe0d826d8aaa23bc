use std::io::Write;

use tracing::debug;

use crate::histogram_pipeline::common::error::{PipelineError, Result};
use crate::histogram_pipeline::pack::types::PackedBuffer;
use crate::histogram_pipeline::pack::writer::PackWriter;

/// Writes the packed blob to any byte sink. The core has no opinion on
/// the destination; this impl just hands the bytes to `output`.
pub struct StandardPackWriter;

impl PackWriter for StandardPackWriter {
    fn write_pack(&self, buffer: &PackedBuffer, output: &mut dyn Write) -> Result<()> {
        debug!("Writing packed blob, {} bytes", buffer.len());

        output
            .write_all(buffer.as_bytes())
            .map_err(|e| PipelineError::SinkWriteFailed(e.to_string()))?;
        output
            .flush()
            .map_err(|e| PipelineError::SinkWriteFailed(e.to_string()))?;

        debug!("Packed blob written");
        Ok(())
    }
}
