use std::io::Write;

use crate::histogram_pipeline::common::error::Result;
use crate::histogram_pipeline::pack::types::PackedBuffer;

pub trait PackWriter {
    fn write_pack(&self, buffer: &PackedBuffer, output: &mut dyn Write) -> Result<()>;
}
