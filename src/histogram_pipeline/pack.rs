//! Record packing module
//!
//! This module holds the bit-packing core: the record accumulator, the
//! histogram packer, and the packed-blob writer.

mod accumulator;
mod error;
mod packer;
mod standard_writer;
pub mod types;
mod writer;

pub use accumulator::RecordAccumulator;
pub use error::PackError;
pub use packer::{HistogramPacker, pack_histograms};
pub use standard_writer::StandardPackWriter;
pub use types::{
    FIELD_BITS, MAX_COUNT, PACKED_SIZE, PackConfig, PackConfigBuilder, PackedBuffer, RECORD_BYTES,
};
pub use writer::PackWriter;
