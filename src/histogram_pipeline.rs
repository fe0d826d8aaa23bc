//! Histogram packing pipeline module
//!
//! This module provides a structured approach to histogram bit-packing,
//! with separate modules for histogram reading, record packing, and
//! conversion orchestration.

pub mod common;
pub mod conversions;
pub mod histogram;
pub mod pack;

pub use common::{PipelineError, Result};

pub use histogram::{CountMatrix, FpgaHistogramReader, HistogramReader, NUM_BINS, NUM_CAMERAS};

pub use pack::{
    FIELD_BITS, HistogramPacker, MAX_COUNT, PACKED_SIZE, PackConfig, PackConfigBuilder, PackError,
    PackWriter, PackedBuffer, RECORD_BYTES, RecordAccumulator, StandardPackWriter, pack_histograms,
};

pub use conversions::HistogramPackPipeline;
