//! FPGA histogram bit-packing library.
//!
//! Packs 8 per-camera histograms of 1024 bins each into a 21,504-byte blob:
//! for every bin the 8 counts (21 bits each) are concatenated into a 168-bit
//! record and serialized as 21 little-endian bytes.

pub mod histogram_pipeline;
pub mod logger;
