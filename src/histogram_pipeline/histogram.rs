//! Histogram reading module
//!
//! This module provides source-agnostic histogram reading capabilities.

mod fpga_reader;
mod reader;
pub mod types;

pub use fpga_reader::FpgaHistogramReader;
pub use reader::HistogramReader;
pub use types::{CountMatrix, NUM_BINS, NUM_CAMERAS};
