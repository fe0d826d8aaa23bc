//! Conversion orchestration module
//!
//! Wires the histogram reader, the packer, and the pack writer into a
//! single pipeline.

mod histograms_to_pack;

#[cfg(test)]
mod tests;

pub use histograms_to_pack::HistogramPackPipeline;
