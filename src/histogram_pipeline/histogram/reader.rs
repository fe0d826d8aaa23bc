use crate::histogram_pipeline::common::error::Result;

pub trait HistogramReader {
    fn read_histogram(&self, data: &[u8]) -> Result<Vec<u32>>;
}
