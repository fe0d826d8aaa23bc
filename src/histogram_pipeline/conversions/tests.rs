use std::io::{Cursor, Write};

use crate::histogram_pipeline::common::error::{PipelineError, Result};
use crate::histogram_pipeline::conversions::HistogramPackPipeline;
use crate::histogram_pipeline::histogram::{HistogramReader, NUM_BINS, NUM_CAMERAS};
use crate::histogram_pipeline::pack::{
    MAX_COUNT, PACKED_SIZE, PackConfig, PackError, PackWriter, PackedBuffer,
};

struct MockReader {
    should_fail: bool,
    counts: Vec<u32>,
}

impl MockReader {
    fn with_counts(counts: Vec<u32>) -> Self {
        Self {
            should_fail: false,
            counts,
        }
    }
}

impl HistogramReader for MockReader {
    fn read_histogram(&self, _data: &[u8]) -> Result<Vec<u32>> {
        if self.should_fail {
            return Err(PipelineError::SourceUnavailable(
                "mock read error".to_string(),
            ));
        }
        Ok(self.counts.clone())
    }
}

struct MockWriter {
    should_fail: bool,
    written: std::sync::Arc<std::sync::Mutex<Vec<PackedBuffer>>>,
}

impl PackWriter for MockWriter {
    fn write_pack(&self, buffer: &PackedBuffer, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(PipelineError::SinkWriteFailed("mock write error".to_string()));
        }
        self.written.lock().unwrap().push(buffer.clone());
        Ok(())
    }
}

fn eight_sources() -> Vec<&'static [u8]> {
    vec![&[] as &[u8]; NUM_CAMERAS]
}

#[test]
fn successful_packing() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader::with_counts(vec![42u32; NUM_BINS]);
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&eight_sources(), &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].len(), PACKED_SIZE);
}

#[test]
fn reader_failure_propagates() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: true,
        counts: Vec::new(),
    };
    let writer = MockWriter {
        should_fail: false,
        written,
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&eight_sources(), &mut output);

    assert!(matches!(
        result.unwrap_err(),
        PipelineError::SourceUnavailable(_)
    ));
}

#[test]
fn writer_failure_propagates() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader::with_counts(vec![0u32; NUM_BINS]);
    let writer = MockWriter {
        should_fail: true,
        written,
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&eight_sources(), &mut output);

    assert!(matches!(
        result.unwrap_err(),
        PipelineError::SinkWriteFailed(_)
    ));
}

#[test]
fn wrong_source_count_rejected() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader::with_counts(vec![0u32; NUM_BINS]);
    let writer = MockWriter {
        should_fail: false,
        written,
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let sources = vec![&[] as &[u8]; 5];
    let result = pipeline.convert(&sources, &mut output);

    assert!(matches!(
        result.unwrap_err(),
        PipelineError::UnexpectedCameraCount {
            expected: NUM_CAMERAS,
            found: 5
        }
    ));
}

#[test]
fn overflowing_count_rejected() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let mut counts = vec![0u32; NUM_BINS];
    counts[9] = MAX_COUNT + 1;
    let reader = MockReader::with_counts(counts);
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&eight_sources(), &mut output);

    // Every camera reports the same counts, so camera 0 trips first.
    assert!(matches!(
        result.unwrap_err(),
        PipelineError::Pack(PackError::FieldOverflow {
            camera: 0,
            bin: 9,
            value: 2_097_152
        })
    ));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn short_histogram_rejected() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader::with_counts(vec![0u32; 10]);
    let writer = MockWriter {
        should_fail: false,
        written,
    };

    let pipeline = HistogramPackPipeline::with_custom(reader, writer, PackConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&eight_sources(), &mut output);

    assert!(matches!(
        result.unwrap_err(),
        PipelineError::UnexpectedBinCount {
            expected: NUM_BINS,
            found: 10
        }
    ));
}
