use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::histogram_pipeline::{
    common::error::{PipelineError, Result},
    histogram::{CountMatrix, FpgaHistogramReader, HistogramReader, NUM_CAMERAS},
    pack::{HistogramPacker, PackConfig, PackWriter, StandardPackWriter},
};

/// Input files are expected as `pattern_1.bin` .. `pattern_8.bin`, one
/// per camera, matching the FPGA capture tooling.
const SOURCE_FILE_PREFIX: &str = "pattern_";

pub struct HistogramPackPipeline<R: HistogramReader, W: PackWriter> {
    reader: R,
    writer: W,
    packer: HistogramPacker,
}

impl HistogramPackPipeline<FpgaHistogramReader, StandardPackWriter> {
    pub fn new(config: PackConfig) -> Self {
        Self {
            reader: FpgaHistogramReader,
            writer: StandardPackWriter,
            packer: HistogramPacker::new(config),
        }
    }
}

impl<R: HistogramReader, W: PackWriter> HistogramPackPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PackConfig) -> Self {
        Self {
            reader,
            writer,
            packer: HistogramPacker::new(config),
        }
    }

    /// Packs one raw source per camera into `output`.
    ///
    /// `sources` must hold exactly one byte slice per camera, in camera
    /// order; each is deserialized by the reader, the counts are packed,
    /// and the 21,504-byte blob is handed to the writer.
    #[instrument(skip(self, sources, output), fields(sources = sources.len()))]
    pub fn convert(&self, sources: &[&[u8]], output: &mut dyn Write) -> Result<()> {
        info!("Starting histogram packing");

        if sources.len() != NUM_CAMERAS {
            return Err(PipelineError::UnexpectedCameraCount {
                expected: NUM_CAMERAS,
                found: sources.len(),
            });
        }

        let matrix = {
            let _span = tracing::info_span!("read_histograms").entered();
            let mut rows = Vec::with_capacity(NUM_CAMERAS);
            for source in sources {
                rows.push(self.reader.read_histogram(source)?);
            }
            CountMatrix::from_rows(rows)?
        };

        let packed = {
            let _span = tracing::info_span!("pack_histograms").entered();
            self.packer.pack(&matrix)?
        };

        {
            let _span = tracing::info_span!("write_pack").entered();
            self.writer.write_pack(&packed, output)?;
        }

        info!(bytes = packed.len(), "Packing complete");
        Ok(())
    }

    /// Reads the 8 per-camera dump files from `input_dir` and writes the
    /// packed blob to `output_path`.
    #[instrument(skip(self, input_dir, output_path))]
    pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_path: Q,
    ) -> Result<()> {
        let input_dir = input_dir.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_dir.display(),
            output = %output_path.display(),
            "Packing histogram directory"
        );

        let sources = {
            let _span = tracing::info_span!("read_source_files").entered();
            let mut sources = Vec::with_capacity(NUM_CAMERAS);
            for camera in 0..NUM_CAMERAS {
                let path = input_dir.join(format!("{}{}.bin", SOURCE_FILE_PREFIX, camera + 1));
                let data = std::fs::read(&path).map_err(|e| {
                    PipelineError::SourceUnavailable(format!("{}: {}", path.display(), e))
                })?;
                sources.push(data);
            }
            sources
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::SinkWriteFailed(format!("{}: {}", output_path.display(), e))
            })?
        };

        let slices: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
        self.convert(&slices, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &PackConfig {
        self.packer.config()
    }
}
