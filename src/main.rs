use histopack_rs::histogram_pipeline::{HistogramPackPipeline, PackConfig};
use histopack_rs::logger;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting histopack...");

    let config = PackConfig::builder()
        .parallel(cfg!(feature = "rayon"))
        .build();
    let pipeline = HistogramPackPipeline::new(config);

    info!("Histogram pack pipeline initialized");
    info!(
        "Parallel packing: {}",
        if pipeline.config().parallel {
            "enabled"
        } else {
            "disabled"
        }
    );

    pipeline
        .convert_dir("image_patterns", "histograms.pack")
        .context("failed to pack histograms")?;

    info!("Successfully packed histograms into histograms.pack");
    Ok(())
}
