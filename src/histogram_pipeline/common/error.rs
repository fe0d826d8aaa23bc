use thiserror::Error;

use crate::histogram_pipeline::pack::PackError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read histogram source: {0}")]
    SourceUnavailable(String),

    #[error("Expected {expected} histogram bins, found {found}")]
    UnexpectedBinCount { expected: usize, found: usize },

    #[error("Expected {expected} camera histograms, found {found}")]
    UnexpectedCameraCount { expected: usize, found: usize },

    #[error("Failed to write packed output: {0}")]
    SinkWriteFailed(String),

    #[error("Packing failed: {0}")]
    Pack(#[from] PackError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
