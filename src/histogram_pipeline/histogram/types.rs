//! Histogram data types

use crate::histogram_pipeline::common::error::{PipelineError, Result};

/// Number of independent count sources contributing one field per bin.
pub const NUM_CAMERAS: usize = 8;
/// Number of histogram slots per camera.
pub const NUM_BINS: usize = 1024;

/// Fixed 8x1024 matrix of histogram counts, one row per camera.
///
/// The shape is enforced at construction; the packer reads it without
/// mutation and validates the 21-bit bound on every element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    counts: Vec<[u32; NUM_BINS]>,
}

impl CountMatrix {
    /// An all-zero matrix.
    pub fn zeroed() -> Self {
        Self {
            counts: vec![[0; NUM_BINS]; NUM_CAMERAS],
        }
    }

    /// Builds a matrix from one row of counts per camera.
    ///
    /// Fails unless exactly [`NUM_CAMERAS`] rows of exactly [`NUM_BINS`]
    /// counts each are supplied.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        if rows.len() != NUM_CAMERAS {
            return Err(PipelineError::UnexpectedCameraCount {
                expected: NUM_CAMERAS,
                found: rows.len(),
            });
        }

        let mut counts = vec![[0u32; NUM_BINS]; NUM_CAMERAS];
        for (camera, row) in rows.iter().enumerate() {
            if row.len() != NUM_BINS {
                return Err(PipelineError::UnexpectedBinCount {
                    expected: NUM_BINS,
                    found: row.len(),
                });
            }
            counts[camera].copy_from_slice(row);
        }

        Ok(Self { counts })
    }

    /// The count for one (camera, bin) pair.
    ///
    /// # Panics
    ///
    /// Panics if `camera >= NUM_CAMERAS` or `bin >= NUM_BINS`.
    #[inline]
    pub fn get(&self, camera: usize, bin: usize) -> u32 {
        self.counts[camera][bin]
    }

    /// Sets the count for one (camera, bin) pair.
    ///
    /// # Panics
    ///
    /// Panics if `camera >= NUM_CAMERAS` or `bin >= NUM_BINS`.
    #[inline]
    pub fn set(&mut self, camera: usize, bin: usize, value: u32) {
        self.counts[camera][bin] = value;
    }

    /// One camera's full row of bin counts.
    pub fn camera(&self, camera: usize) -> &[u32; NUM_BINS] {
        &self.counts[camera]
    }
}
