//! Chunked raster-scan trajectory generation.
//!
//! A [`RasterScan`] walks a rectangular grid of pixels and emits the X/Y drive values that
//! steer a scanning instrument over it. The samples are produced in chunks bounded by the size
//! of the caller's output buffer, so a whole image never has to be held in memory.

mod cursor;
mod descriptor;
mod error;
mod generator;
mod mapper;
mod option;

pub use cursor::ScanCursor;
pub use descriptor::{Resolution, ScanDescriptor, ScanPattern};
pub use error::ScanError;
pub use generator::{Chunks, VoltageChunk};
pub use mapper::{PixelIter, pixel_coordinate};
pub use option::GeneratorOption;

use derive_more::Debug;
use tracing::debug;

/// A resumable raster scan over a [`ScanDescriptor`].
#[derive(Debug)]
pub struct RasterScan {
    descriptor: ScanDescriptor,
    cursor: ScanCursor,
    option: GeneratorOption,
    #[debug(skip)]
    pb: Option<indicatif::ProgressBar>,
}

impl RasterScan {
    /// Creates a scan positioned at the first pixel.
    #[must_use]
    pub fn new(descriptor: ScanDescriptor) -> Self {
        Self {
            descriptor,
            cursor: ScanCursor::new(),
            option: GeneratorOption::default(),
            pb: None,
        }
    }

    /// Sets the generation options.
    #[must_use]
    pub fn with_option(mut self, option: GeneratorOption) -> Self {
        self.option = option;
        self
    }

    pub const fn descriptor(&self) -> &ScanDescriptor {
        &self.descriptor
    }

    /// Mutable access to the descriptor. Changes take effect from the next chunk.
    pub fn descriptor_mut(&mut self) -> &mut ScanDescriptor {
        &mut self.descriptor
    }

    pub const fn cursor(&self) -> &ScanCursor {
        &self.cursor
    }

    pub const fn option(&self) -> &GeneratorOption {
        &self.option
    }

    /// Index of the next pixel to be generated.
    pub const fn current_pixel_index(&self) -> usize {
        self.cursor.current_pixel_index()
    }

    /// Number of pixels not yet generated.
    pub fn remaining_pixels(&self) -> usize {
        self.cursor.remaining(self.descriptor.total_pixels())
    }

    /// Returns true if every pixel has been generated.
    pub fn at_end(&self) -> bool {
        self.cursor.at_end(self.descriptor.total_pixels())
    }

    /// Number of samples the whole scan produces at `sampling_frequency`.
    pub fn total_output_samples(&self, sampling_frequency: f64) -> usize {
        self.descriptor.total_output_samples(sampling_frequency)
    }

    /// Rewinds the scan to the first pixel.
    pub fn reset(&mut self) {
        debug!(from = self.cursor.current_pixel_index(), "rewinding scan");
        self.cursor.reset();
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}
