mod chunk;
mod pattern;

use rayon::prelude::*;
use tracing::trace;

use crate::{
    RasterScan, ScanDescriptor, ScanError,
    mapper::{PixelIter, pixel_coordinate},
};

pub use chunk::VoltageChunk;

/// Fills `x` and `y` with `x.len() / ticks` pixels starting at `first_pixel`.
pub(crate) fn fill(
    descriptor: &ScanDescriptor,
    first_pixel: usize,
    ticks: usize,
    parallel_threshold: usize,
    x: &mut [f64],
    y: &mut [f64],
) {
    let pattern = descriptor.pattern();
    let dur_step = descriptor.step() / ticks as f64;
    let pixels = x.len() / ticks;
    if pixels >= parallel_threshold {
        x.par_chunks_exact_mut(ticks)
            .zip(y.par_chunks_exact_mut(ticks))
            .enumerate()
            .for_each(|(i, (x, y))| {
                let (xi, yi) = pixel_coordinate(descriptor, first_pixel + i);
                pattern.synthesize(descriptor.pixel_position(xi, yi), dur_step, x, y);
            });
    } else {
        PixelIter::new(descriptor, first_pixel, pixels)
            .zip(x.chunks_exact_mut(ticks).zip(y.chunks_exact_mut(ticks)))
            .for_each(|((xi, yi), (x, y))| {
                pattern.synthesize(descriptor.pixel_position(xi, yi), dur_step, x, y);
            });
    }
}

impl RasterScan {
    /// Returns `(pixels, ticks_per_pixel)` of the next chunk for a buffer of `max_buffer_size`
    /// samples.
    #[cfg_attr(feature = "inplace", visibility::make(pub))]
    #[doc(hidden)]
    fn next_len(
        &self,
        sampling_frequency: f64,
        max_buffer_size: usize,
    ) -> Result<(usize, usize), ScanError> {
        if !(sampling_frequency.is_finite() && sampling_frequency > 0.) {
            return Err(ScanError::InvalidSamplingFrequency(sampling_frequency));
        }
        let ticks = self.descriptor.ticks_per_pixel(sampling_frequency);
        let remaining = self.remaining_pixels();
        if remaining == 0 {
            return Ok((0, ticks));
        }
        if max_buffer_size < ticks {
            return Err(ScanError::BufferTooSmall {
                required: ticks,
                available: max_buffer_size,
            });
        }
        Ok((remaining.min(max_buffer_size / ticks), ticks))
    }

    /// Generates the next chunk into `x` and `y` and returns the number of samples written.
    ///
    /// The buffer budget is the shorter of the two slices. Returns 0 once the scan is complete.
    #[cfg_attr(feature = "inplace", visibility::make(pub))]
    #[doc(hidden)]
    fn next_chunk_inplace(
        &mut self,
        sampling_frequency: f64,
        x: &mut [f64],
        y: &mut [f64],
    ) -> Result<usize, ScanError> {
        let (pixels, ticks) = self.next_len(sampling_frequency, x.len().min(y.len()))?;
        if pixels == 0 {
            return Ok(0);
        }
        let n = pixels * ticks;
        let first_pixel = self.cursor.current_pixel_index();
        trace!(first_pixel, pixels, ticks, "generating chunk");

        fill(
            &self.descriptor,
            first_pixel,
            ticks,
            self.option.parallel_threshold,
            &mut x[..n],
            &mut y[..n],
        );

        let total = self.descriptor.total_pixels();
        self.cursor.advance(pixels, total);
        let pb = self.pb.get_or_insert_with(|| self.option.pb(total));
        pb.inc(pixels as _);
        if self.cursor.at_end(total) {
            pb.finish();
        }
        Ok(n)
    }

    /// Generates the next chunk of at most `max_buffer_size` samples per axis.
    ///
    /// Returns `None` when no pixels remain.
    pub fn next_chunk(
        &mut self,
        sampling_frequency: f64,
        max_buffer_size: usize,
    ) -> Result<Option<VoltageChunk>, ScanError> {
        let (pixels, ticks) = self.next_len(sampling_frequency, max_buffer_size)?;
        if pixels == 0 {
            return Ok(None);
        }
        let first_pixel = self.cursor.current_pixel_index();
        let mut x = vec![0.; pixels * ticks];
        let mut y = vec![0.; pixels * ticks];
        self.next_chunk_inplace(sampling_frequency, &mut x, &mut y)?;
        Ok(Some(VoltageChunk {
            x,
            y,
            first_pixel,
            pixels,
            ticks_per_pixel: ticks,
            sampling_frequency,
        }))
    }

    /// Iterates over the remaining chunks of the scan.
    ///
    /// Iteration stops after the scan completes or after the first error.
    pub fn chunks(&mut self, sampling_frequency: f64, max_buffer_size: usize) -> Chunks<'_> {
        Chunks {
            scan: self,
            sampling_frequency,
            max_buffer_size,
            failed: false,
        }
    }
}

/// Iterator returned by [`RasterScan::chunks`].
#[derive(Debug)]
pub struct Chunks<'a> {
    scan: &'a mut RasterScan,
    sampling_frequency: f64,
    max_buffer_size: usize,
    failed: bool,
}

impl Iterator for Chunks<'_> {
    type Item = Result<VoltageChunk, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self
            .scan
            .next_chunk(self.sampling_frequency, self.max_buffer_size)
        {
            Ok(chunk) => chunk.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}
