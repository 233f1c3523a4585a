use std::time::Duration;

use derive_more::Display;
use getset::{CopyGetters, Setters};
use tracing::debug;

use crate::ScanError;

/// How the samples of one pixel are synthesized.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanPattern {
    /// Constant output at the center of the pixel.
    #[display("step")]
    Step,
    /// Horizontal ramp across the pixel, vertically centered.
    #[default]
    #[display("ramp")]
    Ramp,
    /// Diagonal ramp across the pixel.
    #[display("diagonal")]
    Diagonal,
}

/// Resolution of the scan grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Number of pixels in one row. The step is `width / n`.
    PixelsPerRow(usize),
    /// Distance between adjacent pixel centers.
    Step(f64),
}

/// Geometry and timing of a rectangular raster scan.
///
/// Width, height and step are fixed at construction. The grid extents, the number of pixels and
/// the scan duration are always derived from them, so they cannot go out of sync.
#[derive(Debug, Clone, PartialEq, CopyGetters, Setters)]
pub struct ScanDescriptor {
    /// Start coordinates of the field of view.
    #[getset(get_copy = "pub", set = "pub")]
    origin: (f64, f64),
    /// Extent `(width, height)` of the field of view.
    #[getset(get_copy = "pub")]
    size: (f64, f64),
    /// Distance between adjacent pixel centers.
    #[getset(get_copy = "pub")]
    step: f64,
    /// Time spent on each pixel in milliseconds.
    #[getset(get_copy = "pub")]
    dwell_time: f64,
    /// Per-pixel sample pattern.
    #[getset(get_copy = "pub", set = "pub")]
    pattern: ScanPattern,
    /// If true, odd rows are scanned right to left.
    #[getset(get_copy = "pub", set = "pub")]
    multi_directional: bool,
}

impl ScanDescriptor {
    /// Creates a new descriptor with [`ScanPattern::Ramp`] and multi-directional scanning.
    pub fn new(
        origin: (f64, f64),
        size: (f64, f64),
        resolution: Resolution,
        dwell_time: f64,
    ) -> Result<Self, ScanError> {
        let (width, height) = size;
        if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
            return Err(ScanError::InvalidGeometry);
        }
        let step = match resolution {
            Resolution::PixelsPerRow(0) => return Err(ScanError::InvalidGeometry),
            Resolution::PixelsPerRow(n) => width / n as f64,
            Resolution::Step(step) => step,
        };
        if !(step.is_finite() && step > 0.) {
            return Err(ScanError::InvalidGeometry);
        }
        let extent = |len: f64| {
            let n = (len / step).round();
            (n < usize::MAX as f64).then_some(n as usize)
        };
        match (extent(width), extent(height)) {
            (Some(nx), Some(ny)) if nx.checked_mul(ny).is_some() => {}
            _ => return Err(ScanError::InvalidGeometry),
        }
        Self::validate_dwell_time(dwell_time)?;

        let descriptor = Self {
            origin,
            size,
            step,
            dwell_time,
            pattern: ScanPattern::default(),
            multi_directional: true,
        };
        debug!(
            x_pixels = descriptor.x_pixels(),
            y_pixels = descriptor.y_pixels(),
            step,
            dwell_time,
            "scan descriptor created"
        );
        Ok(descriptor)
    }

    /// Sets the pattern.
    pub fn with_pattern(mut self, pattern: ScanPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets whether odd rows are scanned in reverse.
    pub fn with_multi_directional(mut self, multi_directional: bool) -> Self {
        self.multi_directional = multi_directional;
        self
    }

    /// Sets the dwell time in milliseconds.
    pub fn set_dwell_time(&mut self, dwell_time: f64) -> Result<&mut Self, ScanError> {
        Self::validate_dwell_time(dwell_time)?;
        self.dwell_time = dwell_time;
        Ok(self)
    }

    fn validate_dwell_time(dwell_time: f64) -> Result<(), ScanError> {
        if dwell_time.is_finite() && dwell_time > 0. {
            Ok(())
        } else {
            Err(ScanError::InvalidDwellTime(dwell_time))
        }
    }

    /// Number of pixels in one row.
    pub fn x_pixels(&self) -> usize {
        (self.size.0 / self.step).round() as usize
    }

    /// Number of rows.
    pub fn y_pixels(&self) -> usize {
        (self.size.1 / self.step).round() as usize
    }

    /// Number of pixels in the whole scan.
    pub fn total_pixels(&self) -> usize {
        self.x_pixels() * self.y_pixels()
    }

    /// Duration of the whole scan in seconds.
    pub fn scan_duration_secs(&self) -> f64 {
        self.dwell_time * self.total_pixels() as f64 / 1000.
    }

    /// Duration of the whole scan. Saturates at [`Duration::MAX`].
    pub fn scan_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.scan_duration_secs()).unwrap_or(Duration::MAX)
    }

    /// Nominal number of samples of the whole scan at `sampling_frequency`, `round(duration * fs)`.
    ///
    /// The generator emits `total_pixels() * ticks_per_pixel(fs)` samples, which differs from this
    /// value when `dwell_time * fs / 1000` is not an integer. Size storage from that product.
    pub fn total_output_samples(&self, sampling_frequency: f64) -> usize {
        (self.scan_duration_secs() * sampling_frequency).round() as usize
    }

    /// Number of samples emitted for each pixel at `sampling_frequency`. Never less than 1.
    pub fn ticks_per_pixel(&self, sampling_frequency: f64) -> usize {
        ((self.dwell_time * sampling_frequency / 1000.).floor() as usize).max(1)
    }

    /// Real-world coordinate of the pixel at grid position `(xi, yi)`.
    pub fn pixel_position(&self, xi: usize, yi: usize) -> (f64, f64) {
        (
            self.origin.0 + xi as f64 * self.step,
            self.origin.1 + yi as f64 * self.step,
        )
    }
}
