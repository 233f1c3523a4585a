use thiserror::Error;

/// An interface for error handling in raster-scan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    /// Error when the dwell time is not a positive finite number of milliseconds.
    #[error("Dwell time must be positive, but got {0} ms")]
    InvalidDwellTime(f64),
    /// Error when the field of view or the resolution does not describe a grid.
    #[error("Width, height and step must be positive and the pixel count must fit in usize")]
    InvalidGeometry,
    /// Error when the sampling frequency is not a positive finite number.
    #[error("Sampling frequency must be positive, but got {0} Hz")]
    InvalidSamplingFrequency(f64),
    /// Error when the output buffer cannot hold even a single pixel.
    #[error("Buffer must hold at least {required} samples, but only {available} are available")]
    BufferTooSmall {
        /// Number of ticks of one pixel.
        required: usize,
        /// Size of the buffer passed in.
        available: usize,
    },
}
