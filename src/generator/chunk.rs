use getset::CopyGetters;
#[cfg(feature = "polars")]
use polars::{df, frame::DataFrame};

/// A slice of the scan trajectory.
///
/// Holds a 2×K matrix of analog drive values. Row 0 holds X and row 1 holds Y. Each pixel
/// occupies `ticks_per_pixel` consecutive columns.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct VoltageChunk {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    /// Index of the first pixel in this chunk.
    #[getset(get_copy = "pub")]
    pub(crate) first_pixel: usize,
    /// Number of pixels in this chunk.
    #[getset(get_copy = "pub")]
    pub(crate) pixels: usize,
    /// Number of samples of each pixel.
    #[getset(get_copy = "pub")]
    pub(crate) ticks_per_pixel: usize,
    /// Sampling frequency the chunk was generated at.
    #[getset(get_copy = "pub")]
    pub(crate) sampling_frequency: f64,
}

impl VoltageChunk {
    /// Number of samples on each axis.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X drive values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y drive values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Both rows of the matrix, X first.
    pub fn rows(&self) -> [&[f64]; 2] {
        [&self.x, &self.y]
    }

    /// Iterates over `(x, y)` pairs in output order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Samples of the `i`-th pixel of this chunk.
    pub fn pixel(&self, i: usize) -> Option<(&[f64], &[f64])> {
        if i >= self.pixels {
            return None;
        }
        let range = i * self.ticks_per_pixel..(i + 1) * self.ticks_per_pixel;
        Some((&self.x[range.clone()], &self.y[range]))
    }

    /// Index of the first sample counted from the start of the scan.
    pub fn start_tick(&self) -> usize {
        self.first_pixel * self.ticks_per_pixel
    }

    /// Output time of each sample in seconds from the start of the scan.
    pub fn times(&self) -> Vec<f64> {
        (self.start_tick()..)
            .take(self.len())
            .map(|i| i as f64 / self.sampling_frequency)
            .collect()
    }

    #[cfg(feature = "polars")]
    /// Returns the chunk as a table with `time[s]`, `x[V]` and `y[V]` columns.
    pub fn to_dataframe(&self) -> DataFrame {
        df!(
            "time[s]" => &self.times(),
            "x[V]" => &self.x,
            "y[V]" => &self.y,
        )
        .unwrap()
    }
}
