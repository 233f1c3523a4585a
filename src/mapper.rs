use crate::ScanDescriptor;

/// Maps a linear pixel index to its grid coordinate `(xi, yi)`.
///
/// Pixels are numbered row-major. With multi-directional scanning, odd rows are reflected so the
/// beam traverses the grid in a serpentine order.
pub fn pixel_coordinate(descriptor: &ScanDescriptor, index: usize) -> (usize, usize) {
    debug_assert!(index < descriptor.total_pixels());
    let x_pixels = descriptor.x_pixels();
    let xi = index % x_pixels;
    let yi = index / x_pixels;
    (reflect(descriptor, xi, yi), yi)
}

#[inline(always)]
fn reflect(descriptor: &ScanDescriptor, xi: usize, yi: usize) -> usize {
    if descriptor.multi_directional() && yi % 2 == 1 {
        descriptor.x_pixels() - xi - 1
    } else {
        xi
    }
}

/// Iterator over the grid coordinates of consecutive pixels.
#[derive(Debug, Clone)]
pub struct PixelIter<'a> {
    descriptor: &'a ScanDescriptor,
    x_pixels: usize,
    col: usize,
    row: usize,
    rem: usize,
}

impl<'a> PixelIter<'a> {
    /// Iterates over `n` pixels starting at `start`.
    pub fn new(descriptor: &'a ScanDescriptor, start: usize, n: usize) -> Self {
        let x_pixels = descriptor.x_pixels();
        let rem = n.min(descriptor.total_pixels().saturating_sub(start));
        let (col, row) = if x_pixels == 0 {
            (0, 0)
        } else {
            (start % x_pixels, start / x_pixels)
        };
        Self {
            descriptor,
            x_pixels,
            col,
            row,
            rem,
        }
    }
}

impl Iterator for PixelIter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }
        self.rem -= 1;
        let coord = (reflect(self.descriptor, self.col, self.row), self.row);
        self.col += 1;
        if self.col == self.x_pixels {
            self.col = 0;
            self.row += 1;
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl ExactSizeIterator for PixelIter<'_> {}
