/// Progress of a scan over its pixel sequence.
///
/// The index only moves forward between resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor {
    current: usize,
}

impl ScanCursor {
    /// Creates a cursor at the first pixel.
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Index of the next pixel to be generated.
    pub const fn current_pixel_index(&self) -> usize {
        self.current
    }

    /// Returns true if all `total` pixels have been generated.
    pub const fn at_end(&self, total: usize) -> bool {
        self.current >= total
    }

    /// Number of pixels left out of `total`.
    pub const fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.current)
    }

    pub(crate) fn advance(&mut self, n: usize, total: usize) {
        self.current = self.current.saturating_add(n).min(total.max(self.current));
    }

    /// Rewinds to the first pixel.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let cursor = ScanCursor::new();
        assert_eq!(0, cursor.current_pixel_index());
        assert!(!cursor.at_end(1));
        assert!(cursor.at_end(0));
        assert_eq!(1, cursor.remaining(1));
    }

    #[rstest::rstest]
    #[test]
    #[case(3, 7, &[3], 10)]
    #[case(10, 0, &[4, 6], 10)]
    #[case(10, 0, &[4, 100], 10)]
    #[case(0, 10, &[0, 0], 10)]
    fn test_advance(
        #[case] expect_current: usize,
        #[case] expect_remaining: usize,
        #[case] steps: &[usize],
        #[case] total: usize,
    ) {
        let mut cursor = ScanCursor::new();
        steps.iter().for_each(|&n| cursor.advance(n, total));
        assert_eq!(expect_current, cursor.current_pixel_index());
        assert_eq!(expect_remaining, cursor.remaining(total));
        assert_eq!(expect_remaining == 0, cursor.at_end(total));
    }

    #[test]
    fn test_advance_never_decreases() {
        let mut cursor = ScanCursor::new();
        cursor.advance(8, 10);
        cursor.advance(1, 5);
        assert_eq!(8, cursor.current_pixel_index());
    }

    #[test]
    fn test_reset() {
        let mut cursor = ScanCursor::new();
        cursor.advance(10, 10);
        assert!(cursor.at_end(10));
        cursor.reset();
        assert_eq!(0, cursor.current_pixel_index());
        assert!(!cursor.at_end(10));
    }
}
