//! Row-range work units for the parallel driver.
//!
//! The raster is cut into contiguous bands of rows, one per worker. Bands
//! never overlap, so each worker writes its own slice of the frame buffer
//! without locking.

use std::ops::Range;

/// A contiguous band of raster rows (row 0 is the top of the image).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First raster row in the band
    pub start: u32,
    /// One past the last raster row
    pub end: u32,
    /// Index of this band in top-to-bottom order
    pub index: usize,
}

impl RowRange {
    /// Create a new row range.
    pub fn new(start: u32, end: u32, index: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end, index }
    }

    /// Number of rows in the band.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    /// Get the total number of pixels in this band.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.len() as usize * width as usize
    }
}

/// Split `height` rows into at most `workers` balanced, contiguous bands.
///
/// Band sizes differ by at most one row; the larger bands come first. No
/// band is empty, so fewer bands than workers are produced for short images.
pub fn partition_rows(height: u32, workers: usize) -> Vec<RowRange> {
    let count = (workers.max(1) as u32).min(height);
    if count == 0 {
        return Vec::new();
    }

    let base = height / count;
    let extra = height % count;

    let mut ranges = Vec::with_capacity(count as usize);
    let mut start = 0;
    for index in 0..count {
        let len = base + u32::from(index < extra);
        ranges.push(RowRange::new(start, start + len, index as usize));
        start += len;
    }

    debug_assert_eq!(start, height);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(ranges: &[RowRange], height: u32) {
        let mut next = 0;
        for (i, range) in ranges.iter().enumerate() {
            assert_eq!(range.index, i);
            assert_eq!(range.start, next, "bands must be contiguous");
            assert!(!range.is_empty());
            next = range.end;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_partition_exact_fit() {
        let ranges = partition_rows(128, 4);
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.len() == 32));
        assert_covers(&ranges, 128);

        let total_pixels: usize = ranges.iter().map(|r| r.pixel_count(100)).sum();
        assert_eq!(total_pixels, 128 * 100);
    }

    #[test]
    fn test_partition_uneven() {
        let ranges = partition_rows(10, 4);
        let lens: Vec<u32> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![3, 3, 2, 2]);
        assert_covers(&ranges, 10);
    }

    #[test]
    fn test_partition_more_workers_than_rows() {
        let ranges = partition_rows(3, 16);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.len() == 1));
        assert_covers(&ranges, 3);
    }

    #[test]
    fn test_partition_single_worker() {
        let ranges = partition_rows(720, 1);
        assert_eq!(ranges, vec![RowRange::new(0, 720, 0)]);
        assert_eq!(ranges[0].rows(), 0..720);
    }

    #[test]
    fn test_partition_zero_workers_is_one() {
        assert_eq!(partition_rows(5, 0).len(), 1);
    }

    #[test]
    fn test_partition_empty_image() {
        assert!(partition_rows(0, 8).is_empty());
    }
}
