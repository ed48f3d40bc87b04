//! cipher/segment.rs
//! Block segmentation: window start offsets over the input length.
//!
//! Windows start at multiples of `BLOCK_LEN`; the final window may be
//! shorter than `BLOCK_LEN` when the input length is not a multiple of 32.
//! An empty input produces zero windows.

use crate::constants::BLOCK_LEN;

/// Iterator over window start offsets `0, 32, 64, …` strictly below `len`.
///
/// Offsets are byte positions within the input, not window indices.
#[derive(Debug, Clone)]
pub struct WindowOffsets {
    next: usize,
    len: usize,
}

impl WindowOffsets {
    /// Segment an input of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self { next: 0, len }
    }
}

impl Iterator for WindowOffsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.len {
            return None;
        }
        let offset = self.next;
        self.next += BLOCK_LEN;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next).div_ceil(BLOCK_LEN);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowOffsets {}

/// Number of windows covering `len` bytes.
///
/// Guarantees `window_count(len) * BLOCK_LEN >= len`, so the accumulated
/// block results always reach the truncation point.
pub fn window_count(len: usize) -> usize {
    len.div_ceil(BLOCK_LEN)
}
