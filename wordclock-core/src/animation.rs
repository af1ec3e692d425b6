//! Boot self-test animation
//!
//! Lights each LED on its own in chain order so a dead pixel or a broken
//! data line shows up before the clock starts.

use crate::frame::Frame;
use crate::layout::LedIndex;

/// Single-LED sweep over an `N`-LED matrix
///
/// Yields `N` frames, frame `i` lighting only LED `i`, followed by one
/// blank frame, then ends.
#[derive(Debug, Clone)]
pub struct LedSweep<const N: usize> {
    next: usize,
}

impl<const N: usize> LedSweep<N> {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Total frames including the trailing blank
    pub const fn frame_count() -> usize {
        N + 1
    }
}

impl<const N: usize> Default for LedSweep<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Iterator for LedSweep<N> {
    type Item = Frame<N>;

    fn next(&mut self) -> Option<Frame<N>> {
        if self.next > N {
            return None;
        }

        let mut frame = Frame::new();
        if self.next < N {
            frame.light(self.next as LedIndex);
        }
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (N + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for LedSweep<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_lights_one_led_at_a_time() {
        let frames: Vec<Frame<64>> = LedSweep::<64>::new().collect();
        assert_eq!(frames.len(), LedSweep::<64>::frame_count());

        for (i, frame) in frames[..64].iter().enumerate() {
            assert_eq!(frame.lit_count(), 1);
            assert!(frame.is_lit(i as LedIndex));
        }
        assert!(frames[64].is_blank());
    }

    #[test]
    fn test_sweep_is_fused() {
        let mut sweep = LedSweep::<2>::new();
        assert_eq!(sweep.len(), 3);
        assert!(sweep.next().is_some());
        assert!(sweep.next().is_some());
        assert!(sweep.next().is_some());
        assert_eq!(sweep.len(), 0);
        assert!(sweep.next().is_none());
        assert!(sweep.next().is_none());
    }
}
