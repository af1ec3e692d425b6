//! Frame display trait

use crate::frame::Frame;

/// Errors that can occur when writing to the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// LED driver rejected the write
    WriteFailed,
}

/// Trait for an `N`-LED matrix
///
/// The display decides color and brightness; the frame only says which
/// LEDs are on.
pub trait FrameDisplay<const N: usize> {
    /// Show a frame, replacing whatever was lit before
    fn show(&mut self, frame: &Frame<N>) -> Result<(), DisplayError>;

    /// Set the brightness applied to lit LEDs (0-255)
    ///
    /// Takes effect on the next [`show`](Self::show).
    fn set_level(&mut self, level: u8);

    /// Turn every LED off
    fn blank(&mut self) -> Result<(), DisplayError> {
        self.show(&Frame::new())
    }
}
