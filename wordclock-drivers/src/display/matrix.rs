//! WS2812 matrix display
//!
//! Implements [`FrameDisplay`] for any blocking `smart-leds` writer. The
//! firmware's PIO driver is async and writes [`render_pixels`] output
//! directly instead.

use smart_leds::{SmartLedsWrite, RGB8};
use wordclock_core::config::DisplayConfig;
use wordclock_core::traits::{DisplayError, FrameDisplay};
use wordclock_core::Frame;

use super::pixels::{render_pixels, to_rgb8};

/// `N`-LED matrix behind a `smart-leds` writer
pub struct SmartLedMatrix<W, const N: usize> {
    writer: W,
    color: RGB8,
    level: u8,
}

impl<W, const N: usize> SmartLedMatrix<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W, color: RGB8, level: u8) -> Self {
        Self {
            writer,
            color,
            level,
        }
    }

    /// Create from the display config, starting at the configured brightness
    pub fn from_config(writer: W, config: &DisplayConfig) -> Self {
        Self::new(writer, to_rgb8(config.color), config.brightness)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    /// Get access to the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> FrameDisplay<N> for SmartLedMatrix<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn show(&mut self, frame: &Frame<N>) -> Result<(), DisplayError> {
        let pixels = render_pixels(frame, self.color, self.level);
        self.writer
            .write(pixels)
            .map_err(|_| DisplayError::WriteFailed)
    }

    fn set_level(&mut self, level: u8) {
        self.level = level;
    }
}
