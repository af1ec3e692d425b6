//! Frame to pixel conversion

use smart_leds::{brightness, gamma, RGB8};
use wordclock_core::config::Rgb;
use wordclock_core::Frame;

/// Unlit pixel
pub const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Convert a configured color to the `smart-leds` pixel type
pub fn to_rgb8(color: Rgb) -> RGB8 {
    RGB8::new(color.r, color.g, color.b)
}

/// Pixel buffer for a frame
///
/// Lit LEDs get `color` gamma-corrected and scaled by `level` (0-255);
/// unlit LEDs are black. Index `i` of the buffer is LED `i` of the chain.
pub fn render_pixels<const N: usize>(frame: &Frame<N>, color: RGB8, level: u8) -> [RGB8; N] {
    let on = brightness(gamma(core::iter::once(color)), level)
        .next()
        .unwrap_or(OFF);

    let mut pixels = [OFF; N];
    for (pixel, &lit) in pixels.iter_mut().zip(frame.as_slice()) {
        if lit {
            *pixel = on;
        }
    }
    pixels
}
