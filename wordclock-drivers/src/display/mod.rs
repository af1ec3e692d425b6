//! LED matrix output
//!
//! Turns on/off frames into colored pixels and pushes them to a WS2812
//! chain.

pub mod matrix;
pub mod pixels;

pub use matrix::SmartLedMatrix;
pub use pixels::{render_pixels, to_rgb8, OFF};
