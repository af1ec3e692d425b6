//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod clock;
pub mod display;
pub mod light;

pub use clock::clock_task;
pub use display::{display_task, DisplaySettings};
pub use light::{light_task, RpAdc};
