//! Collaborator traits
//!
//! These traits define the interface between the time-to-frame logic and
//! the hardware that supplies the time, shows frames and measures light.

pub mod clock;
pub mod display;
pub mod light;

pub use clock::{ClockError, TimeSource};
pub use display::{DisplayError, FrameDisplay};
pub use light::{LightSensor, SensorError};
