//! Sensor implementations

pub mod light;

pub use light::{AdcReader, AveragingLightSensor, LightAverager};
