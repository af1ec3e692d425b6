//! Brightness policies

pub mod threshold;

pub use threshold::{Band, ThresholdBrightness, ThresholdConfig};
