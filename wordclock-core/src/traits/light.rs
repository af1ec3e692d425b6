//! Ambient light sensor trait

/// Errors that can occur with light sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
    /// No reading has been taken yet
    NoSamples,
}

/// Trait for ambient light sensors
///
/// Implementations handle the specific circuit (LDR divider, photodiode,
/// digital lux sensor). Higher values mean more light.
pub trait LightSensor {
    /// Read the current (filtered) light level in raw ADC counts
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_level(&mut self) -> Result<u16, SensorError>;
}
