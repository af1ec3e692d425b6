//! Configuration type definitions
//!
//! Top-level clock configuration and its validation rules.

use super::hardware::{
    DisplayConfig, LightSensorConfig, ADC_MAX, MAX_GPIO, MAX_LIGHT_SAMPLES,
};

/// Minutes in a day
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Largest supported UTC offset (+/- 14h)
pub const MAX_UTC_OFFSET_MINUTES: i16 = 14 * 60;

/// Timekeeping configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeConfig {
    /// Fixed offset from UTC applied to synced timestamps
    pub utc_offset_minutes: i16,
    /// Simulated clock start, minutes after midnight (720 = 12:00)
    pub fallback_start_minutes: u16,
    /// Simulated seconds per real second when unsynced
    pub fallback_rate_s: u16,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 600,
            fallback_start_minutes: 12 * 60,
            fallback_rate_s: 60,
        }
    }
}

/// Boot self-test configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootConfig {
    /// Sweep every LED once at power-up
    pub led_test: bool,
    /// Time each LED stays lit during the sweep
    pub step_ms: u16,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            led_test: true,
            step_ms: 100,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub display: DisplayConfig,
    pub light: LightSensorConfig,
    pub time: TimeConfig,
    pub boot: BootConfig,
}

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number does not exist
    InvalidPin(u8),
    /// Light sensor pin cannot be read by the ADC
    NotAnAdcPin(u8),
    /// Data pin and sensor pin are the same GPIO
    PinConflict(u8),
    /// Sample window is zero or larger than the averaging buffer
    InvalidSampleCount(u8),
    /// Dark threshold must be below bright threshold, both within ADC range
    InvalidThresholds,
    /// Hysteresis wider than the normal band
    InvalidHysteresis,
    /// UTC offset beyond +/- 14h
    InvalidUtcOffset(i16),
    /// Simulated start is not a minute of the day
    InvalidStartTime(u16),
    /// Simulated rate of zero would freeze the clock
    InvalidRate,
}

impl ClockConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let data_pin = self.display.data_pin.pin;
        if data_pin > MAX_GPIO {
            return Err(ConfigError::InvalidPin(data_pin));
        }

        if self.light.enabled {
            let light = &self.light;
            if light.pin.pin > MAX_GPIO {
                return Err(ConfigError::InvalidPin(light.pin.pin));
            }
            if !light.pin.is_adc() {
                return Err(ConfigError::NotAnAdcPin(light.pin.pin));
            }
            if light.pin.pin == data_pin {
                return Err(ConfigError::PinConflict(data_pin));
            }
            if light.samples == 0 || usize::from(light.samples) > MAX_LIGHT_SAMPLES {
                return Err(ConfigError::InvalidSampleCount(light.samples));
            }
            if light.dark_threshold >= light.bright_threshold || light.bright_threshold > ADC_MAX
            {
                return Err(ConfigError::InvalidThresholds);
            }
            // Both deadbands must fit inside the normal band
            let band = light.bright_threshold - light.dark_threshold;
            if light.hysteresis.saturating_mul(2) >= band {
                return Err(ConfigError::InvalidHysteresis);
            }
        }

        let offset = self.time.utc_offset_minutes;
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&offset) {
            return Err(ConfigError::InvalidUtcOffset(offset));
        }
        if self.time.fallback_start_minutes >= MINUTES_PER_DAY {
            return Err(ConfigError::InvalidStartTime(
                self.time.fallback_start_minutes,
            ));
        }
        if self.time.fallback_rate_s == 0 {
            return Err(ConfigError::InvalidRate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinConfig;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ClockConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_defaults_match_reference_build() {
        let config = ClockConfig::default();
        assert_eq!(config.display.data_pin.pin, 10);
        assert_eq!(config.display.brightness, 50);
        assert_eq!(config.light.samples, 10);
        assert_eq!(config.time.fallback_start_minutes, 720);
        assert_eq!(config.time.fallback_rate_s, 60);
        assert_eq!(config.boot.step_ms, 100);
    }

    #[test]
    fn test_rejects_non_adc_sensor_pin() {
        let mut config = ClockConfig::default();
        config.light.pin = PinConfig::new(5);
        assert_eq!(config.validate(), Err(ConfigError::NotAnAdcPin(5)));

        // Ignored when the sensor is not fitted
        config.light.enabled = false;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_pin_conflict() {
        let mut config = ClockConfig::default();
        config.display.data_pin = PinConfig::new(26);
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(26)));
    }

    #[test]
    fn test_rejects_bad_samples() {
        let mut config = ClockConfig::default();
        config.light.samples = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSampleCount(0)));
        config.light.samples = 33;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSampleCount(33)));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let mut config = ClockConfig::default();
        config.light.dark_threshold = 3000;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThresholds));
    }

    #[test]
    fn test_rejects_wide_hysteresis() {
        let mut config = ClockConfig::default();
        config.light.hysteresis = 1200;
        assert_eq!(config.validate(), Err(ConfigError::InvalidHysteresis));
    }

    #[test]
    fn test_rejects_time_settings() {
        let mut config = ClockConfig::default();
        config.time.utc_offset_minutes = -900;
        assert_eq!(config.validate(), Err(ConfigError::InvalidUtcOffset(-900)));

        let mut config = ClockConfig::default();
        config.time.fallback_start_minutes = 1440;
        assert_eq!(config.validate(), Err(ConfigError::InvalidStartTime(1440)));

        let mut config = ClockConfig::default();
        config.time.fallback_rate_s = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRate));
    }
}
