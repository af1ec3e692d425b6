//! Threshold brightness control
//!
//! Three fixed levels selected from the ambient light reading, with
//! hysteresis so a reading sitting on a band edge does not flicker.

use wordclock_core::config::{ClockConfig, LightSensorConfig};

/// Brightness band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    Dim,
    Normal,
    Bright,
}

/// Threshold controller configuration
#[derive(Debug, Clone)]
pub struct ThresholdConfig {
    /// Readings below this are dark (ADC counts)
    pub dark_threshold: u16,
    /// Readings above this are bright (ADC counts)
    pub bright_threshold: u16,
    /// Distance past an edge needed to leave the current band
    pub hysteresis: u16,
    pub dim_level: u8,
    pub normal_level: u8,
    pub bright_level: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::from_sensor(&LightSensorConfig::default(), 50)
    }
}

impl ThresholdConfig {
    /// Build from the sensor section and the display's normal brightness
    pub fn from_sensor(sensor: &LightSensorConfig, normal_level: u8) -> Self {
        Self {
            dark_threshold: sensor.dark_threshold,
            bright_threshold: sensor.bright_threshold,
            hysteresis: sensor.hysteresis,
            dim_level: sensor.dim_level,
            normal_level,
            bright_level: sensor.bright_level,
        }
    }
}

/// Threshold brightness controller
///
/// The first reading is classified directly against the thresholds. After
/// that, the band only changes once a reading is more than `hysteresis`
/// past the edge being crossed.
#[derive(Debug, Clone)]
pub struct ThresholdBrightness {
    config: ThresholdConfig,
    band: Option<Band>,
}

impl ThresholdBrightness {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config, band: None }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(ThresholdConfig::from_sensor(
            &config.light,
            config.display.brightness,
        ))
    }

    /// Feed a light reading and get the level to use
    pub fn update(&mut self, reading: u16) -> u8 {
        let band = self.next_band(reading);
        self.band = Some(band);
        self.level_for(band)
    }

    /// Current band, `None` before the first reading
    pub fn band(&self) -> Option<Band> {
        self.band
    }

    /// Current level; the normal level before the first reading
    pub fn level(&self) -> u8 {
        self.level_for(self.band.unwrap_or(Band::Normal))
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    fn level_for(&self, band: Band) -> u8 {
        match band {
            Band::Dim => self.config.dim_level,
            Band::Normal => self.config.normal_level,
            Band::Bright => self.config.bright_level,
        }
    }

    fn next_band(&self, reading: u16) -> Band {
        let c = &self.config;
        let dark_low = c.dark_threshold.saturating_sub(c.hysteresis);
        let dark_high = c.dark_threshold.saturating_add(c.hysteresis);
        let bright_low = c.bright_threshold.saturating_sub(c.hysteresis);
        let bright_high = c.bright_threshold.saturating_add(c.hysteresis);

        match self.band {
            None => {
                if reading < c.dark_threshold {
                    Band::Dim
                } else if reading > c.bright_threshold {
                    Band::Bright
                } else {
                    Band::Normal
                }
            }
            Some(Band::Dim) => {
                if reading > bright_high {
                    Band::Bright
                } else if reading > dark_high {
                    Band::Normal
                } else {
                    Band::Dim
                }
            }
            Some(Band::Normal) => {
                if reading < dark_low {
                    Band::Dim
                } else if reading > bright_high {
                    Band::Bright
                } else {
                    Band::Normal
                }
            }
            Some(Band::Bright) => {
                if reading < dark_low {
                    Band::Dim
                } else if reading < bright_low {
                    Band::Normal
                } else {
                    Band::Bright
                }
            }
        }
    }
}
