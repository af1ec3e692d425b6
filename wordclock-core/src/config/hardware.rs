//! Hardware configuration types
//!
//! Pins and electrical limits for the LED matrix and the light sensor.

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// ADC-capable GPIOs on the RP2040
pub const ADC_PINS: [u8; 4] = [26, 27, 28, 29];

/// Largest averaging window for the light sensor
pub const MAX_LIGHT_SAMPLES: usize = 32;

/// Full-scale reading of the 12-bit ADC
pub const ADC_MAX: u16 = 4095;

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }

    /// Check if this GPIO can be routed to the ADC
    pub fn is_adc(&self) -> bool {
        ADC_PINS.contains(&self.pin)
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// WS2812 matrix configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Data line to the first LED
    pub data_pin: PinConfig,
    /// Color of lit words
    pub color: Rgb,
    /// Brightness used when no light sensor is fitted (0-255)
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            data_pin: PinConfig::new(10),
            color: Rgb::WHITE,
            brightness: 50,
        }
    }
}

/// Ambient light sensor configuration
///
/// Thresholds are raw ADC counts (0-4095). Readings below
/// `dark_threshold` select `dim_level`, readings above `bright_threshold`
/// select `bright_level`, anything in between uses the display's
/// `brightness`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightSensorConfig {
    /// Sensor fitted
    pub enabled: bool,
    /// ADC input
    pub pin: PinConfig,
    /// Readings averaged per level decision
    pub samples: u8,
    pub dark_threshold: u16,
    pub bright_threshold: u16,
    /// Band edge deadband in ADC counts
    pub hysteresis: u16,
    pub dim_level: u8,
    pub bright_level: u8,
}

impl Default for LightSensorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pin: PinConfig::new(26),
            samples: 10,
            dark_threshold: 400,
            bright_threshold: 2800,
            hysteresis: 100,
            dim_level: 10,
            bright_level: 120,
        }
    }
}
