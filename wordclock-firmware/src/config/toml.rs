//! Simple TOML parser for clock configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the clock configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...), including after a value
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys and nested sections

use wordclock_core::config::{
    BootConfig, DisplayConfig, LightSensorConfig, PinConfig, Rgb, TimeConfig,
};
use wordclock_core::ClockConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Key not recognised in its section
    UnknownKey,
    /// Invalid pin string
    InvalidPin,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    LightSensor,
    Clock,
    Boot,
}

/// Parse TOML configuration into ClockConfig
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        match section {
            Section::Root => return Err(ParseError::UnknownKey),
            Section::Display => apply_display(&mut config.display, key, value)?,
            Section::LightSensor => apply_light(&mut config.light, key, value)?,
            Section::Clock => apply_clock(&mut config.time, key, value)?,
            Section::Boot => apply_boot(&mut config.boot, key, value)?,
        }
    }

    Ok(config)
}

/// Parse section header like "[display]"
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let header = line
        .strip_prefix('[')
        .and_then(|rest| rest.split('#').next())
        .map(str::trim)
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match header.trim() {
        "display" => Ok(Section::Display),
        "light_sensor" => Ok(Section::LightSensor),
        "clock" => Ok(Section::Clock),
        "boot" => Ok(Section::Boot),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            strip_comment_after_string(value)
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Drop a comment that follows a quoted string containing '#'
fn strip_comment_after_string(value: &str) -> &str {
    let Some(rest) = value.strip_prefix('"') else {
        return value;
    };
    match rest.find('"') {
        Some(close) => &value[..close + 2],
        None => value,
    }
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio10"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let pin = parse_string(value)
        .strip_prefix("gpio")
        .ok_or(ParseError::InvalidPin)?;
    let pin: u8 = pin.parse().map_err(|_| ParseError::InvalidPin)?;
    Ok(PinConfig::new(pin))
}

/// Parse a color like "#FF8000"
fn parse_color(value: &str) -> Result<Rgb, ParseError> {
    Rgb::from_hex(parse_string(value)).ok_or(ParseError::InvalidValue)
}

/// Parse a time of day as "HH:MM" or as minutes after midnight
fn parse_time_of_day(value: &str) -> Result<u16, ParseError> {
    let value = parse_string(value);
    let minutes = match value.split_once(':') {
        Some((hours, minutes)) => {
            let hours: u16 = parse_int(hours)?;
            let minutes: u16 = parse_int(minutes)?;
            if hours >= 24 || minutes >= 60 {
                return Err(ParseError::InvalidValue);
            }
            hours * 60 + minutes
        }
        None => parse_int(value)?,
    };
    Ok(minutes)
}

fn apply_display(display: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "data_pin" => display.data_pin = parse_pin(value)?,
        "color" => display.color = parse_color(value)?,
        "brightness" => display.brightness = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_light(light: &mut LightSensorConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "enabled" => light.enabled = parse_bool(value)?,
        "pin" => light.pin = parse_pin(value)?,
        "samples" => light.samples = parse_int(value)?,
        "dark_threshold" => light.dark_threshold = parse_int(value)?,
        "bright_threshold" => light.bright_threshold = parse_int(value)?,
        "hysteresis" => light.hysteresis = parse_int(value)?,
        "dim_level" => light.dim_level = parse_int(value)?,
        "bright_level" => light.bright_level = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_clock(time: &mut TimeConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "utc_offset_minutes" => time.utc_offset_minutes = parse_int(value)?,
        "fallback_start" => time.fallback_start_minutes = parse_time_of_day(value)?,
        "fallback_rate_s" => time.fallback_rate_s = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_boot(boot: &mut BootConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "led_test" => boot.led_test = parse_bool(value)?,
        "step_ms" => boot.step_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}
