//! Configuration loading and parsing
//!
//! The clock is configured from `clock.toml`, embedded at build time and
//! parsed by a custom no_std parser.

pub mod toml;

pub use toml::parse_config;

use defmt::*;
use wordclock_core::ClockConfig;

/// Embedded configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../clock.toml");

/// Load the embedded configuration
///
/// Falls back to the built-in defaults if the file does not parse or
/// fails validation.
pub fn load_config() -> ClockConfig {
    load_from(EMBEDDED_CONFIG)
}

fn load_from(input: &str) -> ClockConfig {
    let config = match parse_config(input) {
        Ok(config) => config,
        Err(e) => {
            // build.rs validates clock.toml, so this means the parser and
            // the build check disagree
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            return ClockConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Invalid embedded config: {}", e);
            error!("Using default configuration");
            ClockConfig::default()
        }
    }
}
