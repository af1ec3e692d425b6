//! Build script for wordclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds clock.toml at build time.                   ║\n\
            ║  Please create one in the wordclock-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in clock.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    let data_pin = validate_display(&config, &mut errors);
    validate_light_sensor(&config, data_pin, &mut errors);
    validate_clock(&config, &mut errors);
    validate_boot(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid clock configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const DEFAULT_DATA_PIN: u8 = 10;
const DEFAULT_SENSOR_PIN: u8 = 26;

const SECTIONS: &[(&str, &[&str])] = &[
    ("display", &["data_pin", "color", "brightness"]),
    (
        "light_sensor",
        &[
            "enabled",
            "pin",
            "samples",
            "dark_threshold",
            "bright_threshold",
            "hysteresis",
            "dim_level",
            "bright_level",
        ],
    ),
    ("clock", &["utc_offset_minutes", "fallback_start", "fallback_rate_s"]),
    ("boot", &["led_test", "step_ms"]),
];

/// Reject unknown sections and keys; the firmware parser does too
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        let Some((_, keys)) = SECTIONS.iter().find(|(section, _)| section == name) else {
            errors.push(format!("unknown section [{}]", name));
            continue;
        };
        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };
        for key in table.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::Table> {
    config.get(name).and_then(|v| v.as_table())
}

fn check_int(
    table: &toml::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        None => None,
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

fn check_bool(table: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        if !value.is_bool() {
            errors.push(format!("[{}] {} must be true or false", section, key));
        }
    }
}

/// Parse "gpioNN", returning the pin number
fn check_pin(
    table: &toml::Table,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<u8> {
    let value = table.get(key)?;
    let pin = value
        .as_str()
        .and_then(|s| s.strip_prefix("gpio"))
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&n| n <= 29);
    if pin.is_none() {
        errors.push(format!("[{}] {} must be \"gpio0\"-\"gpio29\"", section, key));
    }
    pin
}

/// Returns the data pin in effect, default included
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) -> Option<u8> {
    let Some(display) = section(config, "display") else {
        return Some(DEFAULT_DATA_PIN);
    };

    let data_pin = match display.get("data_pin") {
        None => Some(DEFAULT_DATA_PIN),
        Some(_) => check_pin(display, "display", "data_pin", errors),
    };
    check_int(display, "display", "brightness", 0, 255, errors);

    if let Some(color) = display.get("color") {
        let valid = color
            .as_str()
            .map(|s| s.strip_prefix('#').unwrap_or(s))
            .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);
        if !valid {
            errors.push("[display] color must be \"#RRGGBB\"".to_string());
        }
    }

    data_pin
}

fn validate_light_sensor(config: &toml::Value, data_pin: Option<u8>, errors: &mut Vec<String>) {
    // A missing section still means an enabled sensor on the default pin
    let empty = toml::Table::new();
    let light = section(config, "light_sensor").unwrap_or(&empty);
    let s = "light_sensor";

    check_bool(light, s, "enabled", errors);
    // A disabled sensor is never read, so its other keys are not checked
    if light.get("enabled").and_then(|v| v.as_bool()) == Some(false) {
        return;
    }

    let pin = match light.get("pin") {
        None => Some(DEFAULT_SENSOR_PIN),
        Some(_) => check_pin(light, s, "pin", errors),
    };
    if let Some(pin) = pin {
        if !(26..=29).contains(&pin) {
            errors.push(format!("[{}] pin must be an ADC pin (gpio26-gpio29)", s));
        } else if Some(pin) == data_pin {
            errors.push(format!("[{}] pin gpio{} is already the display data_pin", s, pin));
        }
    }
    check_int(light, s, "samples", 1, 32, errors);
    check_int(light, s, "dim_level", 0, 255, errors);
    check_int(light, s, "bright_level", 0, 255, errors);

    let dark = check_int(light, s, "dark_threshold", 0, 4095, errors).unwrap_or(400);
    let bright = check_int(light, s, "bright_threshold", 0, 4095, errors).unwrap_or(2800);
    let hysteresis = check_int(light, s, "hysteresis", 0, 4095, errors).unwrap_or(100);

    if dark >= bright {
        errors.push(format!("[{}] dark_threshold must be below bright_threshold", s));
    } else if hysteresis * 2 >= bright - dark {
        errors.push(format!("[{}] hysteresis too wide for the thresholds", s));
    }
}

fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(clock) = section(config, "clock") else {
        return;
    };

    check_int(clock, "clock", "utc_offset_minutes", -840, 840, errors);
    check_int(clock, "clock", "fallback_rate_s", 1, 65535, errors);

    match clock.get("fallback_start") {
        None => {}
        Some(toml::Value::Integer(m)) if (0..1440).contains(m) => {}
        Some(toml::Value::String(s)) => {
            let valid = s
                .split_once(':')
                .and_then(|(h, m)| Some((h.parse::<u16>().ok()?, m.parse::<u16>().ok()?)))
                .map(|(h, m)| h < 24 && m < 60)
                .unwrap_or(false);
            if !valid {
                errors.push("[clock] fallback_start must be \"HH:MM\"".to_string());
            }
        }
        Some(_) => errors.push("[clock] fallback_start must be \"HH:MM\" or 0-1439".to_string()),
    }
}

fn validate_boot(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(boot) = section(config, "boot") else {
        return;
    };

    check_bool(boot, "boot", "led_test", errors);
    check_int(boot, "boot", "step_ms", 0, 65535, errors);
}
