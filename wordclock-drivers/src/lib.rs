//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wordclock-core:
//!
//! - Local clock (simulated fallback and synced modes)
//! - WS2812 matrix output through any `smart-leds` writer
//! - Averaging ambient light sensor over a raw ADC channel
//! - Threshold brightness policy with hysteresis

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod brightness;
pub mod clock;
pub mod display;
pub mod sensor;
