//! Board-agnostic core logic for the word clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Word catalog and LED layout (which LEDs spell which word)
//! - Time-to-phrase pipeline (rounding, hour carry, PAST/TO selection)
//! - Frame renderer with repaint-on-change tracking
//! - Boot self-test animation frames
//! - Collaborator traits (time source, frame display, light sensor)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod frame;
pub mod layout;
pub mod phrase;
pub mod render;
pub mod traits;

pub use animation::LedSweep;
pub use config::ClockConfig;
pub use frame::Frame;
pub use layout::{LayoutError, LedIndex, Reference8x8, Word, WordLayout, REFERENCE_LEDS};
pub use phrase::{DisplayTime, DomainError, Phrase, WallTime};
pub use render::{ReferenceRenderer, Rendered, TimeRenderer};
pub use traits::{FrameDisplay, LightSensor, TimeSource};
