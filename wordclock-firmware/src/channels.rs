//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.
//! Signals hold only the latest value, which is all the display ever needs.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use wordclock_core::{Frame, REFERENCE_LEDS};

/// Frame for the matrix in this build
pub type ClockFrame = Frame<REFERENCE_LEDS>;

/// New frame to show (updated by clock task on displayed-time change)
pub static FRAME_UPDATE: Signal<CriticalSectionRawMutex, ClockFrame> = Signal::new();

/// New brightness level (updated by light task on band change)
pub static BRIGHTNESS_CHANGED: Signal<CriticalSectionRawMutex, u8> = Signal::new();

/// Boot sweep finished; the clock starts counting from here
pub static DISPLAY_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Display could not write the last frame; clock task should re-render
pub static REPAINT_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Current brightness level, readable from any task
pub static BRIGHTNESS_LEVEL: AtomicU8 = AtomicU8::new(0);

/// Get the current brightness level
pub fn brightness_level() -> u8 {
    BRIGHTNESS_LEVEL.load(Ordering::Relaxed)
}

/// Publish a brightness level
///
/// Only signals the display when the level actually changed.
pub fn publish_brightness(level: u8) -> bool {
    let previous = BRIGHTNESS_LEVEL.swap(level, Ordering::Relaxed);
    if previous != level {
        BRIGHTNESS_CHANGED.signal(level);
        true
    } else {
        false
    }
}
