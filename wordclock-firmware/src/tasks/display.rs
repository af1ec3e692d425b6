//! Display task
//!
//! Owns the WS2812 PIO driver. Runs the boot sweep, then repaints whenever
//! a new frame or a new brightness level arrives.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use embassy_time::{with_timeout, Duration, Timer};
use smart_leds::RGB8;

use wordclock_core::config::BootConfig;
use wordclock_core::{LedSweep, REFERENCE_LEDS};
use wordclock_drivers::display::render_pixels;

use crate::channels::{
    brightness_level, ClockFrame, BRIGHTNESS_CHANGED, DISPLAY_READY, FRAME_UPDATE,
    REPAINT_REQUEST,
};

/// WS2812 chain on PIO0 state machine 0
pub type Matrix = PioWs2812<'static, PIO0, 0, REFERENCE_LEDS, Grb>;

/// Longest a pixel write may take before it counts as failed
///
/// 64 LEDs at 800 kHz take under 2 ms.
const WRITE_TIMEOUT_MS: u64 = 20;

/// Display task settings
#[derive(Clone, Copy)]
pub struct DisplaySettings {
    pub color: RGB8,
    pub boot: BootConfig,
}

/// Display task
#[embassy_executor::task]
pub async fn display_task(mut matrix: Matrix, settings: DisplaySettings) {
    info!("Display task started");

    if settings.boot.led_test {
        run_sweep(&mut matrix, &settings).await;
    }
    DISPLAY_READY.signal(());

    let mut frame = ClockFrame::new();
    let mut level = brightness_level();

    loop {
        match select(FRAME_UPDATE.wait(), BRIGHTNESS_CHANGED.wait()).await {
            Either::First(next) => frame = next,
            Either::Second(next) => {
                debug!("Brightness {} -> {}", level, next);
                level = next;
            }
        }

        if write(&mut matrix, &frame, settings.color, level).await.is_err() {
            warn!("LED write timed out, requesting repaint");
            REPAINT_REQUEST.signal(());
        }
    }
}

/// Light each LED in turn, then blank
async fn run_sweep(matrix: &mut Matrix, settings: &DisplaySettings) {
    info!(
        "LED self-test: {} steps at {}ms",
        LedSweep::<REFERENCE_LEDS>::frame_count(),
        settings.boot.step_ms
    );

    let level = brightness_level();
    for frame in LedSweep::<REFERENCE_LEDS>::new() {
        if write(matrix, &frame, settings.color, level).await.is_err() {
            warn!("LED write timed out during self-test");
        }
        Timer::after(Duration::from_millis(u64::from(settings.boot.step_ms))).await;
    }
}

async fn write(
    matrix: &mut Matrix,
    frame: &ClockFrame,
    color: RGB8,
    level: u8,
) -> Result<(), embassy_time::TimeoutError> {
    let pixels = render_pixels(frame, color, level);
    with_timeout(
        Duration::from_millis(WRITE_TIMEOUT_MS),
        matrix.write(&pixels),
    )
    .await
}
