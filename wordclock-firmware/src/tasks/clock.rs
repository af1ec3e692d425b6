//! Clock task
//!
//! Advances the local clock once a second, renders the displayed time and
//! hands the frame to the display task only when the face has to change.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use wordclock_core::{ReferenceRenderer, TimeSource};
use wordclock_drivers::clock::LocalClock;

use crate::channels::{ClockFrame, DISPLAY_READY, FRAME_UPDATE, REPAINT_REQUEST};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Clock task - sole owner of the renderer
#[embassy_executor::task]
pub async fn clock_task(mut clock: LocalClock) {
    info!("Clock task started ({})", clock.mode());

    // Hold the start time until the self-test has cleared the matrix
    DISPLAY_READY.wait().await;

    let mut renderer = ReferenceRenderer::default();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        clock.advance((now - last).as_millis() as u32);
        last = now;

        if REPAINT_REQUEST.try_take().is_some() {
            debug!("Repaint requested, clearing render cache");
            renderer.invalidate();
        }

        if let Some(frame) = tick(&mut clock, &mut renderer) {
            FRAME_UPDATE.signal(frame);
        }

        ticker.next().await;
    }
}

/// Render the current time, returning a frame only if it changed
fn tick(clock: &mut LocalClock, renderer: &mut ReferenceRenderer) -> Option<ClockFrame> {
    let time = match clock.now() {
        Ok(time) => time,
        Err(e) => {
            error!("Clock read failed: {}", e);
            return None;
        }
    };

    match renderer.render_wall(time) {
        Ok(rendered) if rendered.changed => {
            info!(
                "Showing {:02}:{:02} ({:02}:{:02})",
                rendered.time.hour(),
                rendered.time.minute(),
                time.hour(),
                time.minute()
            );
            Some(rendered.frame)
        }
        Ok(_) => None,
        Err(e) => {
            // Keep the last frame on screen
            error!("Render failed for {:02}:{:02}: {}", time.hour(), time.minute(), e);
            None
        }
    }
}
