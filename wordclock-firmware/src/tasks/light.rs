//! Light task
//!
//! Samples the ambient light sensor and publishes a brightness level when
//! the threshold band changes.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_time::{Duration, Ticker};

use wordclock_core::LightSensor;
use wordclock_drivers::brightness::ThresholdBrightness;
use wordclock_drivers::sensor::{AdcReader, AveragingLightSensor};

use crate::channels::publish_brightness;

/// Sample interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 500;

/// RP2040 ADC channel as a raw reader
pub struct RpAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}

/// Light task
#[embassy_executor::task]
pub async fn light_task(
    mut sensor: AveragingLightSensor<RpAdc>,
    mut policy: ThresholdBrightness,
) {
    info!("Light task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        match sensor.read_level() {
            Ok(reading) => {
                let level = policy.update(reading);
                if publish_brightness(level) {
                    info!(
                        "Ambient {} -> {} (level {})",
                        reading,
                        policy.band(),
                        level
                    );
                }
            }
            Err(e) => {
                // Keep the current brightness
                warn!("Light sensor read failed: {}", e);
            }
        }
    }
}
