//! Wordclock - Natural-Language Word Clock Firmware
//!
//! Main firmware binary for an RP2040 driving an 8x8 WS2812 word matrix.
//! Shows the time as a phrase like "IT IS TWENTY FIVE TO THREE", rounded
//! to the nearest five minutes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use wordclock_core::{ClockConfig, Reference8x8, WordLayout};
use wordclock_drivers::brightness::ThresholdBrightness;
use wordclock_drivers::clock::LocalClock;
use wordclock_drivers::display::to_rgb8;
use wordclock_drivers::sensor::AveragingLightSensor;

use crate::channels::publish_brightness;
use crate::config::load_config;
use crate::tasks::{DisplaySettings, RpAdc};

mod channels;
mod config;
mod tasks;

/// Matrix data line on this board
const BOARD_DATA_PIN: u8 = 10;

/// Light sensor divider on this board
const BOARD_SENSOR_PIN: u8 = 26;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// PIO program must outlive the driver
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wordclock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    check_board_pins(&config);

    match Reference8x8.validate() {
        Ok(()) => info!("Word layout validated"),
        Err(e) => error!("Word layout invalid: {}", e),
    }

    // Initial brightness before the light sensor has a reading
    publish_brightness(config.display.brightness);

    // Setup PIO0 for the WS2812 chain
    // Pin assignment is board-specific (data on GPIO10)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_10, program);

    info!("WS2812 matrix initialized");

    let display_settings = DisplaySettings {
        color: to_rgb8(config.display.color),
        boot: config.boot,
    };

    let clock = LocalClock::from_config(&config.time);
    info!(
        "No time source, simulating from {:02}:{:02} at {}x",
        config.time.fallback_start_minutes / 60,
        config.time.fallback_start_minutes % 60,
        config.time.fallback_rate_s
    );

    // Spawn tasks
    spawner
        .spawn(tasks::display_task(matrix, display_settings))
        .unwrap();
    spawner.spawn(tasks::clock_task(clock)).unwrap();

    if config.light.enabled {
        // Setup ADC for ambient light
        // Pin assignment is board-specific (LDR divider on GPIO26)
        let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
        let channel = Channel::new_pin(p.PIN_26, Pull::None);
        let sensor = AveragingLightSensor::from_config(RpAdc::new(adc, channel), &config.light);
        let policy = ThresholdBrightness::from_config(&config);

        info!("Light sensor initialized ({} samples)", config.light.samples);
        spawner.spawn(tasks::light_task(sensor, policy)).unwrap();
    } else {
        info!("Light sensor disabled, fixed brightness {}", config.display.brightness);
    }

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Warn when the config names pins this board is not wired to
fn check_board_pins(config: &ClockConfig) {
    if config.display.data_pin.pin != BOARD_DATA_PIN {
        warn!(
            "data_pin gpio{} ignored, board uses gpio{}",
            config.display.data_pin.pin, BOARD_DATA_PIN
        );
    }
    if config.light.enabled && config.light.pin.pin != BOARD_SENSOR_PIN {
        warn!(
            "light_sensor pin gpio{} ignored, board uses gpio{}",
            config.light.pin.pin, BOARD_SENSOR_PIN
        );
    }
}
