//! Local clock
//!
//! Keeps seconds since local midnight from elapsed ticks. Until a real
//! timestamp arrives the clock runs simulated, starting at a configured
//! time and advancing faster than real time so the face visibly moves.

use wordclock_core::config::TimeConfig;
use wordclock_core::traits::{ClockError, TimeSource};
use wordclock_core::WallTime;

/// Seconds in a day
pub const SECONDS_PER_DAY: u32 = 86_400;

const MS_PER_SECOND: u32 = 1_000;

/// Where the clock's time came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    /// No time source yet; runs at `rate_s` simulated seconds per second
    Simulated,
    /// Set from a Unix timestamp; runs in real time
    Synced,
}

/// Software clock driven by elapsed milliseconds
#[derive(Debug, Clone)]
pub struct LocalClock {
    mode: ClockMode,
    seconds_of_day: u32,
    /// Milliseconds not yet folded into a whole second
    carry_ms: u32,
    rate_s: u16,
    utc_offset_minutes: i16,
}

impl LocalClock {
    /// Create a simulated clock
    ///
    /// # Arguments
    /// - `start_minutes`: minutes after midnight to start at (wraps at 24h)
    /// - `rate_s`: simulated seconds per real second
    /// - `utc_offset_minutes`: offset applied by a later [`sync`](Self::sync)
    pub fn simulated(start_minutes: u16, rate_s: u16, utc_offset_minutes: i16) -> Self {
        Self {
            mode: ClockMode::Simulated,
            seconds_of_day: (u32::from(start_minutes) * 60) % SECONDS_PER_DAY,
            carry_ms: 0,
            rate_s,
            utc_offset_minutes,
        }
    }

    /// Create a simulated clock from the timekeeping config
    pub fn from_config(config: &TimeConfig) -> Self {
        Self::simulated(
            config.fallback_start_minutes,
            config.fallback_rate_s,
            config.utc_offset_minutes,
        )
    }

    /// Set the time from a Unix timestamp and switch to real-time mode
    ///
    /// Timestamps before the epoch are rejected and leave the clock as it was.
    pub fn sync(&mut self, unix_seconds: i64) -> Result<(), ClockError> {
        if unix_seconds < 0 {
            return Err(ClockError::InvalidTimestamp);
        }

        let local = unix_seconds + i64::from(self.utc_offset_minutes) * 60;
        // rem_euclid keeps the result in 0..SECONDS_PER_DAY even for negative local
        self.seconds_of_day = local.rem_euclid(i64::from(SECONDS_PER_DAY)) as u32;
        self.carry_ms = 0;
        self.mode = ClockMode::Synced;
        Ok(())
    }

    /// Advance by elapsed real time
    ///
    /// Sub-second remainders are carried to the next call so frequent small
    /// steps add up exactly.
    pub fn advance(&mut self, delta_ms: u32) {
        let total_ms = u64::from(self.carry_ms) + u64::from(delta_ms);
        let whole_seconds = total_ms / u64::from(MS_PER_SECOND);
        self.carry_ms = (total_ms % u64::from(MS_PER_SECOND)) as u32;

        let step = match self.mode {
            ClockMode::Simulated => whole_seconds * u64::from(self.rate_s),
            ClockMode::Synced => whole_seconds,
        };

        let next = (u64::from(self.seconds_of_day) + step) % u64::from(SECONDS_PER_DAY);
        self.seconds_of_day = next as u32;
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn is_synced(&self) -> bool {
        self.mode == ClockMode::Synced
    }

    /// Seconds since local midnight
    pub fn seconds_of_day(&self) -> u32 {
        self.seconds_of_day
    }

    /// Current local time
    pub fn wall_time(&self) -> WallTime {
        WallTime::from_seconds_of_day(self.seconds_of_day)
    }
}

impl TimeSource for LocalClock {
    fn now(&mut self) -> Result<WallTime, ClockError> {
        Ok(self.wall_time())
    }
}
