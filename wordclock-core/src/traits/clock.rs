//! Time source trait

use crate::phrase::WallTime;

/// Errors from a time source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Timestamp cannot be represented (e.g. before the Unix epoch)
    InvalidTimestamp,
}

/// Anything that can report the local wall-clock time
pub trait TimeSource {
    /// Current local time
    ///
    /// Takes `&mut self` because some sources need to latch a counter
    /// before reading.
    fn now(&mut self) -> Result<WallTime, ClockError>;
}
